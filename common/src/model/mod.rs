pub mod candidate;
pub mod extraction;
