pub mod extraction;
pub mod notify;
pub mod storage;
