//! User-visible notifications.
//!
//! Every outcome of the intake workflow is reported through a single blocking
//! alert with a fixed message. The trait seam exists so tests can capture the
//! exact messages instead of opening dialogs.

use gloo_console::error;

/// Blocking, fire-and-forget notification channel.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Notifier backed by `window.alert`.
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn notify(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if window.alert_with_message(message).is_err() {
                    error!("alert was suppressed:", message.to_owned());
                }
            }
            None => error!("no window to alert on:", message.to_owned()),
        }
    }
}

/// Notifier that records every message for later assertions.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_owned());
    }
}
