use tracing::error;

use crate::domain::collaborators::{Notifier, Severity};
use crate::error::AppError;

/// Logs `err` with its kind and shows its user-facing message through `notifier`.
///
/// This is the single place where a failed operation becomes a notification;
/// callers decide for themselves whether to continue.
pub fn report_error(notifier: &dyn Notifier, err: &AppError) {
    error!(kind = %err.kind(), "{}", err);
    notifier.notify(&err.user_message(), Severity::Error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<(String, Severity)>>);

    impl Notifier for Recorder {
        fn notify(&self, message: &str, severity: Severity) {
            self.0.lock().unwrap().push((message.to_string(), severity));
        }
    }

    #[test]
    fn test_report_error_notifies_user_message() {
        let recorder = Recorder::default();

        report_error(&recorder, &AppError::http_status(403, "denied by policy"));
        report_error(&recorder, &AppError::timeout(10_000));

        let seen = recorder.0.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                ("Access denied.".to_string(), Severity::Error),
                ("Request timed out. Please try again.".to_string(), Severity::Error),
            ]
        );
    }
}
