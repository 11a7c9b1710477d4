use crate::error::AppError;
use crate::notify::{Notice, Notifier};
use notify_rust::{Notification, Timeout};

pub struct LinuxNotifier;

impl Notifier for LinuxNotifier {
    fn notify(&self, notice: &Notice) -> Result<(), AppError> {
        Notification::new()
            .summary(&notice.title)
            .body(&notice.body)
            .timeout(Timeout::Milliseconds(notice.duration_secs * 1000))
            .show()
            .map_err(|err| AppError::io(err.to_string()))?;
        Ok(())
    }
}
