use crate::error::AppError;
use crate::notify::{Notice, Notifier};
use tauri_winrt_notification::{Duration, Toast};

pub struct WindowsNotifier;

impl Notifier for WindowsNotifier {
    fn notify(&self, notice: &Notice) -> Result<(), AppError> {
        let duration = if notice.duration_secs > 5 {
            Duration::Long
        } else {
            Duration::Short
        };
        Toast::new(Toast::POWERSHELL_APP_ID)
            .title(&notice.title)
            .text1(&notice.body)
            .duration(duration)
            .show()
            .map_err(|err| AppError::io(err.to_string()))?;
        Ok(())
    }
}
