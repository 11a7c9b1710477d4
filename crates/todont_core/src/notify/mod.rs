use crate::engine::Milestone;
use crate::error::AppError;

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "linux")]
pub use linux::LinuxNotifier;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub use windows::WindowsNotifier;

/// The toast surface: a title, a body, and how long to linger. Delivery is
/// best-effort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub duration_secs: u32,
}

impl Notice {
    pub fn new(title: impl Into<String>, body: impl Into<String>, duration_secs: u32) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            duration_secs,
        }
    }
}

/// Celebratory toast for a point milestone.
pub fn milestone_notice(milestone: &Milestone) -> Notice {
    Notice::new(
        "🎉 Procrastination Master!",
        format!(
            "You've avoided \"{}\" for {} minutes straight! +{} points!",
            milestone.text, milestone.minutes, milestone.points_gained
        ),
        3,
    )
}

/// Celebratory toast for a freshly completed bingo line.
pub fn bingo_notice() -> Notice {
    Notice::new(
        "🎉 B-I-N-G-O!",
        "You've completed a line of procrastination! Master level achieved!",
        5,
    )
}

/// Periodic reminder toast wrapping a bot message.
pub fn reminder_notice(message: &str) -> Notice {
    Notice::new("🔔 Procrastination Reminder", message, 5)
}

pub trait Notifier {
    fn notify(&self, notice: &Notice) -> Result<(), AppError>;
}

pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _notice: &Notice) -> Result<(), AppError> {
        Ok(())
    }
}

pub fn notifier_from_env() -> Result<Box<dyn Notifier>, AppError> {
    if std::env::var("TODONT_DISABLE_NOTIFICATIONS").is_ok() {
        return Ok(Box::new(NoopNotifier));
    }

    match platform_notifier() {
        Ok(notifier) => Ok(notifier),
        Err(err) => match err {
            AppError::InvalidData(_) => Ok(Box::new(NoopNotifier)),
            other => Err(other),
        },
    }
}

#[cfg(target_os = "linux")]
pub fn platform_notifier() -> Result<Box<dyn Notifier>, AppError> {
    Ok(Box::new(LinuxNotifier))
}

#[cfg(windows)]
pub fn platform_notifier() -> Result<Box<dyn Notifier>, AppError> {
    Ok(Box::new(WindowsNotifier))
}

#[cfg(not(any(target_os = "linux", windows)))]
pub fn platform_notifier() -> Result<Box<dyn Notifier>, AppError> {
    Err(AppError::invalid_data(
        "notifications are not supported on this platform",
    ))
}
