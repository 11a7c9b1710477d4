//! Best-effort sound cues. Playback means handing a URL to an external
//! player the user configured; there is no success signal and failures
//! are logged and swallowed, never propagated.

use std::process::{Command, Stdio};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    TaskAdded,
    TaskCompleted,
    PodiumReached,
}

impl SoundCue {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TaskAdded => "task-added",
            Self::TaskCompleted => "task-completed",
            Self::PodiumReached => "podium-reached",
        }
    }

    pub fn url(&self) -> &'static str {
        match self {
            Self::TaskAdded => "https://www.myinstants.com/media/sounds/vine-boom.mp3",
            Self::TaskCompleted => {
                "https://www.myinstants.com/media/sounds/success-fanfare-trumpets.mp3"
            }
            Self::PodiumReached => "https://www.myinstants.com/media/sounds/victory-ff.mp3",
        }
    }
}

/// Fire and forget. No player configured means the cue is skipped; a
/// player that fails to spawn is reported on stderr and ignored.
pub fn play_cue(cue: SoundCue, player: Option<&str>) {
    let Some(player) = player.map(str::trim).filter(|p| !p.is_empty()) else {
        return;
    };

    let mut parts = player.split_whitespace();
    let Some(program) = parts.next() else {
        return;
    };

    let result = Command::new(program)
        .args(parts)
        .arg(cue.url())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    if let Err(err) = result {
        eprintln!("sound cue {} failed: {}", cue.name(), err);
    }
}
