//! The hall of fame. Rivals are fixed fixtures; only the user's row is
//! live. Reaching the podium is what fires the podium sound cue.

use crate::engine::rank::rank_for;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rival {
    pub name: &'static str,
    pub points: u64,
    pub tasks_completed: u64,
}

pub const RIVALS: [Rival; 9] = [
    Rival {
        name: "LazyMaster2024",
        points: 1250,
        tasks_completed: 45,
    },
    Rival {
        name: "ProcrastiNinja",
        points: 980,
        tasks_completed: 38,
    },
    Rival {
        name: "AvoidanceKing",
        points: 875,
        tasks_completed: 32,
    },
    Rival {
        name: "SlothModeOn",
        points: 650,
        tasks_completed: 28,
    },
    Rival {
        name: "DelayedGratification",
        points: 520,
        tasks_completed: 25,
    },
    Rival {
        name: "TomorrowIsTheDay",
        points: 445,
        tasks_completed: 22,
    },
    Rival {
        name: "MaybeLaterMaybe",
        points: 380,
        tasks_completed: 18,
    },
    Rival {
        name: "JustFiveMoreMinutes",
        points: 320,
        tasks_completed: 15,
    },
    Rival {
        name: "IWillStartMonday",
        points: 280,
        tasks_completed: 14,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub name: String,
    pub points: u64,
    pub rank: &'static str,
    pub tasks_completed: u64,
    pub is_user: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standings {
    /// Sorted by points descending; ties keep the fixture order, with the
    /// user slotted in just ahead of the lower rivals.
    pub entries: Vec<Standing>,
    /// 1-based.
    pub user_position: usize,
    pub points_to_first: u64,
}

impl Standings {
    pub fn on_podium(&self) -> bool {
        self.user_position <= 3
    }
}

pub fn standings(display_name: &str, total_points: u64, tasks_completed: u64) -> Standings {
    let mut entries: Vec<Standing> = Vec::with_capacity(RIVALS.len() + 1);
    for (index, rival) in RIVALS.iter().enumerate() {
        if index == 3 {
            entries.push(Standing {
                name: display_name.to_string(),
                points: total_points,
                rank: rank_for(total_points).title,
                tasks_completed,
                is_user: true,
            });
        }
        entries.push(Standing {
            name: rival.name.to_string(),
            points: rival.points,
            rank: rank_for(rival.points).title,
            tasks_completed: rival.tasks_completed,
            is_user: false,
        });
    }

    entries.sort_by(|a, b| b.points.cmp(&a.points));

    let user_position = entries
        .iter()
        .position(|entry| entry.is_user)
        .map(|index| index + 1)
        .unwrap_or(entries.len());
    let points_to_first = entries
        .first()
        .map(|first| first.points.saturating_sub(total_points))
        .unwrap_or(0);

    Standings {
        entries,
        user_position,
        points_to_first,
    }
}
