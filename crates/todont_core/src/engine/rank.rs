//! Rank ladders: the global rank derived from the cumulative point total,
//! and the per-task avoidance level derived from a single task's points.

/// A rung on the global ladder. Thresholds are inclusive lower bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank {
    pub threshold: u64,
    pub title: &'static str,
}

pub const RANKS: [Rank; 5] = [
    Rank {
        threshold: 0,
        title: "Beginner Procrastinator",
    },
    Rank {
        threshold: 50,
        title: "Casual Avoider",
    },
    Rank {
        threshold: 200,
        title: "Professional Procrastinator",
    },
    Rank {
        threshold: 500,
        title: "Master Avoider",
    },
    Rank {
        threshold: 1000,
        title: "Legendary Procrastinator",
    },
];

/// Highest rank whose threshold the total meets.
pub fn rank_for(total_points: u64) -> Rank {
    let mut current = RANKS[0];
    for rank in RANKS {
        if total_points >= rank.threshold {
            current = rank;
        }
    }
    current
}

/// The next rung up, or `None` from the top of the ladder.
pub fn next_rank(total_points: u64) -> Option<Rank> {
    RANKS
        .into_iter()
        .find(|rank| rank.threshold > total_points)
}

/// Per-task bragging title, keyed on that task's own minute count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvoidanceLevel {
    pub title: &'static str,
    pub emoji: &'static str,
}

pub fn avoidance_level(task_points: u64) -> AvoidanceLevel {
    let (title, emoji) = if task_points >= 120 {
        ("Master Procrastinator", "👑")
    } else if task_points >= 60 {
        ("Avoidance Expert", "🔥")
    } else if task_points >= 30 {
        ("Seasoned Avoider", "⭐")
    } else if task_points >= 10 {
        ("Procrastination Padawan", "🌟")
    } else {
        ("Beginner Avoider", "🌱")
    };
    AvoidanceLevel { title, emoji }
}

#[cfg(test)]
mod tests {
    use super::{avoidance_level, next_rank, rank_for};

    #[test]
    fn thresholds_are_inclusive_lower_bounds() {
        assert_eq!(rank_for(0).title, "Beginner Procrastinator");
        assert_eq!(rank_for(49).title, "Beginner Procrastinator");
        assert_eq!(rank_for(50).title, "Casual Avoider");
        assert_eq!(rank_for(199).title, "Casual Avoider");
        assert_eq!(rank_for(200).title, "Professional Procrastinator");
        assert_eq!(rank_for(499).title, "Professional Procrastinator");
        assert_eq!(rank_for(500).title, "Master Avoider");
        assert_eq!(rank_for(999).title, "Master Avoider");
        assert_eq!(rank_for(1000).title, "Legendary Procrastinator");
        assert_eq!(rank_for(5000).title, "Legendary Procrastinator");
    }

    #[test]
    fn next_rank_reports_the_upcoming_threshold() {
        assert_eq!(next_rank(0).unwrap().threshold, 50);
        assert_eq!(next_rank(499).unwrap().threshold, 500);
        assert_eq!(next_rank(999).unwrap().threshold, 1000);
        assert!(next_rank(1000).is_none());
    }

    #[test]
    fn avoidance_levels_step_at_minute_thresholds() {
        assert_eq!(avoidance_level(0).title, "Beginner Avoider");
        assert_eq!(avoidance_level(9).title, "Beginner Avoider");
        assert_eq!(avoidance_level(10).title, "Procrastination Padawan");
        assert_eq!(avoidance_level(30).title, "Seasoned Avoider");
        assert_eq!(avoidance_level(60).title, "Avoidance Expert");
        assert_eq!(avoidance_level(120).title, "Master Procrastinator");
    }
}
