//! Avoidance accounting: converts elapsed avoidance time into points and
//! maintains the global score in response to ticks and state transitions.

pub mod rank;

use crate::error::AppError;
use crate::model::Task;
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};

pub fn format_timestamp(moment: OffsetDateTime) -> Result<String, AppError> {
    Ok(moment.format(&Rfc3339)?)
}

pub fn parse_timestamp(raw: &str) -> Result<OffsetDateTime, AppError> {
    Ok(OffsetDateTime::parse(raw, &Rfc3339)?)
}

/// Seconds elapsed since `since`, clamped to zero if the clock moved
/// backwards.
pub fn elapsed_seconds(now: OffsetDateTime, since: &str) -> Result<u64, AppError> {
    let baseline = parse_timestamp(since)?;
    let seconds = (now - baseline).whole_seconds();
    Ok(seconds.max(0) as u64)
}

/// One point per full minute of continuous avoidance. Pure recomputation
/// from the stored baseline, so missed ticks and clock changes self-correct
/// on the next call.
pub fn compute_points(now: OffsetDateTime, last_avoided_at: &str) -> Result<u64, AppError> {
    Ok(elapsed_seconds(now, last_avoided_at)? / 60)
}

/// `"1h 2m 3s"` style display of an elapsed span.
pub fn elapsed_display(now: OffsetDateTime, since: &str) -> Result<String, AppError> {
    let total = elapsed_seconds(now, since)?;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    Ok(if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    })
}

/// Percentage of the estimated duration already spent avoiding, capped at
/// 100. `None` when the task carries no estimate or is no longer active.
pub fn progress_percent(now: OffsetDateTime, task: &Task) -> Result<Option<u64>, AppError> {
    if !task.is_active {
        return Ok(task.estimated_duration.map(|_| 100));
    }
    let Some(estimated) = task.estimated_duration.filter(|&minutes| minutes > 0) else {
        return Ok(None);
    };
    let elapsed_minutes = elapsed_seconds(now, &task.last_avoided_at)? / 60;
    Ok(Some((elapsed_minutes * 100 / estimated).min(100)))
}

/// A point milestone crossed during a tick; surfaces as a celebratory
/// notification naming the task and the minute count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    pub task_id: String,
    pub text: String,
    /// The multiple-of-5 minute boundary that fired. When a single tick
    /// crosses several boundaries only the final one is reported.
    pub minutes: u64,
    pub points_gained: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Sum of all positive per-task deltas, applied to the global total in
    /// one update.
    pub points_gained: u64,
    pub milestones: Vec<Milestone>,
}

#[derive(Debug, Clone)]
pub struct CompletionOutcome {
    pub task: Task,
    /// The post-reduction one-time award added to the global total.
    pub points_awarded: u64,
}

/// The state store for avoidance accounting. Owns no clock: every operation
/// takes `now` explicitly, so behavior is deterministic under test.
#[derive(Debug)]
pub struct Ledger<'a> {
    tasks: &'a mut Vec<Task>,
    total_points: &'a mut u64,
}

impl<'a> Ledger<'a> {
    pub fn new(tasks: &'a mut Vec<Task>, total_points: &'a mut u64) -> Self {
        Self {
            tasks,
            total_points,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks
    }

    pub fn total_points(&self) -> u64 {
        *self.total_points
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Task, AppError> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| AppError::invalid_input(format!("no task with id {id}")))
    }

    pub fn add_task(
        &mut self,
        text: &str,
        estimated_duration: u64,
        now: OffsetDateTime,
    ) -> Result<Task, AppError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(AppError::invalid_input("task text is required"));
        }

        let stamp = format_timestamp(now)?;
        let end_time = format_timestamp(now + Duration::minutes(estimated_duration as i64))?;

        // Ids derive from the injected clock; disambiguate if it collides.
        let base = format!("task-{}", now.unix_timestamp_nanos());
        let mut id = base.clone();
        let mut suffix = 1;
        while self.tasks.iter().any(|task| task.id == id) {
            suffix += 1;
            id = format!("{base}-{suffix}");
        }

        let task = Task {
            id,
            text: trimmed.to_string(),
            created_at: stamp.clone(),
            last_avoided_at: stamp.clone(),
            total_avoidance_time: 0,
            is_active: true,
            points: 0,
            start_time: Some(stamp),
            end_time: Some(end_time),
            estimated_duration: Some(estimated_duration),
        };

        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Recompute every active task's points from its baseline. Positive
    /// deltas accumulate into one global update; the raw per-tick seconds
    /// counter bumps unconditionally.
    pub fn tick(&mut self, now: OffsetDateTime) -> Result<TickOutcome, AppError> {
        let mut outcome = TickOutcome::default();

        for task in self.tasks.iter_mut() {
            if !task.is_active {
                continue;
            }

            let new_points = compute_points(now, &task.last_avoided_at)?;
            let old_points = task.points;

            if new_points > old_points {
                outcome.points_gained += new_points - old_points;
                if new_points / 5 > old_points / 5 {
                    outcome.milestones.push(Milestone {
                        task_id: task.id.clone(),
                        text: task.text.clone(),
                        minutes: (new_points / 5) * 5,
                        points_gained: new_points - old_points,
                    });
                }
            }

            task.points = new_points;
            task.total_avoidance_time += 1;
        }

        *self.total_points += outcome.points_gained;
        Ok(outcome)
    }

    /// The undesired outcome: the task actually got done. Awards the
    /// post-reduction remainder to the global total; the task's own stored
    /// points are left as-is.
    pub fn complete(
        &mut self,
        id: &str,
        now: OffsetDateTime,
    ) -> Result<CompletionOutcome, AppError> {
        let stamp = format_timestamp(now)?;
        let task = self.find_mut(id)?;
        if !task.is_active {
            return Err(AppError::invalid_input("task is already completed"));
        }

        let points_lost = task.points * 3 / 10;
        let points_awarded = task.points - points_lost;

        task.is_active = false;
        task.end_time = Some(stamp);
        let task = task.clone();

        *self.total_points += points_awarded;
        Ok(CompletionOutcome {
            task,
            points_awarded,
        })
    }

    /// Back to avoiding. Resets the accrual baseline but not the stored
    /// points, so the live value visibly regresses until it catches up.
    pub fn reactivate(&mut self, id: &str, now: OffsetDateTime) -> Result<Task, AppError> {
        let stamp = format_timestamp(now)?;
        let task = self.find_mut(id)?;
        if task.is_active {
            return Err(AppError::invalid_input("task is already being avoided"));
        }

        task.is_active = true;
        task.last_avoided_at = stamp.clone();
        task.start_time = Some(stamp);
        Ok(task.clone())
    }

    /// Unconditional removal. Points already banked stay banked.
    pub fn delete(&mut self, id: &str) -> Result<Task, AppError> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| AppError::invalid_input(format!("no task with id {id}")))?;
        Ok(self.tasks.remove(index))
    }

    /// `true` and the deduction happened, `false` and nothing changed.
    pub fn purchase(&mut self, cost: u64) -> bool {
        if *self.total_points >= cost {
            *self.total_points -= cost;
            true
        } else {
            false
        }
    }
}
