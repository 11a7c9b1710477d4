//! Procrastination calendar bingo: a 5x5 grid of consecutive days, each
//! cell a task label plus an "avoided" flag. Decorative by design — cells
//! are not synchronized with the ledger unless the user binds a custom
//! task, which goes through the normal add-task flow.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::{Date, Duration};

pub const GRID_CELLS: usize = 25;

/// Rows, columns, then both diagonals of the 5x5 grid.
pub const LINES: [[usize; 5]; 12] = [
    [0, 1, 2, 3, 4],
    [5, 6, 7, 8, 9],
    [10, 11, 12, 13, 14],
    [15, 16, 17, 18, 19],
    [20, 21, 22, 23, 24],
    [0, 5, 10, 15, 20],
    [1, 6, 11, 16, 21],
    [2, 7, 12, 17, 22],
    [3, 8, 13, 18, 23],
    [4, 9, 14, 19, 24],
    [0, 6, 12, 18, 24],
    [4, 8, 12, 16, 20],
];

/// Labels a fresh card cycles through, one per cell.
pub const DEFAULT_TASKS: [&str; 25] = [
    "Exercise",
    "Clean room",
    "Study",
    "Call family",
    "Do laundry",
    "Meal prep",
    "Read book",
    "Organize files",
    "Pay bills",
    "Water plants",
    "Write emails",
    "Update resume",
    "Plan week",
    "Declutter",
    "Learn skill",
    "Cook dinner",
    "Take walk",
    "Meditate",
    "Social media",
    "Watch series",
    "Play games",
    "Listen music",
    "Browse web",
    "Chat friends",
    "Take nap",
];

const ANCHOR_FORMAT: &[time::format_description::FormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekShift {
    Previous,
    Next,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BingoCell {
    pub task: String,
    pub avoided: bool,
    pub day: u8,
    pub month: u8,
    pub year: i32,
    #[serde(default)]
    pub has_custom_task: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BingoCard {
    /// First calendar day on the card, `YYYY-MM-DD`.
    pub anchor: String,
    pub cells: Vec<BingoCell>,
    /// Line indices already celebrated; replaced wholesale on each recheck
    /// so un-marking a cell un-counts its lines.
    #[serde(default)]
    pub completed_lines: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkOutcome {
    pub avoided: bool,
    pub task: String,
    /// Lines completed by this mark that were not already counted.
    pub new_lines: Vec<usize>,
}

impl BingoCard {
    /// 25 consecutive calendar days starting at the anchor, labels cycled
    /// from the default table, nothing avoided yet.
    pub fn generate(anchor: Date) -> Result<Self, AppError> {
        let mut cells = Vec::with_capacity(GRID_CELLS);
        for i in 0..GRID_CELLS {
            let date = anchor + Duration::days(i as i64);
            cells.push(BingoCell {
                task: DEFAULT_TASKS[i % DEFAULT_TASKS.len()].to_string(),
                avoided: false,
                day: date.day(),
                month: u8::from(date.month()),
                year: date.year(),
                has_custom_task: false,
            });
        }
        Ok(Self {
            anchor: anchor.format(&ANCHOR_FORMAT)?,
            cells,
            completed_lines: Vec::new(),
        })
    }

    pub fn anchor_date(&self) -> Result<Date, AppError> {
        Ok(Date::parse(&self.anchor, &ANCHOR_FORMAT)?)
    }

    /// A fresh card seven days earlier or later. Marks do not carry over.
    pub fn shifted(&self, direction: WeekShift) -> Result<Self, AppError> {
        let days = match direction {
            WeekShift::Previous => -7,
            WeekShift::Next => 7,
        };
        Self::generate(self.anchor_date()? + Duration::days(days))
    }

    fn cell_mut(&mut self, index: usize) -> Result<&mut BingoCell, AppError> {
        if index >= GRID_CELLS {
            return Err(AppError::invalid_input(format!(
                "cell index must be below {GRID_CELLS}"
            )));
        }
        Ok(&mut self.cells[index])
    }

    pub fn line_complete(&self, line: usize) -> bool {
        LINES[line].iter().all(|&cell| self.cells[cell].avoided)
    }

    fn complete_lines(&self) -> Vec<usize> {
        (0..LINES.len())
            .filter(|&line| self.line_complete(line))
            .collect()
    }

    /// Re-derive completed lines, reporting only lines that were not
    /// already counted. A mark elsewhere on the grid never re-celebrates
    /// an old line.
    fn recheck_lines(&mut self) -> Vec<usize> {
        let complete = self.complete_lines();
        let new_lines = complete
            .iter()
            .copied()
            .filter(|line| !self.completed_lines.contains(line))
            .collect();
        self.completed_lines = complete;
        new_lines
    }

    /// Toggle a cell's avoided flag.
    pub fn mark(&mut self, index: usize) -> Result<MarkOutcome, AppError> {
        let cell = self.cell_mut(index)?;
        cell.avoided = !cell.avoided;
        let avoided = cell.avoided;
        let task = cell.task.clone();
        let new_lines = self.recheck_lines();
        Ok(MarkOutcome {
            avoided,
            task,
            new_lines,
        })
    }

    /// Bind a custom task label to a cell. The caller is responsible for
    /// also creating the real ledger task.
    pub fn set_task(&mut self, index: usize, text: &str, duration: u64) -> Result<(), AppError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(AppError::invalid_input("task text is required"));
        }
        if trimmed.chars().count() < 3 {
            return Err(AppError::invalid_input(
                "task text must be at least 3 characters",
            ));
        }
        if duration < 5 {
            return Err(AppError::invalid_input("duration must be at least 5 minutes"));
        }

        let cell = self.cell_mut(index)?;
        cell.task = trimmed.to_string();
        cell.has_custom_task = true;
        Ok(())
    }

    /// Empty a single cell and drop its avoided mark.
    pub fn clear_cell(&mut self, index: usize) -> Result<(), AppError> {
        let cell = self.cell_mut(index)?;
        cell.task = String::new();
        cell.has_custom_task = false;
        cell.avoided = false;
        self.recheck_lines();
        Ok(())
    }

    /// Empty every cell and forget all counted lines.
    pub fn clear_all(&mut self) {
        for cell in &mut self.cells {
            cell.task = String::new();
            cell.has_custom_task = false;
            cell.avoided = false;
        }
        self.completed_lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{BingoCard, GRID_CELLS, WeekShift};
    use time::macros::date;

    fn card() -> BingoCard {
        BingoCard::generate(date!(2026 - 01 - 05)).unwrap()
    }

    #[test]
    fn generates_consecutive_days_with_cycled_tasks() {
        let card = card();
        assert_eq!(card.anchor, "2026-01-05");
        assert_eq!(card.cells.len(), GRID_CELLS);
        assert_eq!(card.cells[0].day, 5);
        assert_eq!(card.cells[0].task, "Exercise");
        assert_eq!(card.cells[24].day, 29);
        assert_eq!(card.cells[24].task, "Take nap");
        // Month rollover: Jan 5 + 26 days would leave January, +24 stays.
        assert!(card.cells.iter().all(|cell| cell.month == 1));
    }

    #[test]
    fn generation_handles_month_rollover() {
        let card = BingoCard::generate(date!(2026 - 01 - 20)).unwrap();
        assert_eq!(card.cells[11].month, 1);
        assert_eq!(card.cells[11].day, 31);
        assert_eq!(card.cells[12].month, 2);
        assert_eq!(card.cells[12].day, 1);
    }

    #[test]
    fn row_completes_only_when_all_five_are_avoided() {
        let mut card = card();
        for index in 0..4 {
            let outcome = card.mark(index).unwrap();
            assert!(outcome.new_lines.is_empty());
        }
        let outcome = card.mark(4).unwrap();
        assert_eq!(outcome.new_lines, vec![0]);
        assert_eq!(card.completed_lines, vec![0]);
    }

    #[test]
    fn unrelated_sixth_mark_does_not_retrigger_a_line() {
        let mut card = card();
        for index in 0..5 {
            card.mark(index).unwrap();
        }
        let outcome = card.mark(7).unwrap();
        assert!(outcome.new_lines.is_empty());
        assert_eq!(card.completed_lines, vec![0]);
    }

    #[test]
    fn unmarking_uncounts_the_line() {
        let mut card = card();
        for index in 0..5 {
            card.mark(index).unwrap();
        }
        card.mark(2).unwrap();
        assert!(card.completed_lines.is_empty());

        // Completing it again counts as new again.
        let outcome = card.mark(2).unwrap();
        assert_eq!(outcome.new_lines, vec![0]);
    }

    #[test]
    fn diagonal_counts_as_a_line() {
        let mut card = card();
        for index in [0, 6, 12, 18] {
            card.mark(index).unwrap();
        }
        let outcome = card.mark(24).unwrap();
        assert_eq!(outcome.new_lines, vec![10]);
    }

    #[test]
    fn set_task_validates_text_and_duration() {
        let mut card = card();
        assert_eq!(
            card.set_task(0, "  ", 30).unwrap_err().code(),
            "invalid_input"
        );
        assert_eq!(
            card.set_task(0, "ab", 30).unwrap_err().code(),
            "invalid_input"
        );
        assert_eq!(
            card.set_task(0, "Call dentist", 4).unwrap_err().code(),
            "invalid_input"
        );

        card.set_task(0, " Call dentist ", 5).unwrap();
        assert_eq!(card.cells[0].task, "Call dentist");
        assert!(card.cells[0].has_custom_task);
    }

    #[test]
    fn out_of_range_cell_is_rejected() {
        let mut card = card();
        assert_eq!(card.mark(25).unwrap_err().code(), "invalid_input");
    }

    #[test]
    fn clear_cell_resets_mark_and_lines() {
        let mut card = card();
        for index in 0..5 {
            card.mark(index).unwrap();
        }
        card.clear_cell(3).unwrap();
        assert_eq!(card.cells[3].task, "");
        assert!(!card.cells[3].avoided);
        assert!(card.completed_lines.is_empty());
    }

    #[test]
    fn clear_all_wipes_the_card() {
        let mut card = card();
        card.set_task(6, "Call dentist", 30).unwrap();
        card.mark(6).unwrap();
        card.clear_all();
        assert!(card.cells.iter().all(|cell| cell.task.is_empty()));
        assert!(card.cells.iter().all(|cell| !cell.avoided));
        assert!(card.completed_lines.is_empty());
    }

    #[test]
    fn shifting_moves_the_anchor_a_week() {
        let card = card();
        let next = card.shifted(WeekShift::Next).unwrap();
        assert_eq!(next.anchor, "2026-01-12");
        let previous = card.shifted(WeekShift::Previous).unwrap();
        assert_eq!(previous.anchor, "2025-12-29");
        assert!(next.cells.iter().all(|cell| !cell.avoided));
    }

    #[test]
    fn card_round_trips_through_json() {
        let mut card = card();
        card.mark(12).unwrap();
        let json = serde_json::to_string(&card).unwrap();
        let back: BingoCard = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }
}
