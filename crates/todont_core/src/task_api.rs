//! High-level operations over the persisted store: load, run the ledger,
//! save. Each public entry point has a `_with_path` twin taking the store
//! location and the clock explicitly, which is what the tests use.

use crate::bingo::{BingoCard, MarkOutcome, WeekShift};
use crate::engine::rank::{Rank, next_rank, rank_for};
use crate::engine::{CompletionOutcome, Ledger, TickOutcome, parse_timestamp};
use crate::error::AppError;
use crate::leaderboard::{Standings, standings};
use crate::model::Task;
use crate::shop::{self, PurchaseReceipt};
use crate::storage::json_store;
use std::path::Path;
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    Active,
    Completed,
    All,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSummary {
    pub total_points: u64,
    pub rank: Rank,
    pub next: Option<Rank>,
    pub active_tasks: usize,
    /// Sum of active tasks' current points ("minutes avoided").
    pub active_points: u64,
    /// Completions, a.k.a. productivity incidents.
    pub completed_tasks: usize,
}

pub fn add_task(text: &str, estimated_duration: u64) -> Result<Task, AppError> {
    let path = json_store::store_path()?;
    add_task_with_path(&path, text, estimated_duration, OffsetDateTime::now_utc())
}

pub fn add_task_with_path(
    path: &Path,
    text: &str,
    estimated_duration: u64,
    now: OffsetDateTime,
) -> Result<Task, AppError> {
    let mut state = json_store::load_state(path)?;
    let mut ledger = Ledger::new(&mut state.tasks, &mut state.total_points);
    let task = ledger.add_task(text, estimated_duration, now)?;
    json_store::save_state(path, &state)?;
    Ok(task)
}

pub fn complete_task(id: &str) -> Result<CompletionOutcome, AppError> {
    let path = json_store::store_path()?;
    complete_task_with_path(&path, id, OffsetDateTime::now_utc())
}

pub fn complete_task_with_path(
    path: &Path,
    id: &str,
    now: OffsetDateTime,
) -> Result<CompletionOutcome, AppError> {
    let mut state = json_store::load_state(path)?;
    let mut ledger = Ledger::new(&mut state.tasks, &mut state.total_points);
    let outcome = ledger.complete(id, now)?;
    json_store::save_state(path, &state)?;
    Ok(outcome)
}

pub fn reactivate_task(id: &str) -> Result<Task, AppError> {
    let path = json_store::store_path()?;
    reactivate_task_with_path(&path, id, OffsetDateTime::now_utc())
}

pub fn reactivate_task_with_path(
    path: &Path,
    id: &str,
    now: OffsetDateTime,
) -> Result<Task, AppError> {
    let mut state = json_store::load_state(path)?;
    let mut ledger = Ledger::new(&mut state.tasks, &mut state.total_points);
    let task = ledger.reactivate(id, now)?;
    json_store::save_state(path, &state)?;
    Ok(task)
}

pub fn delete_task(id: &str) -> Result<Task, AppError> {
    let path = json_store::store_path()?;
    delete_task_with_path(&path, id)
}

pub fn delete_task_with_path(path: &Path, id: &str) -> Result<Task, AppError> {
    let mut state = json_store::load_state(path)?;
    let mut ledger = Ledger::new(&mut state.tasks, &mut state.total_points);
    let task = ledger.delete(id)?;
    json_store::save_state(path, &state)?;
    Ok(task)
}

pub fn show_task(id: &str) -> Result<Task, AppError> {
    let path = json_store::store_path()?;
    show_task_with_path(&path, id)
}

pub fn show_task_with_path(path: &Path, id: &str) -> Result<Task, AppError> {
    let state = json_store::load_state(path)?;
    state
        .tasks
        .into_iter()
        .find(|task| task.id == id)
        .ok_or_else(|| AppError::invalid_input(format!("no task with id {id}")))
}

pub fn list_tasks(filter: TaskFilter) -> Result<Vec<Task>, AppError> {
    let path = json_store::store_path()?;
    list_tasks_with_path(&path, filter)
}

pub fn list_tasks_with_path(path: &Path, filter: TaskFilter) -> Result<Vec<Task>, AppError> {
    let state = json_store::load_state(path)?;
    Ok(state
        .tasks
        .into_iter()
        .filter(|task| match filter {
            TaskFilter::Active => task.is_active,
            TaskFilter::Completed => !task.is_active,
            TaskFilter::All => true,
        })
        .collect())
}

/// Newest first.
pub fn history() -> Result<Vec<Task>, AppError> {
    let path = json_store::store_path()?;
    history_with_path(&path)
}

pub fn history_with_path(path: &Path) -> Result<Vec<Task>, AppError> {
    let state = json_store::load_state(path)?;
    let mut dated = Vec::with_capacity(state.tasks.len());
    for task in state.tasks {
        let created = parse_timestamp(&task.created_at)?;
        dated.push((created, task));
    }
    dated.sort_by(|a, b| b.0.cmp(&a.0));
    Ok(dated.into_iter().map(|(_, task)| task).collect())
}

pub fn run_tick() -> Result<TickOutcome, AppError> {
    let path = json_store::store_path()?;
    run_tick_with_path(&path, OffsetDateTime::now_utc())
}

pub fn run_tick_with_path(path: &Path, now: OffsetDateTime) -> Result<TickOutcome, AppError> {
    let mut state = json_store::load_state(path)?;
    let mut ledger = Ledger::new(&mut state.tasks, &mut state.total_points);
    let outcome = ledger.tick(now)?;
    json_store::save_state(path, &state)?;
    Ok(outcome)
}

pub fn profile() -> Result<ProfileSummary, AppError> {
    let path = json_store::store_path()?;
    profile_with_path(&path)
}

pub fn profile_with_path(path: &Path) -> Result<ProfileSummary, AppError> {
    let state = json_store::load_state(path)?;
    let active_tasks = state.tasks.iter().filter(|task| task.is_active).count();
    let active_points = state
        .tasks
        .iter()
        .filter(|task| task.is_active)
        .map(|task| task.points)
        .sum();
    let completed_tasks = state.tasks.len() - active_tasks;

    Ok(ProfileSummary {
        total_points: state.total_points,
        rank: rank_for(state.total_points),
        next: next_rank(state.total_points),
        active_tasks,
        active_points,
        completed_tasks,
    })
}

pub fn leaderboard(display_name: &str) -> Result<Standings, AppError> {
    let path = json_store::store_path()?;
    leaderboard_with_path(&path, display_name)
}

pub fn leaderboard_with_path(path: &Path, display_name: &str) -> Result<Standings, AppError> {
    let state = json_store::load_state(path)?;
    let completed = state.tasks.iter().filter(|task| !task.is_active).count();
    Ok(standings(
        display_name,
        state.total_points,
        completed as u64,
    ))
}

pub fn buy_item(id: &str) -> Result<PurchaseReceipt, AppError> {
    let path = json_store::store_path()?;
    buy_item_with_path(&path, id)
}

pub fn buy_item_with_path(path: &Path, id: &str) -> Result<PurchaseReceipt, AppError> {
    let mut state = json_store::load_state(path)?;
    let mut ledger = Ledger::new(&mut state.tasks, &mut state.total_points);
    let receipt = shop::buy(&mut ledger, &mut state.purchases, id)?;
    json_store::save_state(path, &state)?;
    Ok(receipt)
}

pub fn owned_items() -> Result<Vec<String>, AppError> {
    let path = json_store::store_path()?;
    owned_items_with_path(&path)
}

pub fn owned_items_with_path(path: &Path) -> Result<Vec<String>, AppError> {
    Ok(json_store::load_state(path)?.purchases)
}

fn ensure_bingo(
    state: &mut json_store::AppState,
    now: OffsetDateTime,
) -> Result<&mut BingoCard, AppError> {
    if state.bingo.is_none() {
        state.bingo = Some(BingoCard::generate(now.date())?);
    }
    match state.bingo.as_mut() {
        Some(card) => Ok(card),
        None => Err(AppError::invalid_data("bingo card unavailable")),
    }
}

pub fn bingo_card() -> Result<BingoCard, AppError> {
    let path = json_store::store_path()?;
    bingo_card_with_path(&path, OffsetDateTime::now_utc())
}

pub fn bingo_card_with_path(path: &Path, now: OffsetDateTime) -> Result<BingoCard, AppError> {
    let mut state = json_store::load_state(path)?;
    let card = ensure_bingo(&mut state, now)?.clone();
    json_store::save_state(path, &state)?;
    Ok(card)
}

pub fn bingo_mark(index: usize) -> Result<MarkOutcome, AppError> {
    let path = json_store::store_path()?;
    bingo_mark_with_path(&path, index, OffsetDateTime::now_utc())
}

pub fn bingo_mark_with_path(
    path: &Path,
    index: usize,
    now: OffsetDateTime,
) -> Result<MarkOutcome, AppError> {
    let mut state = json_store::load_state(path)?;
    let outcome = ensure_bingo(&mut state, now)?.mark(index)?;
    json_store::save_state(path, &state)?;
    Ok(outcome)
}

/// Bind a custom task to a bingo cell and create the matching ledger task;
/// the cell and the real task are born together, like the original
/// add-task flow.
pub fn bingo_set_task(index: usize, text: &str, duration: u64) -> Result<Task, AppError> {
    let path = json_store::store_path()?;
    bingo_set_task_with_path(&path, index, text, duration, OffsetDateTime::now_utc())
}

pub fn bingo_set_task_with_path(
    path: &Path,
    index: usize,
    text: &str,
    duration: u64,
    now: OffsetDateTime,
) -> Result<Task, AppError> {
    let mut state = json_store::load_state(path)?;
    ensure_bingo(&mut state, now)?.set_task(index, text, duration)?;
    let mut ledger = Ledger::new(&mut state.tasks, &mut state.total_points);
    let task = ledger.add_task(text, duration, now)?;
    json_store::save_state(path, &state)?;
    Ok(task)
}

pub fn bingo_clear(index: usize) -> Result<(), AppError> {
    let path = json_store::store_path()?;
    bingo_clear_with_path(&path, index, OffsetDateTime::now_utc())
}

pub fn bingo_clear_with_path(
    path: &Path,
    index: usize,
    now: OffsetDateTime,
) -> Result<(), AppError> {
    let mut state = json_store::load_state(path)?;
    ensure_bingo(&mut state, now)?.clear_cell(index)?;
    json_store::save_state(path, &state)?;
    Ok(())
}

pub fn bingo_clear_all() -> Result<(), AppError> {
    let path = json_store::store_path()?;
    bingo_clear_all_with_path(&path, OffsetDateTime::now_utc())
}

pub fn bingo_clear_all_with_path(path: &Path, now: OffsetDateTime) -> Result<(), AppError> {
    let mut state = json_store::load_state(path)?;
    ensure_bingo(&mut state, now)?.clear_all();
    json_store::save_state(path, &state)?;
    Ok(())
}

pub fn bingo_new_card() -> Result<BingoCard, AppError> {
    let path = json_store::store_path()?;
    bingo_new_card_with_path(&path, OffsetDateTime::now_utc())
}

/// Regenerate in place, keeping the current anchor.
pub fn bingo_new_card_with_path(path: &Path, now: OffsetDateTime) -> Result<BingoCard, AppError> {
    let mut state = json_store::load_state(path)?;
    let anchor = match &state.bingo {
        Some(card) => card.anchor_date()?,
        None => now.date(),
    };
    let card = BingoCard::generate(anchor)?;
    state.bingo = Some(card.clone());
    json_store::save_state(path, &state)?;
    Ok(card)
}

pub fn bingo_shift(direction: WeekShift) -> Result<BingoCard, AppError> {
    let path = json_store::store_path()?;
    bingo_shift_with_path(&path, direction, OffsetDateTime::now_utc())
}

pub fn bingo_shift_with_path(
    path: &Path,
    direction: WeekShift,
    now: OffsetDateTime,
) -> Result<BingoCard, AppError> {
    let mut state = json_store::load_state(path)?;
    let card = ensure_bingo(&mut state, now)?.shifted(direction)?;
    state.bingo = Some(card.clone());
    json_store::save_state(path, &state)?;
    Ok(card)
}
