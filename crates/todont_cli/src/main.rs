use clap::{CommandFactory, Parser};
use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;
use std::io::{self, BufRead};
use tabled::settings::Style;
use tabled::{Table, Tabled};
use time::OffsetDateTime;
use todont_cli::cli::{BingoCommand, Cli, Command, ListCommand, ShopCommand, WeekDirection};
use todont_core::bingo::{BingoCard, WeekShift};
use todont_core::config::load_config_with_fallback;
use todont_core::engine::rank::avoidance_level;
use todont_core::engine::{TickOutcome, elapsed_display, progress_percent};
use todont_core::error::AppError;
use todont_core::excuses::random_excuse;
use todont_core::messages::{self, MessageQueue};
use todont_core::model::Task;
use todont_core::notify::{
    Notifier, bingo_notice, milestone_notice, notifier_from_env, reminder_notice,
};
use todont_core::shop::CATALOG;
use todont_core::sound::{SoundCue, play_cue};
use todont_core::task_api::{self, TaskFilter};

fn make_rng() -> Mcg128Xsl64 {
    let seed = OffsetDateTime::now_utc().unix_timestamp_nanos() as u64;
    Mcg128Xsl64::seed_from_u64(seed)
}

fn status_label(task: &Task) -> &'static str {
    if task.is_active { "avoiding" } else { "completed" }
}

fn task_json(task: &Task) -> serde_json::Value {
    serde_json::json!({
        "id": task.id,
        "text": task.text,
        "status": status_label(task),
        "points": task.points,
        "created_at": task.created_at,
        "last_avoided_at": task.last_avoided_at,
        "total_avoidance_time": task.total_avoidance_time,
        "start_time": task.start_time,
        "end_time": task.end_time,
        "estimated_duration": task.estimated_duration,
    })
}

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Task")]
    text: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Points")]
    points: u64,
    #[tabled(rename = "Level")]
    level: String,
    #[tabled(rename = "Elapsed")]
    elapsed: String,
    #[tabled(rename = "Progress")]
    progress: String,
}

fn task_row(task: &Task, now: OffsetDateTime) -> Result<TaskRow, AppError> {
    let (level, elapsed) = if task.is_active {
        let level = avoidance_level(task.points);
        (
            format!("{} {}", level.emoji, level.title),
            elapsed_display(now, &task.last_avoided_at)?,
        )
    } else {
        ("-".to_string(), "completed 😱".to_string())
    };
    let progress = match progress_percent(now, task)? {
        Some(percent) => format!("{percent}%"),
        None => "-".to_string(),
    };

    Ok(TaskRow {
        id: task.id.clone(),
        text: task.text.clone(),
        status: status_label(task).to_string(),
        points: task.points,
        level,
        elapsed,
        progress,
    })
}

fn print_tasks_plain(tasks: &[Task]) -> Result<(), AppError> {
    if tasks.is_empty() {
        println!("Nothing here. Add something to avoid!");
        return Ok(());
    }
    let now = OffsetDateTime::now_utc();
    let mut rows = Vec::with_capacity(tasks.len());
    for task in tasks {
        rows.push(task_row(task, now)?);
    }
    println!("{}", Table::new(rows).with(Style::sharp()));
    Ok(())
}

fn print_tasks_json(tasks: &[Task]) {
    let payload: Vec<serde_json::Value> = tasks.iter().map(task_json).collect();
    println!("{}", serde_json::Value::Array(payload));
}

fn print_tick_outcome_plain(outcome: &TickOutcome) {
    println!("Tick: +{} points", outcome.points_gained);
    for milestone in &outcome.milestones {
        println!(
            "🎉 You've avoided \"{}\" for {} minutes straight! +{} points!",
            milestone.text, milestone.minutes, milestone.points_gained
        );
    }
}

fn tick_outcome_json(outcome: &TickOutcome) -> serde_json::Value {
    serde_json::json!({
        "points_gained": outcome.points_gained,
        "milestones": outcome
            .milestones
            .iter()
            .map(|milestone| {
                serde_json::json!({
                    "task_id": milestone.task_id,
                    "text": milestone.text,
                    "minutes": milestone.minutes,
                    "points_gained": milestone.points_gained,
                })
            })
            .collect::<Vec<_>>(),
    })
}

fn notify_milestones(notifier: &dyn Notifier, outcome: &TickOutcome) {
    for milestone in &outcome.milestones {
        if let Err(err) = notifier.notify(&milestone_notice(milestone)) {
            eprintln!("WARN: notification failed: {err}");
        }
    }
}

fn print_bingo_plain(card: &BingoCard) {
    let last = &card.cells[card.cells.len() - 1];
    println!(
        "Procrastination Calendar Bingo  {} – {}-{:02}-{:02}",
        card.anchor, last.year, last.month, last.day
    );
    for row in 0..5 {
        let mut line = String::new();
        for col in 0..5 {
            let index = row * 5 + col;
            let cell = &card.cells[index];
            let mark = if cell.avoided { "✓" } else { " " };
            let custom = if cell.has_custom_task { "*" } else { " " };
            let label: String = if cell.task.is_empty() {
                "Empty".to_string()
            } else {
                cell.task.chars().take(8).collect()
            };
            line.push_str(&format!(
                "{index:>2}|{:>2}/{:<2} {label:<8}{mark}{custom} ",
                cell.month, cell.day
            ));
        }
        println!("{}", line.trim_end());
    }
    match card.completed_lines.len() {
        0 => println!("No bingos yet. Complete a row, column, or diagonal!"),
        count => println!("🏆 {count} BINGO{}!", if count > 1 { "S" } else { "" }),
    }
}

fn bingo_json(card: &BingoCard) -> Result<serde_json::Value, AppError> {
    serde_json::to_value(card).map_err(|err| AppError::invalid_data(err.to_string()))
}

fn run_bingo(bingo: BingoCommand, json: bool) -> Result<(), AppError> {
    match bingo {
        BingoCommand::Show => {
            let card = task_api::bingo_card()?;
            if json {
                println!("{}", bingo_json(&card)?);
            } else {
                print_bingo_plain(&card);
            }
        }
        BingoCommand::Mark { cell } => {
            let outcome = task_api::bingo_mark(cell)?;
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "cell": cell,
                        "avoided": outcome.avoided,
                        "new_lines": outcome.new_lines,
                    })
                );
                return Ok(());
            }
            if outcome.avoided {
                println!("✅ Task Avoided! Great job avoiding \"{}\"!", outcome.task);
            } else {
                println!("↩️ Marked \"{}\" as not avoided.", outcome.task);
            }
            if !outcome.new_lines.is_empty() {
                let notifier = notifier_from_env()?;
                if let Err(err) = notifier.notify(&bingo_notice()) {
                    eprintln!("WARN: notification failed: {err}");
                }
                println!("🎉 B-I-N-G-O! You've completed a line of procrastination!");
            }
        }
        BingoCommand::Task {
            cell,
            text,
            duration,
        } => {
            let task = task_api::bingo_set_task(cell, &text, duration)?;
            let config = load_config_with_fallback().config;
            play_cue(SoundCue::TaskAdded, config.player.as_deref());
            if json {
                println!("{}", task_json(&task));
            } else {
                println!(
                    "🎊 Task Successfully Added! \"{}\" is now ready for professional avoidance on cell {cell} ({})",
                    task.text, task.id
                );
            }
        }
        BingoCommand::Clear { cell } => {
            task_api::bingo_clear(cell)?;
            if json {
                println!("{}", serde_json::json!({ "cell": cell, "cleared": true }));
            } else {
                println!("🗑️ Cell {cell} cleared and marked as not avoided.");
            }
        }
        BingoCommand::ClearAll => {
            task_api::bingo_clear_all()?;
            if json {
                println!("{}", serde_json::json!({ "cleared": "all" }));
            } else {
                println!("🧹 All tasks cleared from the entire bingo grid.");
            }
        }
        BingoCommand::New => {
            let card = task_api::bingo_new_card()?;
            if json {
                println!("{}", bingo_json(&card)?);
            } else {
                println!("Fresh card from {}.", card.anchor);
                print_bingo_plain(&card);
            }
        }
        BingoCommand::Week { direction } => {
            let shift = match direction {
                WeekDirection::Prev => WeekShift::Previous,
                WeekDirection::Next => WeekShift::Next,
            };
            let card = task_api::bingo_shift(shift)?;
            if json {
                println!("{}", bingo_json(&card)?);
            } else {
                print_bingo_plain(&card);
            }
        }
    }
    Ok(())
}

#[derive(Tabled)]
struct ShopRow {
    #[tabled(rename = "ID")]
    id: &'static str,
    #[tabled(rename = "Item")]
    name: &'static str,
    #[tabled(rename = "Cost")]
    cost: u64,
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Owned")]
    owned: &'static str,
}

fn run_shop(shop: ShopCommand, json: bool) -> Result<(), AppError> {
    match shop {
        ShopCommand::List => {
            let owned = task_api::owned_items()?;
            if json {
                let payload: Vec<serde_json::Value> = CATALOG
                    .iter()
                    .map(|item| {
                        serde_json::json!({
                            "id": item.id,
                            "name": item.name,
                            "description": item.description,
                            "cost": item.cost,
                            "category": item.category.as_str(),
                            "owned": owned.iter().any(|id| id == item.id),
                        })
                    })
                    .collect();
                println!("{}", serde_json::Value::Array(payload));
                return Ok(());
            }
            let rows: Vec<ShopRow> = CATALOG
                .iter()
                .map(|item| ShopRow {
                    id: item.id,
                    name: item.name,
                    cost: item.cost,
                    category: item.category.as_str(),
                    owned: if owned.iter().any(|id| id == item.id) {
                        "✓"
                    } else {
                        ""
                    },
                })
                .collect();
            println!("{}", Table::new(rows).with(Style::sharp()));
            let profile = task_api::profile()?;
            println!("Your points: {}", profile.total_points);
        }
        ShopCommand::Buy { id } => {
            let receipt = task_api::buy_item(&id)?;
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "id": receipt.item.id,
                        "name": receipt.item.name,
                        "cost": receipt.item.cost,
                        "success": receipt.success,
                        "shortfall": receipt.shortfall,
                    })
                );
                return Ok(());
            }
            if receipt.success {
                println!(
                    "🛒 Purchase Successful! You bought \"{}\" for {} points!",
                    receipt.item.name, receipt.item.cost
                );
            } else {
                println!(
                    "😅 Not Enough Points! You need {} more points to buy this item.",
                    receipt.shortfall
                );
            }
        }
    }
    Ok(())
}

#[derive(Tabled)]
struct StandingRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Points")]
    points: u64,
    #[tabled(rename = "Rank")]
    rank: &'static str,
    #[tabled(rename = "Done")]
    tasks_completed: u64,
}

fn run_leaderboard(json: bool) -> Result<(), AppError> {
    let config = load_config_with_fallback().config;
    let standings = task_api::leaderboard(config.leaderboard_name())?;

    if standings.on_podium() {
        play_cue(SoundCue::PodiumReached, config.player.as_deref());
    }

    if json {
        let entries: Vec<serde_json::Value> = standings
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                serde_json::json!({
                    "position": index + 1,
                    "name": entry.name,
                    "points": entry.points,
                    "rank": entry.rank,
                    "tasks_completed": entry.tasks_completed,
                    "is_user": entry.is_user,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::json!({
                "entries": entries,
                "user_position": standings.user_position,
                "points_to_first": standings.points_to_first,
                "on_podium": standings.on_podium(),
            })
        );
        return Ok(());
    }

    let palette = todont_core::config::palette_for_theme(config.theme.as_deref());
    println!("{}", palette.accentize("Procrastination Leaderboard"));
    let rows: Vec<StandingRow> = standings
        .entries
        .iter()
        .enumerate()
        .map(|(index, entry)| StandingRow {
            position: index + 1,
            name: if entry.is_user {
                format!("{} ⭐", entry.name)
            } else {
                entry.name.clone()
            },
            points: entry.points,
            rank: entry.rank,
            tasks_completed: entry.tasks_completed,
        })
        .collect();
    println!("{}", Table::new(rows).with(Style::sharp()));
    println!(
        "Your rank: #{} • {} points to #1",
        standings.user_position, standings.points_to_first
    );
    if standings.on_podium() {
        println!("🏆 Podium! Hall of Fame material right there.");
    }
    Ok(())
}

fn run_profile(json: bool) -> Result<(), AppError> {
    let profile = task_api::profile()?;
    if json {
        println!(
            "{}",
            serde_json::json!({
                "total_points": profile.total_points,
                "rank": profile.rank.title,
                "next_rank": profile.next.map(|rank| {
                    serde_json::json!({ "title": rank.title, "threshold": rank.threshold })
                }),
                "active_tasks": profile.active_tasks,
                "active_points": profile.active_points,
                "completed_tasks": profile.completed_tasks,
            })
        );
        return Ok(());
    }

    let config = load_config_with_fallback().config;
    let palette = todont_core::config::palette_for_theme(config.theme.as_deref());
    println!("😴 {}", palette.accentize(profile.rank.title));
    println!("Total Points: {}", profile.total_points);
    println!("Active Avoidances: {}", profile.active_tasks);
    println!("Minutes Avoided: {}", profile.active_points);
    println!("Productivity Incidents: {}", profile.completed_tasks);
    match profile.next {
        Some(next) => println!(
            "Next Rank: {}/{} points toward {}",
            profile.total_points, next.threshold, next.title
        ),
        None => println!("Next Rank: you're at the top of the ladder."),
    }
    Ok(())
}

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Task")]
    text: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Points")]
    points: u64,
    #[tabled(rename = "Created")]
    created_at: String,
}

fn run_history(json: bool) -> Result<(), AppError> {
    let tasks = task_api::history()?;
    if json {
        print_tasks_json(&tasks);
        return Ok(());
    }
    if tasks.is_empty() {
        println!("No procrastination history yet. Start avoiding some tasks!");
        return Ok(());
    }
    let rows: Vec<HistoryRow> = tasks
        .iter()
        .map(|task| HistoryRow {
            id: task.id.clone(),
            text: task.text.clone(),
            status: status_label(task).to_string(),
            points: task.points,
            created_at: task.created_at.clone(),
        })
        .collect();
    println!("{}", Table::new(rows).with(Style::sharp()));
    Ok(())
}

/// The cooperative timer loop: a 1 s accounting tick, bot chatter every
/// 3 s (1.5 s while something is being avoided), an idle reminder every
/// 450 s. Every cadence compares absolute timestamps, so a stalled
/// iteration self-corrects instead of compounding.
fn run_watch(run_for: Option<u64>) -> Result<(), AppError> {
    let notifier = notifier_from_env()?;
    let mut rng = make_rng();
    let mut queue = MessageQueue::new();

    let started = OffsetDateTime::now_utc();
    let mut last_tick = started;
    let mut last_bot = started;
    let mut last_reminder = started;
    let mut procrastinating = false;

    println!("Watching your avoidances. Ctrl-C to stop.");
    loop {
        let now = OffsetDateTime::now_utc();
        if let Some(limit) = run_for
            && (now - started).whole_seconds() >= limit as i64
        {
            break;
        }

        if (now - last_tick).whole_seconds() >= 1 {
            last_tick = now;
            let outcome = task_api::run_tick()?;
            notify_milestones(notifier.as_ref(), &outcome);
            for milestone in &outcome.milestones {
                println!(
                    "🎉 You've avoided \"{}\" for {} minutes straight! +{} points!",
                    milestone.text, milestone.minutes, milestone.points_gained
                );
                if let Some(message) = messages::celebration(milestone.minutes / 60) {
                    queue.push(message);
                }
            }
            procrastinating = !task_api::list_tasks(TaskFilter::Active)?.is_empty();
        }

        let bot_interval_ms: i128 = if procrastinating { 1500 } else { 3000 };
        if (now - last_bot).whole_milliseconds() >= bot_interval_ms {
            last_bot = now;
            let tasks = task_api::list_tasks(TaskFilter::Active)?;
            queue.push(messages::status_message(&tasks, &mut rng));
            if let Some(message) = queue.pop() {
                println!("{} {}", message.mood, message.text);
            }
        }

        if (now - last_reminder).whole_seconds() >= 450 {
            last_reminder = now;
            let tasks = task_api::list_tasks(TaskFilter::All)?;
            if let Some(message) = messages::idle_reminder(&tasks, &mut rng) {
                if let Err(err) = notifier.notify(&reminder_notice(&message.text)) {
                    eprintln!("WARN: notification failed: {err}");
                }
                println!("🔔 {}", message.text);
            }
        }

        std::thread::sleep(std::time::Duration::from_millis(250));
    }

    Ok(())
}

fn normalize_parse_error(err: clap::Error) -> AppError {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or("invalid command").trim();
    let message = first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string();
    AppError::invalid_input(message)
}

fn split_command_line(line: &str) -> Result<Vec<String>, AppError> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut escape = false;

    for ch in line.chars() {
        if escape {
            if ch != '"' && ch != '\\' {
                current.push('\\');
            }
            current.push(ch);
            escape = false;
            continue;
        }

        if in_quotes && ch == '\\' {
            escape = true;
            continue;
        }

        if ch == '"' {
            in_quotes = !in_quotes;
            continue;
        }

        if ch.is_whitespace() && !in_quotes {
            if !current.is_empty() {
                args.push(current.clone());
                current.clear();
            }
            continue;
        }

        current.push(ch);
    }

    if in_quotes {
        return Err(AppError::invalid_input("unterminated quote in command"));
    }

    if !current.is_empty() {
        args.push(current);
    }

    Ok(args)
}

fn print_help() {
    let mut cmd = Cli::command();
    let help = cmd.render_help();
    println!("{help}");
}

fn run_command(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Command::Add { text, duration } => {
            let text = match text {
                Some(value) if !value.trim().is_empty() => value,
                _ => return Err(AppError::invalid_input("task text is required")),
            };

            let task = task_api::add_task(&text, duration)?;
            let config = load_config_with_fallback().config;
            play_cue(SoundCue::TaskAdded, config.player.as_deref());
            if cli.json {
                println!("{}", task_json(&task));
            } else {
                println!(
                    "🎯 New Avoidance Mission! Now you can officially avoid \"{}\" for {} minutes ({})",
                    task.text, duration, task.id
                );
            }
        }
        Command::Done { id } => {
            let outcome = task_api::complete_task(&id)?;
            let config = load_config_with_fallback().config;
            play_cue(SoundCue::TaskCompleted, config.player.as_deref());
            if cli.json {
                let mut payload = task_json(&outcome.task);
                payload["points_awarded"] = serde_json::json!(outcome.points_awarded);
                println!("{payload}");
            } else {
                println!(
                    "😱 Productivity Alert! You actually did \"{}\". But you earned {} points for the effort!",
                    outcome.task.text, outcome.points_awarded
                );
                let mut rng = make_rng();
                let shame = messages::completion_shame(&outcome.task.text, &mut rng);
                println!("\n{}", shame.text);
            }
        }
        Command::Avoid { id } => {
            let task = task_api::reactivate_task(&id)?;
            if cli.json {
                println!("{}", task_json(&task));
            } else {
                println!(
                    "🔄 Back to Avoiding! Welcome back to avoiding \"{}\"! ({})",
                    task.text, task.id
                );
            }
        }
        Command::Delete { id } => {
            let task = task_api::delete_task(&id)?;
            if cli.json {
                println!("{}", task_json(&task));
            } else {
                println!(
                    "🗑️ Mission Abandoned. \"{}\" removed from your avoidance list!",
                    task.text
                );
            }
        }
        Command::Show { id } => {
            let task = task_api::show_task(&id)?;
            if cli.json {
                println!("{}", task_json(&task));
            } else {
                let now = OffsetDateTime::now_utc();
                println!("{} — {}", task.id, task.text);
                println!("Status: {}", status_label(&task));
                println!("Points: {}", task.points);
                if task.is_active {
                    let level = avoidance_level(task.points);
                    println!("Level: {} {}", level.emoji, level.title);
                    println!("Avoiding for: {}", elapsed_display(now, &task.last_avoided_at)?);
                }
                if let Some(percent) = progress_percent(now, &task)? {
                    println!("Avoidance Progress: {percent}%");
                }
                println!("Created: {}", task.created_at);
            }
        }
        Command::Tick => {
            let outcome = task_api::run_tick()?;
            let notifier = notifier_from_env()?;
            notify_milestones(notifier.as_ref(), &outcome);
            if cli.json {
                println!("{}", tick_outcome_json(&outcome));
            } else {
                print_tick_outcome_plain(&outcome);
            }
        }
        Command::Watch { run_for } => {
            run_watch(run_for)?;
        }
        Command::List { list } => {
            let filter = match list {
                ListCommand::Active => TaskFilter::Active,
                ListCommand::Completed => TaskFilter::Completed,
                ListCommand::All => TaskFilter::All,
            };
            let tasks = task_api::list_tasks(filter)?;
            if cli.json {
                print_tasks_json(&tasks);
            } else {
                print_tasks_plain(&tasks)?;
            }
        }
        Command::Excuse => {
            let mut rng = make_rng();
            let excuse = random_excuse(&mut rng);
            if cli.json {
                println!("{}", serde_json::json!({ "excuse": excuse }));
            } else {
                println!("\"{excuse}\"");
            }
        }
        Command::Bot => {
            // The bot only ever sees what's being avoided; completed tasks
            // are dead to it.
            let tasks = task_api::list_tasks(TaskFilter::Active)?;
            let mut rng = make_rng();
            let message = messages::status_message(&tasks, &mut rng);
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({ "mood": message.mood, "text": message.text })
                );
            } else {
                println!("{} {}", message.mood, message.text);
            }
        }
        Command::Bingo { bingo } => {
            run_bingo(bingo, cli.json)?;
        }
        Command::Shop { shop } => {
            run_shop(shop, cli.json)?;
        }
        Command::Leaderboard => {
            run_leaderboard(cli.json)?;
        }
        Command::Profile => {
            run_profile(cli.json)?;
        }
        Command::History => {
            run_history(cli.json)?;
        }
    }

    Ok(())
}

fn run_interactive() -> Result<(), AppError> {
    let mut input = String::new();
    let stdin = io::stdin();
    let mut stdin_lock = stdin.lock();

    loop {
        input.clear();
        let bytes = stdin_lock
            .read_line(&mut input)
            .map_err(|err| AppError::io(err.to_string()))?;

        if bytes == 0 {
            break;
        }

        let line = input.trim();
        if line.is_empty() {
            continue;
        }

        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            break;
        }

        if line == "help" || line == "?" {
            print_help();
            continue;
        }

        let args = match split_command_line(line) {
            Ok(args) => args,
            Err(err) => {
                eprintln!("ERROR: {}", err);
                continue;
            }
        };

        if args.is_empty() {
            continue;
        }

        let mut argv = Vec::with_capacity(args.len() + 1);
        argv.push("todont".to_string());
        argv.extend(args);

        let cli = match Cli::try_parse_from(argv) {
            Ok(cli) => cli,
            Err(err) => {
                eprintln!("ERROR: {}", normalize_parse_error(err));
                continue;
            }
        };

        if let Err(err) = run_command(cli) {
            eprintln!("ERROR: {}", err);
        }
    }

    Ok(())
}

fn main() {
    let mut args = std::env::args_os();
    args.next();
    if args.next().is_none() {
        if let Err(err) = run_interactive() {
            eprintln!("ERROR: {}", err);
            std::process::exit(1);
        }
        return;
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if matches!(
                err.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) =>
        {
            let _ = err.print();
            return;
        }
        Err(err) => {
            eprintln!("ERROR: {}", normalize_parse_error(err));
            std::process::exit(1);
        }
    };

    if let Err(err) = run_command(cli) {
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}
