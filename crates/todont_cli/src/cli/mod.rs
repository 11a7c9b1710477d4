use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a task to professionally avoid
    ///
    /// Example: todont add "Clean room" --duration 45
    Add {
        text: Option<String>,
        /// Planned minutes of expert avoidance
        #[arg(long, default_value_t = 30)]
        duration: u64,
    },
    /// Admit a task actually got done (score penalty applies)
    ///
    /// Example: todont done task-1
    Done {
        id: String,
    },
    /// Go back to avoiding a completed task
    ///
    /// Example: todont avoid task-1
    Avoid {
        id: String,
    },
    /// Delete a task; banked points stay banked
    ///
    /// Example: todont delete task-1
    Delete {
        id: String,
    },
    /// Show details of a task
    ///
    /// Example: todont show task-1
    Show {
        id: String,
    },
    /// Run one accounting pass over all active tasks
    ///
    /// Example: todont tick
    Tick,
    /// Keep the timers running: tick every second, bot chatter, reminders
    ///
    /// Example: todont watch --for 60
    Watch {
        /// Stop after this many seconds instead of running until Ctrl-C
        #[arg(long = "for", value_name = "SECONDS")]
        run_for: Option<u64>,
    },
    /// List tasks
    ///
    /// Example: todont list active
    List {
        #[command(subcommand)]
        list: ListCommand,
    },
    /// Generate a professional excuse
    Excuse,
    /// Ask the procrastination bot how it's going
    Bot,
    /// Procrastination calendar bingo
    Bingo {
        #[command(subcommand)]
        bingo: BingoCommand,
    },
    /// Spend banked points
    Shop {
        #[command(subcommand)]
        shop: ShopCommand,
    },
    /// Hall of fame standings
    Leaderboard,
    /// Your rank and avoidance stats
    Profile,
    /// All tasks, newest first
    History,
}

#[derive(Subcommand, Debug)]
pub enum ListCommand {
    /// Tasks currently being avoided
    Active,
    /// Productivity incidents
    Completed,
    /// Everything
    All,
}

#[derive(Subcommand, Debug)]
pub enum BingoCommand {
    /// Print the card
    Show,
    /// Toggle a cell's avoided flag (cells are 0..24, row by row)
    ///
    /// Example: todont bingo mark 12
    Mark {
        cell: usize,
    },
    /// Bind a custom task to a cell; also creates the real task
    ///
    /// Example: todont bingo task 12 "Call dentist" --duration 15
    Task {
        cell: usize,
        text: String,
        #[arg(long, default_value_t = 30)]
        duration: u64,
    },
    /// Empty one cell
    Clear {
        cell: usize,
    },
    /// Empty the whole card
    ClearAll,
    /// Fresh card on the same anchor date
    New,
    /// Slide the card a week
    ///
    /// Example: todont bingo week next
    Week {
        direction: WeekDirection,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum WeekDirection {
    Prev,
    Next,
}

#[derive(Subcommand, Debug)]
pub enum ShopCommand {
    /// Browse the catalog
    List,
    /// Buy an item by id
    ///
    /// Example: todont shop buy 1
    Buy {
        id: String,
    },
}
