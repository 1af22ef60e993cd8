use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "amal", version, author, about = "Ramadan tracker: daily worship checklist, streaks and tasbih")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Toggle a task for a day (subuh, zuhur, ashar, maghrib, isya, tarawih, tadarus)
    Toggle {
        task: String,
        /// Day to edit, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Record that you fasted
    Fast {
        /// Day to edit, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// Clear the fasting flag instead
        #[arg(long)]
        off: bool,
    },
    /// Show the checklist and progress for a day
    Today {
        #[arg(long)]
        date: Option<String>,
    },
    /// Show fasting, prayer and tarawih streaks with the current badge
    Streaks,
    /// Show the 30-day consistency heatmap
    Heatmap,
    /// Read or write the daily reflection
    Journal {
        /// New text; omit to print the saved entry
        text: Option<String>,
        #[arg(long)]
        date: Option<String>,
    },
    /// Digital tasbih counter
    Tasbih {
        #[command(subcommand)]
        action: TasbihCommands,
    },
    /// Print a shareable progress summary
    Share {
        #[arg(long)]
        date: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum TasbihCommands {
    /// Count one (or more) beads
    Tap {
        #[arg(default_value = "1")]
        times: u32,
    },
    /// Set the count back to zero
    Reset,
    /// Switch to the next dhikr
    Next,
    /// Switch to the previous dhikr
    Prev,
    /// Set the target (33, 99, or 1000 for unlimited)
    Target { value: u32 },
    /// Set the text of the custom dhikr
    Custom { text: String },
    /// Show the counter
    Show,
}
