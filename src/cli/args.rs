use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mihrab", version, author, about = "A terminal prayer times companion with qibla compass, tasbih, and duas")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show today's prayer times and countdown to next prayer
    Times,
    /// Show the next prayer and the time remaining until it
    Next,
    /// Show the qibla bearing
    Qibla,
    /// Show the Hijri and Gregorian dates
    Date {
        /// Day offset from today (negative for past days)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,
    },
    /// List the built-in duas
    Duas {
        /// Filter by category (morning, daily, protection, difficult, repentance, sleep)
        #[arg(long)]
        category: Option<String>,
        /// Text matched against title, transliteration, and translation
        query: Option<String>,
    },
}
