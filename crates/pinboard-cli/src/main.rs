//! Pinboard CLI - command-line driver for the event bulletin stores.

use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{add, list, login, remove, signup, sweep, venues};

#[derive(Parser)]
#[command(name = "pinboard")]
#[command(about = "Campus-map event bulletin storage operations")]
struct Cli {
    /// Directory holding credentials.txt and events.txt
    #[arg(long, default_value = ".")]
    data_dir: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the known venues
    Venues,
    /// Show the upcoming-events board for a venue
    List {
        /// Venue name (see `venues`)
        venue: String,
        /// Organizer username (own events are listed first)
        #[arg(long)]
        user: Option<String>,
        /// Organizer password
        #[arg(long)]
        password: Option<String>,
        /// Output as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Create an organizer account
    Signup {
        /// New username (4-20 chars: A-Z a-z 0-9 @ _)
        username: String,
        /// New password (4-20 chars: A-Z a-z 0-9 @ _ $ # * -)
        password: String,
    },
    /// Check a username/password pair
    Login {
        /// Username
        username: String,
        /// Password
        password: String,
    },
    /// Add an event to a venue
    Add {
        /// Venue name (see `venues`)
        venue: String,
        /// Event name (at most 30 chars, globally unique)
        name: String,
        /// Date as DD/MM/YYYY
        date: String,
        /// Time as HH:MM
        time: String,
        /// Description (at most 100 words)
        description: String,
        /// Organizer username
        #[arg(long)]
        user: String,
        /// Organizer password
        #[arg(long)]
        password: String,
        /// Add even if the timing clashes with another event
        #[arg(long)]
        allow_clash: bool,
    },
    /// Remove an event you own
    Remove {
        /// Event name
        name: String,
        /// Organizer username
        #[arg(long)]
        user: String,
        /// Organizer password
        #[arg(long)]
        password: String,
    },
    /// Remove past events from storage
    Sweep,
}

fn main() {
    let cli = Cli::parse();
    let data_dir = cli.data_dir;

    let result = match cli.command {
        Commands::Venues => venues::run(),
        Commands::List {
            venue,
            user,
            password,
            json,
        } => list::run(data_dir, venue, user, password, json),
        Commands::Signup { username, password } => signup::run(data_dir, username, password),
        Commands::Login { username, password } => login::run(data_dir, username, password),
        Commands::Add {
            venue,
            name,
            date,
            time,
            description,
            user,
            password,
            allow_clash,
        } => add::run(
            data_dir,
            venue,
            name,
            date,
            time,
            description,
            user,
            password,
            allow_clash,
        ),
        Commands::Remove {
            name,
            user,
            password,
        } => remove::run(data_dir, name, user, password),
        Commands::Sweep => sweep::run(data_dir),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
