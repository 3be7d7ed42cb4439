//! List command implementation.

use crate::output;
use pinboard_core::Session;
use pinboard_record::{Stamp, Venue};
use pinboard_store::Bulletin;

pub fn run(
    data_dir: String,
    venue: String,
    user: Option<String>,
    password: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let bulletin = Bulletin::open(&data_dir);
    let venue = Venue::parse(venue)?;

    // With credentials the board puts the organizer's own events first;
    // without, everything is one group and the session stays a visitor.
    let session = match (user, password) {
        (Some(user), Some(password)) => bulletin.login(&user, &password)?,
        (None, None) => Session::Visitor,
        _ => return Err("--user and --password must be given together".into()),
    };

    let board = bulletin.list(&venue, &session, Stamp::now())?;

    if json {
        for event in &board {
            println!("{}", output::format_json(event));
        }
    } else {
        output::print_table_header();
        for event in &board {
            println!("{}", output::format_table_row(event));
        }
    }
    Ok(())
}
