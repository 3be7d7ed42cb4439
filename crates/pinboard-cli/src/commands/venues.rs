//! Venues command implementation.

use pinboard_record::VENUES;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    for venue in VENUES {
        println!("{venue}");
    }
    Ok(())
}
