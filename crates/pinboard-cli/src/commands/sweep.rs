//! Sweep command implementation.

use pinboard_record::Stamp;
use pinboard_store::Bulletin;

pub fn run(data_dir: String) -> Result<(), Box<dyn std::error::Error>> {
    let bulletin = Bulletin::open(&data_dir);
    let removed = bulletin.sweep(Stamp::now())?;
    println!("Swept {removed} past event(s) from storage");
    Ok(())
}
