//! Add command implementation.

use pinboard_record::Stamp;
use pinboard_store::{Bulletin, EventFields, ScheduleError};

#[allow(clippy::too_many_arguments)]
pub fn run(
    data_dir: String,
    venue: String,
    name: String,
    date: String,
    time: String,
    description: String,
    user: String,
    password: String,
    allow_clash: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let bulletin = Bulletin::open(&data_dir);
    let session = bulletin.login(&user, &password)?;

    let fields = EventFields {
        name,
        venue,
        date,
        time,
        description,
    };

    let now = Stamp::now();
    let event = match bulletin.validate_and_create(&fields, &session, now) {
        Ok(event) => event,
        Err(ScheduleError::ScheduleClash { with, stamp }) => {
            if !allow_clash {
                return Err(format!(
                    "timing {stamp} clashes with '{with}'; pass --allow-clash to add anyway"
                )
                .into());
            }
            bulletin.confirm_clash_and_create(&fields, &session, now)?
        }
        Err(e) => return Err(e.into()),
    };

    println!("Added '{}' at {} on {}", event.name, event.venue, event.stamp);
    Ok(())
}
