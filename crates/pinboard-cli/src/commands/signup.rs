//! Signup command implementation.

use pinboard_store::Bulletin;

pub fn run(data_dir: String, username: String, password: String) -> Result<(), Box<dyn std::error::Error>> {
    let bulletin = Bulletin::open(&data_dir);
    let session = bulletin.signup(&username, &password)?;
    println!(
        "Signed up and logged in as {}",
        session.username().map(|u| u.as_ref()).unwrap_or("?")
    );
    Ok(())
}
