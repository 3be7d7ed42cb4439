//! Remove command implementation.

use pinboard_store::Bulletin;

pub fn run(
    data_dir: String,
    name: String,
    user: String,
    password: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let bulletin = Bulletin::open(&data_dir);
    let session = bulletin.login(&user, &password)?;
    bulletin.delete(&name, &session)?;
    println!("Removed '{name}' (if it existed)");
    Ok(())
}
