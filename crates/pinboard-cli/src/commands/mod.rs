//! CLI subcommand implementations.

pub mod add;
pub mod list;
pub mod login;
pub mod remove;
pub mod signup;
pub mod sweep;
pub mod venues;
