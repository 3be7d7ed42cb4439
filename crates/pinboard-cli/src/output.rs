//! Output formatting utilities.

use pinboard_core::Event;

/// Formats an event as a single JSON line.
pub fn format_json(event: &Event) -> String {
    serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string())
}

/// Prints the board table header.
pub fn print_table_header() {
    println!(
        "{:<32} {:<18} {:<22} {}",
        "NAME", "WHEN", "OWNER", "DESCRIPTION"
    );
}

/// Formats an event as a table row. Only the first description line is
/// shown, truncated to keep the row on one screen line.
pub fn format_table_row(event: &Event) -> String {
    let owner = event
        .owner
        .as_ref()
        .map(|u| u.as_ref())
        .unwrap_or("-");
    let first_line = event
        .description
        .as_ref()
        .lines()
        .next()
        .unwrap_or("");

    format!(
        "{:<32} {:<18} {:<22} {}",
        truncate(event.name.as_ref(), 32),
        event.stamp.render(),
        truncate(owner, 22),
        truncate(first_line, 48)
    )
}

fn truncate(text: &str, max: usize) -> String {
    if text.len() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}
