//! Formatting utilities used for CLI and export outputs.

/// Render a duration in whole hours and minutes, seconds truncated.
/// Matches the report convention: "8 hours, 30 minutes".
pub fn secs2hours_minutes(secs: i64) -> String {
    let total = secs.max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    format!("{} hours, {} minutes", hours, minutes)
}
