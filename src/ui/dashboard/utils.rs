//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::UpdateSource;
use ratatui::prelude::Color;

/// Get a ratatui color for an event source based on its type
pub fn get_source_color(source: &UpdateSource) -> Color {
    match source {
        UpdateSource::AutoUpdate => Color::Cyan,
        UpdateSource::ManualUpdate => Color::Yellow,
        UpdateSource::Portal => Color::Green,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(
            format_compact_timestamp("2026-08-30 14:05:33"),
            "08-30 14:05"
        );
        // Unexpected shapes fall back to the original string.
        assert_eq!(format_compact_timestamp("14:05"), "14:05");
    }
}
