//! Clock time conversion helpers
//!
//! Pure conversion logic between 24-hour "HH:MM" strings and the 12-hour
//! (hour, minute, AM/PM) form the time picker works in, plus the mapping
//! from a scroll offset to the selected item in a picker column.

use std::fmt::{Display, Formatter};

/// AM/PM half of the day.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Meridiem {
    #[strum(serialize = "AM")]
    Am,
    #[strum(serialize = "PM")]
    Pm,
}

/// A clock time in 12-hour form, as shown in the picker.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TimeOfDay {
    /// Hour on the 12-hour clock, 1 through 12.
    pub hour12: u8,
    /// Minute, 0 through 59.
    pub minute: u8,
    pub meridiem: Meridiem,
}

impl Default for TimeOfDay {
    /// Midnight, displayed as 12:00 AM.
    fn default() -> Self {
        TimeOfDay {
            hour12: 12,
            minute: 0,
            meridiem: Meridiem::Am,
        }
    }
}

impl TimeOfDay {
    /// Converts back to a zero-padded 24-hour "HH:MM" string.
    ///
    /// 12 AM maps to hour 0 and 12 PM stays 12; every other PM hour gains
    /// 12. Round-trips with [`parse_twenty_four_hour`] for all valid input.
    pub fn to_twenty_four_hour(&self) -> String {
        let hour = match self.meridiem {
            Meridiem::Am if self.hour12 == 12 => 0,
            Meridiem::Pm if self.hour12 != 12 => self.hour12 + 12,
            _ => self.hour12,
        };
        format!("{:02}:{:02}", hour, self.minute)
    }
}

impl Display for TimeOfDay {
    /// Formats as e.g. "3:05 PM" (no zero padding on the hour).
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:02} {}", self.hour12, self.minute, self.meridiem)
    }
}

/// Parses a 24-hour "HH:MM" string (an optional ":SS" suffix is ignored)
/// into its 12-hour form.
///
/// Returns `None` when the string does not have the expected shape; callers
/// keep the original string or their defaults in that case, this is a
/// display contract rather than a hard parse. The minute field is taken
/// verbatim and deliberately not range-checked against 60.
pub fn parse_twenty_four_hour(s: &str) -> Option<TimeOfDay> {
    let mut parts = s.split(':');
    let hour_str = parts.next()?;
    let minute_str = parts.next()?;
    // At most one trailing seconds segment.
    if parts.next().is_some() && parts.next().is_some() {
        return None;
    }

    if hour_str.is_empty() || hour_str.len() > 2 || !hour_str.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if minute_str.len() != 2 || !minute_str.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hour: u8 = hour_str.parse().ok()?;
    if hour > 23 {
        return None;
    }
    let minute: u8 = minute_str.parse().ok()?;

    // Canonical 24h -> 12h rule with noon and midnight as the fixed points.
    let (hour12, meridiem) = match hour {
        0 => (12, Meridiem::Am),
        1..=11 => (hour, Meridiem::Am),
        12 => (12, Meridiem::Pm),
        _ => (hour - 12, Meridiem::Pm),
    };

    Some(TimeOfDay {
        hour12,
        minute,
        meridiem,
    })
}

/// Lightweight display-only formatter: "HH:MM" (or "HH:MM:SS", seconds
/// dropped) becomes "h:MM AM/PM".
///
/// Only the hour is numerically converted; the minute substring is carried
/// over verbatim. Input that does not look like a clock time is returned
/// unchanged, and an empty string stays empty. Does not need to round-trip.
pub fn format_time_12_hour(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    if !s.contains(':') {
        return s.to_string();
    }

    let mut parts = s.split(':');
    let hour_str = parts.next().unwrap_or(s);
    let minute_str = match parts.next() {
        Some(m) => m,
        None => return s.to_string(),
    };

    let hours: u32 = match hour_str.parse() {
        Ok(h) => h,
        Err(_) => return s.to_string(),
    };

    let meridiem = if hours >= 12 { "PM" } else { "AM" };
    let hours12 = match hours % 12 {
        0 => 12,
        h => h,
    };

    format!("{}:{} {}", hours12, minute_str, meridiem)
}

/// Resolves a scroll offset to the item it lands on.
///
/// The index is the offset divided by the item height, rounded to nearest.
/// Out-of-range indexes (scroll overshoot or bounce) yield `None` and the
/// caller keeps its prior selection. A negative offset that still rounds to
/// zero resolves to the first item.
pub fn value_at_offset<T: Copy>(offset_px: f64, item_height_px: f64, items: &[T]) -> Option<T> {
    if item_height_px <= 0.0 {
        return None;
    }
    let index = (offset_px / item_height_px).round();
    if index < 0.0 {
        return None;
    }
    items.get(index as usize).copied()
}

/// The scroll offset at which the given index sits, used when realigning a
/// column after a direct selection or on picker open.
pub fn offset_for_index(index: usize, item_height_px: f64) -> f64 {
    index as f64 * item_height_px
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_all_valid_times() {
        for hour in 0..24u8 {
            for minute in 0..60u8 {
                let input = format!("{:02}:{:02}", hour, minute);
                let parsed = parse_twenty_four_hour(&input)
                    .unwrap_or_else(|| panic!("failed to parse {}", input));
                assert_eq!(parsed.to_twenty_four_hour(), input);
            }
        }
    }

    #[test]
    fn test_parse_boundary_hours() {
        let midnight = parse_twenty_four_hour("00:00").unwrap();
        assert_eq!(midnight.hour12, 12);
        assert_eq!(midnight.meridiem, Meridiem::Am);

        let noon = parse_twenty_four_hour("12:00").unwrap();
        assert_eq!(noon.hour12, 12);
        assert_eq!(noon.meridiem, Meridiem::Pm);

        let afternoon = parse_twenty_four_hour("13:30").unwrap();
        assert_eq!(afternoon.hour12, 1);
        assert_eq!(afternoon.minute, 30);
        assert_eq!(afternoon.meridiem, Meridiem::Pm);

        let late = parse_twenty_four_hour("23:59").unwrap();
        assert_eq!(late.hour12, 11);
        assert_eq!(late.minute, 59);
        assert_eq!(late.meridiem, Meridiem::Pm);
    }

    #[test]
    fn test_parse_accepts_single_digit_hour_and_seconds() {
        let t = parse_twenty_four_hour("9:05").unwrap();
        assert_eq!(t.hour12, 9);
        assert_eq!(t.meridiem, Meridiem::Am);

        let with_seconds = parse_twenty_four_hour("14:30:45").unwrap();
        assert_eq!(with_seconds.hour12, 2);
        assert_eq!(with_seconds.minute, 30);
        assert_eq!(with_seconds.meridiem, Meridiem::Pm);
    }

    #[test]
    fn test_parse_minute_taken_verbatim() {
        // Minutes are not validated against 60.
        let t = parse_twenty_four_hour("10:99").unwrap();
        assert_eq!(t.minute, 99);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert_eq!(parse_twenty_four_hour("not-a-time"), None);
        assert_eq!(parse_twenty_four_hour(""), None);
        assert_eq!(parse_twenty_four_hour("25:00"), None);
        assert_eq!(parse_twenty_four_hour("123:00"), None);
        assert_eq!(parse_twenty_four_hour("12:5"), None);
        assert_eq!(parse_twenty_four_hour("12:345"), None);
        assert_eq!(parse_twenty_four_hour("1a:30"), None);
        assert_eq!(parse_twenty_four_hour("12:3x"), None);
    }

    #[test]
    fn test_display_format() {
        let t = TimeOfDay {
            hour12: 3,
            minute: 5,
            meridiem: Meridiem::Pm,
        };
        assert_eq!(t.to_string(), "3:05 PM");
        assert_eq!(TimeOfDay::default().to_string(), "12:00 AM");
    }

    #[test]
    fn test_format_time_12_hour() {
        assert_eq!(format_time_12_hour("09:05"), "9:05 AM");
        assert_eq!(format_time_12_hour("00:15"), "12:15 AM");
        assert_eq!(format_time_12_hour("12:00"), "12:00 PM");
        assert_eq!(format_time_12_hour("17:45"), "5:45 PM");
        assert_eq!(format_time_12_hour(""), "");
    }

    #[test]
    fn test_format_time_12_hour_drops_seconds_keeps_minutes_verbatim() {
        // Seconds are ignored, the minute substring is not re-parsed.
        assert_eq!(format_time_12_hour("14:30:45"), "2:30 PM");
    }

    #[test]
    fn test_format_time_12_hour_falls_back_on_bad_input() {
        assert_eq!(format_time_12_hour("not a time"), "not a time");
        assert_eq!(format_time_12_hour("ab:30"), "ab:30");
    }

    #[test]
    fn test_value_at_offset_rounds_to_nearest() {
        let minutes: Vec<u8> = (0..60).collect();
        assert_eq!(value_at_offset(405.0, 40.0, &minutes), Some(10));
        assert_eq!(value_at_offset(0.0, 40.0, &minutes), Some(0));
        assert_eq!(value_at_offset(19.0, 40.0, &minutes), Some(0));
        assert_eq!(value_at_offset(21.0, 40.0, &minutes), Some(1));
    }

    #[test]
    fn test_value_at_offset_boundaries() {
        let hours: Vec<u8> = (1..=12).collect();
        // A small negative offset still rounds to the first item.
        assert_eq!(value_at_offset(-5.0, 40.0, &hours), Some(1));
        // A full item's worth of negative scroll is out of range.
        assert_eq!(value_at_offset(-40.0, 40.0, &hours), None);
        // Overshoot past the last item is out of range too.
        assert_eq!(value_at_offset(12.0 * 40.0, 40.0, &hours), None);
        assert_eq!(value_at_offset(11.0 * 40.0, 40.0, &hours), Some(12));
    }

    #[test]
    fn test_offset_for_index() {
        assert_eq!(offset_for_index(0, 40.0), 0.0);
        assert_eq!(offset_for_index(10, 40.0), 400.0);
    }
}
