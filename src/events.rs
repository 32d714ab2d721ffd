//! Event System
//!
//! Types and implementations for background-task settlement events and
//! activity logging.

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

/// Which path produced an event.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum UpdateSource {
    /// The automatic status update fired on portal load.
    AutoUpdate,
    /// A status update explicitly requested by the staff member.
    ManualUpdate,
    /// Events originating in the portal shell itself (tab changes, etc.).
    Portal,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    /// The operation settled successfully.
    Success,
    /// The operation settled, but the backend reported a warning.
    Warning,
    /// The operation failed to settle.
    Error,
    /// A refresh of dependent views was triggered.
    Refresh,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Event {
    pub source: UpdateSource,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: UpdateSource, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    /// A settlement event from one of the status-update paths.
    pub fn settlement(
        source: UpdateSource,
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
    ) -> Self {
        Self::new(source, msg, event_type, log_level)
    }

    pub fn portal(msg: String, event_type: EventType) -> Self {
        Self::new(UpdateSource::Portal, msg, event_type, LogLevel::Info)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_events_always_display() {
        let event = Event::settlement(
            UpdateSource::ManualUpdate,
            "Status update completed".to_string(),
            EventType::Success,
            LogLevel::Debug,
        );
        assert!(event.should_display());
    }

    #[test]
    fn test_display_format_includes_type_and_message() {
        let event = Event::portal("Switched tab".to_string(), EventType::Refresh);
        let rendered = event.to_string();
        assert!(rendered.starts_with("Refresh ["));
        assert!(rendered.ends_with("Switched tab"));
    }
}
