//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::consts::portal_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::Event as PortalEvent;
use crate::ui::dashboard::components::shift_entry::ShiftEntryState;

use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::time::Instant;

/// The two portal tabs.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Tab {
    #[strum(serialize = "Shift Entry")]
    ShiftEntry,
    #[strum(serialize = "Shift History")]
    ShiftHistory,
}

impl Tab {
    pub fn index(&self) -> usize {
        match self {
            Tab::ShiftEntry => 0,
            Tab::ShiftHistory => 1,
        }
    }

    pub fn other(&self) -> Tab {
        match self {
            Tab::ShiftEntry => Tab::ShiftHistory,
            Tab::ShiftHistory => Tab::ShiftEntry,
        }
    }
}

/// Which status-update, if any, is currently in flight. At most one update
/// runs at a time; this is the busy gate.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum UpdatePhase {
    Idle,
    AutoUpdating,
    ManualUpdating,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

/// A user-facing banner produced by a manual status update.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// A shift logged during this session, in 24-hour "HH:MM" strings.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ShiftRecord {
    pub date: String,
    pub start: String,
    pub end: String,
}

/// State owned by the dashboard shell for the lifetime of the session.
#[derive(Debug)]
pub struct DashboardState {
    /// Staff member the portal is signed in as.
    pub staff_name: String,
    /// The environment in which the application is running.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// The tab whose view is currently shown.
    pub active_tab: Tab,
    /// Monotonic generation counter; views keyed by it re-fetch when it moves.
    refresh_generation: u64,
    /// Busy gate for the single in-flight status update.
    update_phase: UpdatePhase,
    /// When the last status update settled successfully.
    pub last_update_time: Option<DateTime<Local>>,
    /// Current user-facing banner, if any.
    pub notice: Option<Notice>,
    /// Queue of settlement events waiting to be processed.
    pub pending_events: VecDeque<PortalEvent>,
    /// Activity logs for display.
    pub activity_logs: VecDeque<PortalEvent>,
    /// Shifts logged during this session, shown in the history view.
    pub shift_records: Vec<ShiftRecord>,
    /// State of the shift-entry view, re-created whenever its generation key moves.
    pub entry_view: ShiftEntryState,
    /// Animation tick counter.
    pub tick: usize,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(staff_name: String, environment: Environment, start_time: Instant) -> Self {
        Self {
            staff_name,
            environment,
            start_time,
            active_tab: Tab::ShiftEntry,
            refresh_generation: 0,
            update_phase: UpdatePhase::Idle,
            last_update_time: None,
            notice: None,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            shift_records: Vec::new(),
            entry_view: ShiftEntryState::new(0),
            tick: 0,
        }
    }

    pub fn refresh_generation(&self) -> u64 {
        self.refresh_generation
    }

    pub fn update_phase(&self) -> UpdatePhase {
        self.update_phase
    }

    /// Whether a status update is currently in flight.
    pub fn is_updating(&self) -> bool {
        self.update_phase != UpdatePhase::Idle
    }

    pub(super) fn set_update_phase(&mut self, phase: UpdatePhase) {
        self.update_phase = phase;
    }

    /// Bump the generation counter and re-mount the generation-keyed views.
    pub(super) fn bump_generation(&mut self) {
        self.refresh_generation += 1;
        self.entry_view = ShiftEntryState::new(self.refresh_generation);
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: PortalEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: PortalEvent) {
        self.pending_events.push_back(event);
    }
}
