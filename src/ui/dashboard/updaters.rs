//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from events and
//! user actions: tab selection, the status-update busy gate, and the
//! settlement transitions for the auto and manual paths.

use super::state::{DashboardState, Notice, NoticeKind, ShiftRecord, Tab, UpdatePhase};

use crate::events::{Event as PortalEvent, EventType, UpdateSource};
use chrono::Local;

impl DashboardState {
    /// Update the dashboard state with a new tick and any queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            if event.should_display() {
                self.add_to_activity_log(event.clone());
            }
            self.process_event(&event);
        }
    }

    /// Selects a tab. The generation counter is bumped unconditionally, so
    /// reselecting the already-active tab still forces its view to re-fetch.
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.bump_generation();
        self.add_to_activity_log(PortalEvent::portal(
            format!("Switched to {} (refresh #{})", tab, self.refresh_generation()),
            EventType::Refresh,
        ));
    }

    /// Tries to enter the automatic-update phase. Returns false when an
    /// update is already in flight.
    pub fn begin_auto_update(&mut self) -> bool {
        if self.is_updating() {
            return false;
        }
        self.set_update_phase(UpdatePhase::AutoUpdating);
        true
    }

    /// Tries to enter the manual-update phase. Returns false when an update
    /// is already in flight; the caller must not start a request then.
    pub fn begin_manual_update(&mut self) -> bool {
        if self.is_updating() {
            return false;
        }
        self.set_update_phase(UpdatePhase::ManualUpdating);
        true
    }

    /// Records a completed shift from the entry view.
    pub fn record_shift(&mut self, record: ShiftRecord) {
        self.add_to_activity_log(PortalEvent::portal(
            format!("Logged shift {} - {}", record.start, record.end),
            EventType::Success,
        ));
        self.shift_records.push(record);
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: &PortalEvent) {
        match event.source {
            UpdateSource::AutoUpdate => self.settle_auto_update(event),
            UpdateSource::ManualUpdate => self.settle_manual_update(event),
            UpdateSource::Portal => {}
        }
    }

    /// Settles the automatic on-load update. Failures and warnings are
    /// swallowed here: they reach the activity log only, never a notice,
    /// and never move the tab or the generation counter.
    fn settle_auto_update(&mut self, event: &PortalEvent) {
        self.set_update_phase(UpdatePhase::Idle);
        if event.event_type == EventType::Success {
            self.last_update_time = Some(Local::now());
        }
    }

    /// Settles a manual update. Success bumps the generation so dependent
    /// views re-fetch; warnings and failures leave it untouched.
    fn settle_manual_update(&mut self, event: &PortalEvent) {
        self.set_update_phase(UpdatePhase::Idle);
        match event.event_type {
            EventType::Success => {
                self.last_update_time = Some(Local::now());
                self.bump_generation();
                self.notice = Some(Notice {
                    kind: NoticeKind::Success,
                    text: format!("Status update completed! {}", event.msg),
                });
            }
            EventType::Warning => {
                self.notice = Some(Notice {
                    kind: NoticeKind::Warning,
                    text: format!("Status update completed with warnings: {}", event.msg),
                });
            }
            EventType::Error => {
                self.notice = Some(Notice {
                    kind: NoticeKind::Error,
                    text: format!("Status update failed: {}", event.msg),
                });
            }
            EventType::Refresh => {}
        }
    }
}
