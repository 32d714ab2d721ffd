//! Background task coordination
//!
//! Spawns the single in-flight status-update task and reports its
//! settlement back to the UI loop over the event channel.

use crate::api::error_handler::{classify_api_error, handle_api_error};
use crate::api::StatusUpdater;
use crate::events::{Event, EventType, UpdateSource};
use crate::logging::LogLevel;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Runs one status update against the backend and sends exactly one
/// settlement event for it.
///
/// The dashboard's busy gate guarantees at most one of these is in flight
/// per controller instance; this function does not enforce that itself.
pub fn spawn_status_update(
    source: UpdateSource,
    updater: Arc<dyn StatusUpdater>,
    event_sender: mpsc::Sender<Event>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = match source {
            UpdateSource::ManualUpdate => updater.manual_status_update().await,
            _ => updater.auto_status_update_on_load().await,
        };

        let event = match result {
            Ok(update) if update.success => Event::settlement(
                source,
                update.message,
                EventType::Success,
                LogLevel::Info,
            ),
            Ok(update) => Event::settlement(source, update.message, EventType::Warning, LogLevel::Warn),
            Err(e) => {
                if source == UpdateSource::AutoUpdate {
                    // Auto-update failures are swallowed: a log line, never a notice.
                    log::warn!("Auto status update failed: {}", e);
                }
                Event::settlement(
                    source,
                    handle_api_error(&e),
                    EventType::Error,
                    classify_api_error(&e),
                )
            }
        };

        // The receiver dropping just means the UI is shutting down.
        let _ = event_sender.send(event).await;
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockStatusUpdater, PortalApiError, StatusUpdateResponse};

    fn ok_response(success: bool, message: &str) -> StatusUpdateResponse {
        StatusUpdateResponse {
            success,
            message: message.to_string(),
        }
    }

    #[tokio::test]
    async fn test_manual_success_settles_as_success_event() {
        let mut mock = MockStatusUpdater::new();
        mock.expect_manual_status_update()
            .times(1)
            .returning(|| Ok(ok_response(true, "3 shifts updated")));

        let (tx, mut rx) = mpsc::channel(1);
        spawn_status_update(UpdateSource::ManualUpdate, Arc::new(mock), tx)
            .await
            .unwrap();

        let event = rx.recv().await.expect("expected a settlement event");
        assert_eq!(event.source, UpdateSource::ManualUpdate);
        assert_eq!(event.event_type, EventType::Success);
        assert_eq!(event.msg, "3 shifts updated");
    }

    #[tokio::test]
    async fn test_backend_reported_warning_settles_as_warning_event() {
        let mut mock = MockStatusUpdater::new();
        mock.expect_manual_status_update()
            .times(1)
            .returning(|| Ok(ok_response(false, "2 rows skipped")));

        let (tx, mut rx) = mpsc::channel(1);
        spawn_status_update(UpdateSource::ManualUpdate, Arc::new(mock), tx)
            .await
            .unwrap();

        let event = rx.recv().await.unwrap();
        assert_eq!(event.event_type, EventType::Warning);
        assert_eq!(event.msg, "2 rows skipped");
    }

    #[tokio::test]
    async fn test_auto_failure_settles_as_error_event() {
        let mut mock = MockStatusUpdater::new();
        mock.expect_auto_status_update_on_load()
            .times(1)
            .returning(|| {
                Err(PortalApiError::Http {
                    status: 503,
                    message: "maintenance".to_string(),
                })
            });

        let (tx, mut rx) = mpsc::channel(1);
        spawn_status_update(UpdateSource::AutoUpdate, Arc::new(mock), tx)
            .await
            .unwrap();

        let event = rx.recv().await.unwrap();
        assert_eq!(event.source, UpdateSource::AutoUpdate);
        assert_eq!(event.event_type, EventType::Error);
        assert_eq!(event.log_level, LogLevel::Warn);
    }
}
