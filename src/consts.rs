pub mod portal_consts {
    //! Portal Configuration Constants
    //!
    //! Configuration constants for the staff portal, organized by
    //! functional area.

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of buffered settlement events from background tasks.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Time picker geometry, expressed in the host scroll model.
    pub mod picker {
        /// Height of a single item in the scrollable picker columns, in px.
        pub const ITEM_HEIGHT_PX: f64 = 40.0;

        /// Number of list rows visible in each picker column.
        pub const VISIBLE_ROWS: u16 = 5;
    }

    /// UI loop timing.
    pub mod timing {
        use std::time::Duration;

        /// How long the splash screen is shown before the login screen.
        pub const SPLASH_DURATION_SECS: u64 = 2;

        /// Poll interval for terminal events (milliseconds).
        pub const EVENT_POLL_MS: u64 = 100;

        pub const fn event_poll_interval() -> Duration {
            Duration::from_millis(EVENT_POLL_MS)
        }
    }
}
