//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::api::StatusUpdater;
use crate::consts::portal_consts::{EVENT_QUEUE_SIZE, timing};
use crate::environment::Environment;
use crate::events::{Event as PortalEvent, UpdateSource};
use crate::runtime::spawn_status_update;
use crate::timefmt::Meridiem;
use crate::ui::dashboard::state::{ShiftRecord, Tab};
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::login::render_login;
use crate::ui::picker::{PickerColumn, PickerOutcome, PickerState, render_picker};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Which shift-entry field an open picker is editing.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum PickerTarget {
    StartTime,
    EndTime,
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Login screen where the staff member confirms their session.
    Login,
    /// Dashboard screen with the tabbed shift views.
    Dashboard(Box<DashboardState>),
}

/// Application state
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// Staff member name from the session config.
    staff_name: String,

    /// The environment in which the application is running.
    environment: Environment,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// The open time picker, if any, and the field it edits.
    picker: Option<(PickerTarget, PickerState)>,

    /// Status-update collaborator handed to background tasks.
    updater: Arc<dyn StatusUpdater>,

    /// Receives settlement events from background tasks.
    event_receiver: mpsc::Receiver<PortalEvent>,

    /// Cloned into background tasks so they can report settlement.
    event_sender: mpsc::Sender<PortalEvent>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        staff_name: String,
        environment: Environment,
        updater: Arc<dyn StatusUpdater>,
    ) -> Self {
        let (event_sender, event_receiver) = mpsc::channel::<PortalEvent>(EVENT_QUEUE_SIZE);
        Self {
            start_time: Instant::now(),
            staff_name,
            environment,
            current_screen: Screen::Splash,
            picker: None,
            updater,
            event_receiver,
            event_sender,
        }
    }

    /// Handles a complete login, transitioning to the dashboard screen and
    /// firing the automatic status update for the signed-in staff member.
    pub fn login(&mut self) {
        let mut state = DashboardState::new(
            self.staff_name.clone(),
            self.environment,
            self.start_time,
        );
        // A user is present, so the on-load update always starts here.
        if state.begin_auto_update() {
            let _ = spawn_status_update(
                UpdateSource::AutoUpdate,
                self.updater.clone(),
                self.event_sender.clone(),
            );
        }
        self.current_screen = Screen::Dashboard(Box::new(state));
    }

    fn request_manual_update(
        state: &mut DashboardState,
        app_updater: &Arc<dyn StatusUpdater>,
        sender: &mpsc::Sender<PortalEvent>,
    ) {
        // The busy gate rejects the request while any update is in flight.
        if state.begin_manual_update() {
            let _ = spawn_status_update(
                UpdateSource::ManualUpdate,
                app_updater.clone(),
                sender.clone(),
            );
        }
    }

    fn open_picker(&mut self, target: PickerTarget) {
        let Screen::Dashboard(state) = &self.current_screen else {
            return;
        };
        let (title, current) = match target {
            PickerTarget::StartTime => ("Start Time", state.entry_view.start.as_deref()),
            PickerTarget::EndTime => ("End Time", state.entry_view.end.as_deref()),
        };
        self.picker = Some((target, PickerState::new(title, current.unwrap_or("12:00"))));
    }

    /// Closes the open picker, applying its outcome to the entry view.
    /// Exactly one of confirm or cancel happens per activation.
    fn close_picker(&mut self, confirmed: bool) {
        let Some((target, picker)) = self.picker.take() else {
            return;
        };
        let outcome = if confirmed {
            picker.confirm()
        } else {
            picker.cancel()
        };
        if let PickerOutcome::Confirmed(time) = outcome {
            if let Screen::Dashboard(state) = &mut self.current_screen {
                match target {
                    PickerTarget::StartTime => state.entry_view.start = Some(time),
                    PickerTarget::EndTime => state.entry_view.end = Some(time),
                }
            }
        }
    }

    fn handle_picker_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.close_picker(true),
            KeyCode::Esc => self.close_picker(false),
            _ => {
                let Some((_, picker)) = &mut self.picker else {
                    return;
                };
                match code {
                    KeyCode::Up => picker.scroll_by_items(picker.focused, -1),
                    KeyCode::Down => picker.scroll_by_items(picker.focused, 1),
                    KeyCode::Left | KeyCode::Right => picker.focus_next_column(),
                    KeyCode::Char('a') => picker.set_meridiem(Meridiem::Am),
                    KeyCode::Char('p') => picker.set_meridiem(Meridiem::Pm),
                    KeyCode::Char('m') => picker.toggle_meridiem(),
                    // Digits jump straight to a value in the focused column.
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        let digit = c as u8 - b'0';
                        match picker.focused {
                            PickerColumn::Hour if digit >= 1 => picker.select_hour(digit),
                            PickerColumn::Minute => picker.select_minute(digit),
                            _ => {}
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    fn handle_dashboard_key(&mut self, code: KeyCode) {
        let Screen::Dashboard(state) = &self.current_screen else {
            return;
        };
        let active_tab = state.active_tab;

        // Picker-opening keys need the whole App, not just the dashboard.
        if active_tab == Tab::ShiftEntry {
            match code {
                KeyCode::Char('s') => return self.open_picker(PickerTarget::StartTime),
                KeyCode::Char('e') => return self.open_picker(PickerTarget::EndTime),
                _ => {}
            }
        }

        let updater = self.updater.clone();
        let sender = self.event_sender.clone();
        let Screen::Dashboard(state) = &mut self.current_screen else {
            return;
        };
        match code {
            KeyCode::Tab => state.select_tab(state.active_tab.other()),
            KeyCode::Char('1') => state.select_tab(Tab::ShiftEntry),
            KeyCode::Char('2') => state.select_tab(Tab::ShiftHistory),
            KeyCode::Char('r') => Self::request_manual_update(state, &updater, &sender),
            KeyCode::Enter if state.active_tab == Tab::ShiftEntry => {
                let view = &state.entry_view;
                if let (Some(start), Some(end)) = (view.start.clone(), view.end.clone()) {
                    let record = ShiftRecord {
                        date: view.date.clone(),
                        start,
                        end,
                    };
                    state.record_shift(record);
                    state.entry_view.start = None;
                    state.entry_view.end = None;
                }
            }
            _ => {}
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(timing::SPLASH_DURATION_SECS);

    // UI event loop
    loop {
        // Queue all incoming settlement events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.add_event(event);
            }
        }

        // Update the state based on the current screen
        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }
        terminal.draw(|f| render(f, &app))?;

        // Handle splash-to-login transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.current_screen = Screen::Login;
                continue;
            }
        }

        // Poll for key events
        if event::poll(timing::event_poll_interval())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // An open picker consumes every key, including Esc.
                if app.picker.is_some() {
                    app.handle_picker_key(key.code);
                    continue;
                }

                // Handle exit events
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    return Ok(());
                }

                match &mut app.current_screen {
                    Screen::Splash => {
                        // Any key press will skip the splash screen
                        app.current_screen = Screen::Login;
                    }
                    Screen::Login => {
                        if key.code == KeyCode::Enter {
                            app.login();
                        }
                    }
                    Screen::Dashboard(_) => app.handle_dashboard_key(key.code),
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match &app.current_screen {
        Screen::Splash => render_splash(f),
        Screen::Login => render_login(f, &app.staff_name),
        Screen::Dashboard(state) => {
            render_dashboard(f, state);
            if let Some((_, picker)) = &app.picker {
                render_picker(f, picker);
            }
        }
    }
}
