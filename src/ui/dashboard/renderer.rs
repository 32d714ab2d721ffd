//! Dashboard main renderer

use super::components::{footer, header, logs, shift_entry, shift_history, tabs};
use super::state::{DashboardState, Tab};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Percentage(30),
            Constraint::Length(1),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    tabs::render_tab_bar(f, main_chunks[1], state);

    // The active child view, keyed by (tab, generation)
    match state.active_tab {
        Tab::ShiftEntry => shift_entry::render_shift_entry(f, main_chunks[2], state),
        Tab::ShiftHistory => shift_history::render_shift_history(f, main_chunks[2], state),
    }

    logs::render_logs_panel(f, main_chunks[3], state);
    footer::render_footer(f, main_chunks[4], state);
}
