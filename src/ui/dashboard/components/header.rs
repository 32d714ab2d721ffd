//! Dashboard header component
//!
//! Renders the title bar, the refresh-status line, and any active notice.

use super::super::state::{DashboardState, NoticeKind, UpdatePhase};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];

/// Render the header with title, staff greeting and update status.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title_text = format!(
        "STAFF PORTAL v{} - Welcome, {}",
        version,
        first_name(&state.staff_name)
    );

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Notice takes priority over the ambient status line.
    let (status_text, status_color) = if let Some(notice) = &state.notice {
        let color = match notice.kind {
            NoticeKind::Success => Color::LightGreen,
            NoticeKind::Warning => Color::LightYellow,
            NoticeKind::Error => Color::LightRed,
        };
        (notice.text.clone(), color)
    } else if state.is_updating() {
        let frame = SPINNER_FRAMES[state.tick % SPINNER_FRAMES.len()];
        let verb = match state.update_phase() {
            UpdatePhase::ManualUpdating => "Refreshing shift statuses",
            _ => "Updating shift statuses on load",
        };
        (format!("{} {}...", frame, verb), Color::LightYellow)
    } else if let Some(updated) = state.last_update_time {
        (
            format!("Statuses last updated {}", updated.format("%H:%M:%S")),
            Color::DarkGray,
        )
    } else {
        ("Statuses not refreshed yet".to_string(), Color::DarkGray)
    };

    let status = Paragraph::new(status_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(status_color));
    f.render_widget(status, header_chunks[1]);
}

fn first_name(full: &str) -> &str {
    full.split_whitespace().next().unwrap_or(full)
}
