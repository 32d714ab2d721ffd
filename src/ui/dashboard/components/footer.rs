//! Dashboard footer component

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Paragraph;

pub fn render_footer(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Length(30)])
        .split(area);

    let hints = Paragraph::new("Tab/1/2: switch view   r: refresh status   q/Esc: quit")
        .alignment(Alignment::Left)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hints, chunks[0]);

    let uptime = state.start_time.elapsed().as_secs();
    let session = Paragraph::new(format!(
        "{} | up {:02}:{:02}:{:02}",
        state.environment,
        uptime / 3600,
        (uptime % 3600) / 60,
        uptime % 60
    ))
    .alignment(Alignment::Right)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(session, chunks[1]);
}
