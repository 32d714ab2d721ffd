//! Shift entry view
//!
//! Hosts the start/end time fields edited through the time picker. The
//! view is keyed by the dashboard's generation counter and re-created
//! whenever that key moves, discarding any half-entered times.

use crate::timefmt::format_time_12_hour;
use crate::ui::dashboard::state::DashboardState;

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Per-activation state of the shift entry view.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ShiftEntryState {
    /// The generation this view was mounted with.
    pub generation: u64,
    /// Shift date, fixed to today.
    pub date: String,
    /// Start time as 24-hour "HH:MM", once picked.
    pub start: Option<String>,
    /// End time as 24-hour "HH:MM", once picked.
    pub end: Option<String>,
}

impl ShiftEntryState {
    pub fn new(generation: u64) -> Self {
        Self {
            generation,
            date: Local::now().format("%Y-%m-%d").to_string(),
            start: None,
            end: None,
        }
    }

    /// Both times picked; the shift can be logged.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

pub fn render_shift_entry(f: &mut Frame, area: Rect, state: &DashboardState) {
    let view = &state.entry_view;

    let block = Block::default()
        .title(format!(
            " Shift Time Entry {} (refresh #{}) ",
            view.date, view.generation
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .margin(1)
        .split(inner);

    f.render_widget(time_field("Start time", view.start.as_deref()), chunks[0]);
    f.render_widget(time_field("End time", view.end.as_deref()), chunks[1]);

    let status = if view.is_complete() {
        Line::from(Span::styled(
            "Press Enter to log this shift",
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            "Pick both times to log this shift",
            Style::default().fg(Color::DarkGray),
        ))
    };
    f.render_widget(Paragraph::new(status), chunks[2]);

    let hints = Paragraph::new("s: pick start   e: pick end   Enter: log shift")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hints, chunks[3]);
}

fn time_field<'a>(label: &'a str, value: Option<&'a str>) -> Paragraph<'a> {
    let rendered = match value {
        Some(v) => Span::styled(
            format_time_12_hour(v),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled("--:-- --", Style::default().fg(Color::DarkGray)),
    };
    Paragraph::new(Line::from(vec![
        Span::styled(format!("{:<12}", label), Style::default().fg(Color::Cyan)),
        rendered,
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_state_completeness() {
        let mut view = ShiftEntryState::new(3);
        assert_eq!(view.generation, 3);
        assert!(!view.is_complete());

        view.start = Some("09:00".to_string());
        assert!(!view.is_complete());

        view.end = Some("17:30".to_string());
        assert!(view.is_complete());
    }
}
