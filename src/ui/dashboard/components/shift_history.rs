//! Shift history view
//!
//! Lists the shifts logged during this session. Keyed by the dashboard's
//! generation counter: the list is re-read from the session records on
//! every refresh, so a bumped generation always shows fresh data.

use crate::timefmt::format_time_12_hour;
use crate::ui::dashboard::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_shift_history(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title(format!(
            " My Shift History (refresh #{}) ",
            state.refresh_generation()
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if state.shift_records.is_empty() {
        let empty = Paragraph::new("No shifts logged this session.")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, inner);
        return;
    }

    let visible = inner.height as usize;
    let lines: Vec<Line> = state
        .shift_records
        .iter()
        .rev()
        .take(visible)
        .map(|record| {
            Line::from(vec![
                Span::styled(
                    format!("{}  ", record.date),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!(
                        "{} - {}",
                        format_time_12_hour(&record.start),
                        format_time_12_hour(&record.end)
                    ),
                    Style::default().fg(Color::White),
                ),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}
