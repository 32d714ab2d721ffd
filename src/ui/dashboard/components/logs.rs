//! Activity log panel
//!
//! Shows the most recent portal events (refreshes, settlements) with
//! compact timestamps.

use super::super::state::DashboardState;
use super::super::utils::{format_compact_timestamp, get_source_color};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_logs_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title(" Activity ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let visible = inner.height as usize;
    let lines: Vec<Line> = state
        .activity_logs
        .iter()
        .rev()
        .take(visible)
        .map(|event| {
            Line::from(vec![
                Span::styled(
                    format!("{} ", format_compact_timestamp(&event.timestamp)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("[{}] ", event.source),
                    Style::default().fg(get_source_color(&event.source)),
                ),
                Span::raw(event.msg.clone()),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}
