//! Tab bar component

use super::super::state::{DashboardState, Tab};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Tabs};

pub fn render_tab_bar(f: &mut Frame, area: Rect, state: &DashboardState) {
    let titles: Vec<Line> = [Tab::ShiftEntry, Tab::ShiftHistory]
        .iter()
        .map(|tab| Line::from(format!(" {} ", tab)))
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.active_tab.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::BOTTOM));

    f.render_widget(tabs, area);
}
