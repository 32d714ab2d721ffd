//! Login screen module

use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Renders the login screen with a simple message and instructions.
pub fn render_login(f: &mut Frame, staff_name: &str) {
    let size = f.area();

    let block = Block::default()
        .title("Login")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let text = format!(
        "Signed-in staff member: {}\n\nPress Enter to open the portal\nPress Esc to exit",
        staff_name
    );
    let paragraph = Paragraph::new(text).block(block);

    f.render_widget(paragraph, size);
}
