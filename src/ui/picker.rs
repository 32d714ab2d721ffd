//! Time picker component
//!
//! A modal picker with two scrollable columns (hour 1-12, minute 00-59)
//! and an AM/PM toggle. Selection follows the host scroll model: each
//! column carries a scroll offset in px, and the selected value is whatever
//! item that offset rounds to. The picker emits exactly one of
//! [`PickerOutcome::Confirmed`] or [`PickerOutcome::Cancelled`] per
//! activation.

use crate::consts::portal_consts::picker::{ITEM_HEIGHT_PX, VISIBLE_ROWS};
use crate::timefmt::{
    Meridiem, TimeOfDay, offset_for_index, parse_twenty_four_hour, value_at_offset,
};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

/// Which scroll column currently has keyboard focus.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PickerColumn {
    Hour,
    Minute,
}

/// How a picker activation ended.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum PickerOutcome {
    /// The staff member confirmed; carries the 24-hour "HH:MM" string.
    Confirmed(String),
    Cancelled,
}

/// State owned by a single open picker. Created when the picker opens,
/// read once on confirm, discarded afterwards.
#[derive(Debug, Clone)]
pub struct PickerState {
    pub title: String,
    selected: TimeOfDay,
    hour_scroll_px: f64,
    minute_scroll_px: f64,
    pub focused: PickerColumn,
}

impl PickerState {
    /// Opens a picker seeded from a 24-hour "HH:MM" string. Unparseable
    /// input falls back to 12:00 AM, matching the picker's defaults.
    pub fn new(title: impl Into<String>, initial: &str) -> Self {
        let selected = parse_twenty_four_hour(initial).unwrap_or_default();
        let mut picker = Self {
            title: title.into(),
            selected,
            hour_scroll_px: 0.0,
            minute_scroll_px: 0.0,
            focused: PickerColumn::Hour,
        };
        // Explicit set-scroll commands, issued once after initialization.
        let (hour_px, minute_px) = picker.initial_scroll_offsets();
        picker.hour_scroll_px = hour_px;
        picker.minute_scroll_px = minute_px;
        picker
    }

    /// The scroll offsets that align each column with the initial selection.
    pub fn initial_scroll_offsets(&self) -> (f64, f64) {
        (
            offset_for_index(self.selected.hour12 as usize - 1, ITEM_HEIGHT_PX),
            offset_for_index(self.selected.minute as usize, ITEM_HEIGHT_PX),
        )
    }

    pub fn selected(&self) -> TimeOfDay {
        self.selected
    }

    /// The large display readout, e.g. "3:05 PM".
    pub fn display_time(&self) -> String {
        self.selected.to_string()
    }

    fn column_items(column: PickerColumn) -> Vec<u8> {
        match column {
            PickerColumn::Hour => (1..=12).collect(),
            PickerColumn::Minute => (0..60).collect(),
        }
    }

    fn scroll_px_mut(&mut self, column: PickerColumn) -> &mut f64 {
        match column {
            PickerColumn::Hour => &mut self.hour_scroll_px,
            PickerColumn::Minute => &mut self.minute_scroll_px,
        }
    }

    fn scroll_px(&self, column: PickerColumn) -> f64 {
        match column {
            PickerColumn::Hour => self.hour_scroll_px,
            PickerColumn::Minute => self.minute_scroll_px,
        }
    }

    /// Handles a raw scroll event on a column. Out-of-range offsets are
    /// ignored and the prior selection is kept; re-delivering the same
    /// offset is a no-op.
    pub fn scroll_to(&mut self, column: PickerColumn, offset_px: f64) {
        *self.scroll_px_mut(column) = offset_px;

        let items = Self::column_items(column);
        let Some(value) = value_at_offset(offset_px, ITEM_HEIGHT_PX, &items) else {
            return;
        };
        match column {
            PickerColumn::Hour if value != self.selected.hour12 => self.selected.hour12 = value,
            PickerColumn::Minute if value != self.selected.minute => self.selected.minute = value,
            _ => {}
        }
    }

    /// Moves a column by whole items (keyboard scrolling), clamped to the
    /// column's extent.
    pub fn scroll_by_items(&mut self, column: PickerColumn, delta: i32) {
        let items = Self::column_items(column);
        let max_px = offset_for_index(items.len() - 1, ITEM_HEIGHT_PX);
        let next = (self.scroll_px(column) + delta as f64 * ITEM_HEIGHT_PX).clamp(0.0, max_px);
        self.scroll_to(column, next);
    }

    /// Direct selection (the click equivalent); realigns the column's
    /// scroll offset with the chosen item.
    pub fn select_hour(&mut self, hour12: u8) {
        if (1..=12).contains(&hour12) {
            self.selected.hour12 = hour12;
            self.hour_scroll_px = offset_for_index(hour12 as usize - 1, ITEM_HEIGHT_PX);
        }
    }

    pub fn select_minute(&mut self, minute: u8) {
        if minute < 60 {
            self.selected.minute = minute;
            self.minute_scroll_px = offset_for_index(minute as usize, ITEM_HEIGHT_PX);
        }
    }

    pub fn set_meridiem(&mut self, meridiem: Meridiem) {
        self.selected.meridiem = meridiem;
    }

    pub fn toggle_meridiem(&mut self) {
        self.selected.meridiem = match self.selected.meridiem {
            Meridiem::Am => Meridiem::Pm,
            Meridiem::Pm => Meridiem::Am,
        };
    }

    pub fn focus_next_column(&mut self) {
        self.focused = match self.focused {
            PickerColumn::Hour => PickerColumn::Minute,
            PickerColumn::Minute => PickerColumn::Hour,
        };
    }

    /// Confirms the picker, producing the 24-hour "HH:MM" string.
    pub fn confirm(self) -> PickerOutcome {
        PickerOutcome::Confirmed(self.selected.to_twenty_four_hour())
    }

    pub fn cancel(self) -> PickerOutcome {
        PickerOutcome::Cancelled
    }
}

/// Renders the picker as a centered modal over the dashboard.
pub fn render_picker(f: &mut Frame, picker: &PickerState) {
    let area = centered_rect(40, VISIBLE_ROWS + 11, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(picker.title.clone())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(VISIBLE_ROWS),
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .split(inner);

    // Large readout of the current selection
    let readout = Paragraph::new(picker.display_time())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(readout, chunks[0]);

    // The two scroll columns
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_column(f, columns[0], picker, PickerColumn::Hour);
    render_column(f, columns[1], picker, PickerColumn::Minute);

    // AM/PM toggle
    let meridiem = picker.selected().meridiem;
    let toggle = Line::from(vec![
        Span::styled(" AM ", meridiem_style(meridiem == Meridiem::Am)),
        Span::raw("  "),
        Span::styled(" PM ", meridiem_style(meridiem == Meridiem::Pm)),
    ]);
    f.render_widget(
        Paragraph::new(toggle).alignment(Alignment::Center),
        chunks[2],
    );

    let hints = Paragraph::new("↑/↓ scroll  ←/→ column  a/p AM/PM  Enter done  Esc cancel")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hints, chunks[3]);
}

fn meridiem_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn render_column(f: &mut Frame, area: Rect, picker: &PickerState, column: PickerColumn) {
    let items = PickerState::column_items(column);
    let selected_index = match column {
        PickerColumn::Hour => picker.selected().hour12 as usize - 1,
        PickerColumn::Minute => picker.selected().minute as usize,
    };

    // Window the list so the selected item sits on the center row.
    let rows = area.height as usize;
    let half = rows / 2;
    let lines: Vec<Line> = (0..rows)
        .map(|row| {
            let slot = selected_index as isize + row as isize - half as isize;
            if slot < 0 || slot >= items.len() as isize {
                return Line::from("");
            }
            let value = items[slot as usize];
            let text = match column {
                PickerColumn::Hour => format!("{}", value),
                PickerColumn::Minute => format!("{:02}", value),
            };
            if slot as usize == selected_index {
                let marker = if picker.focused == column { "▶" } else { " " };
                Line::from(Span::styled(
                    format!("{} {} ", marker, text),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
            }
        })
        .collect();

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Center a fixed-size rect inside `r`.
fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + r.width.saturating_sub(width) / 2;
    let y = r.y + r.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(r.width),
        height: height.min(r.height),
    }
}
