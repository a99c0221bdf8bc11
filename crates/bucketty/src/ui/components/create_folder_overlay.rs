use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::status::StatusMessage;
use crate::domain::input::InputState;
use crate::ui::Component;
use crate::ui::layout::{calculate_input_height, compute_input_layout};
use crate::ui::util::status_line;

const MIN_OVERLAY_WIDTH: u16 = 40;
const OVERLAY_WIDTH_PERCENT: u16 = 50;
// blank separator + status + hint
const EXTRA_ROWS: u16 = 3;

/// Centered prompt for naming a new top-level folder.
///
/// Validation and creation results are shown inline under the input.
pub struct CreateFolderOverlay<'a> {
    input: &'a InputState,
    status: Option<&'a StatusMessage>,
}

impl<'a> CreateFolderOverlay<'a> {
    pub fn new(input: &'a InputState, status: Option<&'a StatusMessage>) -> Self {
        Self { input, status }
    }
}

impl Component for CreateFolderOverlay<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let width = (area.width * OVERLAY_WIDTH_PERCENT / 100)
            .max(MIN_OVERLAY_WIDTH)
            .min(area.width);
        let text = self.input.text();
        let height = calculate_input_height(width, text)
            .saturating_add(EXTRA_ROWS)
            .min(area.height);
        let popup_area = Rect::new(
            area.x + (area.width.saturating_sub(width)) / 2,
            area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        );

        let (mut lines, cursor_x, cursor_y) = compute_input_layout(text, width, self.input.cursor);
        lines.push(Line::from(""));
        lines.push(match self.status {
            Some(status) => status_line(status),
            None => Line::from(""),
        });
        lines.push(Line::from(Span::styled(
            " Enter: create | Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )));

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(Span::styled(
                    " New Folder ",
                    Style::default().fg(Color::Yellow),
                )),
        );

        f.render_widget(Clear, popup_area);
        f.render_widget(paragraph, popup_area);
        f.set_cursor_position((
            popup_area.x.saturating_add(1).saturating_add(cursor_x),
            popup_area.y.saturating_add(1).saturating_add(cursor_y),
        ));
    }
}
