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

const MIN_OVERLAY_WIDTH: u16 = 48;
const OVERLAY_WIDTH_PERCENT: u16 = 60;
// blank separator + folder selector + status + hint
const EXTRA_ROWS: u16 = 4;

/// Label shown while the destination selector points at the bucket root.
const ROOT_FOLDER_LABEL: &str = "-- Select folder --";

/// Centered prompt for a local file path plus a destination folder.
///
/// Selector index `0` targets the bucket root; index `n` targets the
/// `n`-th known folder. Upload results are shown inline under the input.
pub struct UploadOverlay<'a> {
    folder_index: usize,
    folders: &'a [String],
    input: &'a InputState,
    status: Option<&'a StatusMessage>,
}

impl<'a> UploadOverlay<'a> {
    pub fn new(
        input: &'a InputState,
        folders: &'a [String],
        folder_index: usize,
        status: Option<&'a StatusMessage>,
    ) -> Self {
        Self {
            folder_index,
            folders,
            input,
            status,
        }
    }

    fn folder_label(&self) -> &str {
        match self.folder_index {
            0 => ROOT_FOLDER_LABEL,
            index => self
                .folders
                .get(index - 1)
                .map_or(ROOT_FOLDER_LABEL, String::as_str),
        }
    }
}

impl Component for UploadOverlay<'_> {
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
        lines.push(Line::from(vec![
            Span::styled(" Folder: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                self.folder_label().to_string(),
                Style::default().fg(Color::Cyan),
            ),
        ]));
        lines.push(match self.status {
            Some(status) => status_line(status),
            None => Line::from(""),
        });
        lines.push(Line::from(Span::styled(
            " Enter: upload | ↑/↓: folder | Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )));

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(Span::styled(
                    " Upload File ",
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
