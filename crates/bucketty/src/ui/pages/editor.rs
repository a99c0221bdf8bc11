use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::EditSession;
use crate::app::status::StatusMessage;
use crate::ui::Page;
use crate::ui::icon::Icon;
use crate::ui::layout::{calculate_input_viewport, compute_text_layout};
use crate::ui::util::status_line;

/// Full-screen text editor for an opened object.
///
/// While a save request is in flight the title shows a spinner and the
/// cursor stays hidden, so the frozen input reads as progress.
pub struct EditorPage<'a> {
    edit: &'a EditSession,
    status: Option<&'a StatusMessage>,
}

impl<'a> EditorPage<'a> {
    pub fn new(edit: &'a EditSession, status: Option<&'a StatusMessage>) -> Self {
        Self { edit, status }
    }

    fn title(&self) -> String {
        if self.edit.saving {
            format!(" Edit — {} {} ", self.edit.key, Icon::current_spinner())
        } else {
            format!(" Edit — {} ", self.edit.key)
        }
    }
}

impl Page for EditorPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let status_height = u16::from(self.status.is_some());
        let chunks = Layout::default()
            .constraints([
                Constraint::Min(0),
                Constraint::Length(status_height),
                Constraint::Length(1),
            ])
            .margin(1)
            .split(area);

        let editor_area = chunks[0];
        let status_area = chunks[1];
        let footer_area = chunks[2];

        let buffer = &self.edit.buffer;
        let (lines, cursor_x, cursor_y) =
            compute_text_layout(buffer.text(), editor_area.width, buffer.cursor);
        let viewport_height = editor_area.height.saturating_sub(2);
        let (scroll_offset, cursor_row) =
            calculate_input_viewport(lines.len(), cursor_y, viewport_height);

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(self.title()))
            .scroll((scroll_offset, 0));
        f.render_widget(paragraph, editor_area);

        if !self.edit.saving {
            f.set_cursor_position((
                editor_area.x.saturating_add(1).saturating_add(cursor_x),
                editor_area.y.saturating_add(1).saturating_add(cursor_row),
            ));
        }

        if let Some(status) = self.status {
            f.render_widget(Paragraph::new(status_line(status)), status_area);
        }

        let help_message =
            Paragraph::new("Ctrl+S: save | Esc: cancel").style(Style::default().fg(Color::Gray));
        f.render_widget(help_message, footer_area);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Position;

    use super::*;
    use crate::app::status::StatusKind;
    use crate::domain::input::InputState;

    fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn session(text: &str, saving: bool) -> EditSession {
        EditSession {
            buffer: InputState::with_text(text.to_string()),
            key: "notes.txt".to_string(),
            saving,
        }
    }

    fn draw(edit: &EditSession, status: Option<&StatusMessage>) -> (String, Position) {
        let backend = TestBackend::new(60, 15);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        terminal
            .draw(|f| {
                let area = f.area();
                EditorPage::new(edit, status).render(f, area);
            })
            .expect("failed to draw");
        let position = terminal
            .get_cursor_position()
            .expect("failed to read cursor");

        (buffer_text(terminal.backend().buffer()), position)
    }

    #[test]
    fn test_editor_page_shows_content_key_and_bindings() {
        // Arrange
        let edit = session("hello world", false);

        // Act
        let (text, _) = draw(&edit, None);

        // Assert
        assert!(text.contains("Edit — notes.txt"));
        assert!(text.contains("hello world"));
        assert!(text.contains("Ctrl+S: save | Esc: cancel"));
    }

    #[test]
    fn test_editor_page_places_cursor_after_text() {
        // Arrange
        let edit = session("hi", false);

        // Act — margin(1) puts the block at (1, 1); text starts inside the
        // border at (2, 2) and the cursor sits after the two typed chars
        let (_, position) = draw(&edit, None);

        // Assert
        assert_eq!(position, Position::new(4, 2));
    }

    #[test]
    fn test_editor_page_shows_save_status() {
        // Arrange
        let edit = session("hello", false);
        let status = StatusMessage::new(
            "Saved!".to_string(),
            StatusKind::Info,
            Duration::from_secs(1),
        );

        // Act
        let (text, _) = draw(&edit, Some(&status));

        // Assert
        assert!(text.contains("Saved!"));
    }

    #[test]
    fn test_editor_page_spins_and_parks_cursor_while_saving() {
        // Arrange
        let edit = session("hello", true);

        // Act
        let (text, position) = draw(&edit, None);

        // Assert — no cursor was set, so the backend keeps its initial one
        let has_spinner = (0..10).any(|frame| text.contains(Icon::Spinner(frame).as_str()));
        assert!(has_spinner);
        assert_eq!(position, Position::new(0, 0));
    }
}
