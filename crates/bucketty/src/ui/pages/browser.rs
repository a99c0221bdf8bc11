use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::app::browser::{BrowserState, ListingPhase};
use crate::app::status::StatusBoard;
use crate::ui::Page;
use crate::ui::icon::Icon;
use crate::ui::util::status_line;

const ROW_HIGHLIGHT_SYMBOL: &str = ">> ";
const INDENT_PER_LEVEL: &str = "  ";

/// File tree page renderer.
///
/// Occupies the content area under every overlay; transient status
/// messages render between the tree and the key hints.
pub struct BrowserPage<'a> {
    browser: &'a mut BrowserState,
    statuses: &'a StatusBoard,
}

impl<'a> BrowserPage<'a> {
    /// Creates a file tree page renderer.
    pub fn new(browser: &'a mut BrowserState, statuses: &'a StatusBoard) -> Self {
        Self { browser, statuses }
    }

    fn title(&self) -> String {
        match self.browser.phase {
            ListingPhase::Loading => format!(" Files {} ", Icon::current_spinner()),
            ListingPhase::Idle | ListingPhase::Rendered => " Files ".to_string(),
        }
    }

    fn empty_state_line(&self) -> Option<Line<'static>> {
        if let Some(error) = &self.browser.error {
            return Some(Line::styled(
                format!(" {error}"),
                Style::default().fg(Color::Red),
            ));
        }
        if !self.browser.rows.is_empty() {
            return None;
        }

        match self.browser.phase {
            ListingPhase::Loading => Some(Line::styled(
                format!(" {} Loading...", Icon::current_spinner()),
                Style::default().fg(Color::DarkGray),
            )),
            ListingPhase::Rendered => Some(Line::styled(
                " No files found.",
                Style::default().fg(Color::DarkGray),
            )),
            ListingPhase::Idle => None,
        }
    }

    fn footer_text(&self) -> String {
        let mut help_text = "q: quit | u: upload | n: new folder | r: refresh".to_string();
        if self
            .browser
            .selected_row()
            .is_some_and(|row| !row.is_folder)
        {
            help_text.push_str(" | d: delete | e: edit | v: versions | s: download");
        }
        help_text.push_str(" | g: log | Enter: open | j/k: nav | ?: help");

        help_text
    }
}

impl Page for BrowserPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let status_lines: Vec<Line<'static>> = self
            .statuses
            .active()
            .into_iter()
            .map(status_line)
            .collect();
        let status_height = u16::try_from(status_lines.len()).unwrap_or(u16::MAX);

        let chunks = Layout::default()
            .constraints([
                Constraint::Min(0),
                Constraint::Length(status_height),
                Constraint::Length(1),
            ])
            .margin(1)
            .split(area);

        let tree_area = chunks[0];
        let status_area = chunks[1];
        let footer_area = chunks[2];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.title());

        if let Some(line) = self.empty_state_line() {
            let message = Paragraph::new(vec![Line::from(""), line]).block(block);
            f.render_widget(message, tree_area);
        } else {
            let expanded = &self.browser.expanded;
            let items: Vec<ListItem<'static>> = self
                .browser
                .rows
                .iter()
                .map(|row| {
                    let icon = if row.is_folder {
                        if expanded.contains(&row.key) {
                            Icon::FolderOpen
                        } else {
                            Icon::FolderClosed
                        }
                    } else {
                        Icon::for_file(&row.key)
                    };
                    let indent = INDENT_PER_LEVEL.repeat(row.depth);

                    ListItem::new(format!("{indent}{icon} {}", row.name))
                })
                .collect();

            let list = List::new(items)
                .block(block)
                .highlight_style(
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol(ROW_HIGHLIGHT_SYMBOL);

            f.render_stateful_widget(list, tree_area, &mut self.browser.list_state);
        }

        if status_height > 0 {
            f.render_widget(Paragraph::new(status_lines), status_area);
        }

        let help_message =
            Paragraph::new(self.footer_text()).style(Style::default().fg(Color::Gray));
        f.render_widget(help_message, footer_area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::app::status::StatusKind;

    fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn draw(browser: &mut BrowserState, statuses: &StatusBoard) -> String {
        let backend = TestBackend::new(120, 20);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        terminal
            .draw(|f| {
                let area = f.area();
                BrowserPage::new(browser, statuses).render(f, area);
            })
            .expect("failed to draw");

        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_browser_page_renders_tree_rows_with_icons() {
        // Arrange
        let mut browser = BrowserState::new();
        browser.apply_listing(&["docs/readme.md".to_string(), "top.txt".to_string()]);
        let statuses = StatusBoard::default();

        // Act
        let text = draw(&mut browser, &statuses);

        // Assert
        assert!(text.contains(" Files "));
        assert!(text.contains("📁"));
        assert!(text.contains("docs"));
        assert!(text.contains("📑"));
        assert!(text.contains("top.txt"));
        assert!(text.contains(">>"));
    }

    #[test]
    fn test_browser_page_expanded_folder_shows_open_icon_and_children() {
        // Arrange
        let mut browser = BrowserState::new();
        browser.apply_listing(&["docs/readme.md".to_string()]);
        browser.toggle_selected_folder();
        let statuses = StatusBoard::default();

        // Act
        let text = draw(&mut browser, &statuses);

        // Assert
        assert!(text.contains("📂"));
        assert!(!text.contains("📁"));
        assert!(text.contains("readme.md"));
    }

    #[test]
    fn test_browser_page_shows_no_files_message() {
        // Arrange
        let mut browser = BrowserState::new();
        browser.apply_listing(&[]);
        let statuses = StatusBoard::default();

        // Act
        let text = draw(&mut browser, &statuses);

        // Assert
        assert!(text.contains("No files found."));
    }

    #[test]
    fn test_browser_page_shows_listing_error() {
        // Arrange
        let mut browser = BrowserState::new();
        browser.apply_listing_error("Error: connection refused".to_string());
        let statuses = StatusBoard::default();

        // Act
        let text = draw(&mut browser, &statuses);

        // Assert
        assert!(text.contains("Error: connection refused"));
    }

    #[test]
    fn test_browser_page_shows_active_status_messages() {
        // Arrange
        let mut browser = BrowserState::new();
        browser.apply_listing(&["top.txt".to_string()]);
        let mut statuses = StatusBoard::default();
        statuses.set_upload("Uploaded: top.txt".to_string(), StatusKind::Info);

        // Act
        let text = draw(&mut browser, &statuses);

        // Assert
        assert!(text.contains("Uploaded: top.txt"));
    }

    #[test]
    fn test_browser_page_footer_offers_file_actions_for_file_rows() {
        // Arrange — selection starts on the folder row, then moves to the file
        let mut browser = BrowserState::new();
        browser.apply_listing(&["docs/readme.md".to_string(), "top.txt".to_string()]);
        let statuses = StatusBoard::default();
        let folder_selected = draw(&mut browser, &statuses);
        browser.select_next();

        // Act
        let file_selected = draw(&mut browser, &statuses);

        // Assert
        assert!(!folder_selected.contains("d: delete"));
        assert!(file_selected.contains("d: delete"));
        assert!(file_selected.contains("v: versions"));
        assert!(file_selected.contains("s: download"));
    }
}
