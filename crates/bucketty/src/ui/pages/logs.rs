use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::Page;
use crate::ui::icon::Icon;

/// Scrollable view of the backend activity log.
///
/// `content` is `None` while the fetch is in flight; a failed fetch puts
/// the error text here so it renders in place of the log.
pub struct LogsPage<'a> {
    content: Option<&'a str>,
    scroll_offset: u16,
}

impl<'a> LogsPage<'a> {
    pub fn new(content: Option<&'a str>, scroll_offset: u16) -> Self {
        Self {
            content,
            scroll_offset,
        }
    }

    fn title(&self) -> String {
        match self.content {
            None => format!(" Activity Log {} ", Icon::current_spinner()),
            Some(_) => " Activity Log ".to_string(),
        }
    }
}

impl Page for LogsPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .margin(1)
            .split(area);

        let log_area = chunks[0];
        let footer_area = chunks[1];

        let lines: Vec<Line<'static>> = match self.content {
            None => vec![
                Line::from(""),
                Line::styled(" Loading...", Style::default().fg(Color::DarkGray)),
            ],
            Some(content) if content.trim().is_empty() => vec![
                Line::from(""),
                Line::styled(" No activity yet.", Style::default().fg(Color::DarkGray)),
            ],
            Some(content) => content
                .lines()
                .map(|line| Line::raw(line.to_string()))
                .collect(),
        };

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(self.title()))
            .scroll((self.scroll_offset, 0));
        f.render_widget(paragraph, log_area);

        let help_message = Paragraph::new("q: back | j/k: scroll | r: reload")
            .style(Style::default().fg(Color::Gray));
        f.render_widget(help_message, footer_area);
    }
}
