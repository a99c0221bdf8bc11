use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::Component;

const HELP_HINT: &str = "?: help ";

/// Bottom bar showing the backend address and the help hint.
pub struct FooterBar {
    server_url: String,
}

impl FooterBar {
    pub fn new(server_url: String) -> Self {
        Self { server_url }
    }
}

impl Component for FooterBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let left_text = Span::styled(
            format!(" Server: {}", self.server_url),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::DIM),
        );
        let left_width = left_text.width();
        let total_width = area.width as usize;

        let mut spans = vec![left_text];
        if left_width + HELP_HINT.len() < total_width {
            let padding = " ".repeat(total_width - left_width - HELP_HINT.len());
            spans.push(Span::raw(padding));
            spans.push(Span::styled(HELP_HINT, Style::default().fg(Color::Gray)));
        }

        let footer = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(Color::DarkGray).fg(Color::White));

        f.render_widget(footer, area);
    }
}
