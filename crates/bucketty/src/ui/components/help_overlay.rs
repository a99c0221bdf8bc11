use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ui::Component;

const OVERLAY_WIDTH_PERCENT: u16 = 60;
const OVERLAY_HEIGHT_PERCENT: u16 = 60;
const MIN_OVERLAY_WIDTH: u16 = 44;
const MIN_OVERLAY_HEIGHT: u16 = 10;
const SCROLL_X_OFFSET: u16 = 0;

/// Every binding the app understands, in display order.
const BINDINGS: &[(&str, &str)] = &[
    ("j/k", "Move selection"),
    ("h/l", "Collapse / expand folder"),
    ("Enter", "Open folder or editable file"),
    ("u", "Upload a file"),
    ("n", "Create a top-level folder"),
    ("d", "Delete the selected file"),
    ("e", "Edit the selected file"),
    ("v", "List versions of the selected file"),
    ("s", "Download the selected file"),
    ("r", "Refresh the listing"),
    ("g", "Open the activity log"),
    ("Ctrl+S", "Save while editing"),
    ("Esc", "Dismiss a prompt or overlay"),
    ("q", "Quit"),
];

/// Centered popup overlay listing the keybinding reference.
pub struct HelpOverlay {
    scroll_offset: u16,
}

impl HelpOverlay {
    /// Creates a help overlay at the given scroll position.
    pub fn new(scroll_offset: u16) -> Self {
        Self { scroll_offset }
    }
}

impl Component for HelpOverlay {
    fn render(&self, f: &mut Frame, area: Rect) {
        let popup_area = centered_rect(area);

        f.render_widget(Clear, popup_area);

        let key_width = BINDINGS.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

        let mut lines: Vec<Line<'_>> = Vec::with_capacity(BINDINGS.len() + 3);
        lines.push(Line::from(""));

        for (key, description) in BINDINGS {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{key:>key_width$}"),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(": ", Style::default().fg(Color::White)),
                Span::styled(*description, Style::default().fg(Color::White)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Press ? / q / Esc to close",
            Style::default().fg(Color::DarkGray),
        )));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(Span::styled(" Help ", Style::default().fg(Color::Cyan))),
            )
            .scroll((self.scroll_offset, SCROLL_X_OFFSET));

        f.render_widget(paragraph, popup_area);
    }
}

/// Computes a centered rectangle within the given `area`.
fn centered_rect(area: Rect) -> Rect {
    let popup_width = (area.width * OVERLAY_WIDTH_PERCENT / 100).max(MIN_OVERLAY_WIDTH);
    let popup_height = (area.height * OVERLAY_HEIGHT_PERCENT / 100).max(MIN_OVERLAY_HEIGHT);

    let width = popup_width.min(area.width);
    let height = popup_height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width, height)
}
