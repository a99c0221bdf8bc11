use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

use crate::api::types::VersionRecord;
use crate::domain::file;
use crate::ui::Component;
use crate::ui::icon::Icon;
use crate::ui::util::{format_timestamp, truncate_with_ellipsis};

const MIN_OVERLAY_WIDTH: u16 = 60;
const OVERLAY_WIDTH_PERCENT: u16 = 70;
// borders + blank separator + hint
const EXTRA_ROWS: u16 = 4;

/// Display columns reserved for the backend version identifier.
const VERSION_ID_WIDTH: usize = 16;

/// Centered list of recorded versions for one object.
///
/// `records` is `None` while the fetch is in flight; an empty slice is a
/// valid response and renders its own message instead of an error.
pub struct VersionsOverlay<'a> {
    key: &'a str,
    records: Option<&'a [VersionRecord]>,
    selected: usize,
}

impl<'a> VersionsOverlay<'a> {
    pub fn new(key: &'a str, records: Option<&'a [VersionRecord]>, selected: usize) -> Self {
        Self {
            key,
            records,
            selected,
        }
    }

    fn title(&self) -> String {
        match self.records {
            None => format!(
                " Versions — {} {} ",
                file::file_name(self.key),
                Icon::current_spinner()
            ),
            Some(_) => format!(" Versions — {} ", file::file_name(self.key)),
        }
    }

    fn row_text(record: &VersionRecord) -> String {
        let marker = if record.is_latest { "Latest " } else { "" };

        format!(
            "{marker}VersionId: {} | Size: {} | Modified: {}",
            truncate_with_ellipsis(&record.version_id, VERSION_ID_WIDTH),
            record.size,
            format_timestamp(&record.last_modified),
        )
    }
}

impl Component for VersionsOverlay<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let width = (area.width * OVERLAY_WIDTH_PERCENT / 100)
            .max(MIN_OVERLAY_WIDTH)
            .min(area.width);
        let row_count = match self.records {
            None => 1,
            Some(records) => records.len().max(1),
        };
        let height = u16::try_from(row_count)
            .unwrap_or(u16::MAX)
            .saturating_add(EXTRA_ROWS)
            .min(area.height);
        let popup_area = Rect::new(
            area.x + (area.width.saturating_sub(width)) / 2,
            area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(Span::styled(
                self.title(),
                Style::default().fg(Color::Yellow),
            ));
        let inner = block.inner(popup_area);

        f.render_widget(Clear, popup_area);
        f.render_widget(block, popup_area);

        let chunks = Layout::default()
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);
        let list_area = chunks[0];
        let hint_area = chunks[1];

        match self.records {
            None => {
                let loading = Paragraph::new(" Loading versions...")
                    .style(Style::default().fg(Color::DarkGray));
                f.render_widget(loading, list_area);
            }
            Some([]) => {
                let empty = Paragraph::new(" No versions found.")
                    .style(Style::default().fg(Color::DarkGray));
                f.render_widget(empty, list_area);
            }
            Some(records) => {
                let items: Vec<ListItem<'static>> = records
                    .iter()
                    .map(|record| {
                        let item = ListItem::new(Self::row_text(record));
                        if record.is_latest {
                            item.style(Style::default().fg(Color::Green))
                        } else {
                            item
                        }
                    })
                    .collect();

                let list = List::new(items)
                    .highlight_style(
                        Style::default()
                            .bg(Color::DarkGray)
                            .add_modifier(Modifier::BOLD),
                    )
                    .highlight_symbol(">> ");

                let mut list_state = ListState::default();
                list_state.select(Some(self.selected.min(records.len() - 1)));
                f.render_stateful_widget(list, list_area, &mut list_state);
            }
        }

        let hint = Paragraph::new(" Enter: restore | s: download | j/k: nav | Esc: close")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(hint, hint_area);
    }
}
