use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::app::EditSession;
use crate::app::browser::BrowserState;
use crate::app::status::StatusBoard;
use crate::ui::state::app_mode::AppMode;
use crate::ui::{components, router};

/// A trait for UI pages that enforces a standard rendering interface.
pub trait Page {
    /// Renders a page in the provided frame and area.
    fn render(&mut self, f: &mut Frame, area: Rect);
}

/// A trait for UI components that enforces a standard rendering interface.
pub trait Component {
    /// Renders a component in the provided frame and area.
    fn render(&self, f: &mut Frame, area: Rect);
}

/// Borrowed data required to draw a single UI frame.
pub struct RenderContext<'a> {
    pub browser: &'a mut BrowserState,
    pub edit: Option<&'a EditSession>,
    pub folders: &'a [String],
    pub mode: &'a AppMode,
    pub server_url: &'a str,
    pub statuses: &'a StatusBoard,
    pub versioning: Option<&'a str>,
}

/// Renders a complete frame including status bar, content area, and footer.
pub fn render(f: &mut Frame, context: RenderContext<'_>) {
    let area = f.area();
    let outer_chunks = Layout::default()
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let status_bar_area = outer_chunks[0];
    let content_area = outer_chunks[1];
    let footer_bar_area = outer_chunks[2];

    components::status_bar::StatusBar::new(context.versioning.map(ToString::to_string))
        .render(f, status_bar_area);
    components::footer_bar::FooterBar::new(context.server_url.to_string())
        .render(f, footer_bar_area);

    router::route_frame(f, content_area, context);
}
