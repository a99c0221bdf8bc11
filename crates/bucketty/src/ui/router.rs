use ratatui::Frame;
use ratatui::layout::Rect;

use crate::app::browser::BrowserState;
use crate::app::status::StatusBoard;
use crate::ui::state::app_mode::AppMode;
use crate::ui::{Page, RenderContext, overlays, pages};

/// Shared borrowed data required to render the browser background.
pub(crate) struct BrowserBackgroundRenderContext<'a> {
    pub(crate) browser: &'a mut BrowserState,
    pub(crate) statuses: &'a StatusBoard,
}

/// Shared mutable routing data reused across app modes in `route_frame`.
struct RouteSharedContext<'a> {
    browser: &'a mut BrowserState,
    statuses: &'a StatusBoard,
}

impl RouteSharedContext<'_> {
    /// Creates a browser-background context for overlays that render on top
    /// of the tree content.
    fn browser_background(&mut self) -> BrowserBackgroundRenderContext<'_> {
        BrowserBackgroundRenderContext {
            browser: self.browser,
            statuses: self.statuses,
        }
    }
}

/// Routes the content-area render path by active `AppMode`.
pub(crate) fn route_frame(f: &mut Frame, area: Rect, context: RenderContext<'_>) {
    let RenderContext {
        browser,
        edit,
        folders,
        mode,
        statuses,
        ..
    } = context;

    let mut shared = RouteSharedContext { browser, statuses };

    match mode {
        AppMode::Browse => render_browser_background(f, area, shared.browser_background()),
        AppMode::ConfirmDelete { .. } | AppMode::ConfirmRestore { .. } => {
            overlays::render_confirmation_overlay(f, area, mode, shared.browser_background());
        }
        AppMode::CreateFolder { input } => {
            overlays::render_create_folder_overlay(f, area, shared.browser_background(), input);
        }
        AppMode::Upload {
            folder_index,
            input,
        } => overlays::render_upload_overlay(
            f,
            area,
            shared.browser_background(),
            folders,
            input,
            *folder_index,
        ),
        AppMode::Versions {
            key,
            records,
            selected,
        } => overlays::render_versions_overlay(
            f,
            area,
            shared.browser_background(),
            key,
            records.as_deref(),
            *selected,
        ),
        AppMode::Help { scroll_offset } => {
            overlays::render_help(f, area, *scroll_offset, shared.browser_background());
        }
        AppMode::Edit => match edit {
            Some(edit) => {
                pages::editor::EditorPage::new(edit, statuses.edit.as_ref()).render(f, area);
            }
            None => render_browser_background(f, area, shared.browser_background()),
        },
        AppMode::Logs {
            content,
            scroll_offset,
        } => {
            pages::logs::LogsPage::new(content.as_deref(), *scroll_offset).render(f, area);
        }
    }
}

/// Renders the file tree page that sits under every overlay.
pub(crate) fn render_browser_background(
    f: &mut Frame,
    content_area: Rect,
    context: BrowserBackgroundRenderContext<'_>,
) {
    let BrowserBackgroundRenderContext { browser, statuses } = context;

    pages::browser::BrowserPage::new(browser, statuses).render(f, content_area);
}
