use ratatui::Frame;
use ratatui::layout::Rect;

use crate::api::types::VersionRecord;
use crate::domain::input::InputState;
use crate::ui::router::{BrowserBackgroundRenderContext, render_browser_background};
use crate::ui::state::app_mode::AppMode;
use crate::ui::{Component, components};

/// Renders the delete or restore confirmation popup over its background.
///
/// The restore popup keeps the version overlay visible underneath so the
/// selected version stays in view.
pub(crate) fn render_confirmation_overlay(
    f: &mut Frame,
    area: Rect,
    mode: &AppMode,
    background: BrowserBackgroundRenderContext<'_>,
) {
    match mode {
        AppMode::ConfirmDelete { choice, key } => {
            render_browser_background(f, area, background);

            let message = format!("Delete {key}?");
            components::confirmation_overlay::ConfirmationOverlay::new("Confirm Delete", &message)
                .selected_yes(choice.is_yes())
                .render(f, area);
        }
        AppMode::ConfirmRestore {
            choice,
            key,
            records,
            selected,
            ..
        } => {
            render_versions_overlay(f, area, background, key, Some(records), *selected);

            components::confirmation_overlay::ConfirmationOverlay::new(
                "Confirm Restore",
                "Restore this version? This will overwrite the current file.",
            )
            .selected_yes(choice.is_yes())
            .render(f, area);
        }
        _ => unreachable!("only confirmation modes are routed here"),
    }
}

/// Renders the browser background and the folder-name prompt.
pub(crate) fn render_create_folder_overlay(
    f: &mut Frame,
    area: Rect,
    background: BrowserBackgroundRenderContext<'_>,
    input: &InputState,
) {
    let statuses = background.statuses;
    render_browser_background(f, area, background);

    components::create_folder_overlay::CreateFolderOverlay::new(input, statuses.folder.as_ref())
        .render(f, area);
}

/// Renders the browser background and the upload prompt.
pub(crate) fn render_upload_overlay(
    f: &mut Frame,
    area: Rect,
    background: BrowserBackgroundRenderContext<'_>,
    folders: &[String],
    input: &InputState,
    folder_index: usize,
) {
    let statuses = background.statuses;
    render_browser_background(f, area, background);

    components::upload_overlay::UploadOverlay::new(
        input,
        folders,
        folder_index,
        statuses.upload.as_ref(),
    )
    .render(f, area);
}

/// Renders the browser background and the version history overlay.
pub(crate) fn render_versions_overlay(
    f: &mut Frame,
    area: Rect,
    background: BrowserBackgroundRenderContext<'_>,
    key: &str,
    records: Option<&[VersionRecord]>,
    selected: usize,
) {
    render_browser_background(f, area, background);

    components::versions_overlay::VersionsOverlay::new(key, records, selected).render(f, area);
}

/// Renders the browser background and the keybinding reference overlay.
pub(crate) fn render_help(
    f: &mut Frame,
    area: Rect,
    scroll_offset: u16,
    background: BrowserBackgroundRenderContext<'_>,
) {
    render_browser_background(f, area, background);

    components::help_overlay::HelpOverlay::new(scroll_offset).render(f, area);
}
