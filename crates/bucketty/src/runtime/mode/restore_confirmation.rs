use crossterm::event::KeyEvent;

use crate::app::App;
use crate::runtime::EventResult;
use crate::runtime::mode::confirmation::{self, ConfirmOutcome};
use crate::ui::state::app_mode::AppMode;

/// Handles key input while the restore confirmation popup is visible.
///
/// Both outcomes return to the version overlay; on confirm the restore
/// request runs in the background and its result closes the overlay.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    let AppMode::ConfirmRestore { choice, .. } = &mut app.mode else {
        return EventResult::Continue;
    };

    match confirmation::decide(choice, key) {
        ConfirmOutcome::Accepted => restore_selected_version(app),
        ConfirmOutcome::Declined => reopen_versions_overlay(app),
        ConfirmOutcome::Pending => {}
    }

    EventResult::Continue
}

fn restore_selected_version(app: &mut App) {
    let mode = std::mem::replace(&mut app.mode, AppMode::Browse);
    if let AppMode::ConfirmRestore {
        key,
        records,
        selected,
        version_id,
        ..
    } = mode
    {
        app.mode = AppMode::Versions {
            key: key.clone(),
            records: Some(records),
            selected,
        };
        app.start_restore(key, version_id);
    }
}

fn reopen_versions_overlay(app: &mut App) {
    let mode = std::mem::replace(&mut app.mode, AppMode::Browse);
    if let AppMode::ConfirmRestore {
        key,
        records,
        selected,
        ..
    } = mode
    {
        app.mode = AppMode::Versions {
            key,
            records: Some(records),
            selected,
        };
    }
}
