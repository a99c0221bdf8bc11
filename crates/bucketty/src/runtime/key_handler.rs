use crossterm::event::KeyEvent;

use crate::app::App;
use crate::runtime::{EventResult, mode};
use crate::ui::state::app_mode::AppMode;

pub(crate) fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    match &app.mode {
        AppMode::Browse => mode::browser::handle(app, key),
        AppMode::ConfirmDelete { .. } => mode::delete_confirmation::handle(app, key),
        AppMode::ConfirmRestore { .. } => mode::restore_confirmation::handle(app, key),
        AppMode::CreateFolder { .. } => mode::create_folder::handle(app, key),
        AppMode::Edit => mode::editor::handle(app, key),
        AppMode::Help { .. } => mode::help::handle(app, key),
        AppMode::Logs { .. } => mode::logs::handle(app, key),
        AppMode::Upload { .. } => mode::upload::handle(app, key),
        AppMode::Versions { .. } => mode::versions::handle(app, key),
    }
}

/// Routes pasted text into whichever text input is active.
///
/// Without an active input the paste is dropped rather than replayed as
/// individual key presses.
pub(crate) fn handle_paste_event(app: &mut App, pasted: &str) {
    match &mut app.mode {
        AppMode::CreateFolder { input } | AppMode::Upload { input, .. } => {
            input.insert_text(pasted);
        }
        AppMode::Edit => {
            if let Some(edit) = &mut app.edit
                && !edit.saving
            {
                edit.buffer.insert_text(pasted);
            }
        }
        _ => {}
    }
}
