use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::domain::file;
use crate::domain::input::InputState;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::{AppMode, ConfirmChoice};

/// Handles key input while the app is browsing the file tree.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('q') => return EventResult::Quit,
        KeyCode::Char('j') | KeyCode::Down => app.browser.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.browser.select_previous(),
        KeyCode::Char('h') | KeyCode::Left => app.browser.collapse_selected(),
        KeyCode::Char('l') | KeyCode::Right => app.browser.expand_selected(),
        KeyCode::Enter => open_selected_row(app),
        KeyCode::Char('r') => {
            app.start_refresh_listing();
            app.start_refresh_folders();
        }
        KeyCode::Char('u') => {
            app.mode = AppMode::Upload {
                folder_index: 0,
                input: InputState::new(),
            };
        }
        KeyCode::Char('n') => {
            app.mode = AppMode::CreateFolder {
                input: InputState::new(),
            };
        }
        KeyCode::Char('d') => confirm_delete_selected_file(app),
        KeyCode::Char('e') => edit_selected_file(app),
        KeyCode::Char('v') => open_versions_for_selected_file(app),
        KeyCode::Char('s') => download_selected_file(app),
        KeyCode::Char('g') => {
            app.mode = AppMode::Logs {
                content: None,
                scroll_offset: 0,
            };
            app.start_fetch_logs();
        }
        KeyCode::Char('?') => {
            app.mode = AppMode::Help { scroll_offset: 0 };
        }
        _ => {}
    }

    EventResult::Continue
}

/// Enter toggles folders and opens editable files in the editor.
fn open_selected_row(app: &mut App) {
    let Some(row) = app.browser.selected_row() else {
        return;
    };

    if row.is_folder {
        app.browser.toggle_selected_folder();
    } else if file::is_editable(&row.key) {
        let key = row.key.clone();
        app.start_open_edit(key);
    }
}

fn confirm_delete_selected_file(app: &mut App) {
    let Some(key) = selected_file_key(app) else {
        return;
    };

    app.mode = AppMode::ConfirmDelete {
        choice: ConfirmChoice::DEFAULT,
        key,
    };
}

/// Opens the editor for the selected file; non-editable files are ignored.
fn edit_selected_file(app: &mut App) {
    let Some(key) = selected_file_key(app) else {
        return;
    };
    if !file::is_editable(&key) {
        return;
    }

    app.start_open_edit(key);
}

fn open_versions_for_selected_file(app: &mut App) {
    let Some(key) = selected_file_key(app) else {
        return;
    };

    app.mode = AppMode::Versions {
        key: key.clone(),
        records: None,
        selected: 0,
    };
    app.start_list_versions(key);
}

fn download_selected_file(app: &mut App) {
    let Some(key) = selected_file_key(app) else {
        return;
    };

    app.start_download(key);
}

/// Returns the selected row's key when it is a file row.
fn selected_file_key(app: &App) -> Option<String> {
    app.browser
        .selected_row()
        .filter(|row| !row.is_folder)
        .map(|row| row.key.clone())
}
