use crossterm::event::{KeyCode, KeyEvent};

use crate::api::types::VersionRecord;
use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::{AppMode, ConfirmChoice};

/// Handles key input while the version history overlay is open.
///
/// Restore and download act on the highlighted version; both are ignored
/// until the history response has arrived.
pub(crate) fn handle(app: &mut App, key_event: KeyEvent) -> EventResult {
    let AppMode::Versions {
        key,
        records,
        selected,
    } = &mut app.mode
    else {
        return EventResult::Continue;
    };

    match key_event.code {
        KeyCode::Char('j') | KeyCode::Down => move_selection_down(records, selected),
        KeyCode::Char('k') | KeyCode::Up => move_selection_up(records, selected),
        KeyCode::Enter | KeyCode::Char('r') => {
            if let Some(records) = records
                && let Some(record) = records.get(*selected)
            {
                let confirm = AppMode::ConfirmRestore {
                    choice: ConfirmChoice::DEFAULT,
                    key: key.clone(),
                    records: records.clone(),
                    selected: *selected,
                    version_id: record.version_id.clone(),
                };
                app.mode = confirm;
            }
        }
        KeyCode::Char('s') => {
            if let Some(records) = records
                && let Some(record) = records.get(*selected)
            {
                let key = key.clone();
                let version_id = record.version_id.clone();
                app.start_download_version(key, version_id);
            }
        }
        KeyCode::Esc | KeyCode::Char('q' | 'v') => {
            app.mode = AppMode::Browse;
        }
        _ => {}
    }

    EventResult::Continue
}

fn move_selection_down(records: &Option<Vec<VersionRecord>>, selected: &mut usize) {
    let Some(records) = records else {
        return;
    };
    if records.is_empty() {
        return;
    }

    *selected = (*selected + 1) % records.len();
}

fn move_selection_up(records: &Option<Vec<VersionRecord>>, selected: &mut usize) {
    let Some(records) = records else {
        return;
    };
    if records.is_empty() {
        return;
    }

    *selected = (*selected + records.len() - 1) % records.len();
}
