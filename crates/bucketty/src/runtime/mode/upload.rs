use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::AppMode;

/// Handles key input while the upload prompt is open.
///
/// `folder_index` 0 targets the bucket root; higher values index into the
/// known folder set. `Up`/`Down` cycle through the choices.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    let AppMode::Upload {
        folder_index,
        input,
    } = &mut app.mode
    else {
        return EventResult::Continue;
    };

    match key.code {
        KeyCode::Enter => {
            if input.is_empty() {
                return EventResult::Continue;
            }

            let path = input.take_text();
            let folder = match *folder_index {
                0 => None,
                index => app.folders.get(index - 1).cloned(),
            };
            app.mode = AppMode::Browse;
            app.start_upload(&path, folder);
        }
        KeyCode::Esc => {
            app.mode = AppMode::Browse;
        }
        KeyCode::Down => {
            *folder_index = (*folder_index + 1) % (app.folders.len() + 1);
        }
        KeyCode::Up => {
            *folder_index = (*folder_index + app.folders.len()) % (app.folders.len() + 1);
        }
        KeyCode::Backspace => input.delete_backward(),
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        KeyCode::Char(character) => input.insert_char(character),
        _ => {}
    }

    EventResult::Continue
}
