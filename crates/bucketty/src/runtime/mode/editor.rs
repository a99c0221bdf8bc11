use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::AppMode;

/// Handles key input while the full-screen editor is open.
///
/// `Ctrl+S` saves, `Esc` discards. The buffer is frozen while a save is in
/// flight so the submitted content cannot drift from what lands on success.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    if is_save_shortcut(key) {
        app.start_save_edit();

        return EventResult::Continue;
    }

    if matches!(key.code, KeyCode::Esc) {
        app.edit = None;
        app.mode = AppMode::Browse;

        return EventResult::Continue;
    }

    let Some(edit) = &mut app.edit else {
        return EventResult::Continue;
    };
    if edit.saving {
        return EventResult::Continue;
    }

    match key.code {
        KeyCode::Enter => edit.buffer.insert_newline(),
        KeyCode::Backspace => edit.buffer.delete_backward(),
        KeyCode::Delete => edit.buffer.delete_forward(),
        KeyCode::Left => edit.buffer.move_left(),
        KeyCode::Right => edit.buffer.move_right(),
        KeyCode::Up => edit.buffer.move_up(),
        KeyCode::Down => edit.buffer.move_down(),
        KeyCode::Home => edit.buffer.move_home(),
        KeyCode::End => edit.buffer.move_end(),
        KeyCode::Char(character) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            edit.buffer.insert_char(character);
        }
        _ => {}
    }

    EventResult::Continue
}

fn is_save_shortcut(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('s')) && key.modifiers.contains(KeyModifiers::CONTROL)
}
