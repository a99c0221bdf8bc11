use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::AppMode;

/// Handles key input while the keybinding reference overlay is open.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    if let AppMode::Help { scroll_offset } = &mut app.mode {
        match key.code {
            KeyCode::Char('?' | 'q') | KeyCode::Esc => {
                app.mode = AppMode::Browse;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                *scroll_offset = scroll_offset.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                *scroll_offset = scroll_offset.saturating_sub(1);
            }
            _ => {}
        }
    }

    EventResult::Continue
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::api::client::MockStorageClient;
    use crate::app::tests::test_app;

    fn help_app() -> App {
        let mut app = test_app(MockStorageClient::new());
        app.mode = AppMode::Help { scroll_offset: 0 };

        app
    }

    #[tokio::test]
    async fn test_handle_question_mark_closes_help() {
        // Arrange
        let mut app = help_app();

        // Act
        let result = handle(
            &mut app,
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE),
        );

        // Assert
        assert!(matches!(result, EventResult::Continue));
        assert!(matches!(app.mode, AppMode::Browse));
    }

    #[tokio::test]
    async fn test_handle_down_key_increments_scroll_offset() {
        // Arrange
        let mut app = help_app();

        // Act
        handle(&mut app, KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));

        // Assert
        assert!(matches!(app.mode, AppMode::Help { scroll_offset: 1 }));
    }

    #[tokio::test]
    async fn test_handle_up_key_saturates_at_zero() {
        // Arrange
        let mut app = help_app();

        // Act
        handle(&mut app, KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));

        // Assert
        assert!(matches!(app.mode, AppMode::Help { scroll_offset: 0 }));
    }

    #[tokio::test]
    async fn test_handle_esc_closes_help() {
        // Arrange
        let mut app = help_app();

        // Act
        handle(&mut app, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));

        // Assert
        assert!(matches!(app.mode, AppMode::Browse));
    }
}
