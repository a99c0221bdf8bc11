use crossterm::event::KeyEvent;

use crate::app::App;
use crate::runtime::EventResult;
use crate::runtime::mode::confirmation::{self, ConfirmOutcome};
use crate::ui::state::app_mode::AppMode;

/// Handles key input while the delete confirmation popup is visible.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    let AppMode::ConfirmDelete {
        choice,
        key: object_key,
    } = &mut app.mode
    else {
        return EventResult::Continue;
    };

    match confirmation::decide(choice, key) {
        ConfirmOutcome::Accepted => {
            let object_key = object_key.clone();
            app.mode = AppMode::Browse;
            app.start_delete(object_key);
        }
        ConfirmOutcome::Declined => {
            app.mode = AppMode::Browse;
        }
        ConfirmOutcome::Pending => {}
    }

    EventResult::Continue
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::api::client::MockStorageClient;
    use crate::app::AppEvent;
    use crate::app::tests::test_app;
    use crate::ui::state::app_mode::ConfirmChoice;

    fn confirming_app(client: MockStorageClient) -> App {
        let mut app = test_app(client);
        app.mode = AppMode::ConfirmDelete {
            choice: ConfirmChoice::DEFAULT,
            key: "docs/notes.txt".to_string(),
        };

        app
    }

    #[tokio::test]
    async fn test_handle_y_deletes_and_returns_to_browse() {
        // Arrange
        let mut client = MockStorageClient::new();
        client
            .expect_delete_file()
            .withf(|key| key == "docs/notes.txt")
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));
        let mut app = confirming_app(client);

        // Act
        let result = handle(
            &mut app,
            KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE),
        );

        // Assert
        assert!(matches!(result, EventResult::Continue));
        assert!(matches!(app.mode, AppMode::Browse));
        let event = app.next_app_event().await.unwrap();
        assert_eq!(
            event,
            AppEvent::DeleteFinished {
                key: "docs/notes.txt".to_string(),
                result: Ok(())
            }
        );
    }

    #[tokio::test]
    async fn test_handle_enter_on_default_selection_cancels() {
        // Arrange — `No` is preselected, so Enter must not delete
        let mut client = MockStorageClient::new();
        client.expect_delete_file().times(0);
        let mut app = confirming_app(client);

        // Act
        handle(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        // Assert
        assert!(matches!(app.mode, AppMode::Browse));
    }

    #[tokio::test]
    async fn test_handle_enter_after_moving_to_yes_deletes() {
        // Arrange
        let mut client = MockStorageClient::new();
        client
            .expect_delete_file()
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));
        let mut app = confirming_app(client);

        // Act
        handle(&mut app, KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
        let AppMode::ConfirmDelete { choice, .. } = &app.mode else {
            panic!("expected delete confirmation");
        };
        assert_eq!(*choice, ConfirmChoice::Yes);
        handle(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        // Assert
        assert!(matches!(app.mode, AppMode::Browse));
        let event = app.next_app_event().await.unwrap();
        assert!(matches!(event, AppEvent::DeleteFinished { .. }));
    }

    #[tokio::test]
    async fn test_handle_esc_cancels_without_deleting() {
        // Arrange
        let mut client = MockStorageClient::new();
        client.expect_delete_file().times(0);
        let mut app = confirming_app(client);

        // Act
        handle(&mut app, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));

        // Assert
        assert!(matches!(app.mode, AppMode::Browse));
    }
}
