use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::AppMode;

/// Handles key input while the folder-name prompt is open.
///
/// The prompt stays open after submitting so the outcome message is
/// readable; `Esc` closes it.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    let AppMode::CreateFolder { input } = &mut app.mode else {
        return EventResult::Continue;
    };

    match key.code {
        KeyCode::Enter => {
            let name = input.text().to_string();
            app.submit_create_folder(&name);
        }
        KeyCode::Esc => {
            app.mode = AppMode::Browse;
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

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::api::client::MockStorageClient;
    use crate::app::AppEvent;
    use crate::app::tests::test_app;
    use crate::domain::input::InputState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn prompting_app(client: MockStorageClient, text: &str) -> App {
        let mut app = test_app(client);
        app.mode = AppMode::CreateFolder {
            input: InputState::with_text(text.to_string()),
        };

        app
    }

    #[tokio::test]
    async fn test_handle_typing_builds_folder_name() {
        // Arrange
        let mut app = prompting_app(MockStorageClient::new(), "");

        // Act
        for character in ['d', 'o', 'c', 's'] {
            handle(&mut app, key(KeyCode::Char(character)));
        }

        // Assert
        let AppMode::CreateFolder { input } = &app.mode else {
            panic!("expected create-folder mode");
        };
        assert_eq!(input.text(), "docs");
    }

    #[tokio::test]
    async fn test_handle_enter_submits_name_and_keeps_prompt_open() {
        // Arrange
        let mut client = MockStorageClient::new();
        client
            .expect_create_folder()
            .withf(|folder| folder == "docs")
            .times(1)
            .returning(|_| Box::pin(async { Ok("docs/".to_string()) }));
        let mut app = prompting_app(client, "docs");

        // Act
        handle(&mut app, key(KeyCode::Enter));

        // Assert
        assert!(matches!(app.mode, AppMode::CreateFolder { .. }));
        let event = app.next_app_event().await.unwrap();
        assert_eq!(
            event,
            AppEvent::FolderCreated {
                result: Ok("docs/".to_string())
            }
        );
    }

    #[tokio::test]
    async fn test_handle_enter_with_blank_name_shows_validation_message() {
        // Arrange
        let mut client = MockStorageClient::new();
        client.expect_create_folder().times(0);
        let mut app = prompting_app(client, "   ");

        // Act
        handle(&mut app, key(KeyCode::Enter));

        // Assert
        assert!(matches!(app.mode, AppMode::CreateFolder { .. }));
        assert_eq!(
            app.statuses.folder.as_ref().unwrap().text,
            "Please enter a folder name."
        );
    }

    #[tokio::test]
    async fn test_handle_esc_closes_prompt() {
        // Arrange
        let mut app = prompting_app(MockStorageClient::new(), "docs");

        // Act
        handle(&mut app, key(KeyCode::Esc));

        // Assert
        assert!(matches!(app.mode, AppMode::Browse));
    }

    #[tokio::test]
    async fn test_handle_backspace_removes_last_character() {
        // Arrange
        let mut app = prompting_app(MockStorageClient::new(), "docs");

        // Act
        handle(&mut app, key(KeyCode::Backspace));

        // Assert
        let AppMode::CreateFolder { input } = &app.mode else {
            panic!("expected create-folder mode");
        };
        assert_eq!(input.text(), "doc");
    }
}
