use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::AppMode;

/// Handles key input while the activity log page is open.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    let AppMode::Logs {
        content,
        scroll_offset,
    } = &mut app.mode
    else {
        return EventResult::Continue;
    };

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            *scroll_offset = scroll_offset.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            *scroll_offset = scroll_offset.saturating_sub(1);
        }
        KeyCode::Char('r') => {
            *content = None;
            *scroll_offset = 0;
            app.start_fetch_logs();
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.mode = AppMode::Browse;
        }
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

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn logs_app(client: MockStorageClient) -> App {
        let mut app = test_app(client);
        app.mode = AppMode::Logs {
            content: Some("2024-05-04 upload notes.txt".to_string()),
            scroll_offset: 0,
        };

        app
    }

    #[tokio::test]
    async fn test_handle_j_scrolls_down_and_k_saturates_at_zero() {
        // Arrange
        let mut app = logs_app(MockStorageClient::new());

        // Act
        handle(&mut app, key(KeyCode::Char('j')));
        handle(&mut app, key(KeyCode::Char('k')));
        handle(&mut app, key(KeyCode::Char('k')));

        // Assert
        assert!(matches!(
            app.mode,
            AppMode::Logs {
                scroll_offset: 0,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_handle_r_reloads_log() {
        // Arrange
        let mut client = MockStorageClient::new();
        client
            .expect_activity_log()
            .times(1)
            .returning(|| Box::pin(async { Ok("fresh".to_string()) }));
        let mut app = logs_app(client);

        // Act
        handle(&mut app, key(KeyCode::Char('r')));

        // Assert — content cleared so the spinner shows while loading
        assert!(matches!(app.mode, AppMode::Logs { content: None, .. }));
        let event = app.next_app_event().await.unwrap();
        assert_eq!(
            event,
            AppEvent::LogsLoaded {
                result: Ok("fresh".to_string())
            }
        );
    }

    #[tokio::test]
    async fn test_handle_q_returns_to_browse() {
        // Arrange
        let mut app = logs_app(MockStorageClient::new());

        // Act
        handle(&mut app, key(KeyCode::Char('q')));

        // Assert
        assert!(matches!(app.mode, AppMode::Browse));
    }
}
