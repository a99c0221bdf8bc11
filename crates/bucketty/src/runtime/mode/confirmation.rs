use crossterm::event::{KeyCode, KeyEvent};

use crate::ui::state::app_mode::ConfirmChoice;

/// Outcome of feeding one key press to a yes/no confirmation popup.
pub(crate) enum ConfirmOutcome {
    Accepted,
    Declined,
    Pending,
}

/// Shared key handling for yes/no popups.
///
/// `y` answers directly, as do `n` and `q`; arrows and `h`/`l` move the
/// highlight, `Enter` takes the highlighted option and `Esc` declines.
pub(crate) fn decide(choice: &mut ConfirmChoice, key: KeyEvent) -> ConfirmOutcome {
    match key.code {
        KeyCode::Char('y' | 'Y') => ConfirmOutcome::Accepted,
        KeyCode::Char('n' | 'N' | 'q' | 'Q') | KeyCode::Esc => ConfirmOutcome::Declined,
        KeyCode::Left | KeyCode::Char('h' | 'H') => {
            *choice = ConfirmChoice::Yes;

            ConfirmOutcome::Pending
        }
        KeyCode::Right | KeyCode::Char('l' | 'L') => {
            *choice = ConfirmChoice::No;

            ConfirmOutcome::Pending
        }
        KeyCode::Enter if choice.is_yes() => ConfirmOutcome::Accepted,
        KeyCode::Enter => ConfirmOutcome::Declined,
        _ => ConfirmOutcome::Pending,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_decide_accepts_y_regardless_of_highlight() {
        // Arrange
        let mut choice = ConfirmChoice::No;

        // Act
        let outcome = decide(&mut choice, press(KeyCode::Char('y')));

        // Assert
        assert!(matches!(outcome, ConfirmOutcome::Accepted));
    }

    #[test]
    fn test_decide_declines_n_q_and_esc() {
        // Arrange
        let mut choice = ConfirmChoice::Yes;

        // Act
        let n_outcome = decide(&mut choice, press(KeyCode::Char('n')));
        let q_outcome = decide(&mut choice, press(KeyCode::Char('q')));
        let esc_outcome = decide(&mut choice, press(KeyCode::Esc));

        // Assert
        assert!(matches!(n_outcome, ConfirmOutcome::Declined));
        assert!(matches!(q_outcome, ConfirmOutcome::Declined));
        assert!(matches!(esc_outcome, ConfirmOutcome::Declined));
    }

    #[test]
    fn test_decide_moves_highlight_with_arrows() {
        // Arrange
        let mut choice = ConfirmChoice::DEFAULT;

        // Act
        let left_outcome = decide(&mut choice, press(KeyCode::Left));
        let after_left = choice;
        let right_outcome = decide(&mut choice, press(KeyCode::Right));

        // Assert
        assert!(matches!(left_outcome, ConfirmOutcome::Pending));
        assert!(matches!(right_outcome, ConfirmOutcome::Pending));
        assert_eq!(after_left, ConfirmChoice::Yes);
        assert_eq!(choice, ConfirmChoice::No);
    }

    #[test]
    fn test_decide_moves_highlight_with_h_and_l() {
        // Arrange
        let mut choice = ConfirmChoice::DEFAULT;

        // Act
        decide(&mut choice, press(KeyCode::Char('h')));
        let after_h = choice;
        decide(&mut choice, press(KeyCode::Char('l')));

        // Assert
        assert_eq!(after_h, ConfirmChoice::Yes);
        assert_eq!(choice, ConfirmChoice::No);
    }

    #[test]
    fn test_decide_enter_takes_highlighted_option() {
        // Arrange
        let mut yes_choice = ConfirmChoice::Yes;
        let mut no_choice = ConfirmChoice::No;

        // Act
        let yes_outcome = decide(&mut yes_choice, press(KeyCode::Enter));
        let no_outcome = decide(&mut no_choice, press(KeyCode::Enter));

        // Assert
        assert!(matches!(yes_outcome, ConfirmOutcome::Accepted));
        assert!(matches!(no_outcome, ConfirmOutcome::Declined));
    }

    #[test]
    fn test_decide_ignores_unrelated_keys() {
        // Arrange
        let mut choice = ConfirmChoice::DEFAULT;

        // Act
        let outcome = decide(&mut choice, press(KeyCode::Char('x')));

        // Assert
        assert!(matches!(outcome, ConfirmOutcome::Pending));
        assert_eq!(choice, ConfirmChoice::DEFAULT);
    }
}
