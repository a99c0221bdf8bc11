//! Small display helpers shared across components.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::status::{StatusKind, StatusMessage};

const ELLIPSIS: &str = "...";

/// Returns a styled single-line rendering of a status message.
pub fn status_line(status: &StatusMessage) -> Line<'static> {
    let color = match status.kind {
        StatusKind::Error => Color::Red,
        StatusKind::Info => Color::Green,
    };

    Line::from(Span::styled(
        format!(" {}", status.text),
        Style::default().fg(color),
    ))
}

/// Truncates `text` to `max_width` display columns, appending `...` when
/// anything was cut.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= ELLIPSIS.len() {
        return ELLIPSIS.chars().take(max_width).collect();
    }

    let budget = max_width - ELLIPSIS.len();
    let mut truncated = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let char_width = ch.width().unwrap_or(0);
        if used + char_width > budget {
            break;
        }
        truncated.push(ch);
        used += char_width;
    }
    truncated.push_str(ELLIPSIS);

    truncated
}

/// Formats a backend timestamp as `YYYY-MM-DD HH:MM:SS`, falling back to
/// the raw value when it does not parse.
///
/// Accepts RFC 3339 and the space-separated variant the backend emits.
pub fn format_timestamp(value: &str) -> String {
    let normalized = value.replacen(' ', "T", 1);
    let Ok(datetime) = OffsetDateTime::parse(&normalized, &Rfc3339) else {
        return value.to_string();
    };

    let year = datetime.year();
    let month = u8::from(datetime.month());
    let day = datetime.day();
    let hour = datetime.hour();
    let minute = datetime.minute();
    let second = datetime.second();

    format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}")
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_status_line_colors_by_kind() {
        // Arrange
        let error = StatusMessage::new(
            "Error: boom".to_string(),
            StatusKind::Error,
            Duration::from_secs(1),
        );
        let info = StatusMessage::new(
            "Saved!".to_string(),
            StatusKind::Info,
            Duration::from_secs(1),
        );

        // Act
        let error_line = status_line(&error);
        let info_line = status_line(&info);

        // Assert
        assert_eq!(error_line.spans[0].style.fg, Some(Color::Red));
        assert_eq!(info_line.spans[0].style.fg, Some(Color::Green));
        assert_eq!(error_line.spans[0].content, " Error: boom");
    }

    #[test]
    fn test_truncate_with_ellipsis_keeps_short_text() {
        // Arrange
        let text = "notes.txt";

        // Act
        let truncated = truncate_with_ellipsis(text, 20);

        // Assert
        assert_eq!(truncated, "notes.txt");
    }

    #[test]
    fn test_truncate_with_ellipsis_cuts_long_text() {
        // Arrange
        let text = "a-very-long-object-key.txt";

        // Act
        let truncated = truncate_with_ellipsis(text, 10);

        // Assert
        assert_eq!(truncated, "a-very-...");
        assert_eq!(truncated.width(), 10);
    }

    #[test]
    fn test_truncate_with_ellipsis_counts_wide_characters() {
        // Arrange — CJK characters take two columns each
        let text = "日本語のファイル.txt";

        // Act
        let truncated = truncate_with_ellipsis(text, 9);

        // Assert
        assert_eq!(truncated, "日本語...");
    }

    #[test]
    fn test_truncate_with_ellipsis_tiny_budget() {
        // Arrange
        let text = "notes.txt";

        // Act
        let truncated = truncate_with_ellipsis(text, 2);

        // Assert
        assert_eq!(truncated, "..");
    }

    #[test]
    fn test_format_timestamp_rfc3339() {
        // Arrange
        let value = "2024-05-04T12:30:45+00:00";

        // Act
        let formatted = format_timestamp(value);

        // Assert
        assert_eq!(formatted, "2024-05-04 12:30:45");
    }

    #[test]
    fn test_format_timestamp_space_separated() {
        // Arrange — the backend stringifies datetimes with a space separator
        let value = "2024-05-04 12:30:45.123456+00:00";

        // Act
        let formatted = format_timestamp(value);

        // Assert
        assert_eq!(formatted, "2024-05-04 12:30:45");
    }

    #[test]
    fn test_format_timestamp_keeps_unparseable_value() {
        // Arrange
        let value = "yesterday";

        // Act
        let formatted = format_timestamp(value);

        // Assert
        assert_eq!(formatted, "yesterday");
    }
}
