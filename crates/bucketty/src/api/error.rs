use std::error::Error;
use std::fmt;

/// Error type for storage backend calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Failure reported by the backend in a JSON `error` payload.
    Backend(String),
    /// Failure reaching the backend or reading its response.
    Transport(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backend(message) | Self::Transport(message) => {
                write!(formatter, "{message}")
            }
        }
    }
}

impl Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_renders_backend_message_verbatim() {
        // Arrange
        let error = ApiError::Backend("File not found".to_string());

        // Act
        let rendered = error.to_string();

        // Assert
        assert_eq!(rendered, "File not found");
    }

    #[test]
    fn test_display_renders_transport_message_verbatim() {
        // Arrange
        let error = ApiError::Transport("connection refused".to_string());

        // Act
        let rendered = error.to_string();

        // Assert
        assert_eq!(rendered, "connection refused");
    }
}
