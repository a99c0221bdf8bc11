/// Extensions the in-place editor opens as plain text.
pub const EDITABLE_EXTENSIONS: &[&str] = &[
    "css", "csv", "html", "js", "json", "log", "md", "py", "txt",
];

/// Returns the final path segment of an object key.
pub fn file_name(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

/// Returns the text after the last `.` of the key's final segment.
pub fn extension(key: &str) -> Option<&str> {
    file_name(key)
        .rsplit_once('.')
        .map(|(_, extension)| extension)
}

/// Returns whether the key's extension is in the plain-text allow-list.
///
/// Only the final extension counts, so `archive.tar.gz` is judged by `gz`.
pub fn is_editable(key: &str) -> bool {
    extension(key).is_some_and(|extension| {
        EDITABLE_EXTENSIONS
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(extension))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_returns_final_segment() {
        // Arrange
        let key = "docs/guide/intro.txt";

        // Act
        let name = file_name(key);

        // Assert
        assert_eq!(name, "intro.txt");
    }

    #[test]
    fn test_is_editable_accepts_allow_listed_extension_case_insensitively() {
        // Arrange
        let key = "NOTES.TXT";

        // Act
        let editable = is_editable(key);

        // Assert
        assert!(editable);
    }

    #[test]
    fn test_is_editable_judges_only_the_final_extension() {
        // Arrange
        let key = "backups/archive.tar.gz";

        // Act
        let editable = is_editable(key);

        // Assert
        assert!(!editable);
    }

    #[test]
    fn test_is_editable_rejects_key_without_extension() {
        // Arrange
        let key = "reports/README";

        // Act
        let editable = is_editable(key);

        // Assert
        assert!(!editable);
    }

    #[test]
    fn test_extension_ignores_dots_in_parent_folders() {
        // Arrange
        let key = "backup.v2/data";

        // Act
        let extension = extension(key);

        // Assert
        assert_eq!(extension, None);
    }
}
