use std::time::Duration;
use std::time::Instant;

/// How long upload results stay on screen.
pub const UPLOAD_STATUS_TTL: Duration = Duration::from_millis(3500);
/// How long edit/save results stay on screen.
pub const EDIT_STATUS_TTL: Duration = Duration::from_millis(3000);
/// How long folder-creation results stay on screen.
pub const FOLDER_STATUS_TTL: Duration = Duration::from_millis(2500);
/// How long general notices (restore, delete, download) stay on screen.
pub const NOTICE_TTL: Duration = Duration::from_millis(3000);

/// Visual tone of a transient status message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    /// Failure outcome, rendered in the error color.
    Error,
    /// Success or neutral outcome.
    Info,
}

/// A transient message with an absolute expiry deadline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    /// Instant after which the message is swept away.
    pub expires_at: Instant,
    /// Visual tone.
    pub kind: StatusKind,
    /// Text shown to the user.
    pub text: String,
}

impl StatusMessage {
    /// Creates a message that expires `ttl` from now.
    pub fn new(text: String, kind: StatusKind, ttl: Duration) -> Self {
        Self {
            expires_at: Instant::now() + ttl,
            kind,
            text,
        }
    }

    /// Returns whether the message has reached its expiry deadline.
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Holds the per-surface transient messages mirrored by the browser view.
///
/// Each operation family owns one slot, so a new result replaces the
/// previous one instead of stacking.
#[derive(Debug, Default)]
pub struct StatusBoard {
    /// Save results, also shown inline in the editor.
    pub edit: Option<StatusMessage>,
    /// Folder-creation results, also shown inline in the overlay.
    pub folder: Option<StatusMessage>,
    /// Restore, delete, and download outcomes.
    pub notice: Option<StatusMessage>,
    /// Upload results.
    pub upload: Option<StatusMessage>,
}

impl StatusBoard {
    pub fn set_upload(&mut self, text: String, kind: StatusKind) {
        self.upload = Some(StatusMessage::new(text, kind, UPLOAD_STATUS_TTL));
    }

    pub fn set_edit(&mut self, text: String, kind: StatusKind) {
        self.edit = Some(StatusMessage::new(text, kind, EDIT_STATUS_TTL));
    }

    pub fn set_folder(&mut self, text: String, kind: StatusKind) {
        self.folder = Some(StatusMessage::new(text, kind, FOLDER_STATUS_TTL));
    }

    pub fn set_notice(&mut self, text: String, kind: StatusKind) {
        self.notice = Some(StatusMessage::new(text, kind, NOTICE_TTL));
    }

    /// Clears every slot whose deadline has passed.
    pub fn sweep(&mut self, now: Instant) {
        for slot in [
            &mut self.edit,
            &mut self.folder,
            &mut self.notice,
            &mut self.upload,
        ] {
            if slot.as_ref().is_some_and(|message| message.is_expired(now)) {
                *slot = None;
            }
        }
    }

    /// Returns the active messages in a fixed display order.
    pub fn active(&self) -> Vec<&StatusMessage> {
        [&self.upload, &self.edit, &self.folder, &self.notice]
            .into_iter()
            .filter_map(Option::as_ref)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_expires_exactly_at_deadline() {
        // Arrange
        let message = StatusMessage::new("Saved!".to_string(), StatusKind::Info, NOTICE_TTL);

        // Act
        let before = message.is_expired(message.expires_at - Duration::from_millis(1));
        let at_deadline = message.is_expired(message.expires_at);

        // Assert
        assert!(!before);
        assert!(at_deadline);
    }

    #[test]
    fn test_sweep_clears_only_expired_slots() {
        // Arrange
        let mut board = StatusBoard::default();
        board.set_upload("Uploaded: a.txt".to_string(), StatusKind::Info);
        board.set_folder("Folder created: docs/".to_string(), StatusKind::Info);
        let upload_deadline = board
            .upload
            .as_ref()
            .map(|message| message.expires_at)
            .unwrap();

        // Act — upload (3.5s) outlives folder (2.5s) at the folder deadline
        board.sweep(upload_deadline - Duration::from_millis(900));

        // Assert
        assert!(board.upload.is_some());
        assert!(board.folder.is_none());
    }

    #[test]
    fn test_set_replaces_previous_message_in_slot() {
        // Arrange
        let mut board = StatusBoard::default();
        board.set_upload("Uploaded: a.txt".to_string(), StatusKind::Info);

        // Act
        board.set_upload("Error: disk full".to_string(), StatusKind::Error);

        // Assert
        let upload = board.upload.as_ref().unwrap();
        assert_eq!(upload.text, "Error: disk full");
        assert_eq!(upload.kind, StatusKind::Error);
    }

    #[test]
    fn test_active_orders_slots_consistently() {
        // Arrange
        let mut board = StatusBoard::default();
        board.set_notice("Version restored!".to_string(), StatusKind::Info);
        board.set_upload("Uploaded: a.txt".to_string(), StatusKind::Info);

        // Act
        let active = board.active();

        // Assert
        let texts: Vec<&str> = active.iter().map(|message| message.text.as_str()).collect();
        assert_eq!(texts, vec!["Uploaded: a.txt", "Version restored!"]);
    }
}
