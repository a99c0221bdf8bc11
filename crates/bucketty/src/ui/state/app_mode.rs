use crate::api::types::VersionRecord;
use crate::domain::input::InputState;

/// Option highlighted in a yes/no confirmation popup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmChoice {
    Yes,
    No,
}

impl ConfirmChoice {
    /// Confirmations open with `No` highlighted.
    pub const DEFAULT: Self = ConfirmChoice::No;

    /// Returns whether `Yes` is highlighted.
    #[must_use]
    pub fn is_yes(self) -> bool {
        matches!(self, ConfirmChoice::Yes)
    }
}

/// Active UI mode; overlay variants carry the state they need to render
/// and to restore the page underneath on close.
pub enum AppMode {
    /// Default tree browsing.
    Browse,
    /// Delete confirmation for one object.
    ConfirmDelete { choice: ConfirmChoice, key: String },
    /// Restore confirmation opened from the version overlay.
    ///
    /// Carries the version list so cancelling returns to the overlay
    /// without a refetch.
    ConfirmRestore {
        choice: ConfirmChoice,
        key: String,
        records: Vec<VersionRecord>,
        selected: usize,
        version_id: String,
    },
    /// Folder-name prompt.
    CreateFolder { input: InputState },
    /// Full-screen text editor; the buffer lives in [`crate::app::App::edit`].
    Edit,
    /// Keybinding reference.
    Help { scroll_offset: u16 },
    /// Backend activity log page, `content` is `None` while loading.
    Logs {
        content: Option<String>,
        scroll_offset: u16,
    },
    /// Upload prompt with a local path input and target folder picker.
    Upload {
        folder_index: usize,
        input: InputState,
    },
    /// Version history overlay for one object, `records` is `None` while
    /// loading.
    Versions {
        key: String,
        records: Option<Vec<VersionRecord>>,
        selected: usize,
    },
}
