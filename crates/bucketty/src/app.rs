//! App-layer composition root: state, internal events, and the reducer
//! that applies backend results to the UI state.

pub mod browser;
pub mod ops;
pub mod status;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;

use crate::api::client::StorageClient;
use crate::api::error::ApiError;
use crate::api::types::VersionRecord;
use crate::app::browser::BrowserState;
use crate::app::status::{StatusBoard, StatusKind};
use crate::config::Config;
use crate::domain::input::InputState;
use crate::ui::state::app_mode::AppMode;

/// Internal app events emitted by spawned backend operations.
///
/// Producers should emit events only; state mutation is centralized in
/// [`App::apply_app_event`]. Events apply in arrival order, so when two
/// responses race the later one wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum AppEvent {
    /// A delete request finished.
    DeleteFinished {
        key: String,
        result: Result<(), ApiError>,
    },
    /// A download finished; the payload is the local target path.
    DownloadFinished {
        key: String,
        result: Result<PathBuf, ApiError>,
    },
    /// The text content for an edit request arrived.
    EditContentLoaded {
        key: String,
        result: Result<String, ApiError>,
    },
    /// A save request finished.
    EditSaved {
        key: String,
        result: Result<(), ApiError>,
    },
    /// A bucket listing arrived.
    FilesLoaded { result: Result<Vec<String>, ApiError> },
    /// A folder-creation request finished with the normalized name.
    FolderCreated { result: Result<String, ApiError> },
    /// A top-level folder listing arrived.
    FoldersLoaded { result: Result<Vec<String>, ApiError> },
    /// The backend activity log arrived.
    LogsLoaded { result: Result<String, ApiError> },
    /// A restore round-trip (fetch version, re-upload) finished.
    RestoreFinished {
        key: String,
        result: Result<(), ApiError>,
    },
    /// An upload finished with the full stored key.
    UploadFinished { result: Result<String, ApiError> },
    /// The bucket versioning status arrived.
    VersioningLoaded { result: Result<String, ApiError> },
    /// A version history arrived for a key.
    VersionsLoaded {
        key: String,
        result: Result<Vec<VersionRecord>, ApiError>,
    },
}

/// An in-progress text edit of one object.
pub struct EditSession {
    /// Editable content with cursor.
    pub buffer: InputState,
    /// Key being edited.
    pub key: String,
    /// Whether a save request is in flight; input is frozen while true.
    pub saving: bool,
}

/// Stores application state and coordinates storage workflows.
pub struct App {
    pub browser: BrowserState,
    client: Arc<dyn StorageClient>,
    pub config: Config,
    pub edit: Option<EditSession>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    pub folders: Vec<String>,
    pub mode: AppMode,
    pub statuses: StatusBoard,
    /// Bucket versioning label, `None` until the first response arrives.
    pub versioning: Option<String>,
}

impl App {
    /// Builds an idle app; callers kick off the first fetches with
    /// [`App::start_initial_load`].
    pub fn new(client: Arc<dyn StorageClient>, config: Config) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        Self {
            browser: BrowserState::new(),
            client,
            config,
            edit: None,
            event_rx,
            event_tx,
            folders: Vec::new(),
            mode: AppMode::Browse,
            statuses: StatusBoard::default(),
            versioning: None,
        }
    }

    /// Requests the listing, folder list, and versioning status.
    pub fn start_initial_load(&mut self) {
        self.start_refresh_listing();
        self.start_refresh_folders();
        self.start_fetch_versioning();
    }

    /// Per-tick housekeeping: sweeps expired status messages.
    pub fn on_tick(&mut self) {
        self.statuses.sweep(Instant::now());
    }

    /// Applies the given event and everything else currently queued.
    pub(crate) fn apply_app_events(&mut self, first_event: AppEvent) {
        for event in self.drain_app_events(first_event) {
            self.apply_app_event(event);
        }
    }

    /// Processes currently queued app events without waiting.
    pub(crate) fn process_pending_app_events(&mut self) {
        let Ok(first_event) = self.event_rx.try_recv() else {
            return;
        };

        self.apply_app_events(first_event);
    }

    /// Waits for the next internal app event.
    pub(crate) async fn next_app_event(&mut self) -> Option<AppEvent> {
        self.event_rx.recv().await
    }

    fn drain_app_events(&mut self, first_event: AppEvent) -> Vec<AppEvent> {
        let mut events = vec![first_event];
        while let Ok(event) = self.event_rx.try_recv() {
            events.push(event);
        }

        events
    }

    /// Single reducer for backend results; every state mutation driven by a
    /// spawned operation goes through here.
    pub(crate) fn apply_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::FilesLoaded { result } => match result {
                Ok(files) => self.browser.apply_listing(&files),
                Err(error) => {
                    tracing::warn!(error = %error, "listing failed");
                    self.browser.apply_listing_error(format!("Error: {error}"));
                }
            },
            AppEvent::FoldersLoaded { result } => match result {
                Ok(folders) => self.folders = folders,
                Err(error) => tracing::warn!(error = %error, "folder listing failed"),
            },
            AppEvent::UploadFinished { result } => match result {
                Ok(key) => {
                    self.statuses
                        .set_upload(format!("Uploaded: {key}"), StatusKind::Info);
                    self.start_refresh_listing();
                    self.start_refresh_folders();
                }
                Err(error) => {
                    tracing::warn!(error = %error, "upload failed");
                    self.statuses
                        .set_upload(format!("Error: {error}"), StatusKind::Error);
                }
            },
            AppEvent::DeleteFinished { key, result } => match result {
                Ok(()) => {
                    self.start_refresh_listing();
                    self.start_refresh_folders();
                }
                Err(error) => {
                    tracing::warn!(key = %key, error = %error, "delete failed");
                    self.statuses
                        .set_notice(format!("Error: {error}"), StatusKind::Error);
                }
            },
            AppEvent::EditContentLoaded { key, result } => match result {
                Ok(content) => {
                    self.edit = Some(EditSession {
                        buffer: InputState::with_text(content),
                        key,
                        saving: false,
                    });
                    self.mode = AppMode::Edit;
                }
                Err(error) => {
                    tracing::warn!(key = %key, error = %error, "fetch for edit failed");
                    self.statuses
                        .set_notice(format!("Error: {error}"), StatusKind::Error);
                }
            },
            AppEvent::EditSaved { key, result } => match result {
                Ok(()) => {
                    self.edit = None;
                    if matches!(self.mode, AppMode::Edit) {
                        self.mode = AppMode::Browse;
                    }
                    self.statuses
                        .set_edit("Saved!".to_string(), StatusKind::Info);
                    self.start_refresh_listing();
                }
                Err(error) => {
                    tracing::warn!(key = %key, error = %error, "save failed");
                    if let Some(edit) = &mut self.edit {
                        edit.saving = false;
                    }
                    self.statuses
                        .set_edit(format!("Error: {error}"), StatusKind::Error);
                }
            },
            AppEvent::VersionsLoaded { key, result } => self.apply_versions_loaded(key, result),
            AppEvent::RestoreFinished { key, result } => match result {
                Ok(()) => {
                    self.statuses
                        .set_notice("Version restored!".to_string(), StatusKind::Info);
                    if matches!(self.mode, AppMode::Versions { .. }) {
                        self.mode = AppMode::Browse;
                    }
                    self.start_refresh_listing();
                }
                Err(error) => {
                    tracing::warn!(key = %key, error = %error, "restore failed");
                    self.statuses
                        .set_notice(format!("Error: {error}"), StatusKind::Error);
                }
            },
            AppEvent::FolderCreated { result } => match result {
                Ok(folder) => {
                    self.statuses
                        .set_folder(format!("Folder created: {folder}"), StatusKind::Info);
                    if let AppMode::CreateFolder { input } = &mut self.mode {
                        *input = InputState::new();
                    }
                    self.start_refresh_folders();
                }
                Err(error) => {
                    tracing::warn!(error = %error, "create folder failed");
                    let message = match &error {
                        ApiError::Backend(message) => message.clone(),
                        ApiError::Transport(_) => format!("Error: {error}"),
                    };
                    self.statuses.set_folder(message, StatusKind::Error);
                }
            },
            AppEvent::LogsLoaded { result } => {
                if let AppMode::Logs { content, .. } = &mut self.mode {
                    *content = Some(match result {
                        Ok(log) => log,
                        Err(error) => {
                            tracing::warn!(error = %error, "log fetch failed");
                            error.to_string()
                        }
                    });
                }
            }
            AppEvent::VersioningLoaded { result } => {
                self.versioning = Some(match result {
                    Ok(status) => status,
                    Err(error) => {
                        tracing::warn!(error = %error, "versioning fetch failed");
                        "Unknown".to_string()
                    }
                });
            }
            AppEvent::DownloadFinished { key, result } => match result {
                Ok(path) => self
                    .statuses
                    .set_notice(format!("Saved to {}", path.display()), StatusKind::Info),
                Err(error) => {
                    tracing::warn!(key = %key, error = %error, "download failed");
                    self.statuses
                        .set_notice(format!("Error: {error}"), StatusKind::Error);
                }
            },
        }
    }

    /// Applies a version-history response if its overlay is still open;
    /// stale responses for a different key are dropped.
    fn apply_versions_loaded(&mut self, key: String, result: Result<Vec<VersionRecord>, ApiError>) {
        let AppMode::Versions {
            key: open_key,
            records,
            selected,
        } = &mut self.mode
        else {
            return;
        };
        if *open_key != key {
            return;
        }

        match result {
            Ok(list) => {
                *selected = if list.is_empty() {
                    0
                } else {
                    (*selected).min(list.len() - 1)
                };
                *records = Some(list);
            }
            Err(error) => {
                tracing::warn!(key = %key, error = %error, "version listing failed");
                self.mode = AppMode::Browse;
                self.statuses
                    .set_notice(format!("Error: {error}"), StatusKind::Error);
            }
        }
    }

    /// Validates a folder name and requests creation when it is usable.
    ///
    /// Blank names never reach the network; the inline message mirrors the
    /// validation outcome.
    pub fn submit_create_folder(&mut self, name: &str) {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            self.statuses.set_folder(
                "Please enter a folder name.".to_string(),
                StatusKind::Error,
            );

            return;
        }

        self.start_create_folder(trimmed.to_string());
    }
}
