//! Backend operations spawned off the UI loop.
//!
//! Each operation clones the client and event sender, runs the request on a
//! task, and reports back through a single [`AppEvent`]. Nothing here touches
//! app state directly.

use std::path::PathBuf;
use std::sync::Arc;

use crate::api::client::StorageClient;
use crate::api::error::ApiError;
use crate::app::{App, AppEvent};
use crate::domain::file;

impl App {
    /// Requests a fresh bucket listing and puts the browser in loading state.
    pub(crate) fn start_refresh_listing(&mut self) {
        self.browser.mark_loading();
        let client = Arc::clone(&self.client);
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = client.list_files().await;
            let _ = event_tx.send(AppEvent::FilesLoaded { result });
        });
    }

    /// Requests the top-level folder list used by the upload picker.
    pub(crate) fn start_refresh_folders(&mut self) {
        let client = Arc::clone(&self.client);
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = client.list_folders().await;
            let _ = event_tx.send(AppEvent::FoldersLoaded { result });
        });
    }

    /// Requests the bucket versioning status shown in the header.
    pub(crate) fn start_fetch_versioning(&mut self) {
        let client = Arc::clone(&self.client);
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = client.versioning_status().await;
            let _ = event_tx.send(AppEvent::VersioningLoaded { result });
        });
    }

    /// Requests the backend activity log.
    pub(crate) fn start_fetch_logs(&mut self) {
        let client = Arc::clone(&self.client);
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = client.activity_log().await;
            let _ = event_tx.send(AppEvent::LogsLoaded { result });
        });
    }

    /// Reads a local file and uploads it, optionally into a folder.
    ///
    /// A leading `~/` is expanded to the home directory before the read.
    pub(crate) fn start_upload(&mut self, raw_path: &str, folder: Option<String>) {
        let path = expand_home(raw_path);
        let client = Arc::clone(&self.client);
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = read_and_upload(client, path, folder).await;
            let _ = event_tx.send(AppEvent::UploadFinished { result });
        });
    }

    /// Requests deletion of one object.
    pub(crate) fn start_delete(&mut self, key: String) {
        let client = Arc::clone(&self.client);
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = client.delete_file(key.clone()).await;
            let _ = event_tx.send(AppEvent::DeleteFinished { key, result });
        });
    }

    /// Fetches the text content of an object to open it in the editor.
    pub(crate) fn start_open_edit(&mut self, key: String) {
        let client = Arc::clone(&self.client);
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = client.file_content(key.clone()).await;
            let _ = event_tx.send(AppEvent::EditContentLoaded { key, result });
        });
    }

    /// Saves the editor buffer back to its key.
    ///
    /// No-op without an edit session or while a save is already in flight.
    pub(crate) fn start_save_edit(&mut self) {
        let Some(edit) = &mut self.edit else {
            return;
        };
        if edit.saving {
            return;
        }
        edit.saving = true;

        let key = edit.key.clone();
        let content = edit.buffer.text().to_string();
        let client = Arc::clone(&self.client);
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = client.save_file(key.clone(), content).await;
            let _ = event_tx.send(AppEvent::EditSaved { key, result });
        });
    }

    /// Requests the version history of one object.
    pub(crate) fn start_list_versions(&mut self, key: String) {
        let client = Arc::clone(&self.client);
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = client.list_versions(key.clone()).await;
            let _ = event_tx.send(AppEvent::VersionsLoaded { key, result });
        });
    }

    /// Restores a historical version by re-uploading its bytes as the
    /// current object, stored under the bare file name.
    pub(crate) fn start_restore(&mut self, key: String, version_id: String) {
        let client = Arc::clone(&self.client);
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = restore_version(client, key.clone(), version_id).await;
            let _ = event_tx.send(AppEvent::RestoreFinished { key, result });
        });
    }

    /// Downloads the current bytes of an object into the download directory.
    pub(crate) fn start_download(&mut self, key: String) {
        let client = Arc::clone(&self.client);
        let event_tx = self.event_tx.clone();
        let download_dir = self.config.download_dir.clone();
        tokio::spawn(async move {
            let result = match client.download(key.clone()).await {
                Ok(bytes) => write_download(download_dir, &key, bytes).await,
                Err(error) => Err(error),
            };
            let _ = event_tx.send(AppEvent::DownloadFinished { key, result });
        });
    }

    /// Downloads one historical version into the download directory.
    pub(crate) fn start_download_version(&mut self, key: String, version_id: String) {
        let client = Arc::clone(&self.client);
        let event_tx = self.event_tx.clone();
        let download_dir = self.config.download_dir.clone();
        tokio::spawn(async move {
            let result = match client.download_version(key.clone(), version_id).await {
                Ok(bytes) => write_download(download_dir, &key, bytes).await,
                Err(error) => Err(error),
            };
            let _ = event_tx.send(AppEvent::DownloadFinished { key, result });
        });
    }

    /// Requests creation of a top-level folder.
    pub(crate) fn start_create_folder(&mut self, folder: String) {
        let client = Arc::clone(&self.client);
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = client.create_folder(folder).await;
            let _ = event_tx.send(AppEvent::FolderCreated { result });
        });
    }
}

async fn read_and_upload(
    client: Arc<dyn StorageClient>,
    path: PathBuf,
    folder: Option<String>,
) -> Result<String, ApiError> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| ApiError::Transport(format!("not a file: {}", path.display())))?;
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|error| ApiError::Transport(error.to_string()))?;

    client.upload(file_name, bytes, folder).await
}

async fn restore_version(
    client: Arc<dyn StorageClient>,
    key: String,
    version_id: String,
) -> Result<(), ApiError> {
    let bytes = client.download_version(key.clone(), version_id).await?;
    let file_name = file::file_name(&key).to_string();
    client.upload(file_name, bytes, None).await?;

    Ok(())
}

async fn write_download(
    download_dir: PathBuf,
    key: &str,
    bytes: Vec<u8>,
) -> Result<PathBuf, ApiError> {
    tokio::fs::create_dir_all(&download_dir)
        .await
        .map_err(|error| ApiError::Transport(error.to_string()))?;
    let target = download_dir.join(file::file_name(key));
    tokio::fs::write(&target, bytes)
        .await
        .map_err(|error| ApiError::Transport(error.to_string()))?;

    Ok(target)
}

fn expand_home(raw_path: &str) -> PathBuf {
    if let Some(rest) = raw_path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }

    PathBuf::from(raw_path)
}
