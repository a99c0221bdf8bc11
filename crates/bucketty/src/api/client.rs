use std::future::Future;
use std::pin::Pin;

use super::error::ApiError;
use super::types::VersionRecord;

/// Boxed async result used by [`StorageClient`] trait methods.
pub type StorageFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Async boundary to the versioned object-storage backend.
///
/// Production uses [`HttpStorageClient`](super::http::HttpStorageClient),
/// while tests inject `MockStorageClient` to drive the app without a live
/// server.
#[cfg_attr(test, mockall::automock)]
pub trait StorageClient: Send + Sync {
    /// Lists every object key in the bucket, folder markers included.
    ///
    /// # Errors
    /// Returns an error when the backend is unreachable or reports a
    /// listing failure.
    fn list_files(&self) -> StorageFuture<Result<Vec<String>, ApiError>>;

    /// Lists top-level folder prefixes, each with a trailing slash.
    ///
    /// # Errors
    /// Returns an error when the backend is unreachable or reports a
    /// listing failure.
    fn list_folders(&self) -> StorageFuture<Result<Vec<String>, ApiError>>;

    /// Uploads `bytes` as `file_name`, optionally under `folder`, and
    /// returns the full stored key.
    ///
    /// # Errors
    /// Returns an error when the backend rejects the upload or cannot be
    /// reached.
    fn upload(
        &self,
        file_name: String,
        bytes: Vec<u8>,
        folder: Option<String>,
    ) -> StorageFuture<Result<String, ApiError>>;

    /// Deletes the object at `key`.
    ///
    /// # Errors
    /// Returns an error when the backend rejects the deletion or cannot be
    /// reached.
    fn delete_file(&self, key: String) -> StorageFuture<Result<(), ApiError>>;

    /// Fetches the object at `key` decoded as text.
    ///
    /// # Errors
    /// Returns an error when the object cannot be fetched or is not valid
    /// text.
    fn file_content(&self, key: String) -> StorageFuture<Result<String, ApiError>>;

    /// Overwrites the object at `key` with `content`.
    ///
    /// # Errors
    /// Returns an error when the backend rejects the write or cannot be
    /// reached.
    fn save_file(&self, key: String, content: String) -> StorageFuture<Result<(), ApiError>>;

    /// Lists the recorded versions of the object at `key`, newest first.
    ///
    /// # Errors
    /// Returns an error when the backend is unreachable or reports a
    /// failure; an object without versions yields an empty list.
    fn list_versions(&self, key: String) -> StorageFuture<Result<Vec<VersionRecord>, ApiError>>;

    /// Downloads the current bytes of the object at `key`.
    ///
    /// # Errors
    /// Returns an error when the object cannot be fetched.
    fn download(&self, key: String) -> StorageFuture<Result<Vec<u8>, ApiError>>;

    /// Downloads the bytes of one specific version of the object at `key`.
    ///
    /// # Errors
    /// Returns an error when the version cannot be fetched.
    fn download_version(
        &self,
        key: String,
        version_id: String,
    ) -> StorageFuture<Result<Vec<u8>, ApiError>>;

    /// Creates a folder prefix named `folder` and returns its normalized
    /// name (with the trailing slash).
    ///
    /// # Errors
    /// Returns an error when the folder already exists or the backend
    /// cannot be reached.
    fn create_folder(&self, folder: String) -> StorageFuture<Result<String, ApiError>>;

    /// Fetches the bucket's activity log as one text blob.
    ///
    /// # Errors
    /// Returns an error when the backend is unreachable or reports a
    /// failure.
    fn activity_log(&self) -> StorageFuture<Result<String, ApiError>>;

    /// Fetches the bucket's versioning status label.
    ///
    /// # Errors
    /// Returns an error when the backend is unreachable or reports a
    /// failure.
    fn versioning_status(&self) -> StorageFuture<Result<String, ApiError>>;
}
