use reqwest::multipart;
use serde::de::DeserializeOwned;
use url::Url;

use super::client::{StorageClient, StorageFuture};
use super::error::ApiError;
use super::types::{
    AckResponse, CreateFolderResponse, ErrorBody, FileContentResponse, ListFilesResponse,
    ListFoldersResponse, ListVersionsResponse, LogsResponse, UploadResponse, VersionRecord,
    VersioningResponse,
};

/// HTTP implementation of [`StorageClient`] backed by the bucket REST API.
///
/// The backend reports application failures as JSON `error` payloads, so
/// JSON endpoints are decoded regardless of HTTP status and the envelope
/// decides between success and [`ApiError::Backend`].
#[derive(Clone)]
pub struct HttpStorageClient {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpStorageClient {
    /// Creates a client for the backend at `base_url`.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|error| ApiError::Transport(error.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.endpoint(path)?)
            .query(query)
            .send()
            .await?;

        Ok(response.json::<T>().await?)
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .post(self.endpoint(path)?)
            .json(&body)
            .send()
            .await?;

        Ok(response.json::<T>().await?)
    }

    async fn get_bytes(&self, path: &str, query: &[(&str, &str)]) -> Result<Vec<u8>, ApiError> {
        let response = self
            .client
            .get(self.endpoint(path)?)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| format!("HTTP {status}"));

            return Err(ApiError::Backend(message));
        }

        Ok(response.bytes().await?.to_vec())
    }

    async fn fetch_files(&self) -> Result<Vec<String>, ApiError> {
        self.get_json::<ListFilesResponse>("/api/list-files", &[])
            .await?
            .into_result()
    }

    async fn fetch_folders(&self) -> Result<Vec<String>, ApiError> {
        self.get_json::<ListFoldersResponse>("/api/list-folders", &[])
            .await?
            .into_result()
    }

    async fn send_upload(
        &self,
        file_name: String,
        bytes: Vec<u8>,
        folder: Option<String>,
    ) -> Result<String, ApiError> {
        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/octet-stream")?;
        let mut form = multipart::Form::new().part("file", part);
        if let Some(folder) = folder {
            form = form.text("folder", folder);
        }

        let response = self
            .client
            .post(self.endpoint("/api/upload")?)
            .multipart(form)
            .send()
            .await?;

        response.json::<UploadResponse>().await?.into_result()
    }

    async fn send_delete(&self, key: String) -> Result<(), ApiError> {
        self.post_json::<AckResponse>("/api/delete-file", serde_json::json!({ "key": key }))
            .await?
            .into_result()
    }

    async fn fetch_content(&self, key: String) -> Result<String, ApiError> {
        self.get_json::<FileContentResponse>("/api/get-file", &[("key", key.as_str())])
            .await?
            .into_result()
    }

    async fn send_save(&self, key: String, content: String) -> Result<(), ApiError> {
        self.post_json::<AckResponse>(
            "/api/edit-file",
            serde_json::json!({ "key": key, "content": content }),
        )
        .await?
        .into_result()
    }

    async fn fetch_versions(&self, key: String) -> Result<Vec<VersionRecord>, ApiError> {
        self.get_json::<ListVersionsResponse>("/api/list-versions", &[("key", key.as_str())])
            .await?
            .into_result()
    }

    async fn fetch_download(&self, key: String) -> Result<Vec<u8>, ApiError> {
        // `download=1` asks the backend for an attachment instead of a preview.
        self.get_bytes("/api/download", &[("key", key.as_str()), ("download", "1")])
            .await
    }

    async fn fetch_version_download(
        &self,
        key: String,
        version_id: String,
    ) -> Result<Vec<u8>, ApiError> {
        self.get_bytes(
            "/api/download-version",
            &[("key", key.as_str()), ("version_id", version_id.as_str())],
        )
        .await
    }

    async fn send_create_folder(&self, folder: String) -> Result<String, ApiError> {
        self.post_json::<CreateFolderResponse>(
            "/api/create-folder",
            serde_json::json!({ "folder": folder.clone() }),
        )
        .await?
        .into_result(folder)
    }

    async fn fetch_log(&self) -> Result<String, ApiError> {
        self.get_json::<LogsResponse>("/api/logs", &[])
            .await?
            .into_result()
    }

    async fn fetch_versioning(&self) -> Result<String, ApiError> {
        self.get_json::<VersioningResponse>("/api/versioning", &[])
            .await?
            .into_result()
    }
}

impl StorageClient for HttpStorageClient {
    fn list_files(&self) -> StorageFuture<Result<Vec<String>, ApiError>> {
        let client = self.clone();
        Box::pin(async move { client.fetch_files().await })
    }

    fn list_folders(&self) -> StorageFuture<Result<Vec<String>, ApiError>> {
        let client = self.clone();
        Box::pin(async move { client.fetch_folders().await })
    }

    fn upload(
        &self,
        file_name: String,
        bytes: Vec<u8>,
        folder: Option<String>,
    ) -> StorageFuture<Result<String, ApiError>> {
        let client = self.clone();
        Box::pin(async move { client.send_upload(file_name, bytes, folder).await })
    }

    fn delete_file(&self, key: String) -> StorageFuture<Result<(), ApiError>> {
        let client = self.clone();
        Box::pin(async move { client.send_delete(key).await })
    }

    fn file_content(&self, key: String) -> StorageFuture<Result<String, ApiError>> {
        let client = self.clone();
        Box::pin(async move { client.fetch_content(key).await })
    }

    fn save_file(&self, key: String, content: String) -> StorageFuture<Result<(), ApiError>> {
        let client = self.clone();
        Box::pin(async move { client.send_save(key, content).await })
    }

    fn list_versions(&self, key: String) -> StorageFuture<Result<Vec<VersionRecord>, ApiError>> {
        let client = self.clone();
        Box::pin(async move { client.fetch_versions(key).await })
    }

    fn download(&self, key: String) -> StorageFuture<Result<Vec<u8>, ApiError>> {
        let client = self.clone();
        Box::pin(async move { client.fetch_download(key).await })
    }

    fn download_version(
        &self,
        key: String,
        version_id: String,
    ) -> StorageFuture<Result<Vec<u8>, ApiError>> {
        let client = self.clone();
        Box::pin(async move { client.fetch_version_download(key, version_id).await })
    }

    fn create_folder(&self, folder: String) -> StorageFuture<Result<String, ApiError>> {
        let client = self.clone();
        Box::pin(async move { client.send_create_folder(folder).await })
    }

    fn activity_log(&self) -> StorageFuture<Result<String, ApiError>> {
        let client = self.clone();
        Box::pin(async move { client.fetch_log().await })
    }

    fn versioning_status(&self) -> StorageFuture<Result<String, ApiError>> {
        let client = self.clone();
        Box::pin(async move { client.fetch_versioning().await })
    }
}
