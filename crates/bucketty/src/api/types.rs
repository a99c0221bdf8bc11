use serde::Deserialize;

use super::error::ApiError;

/// One recorded version of an object, as reported by the backend.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct VersionRecord {
    /// Whether this version is the current one.
    #[serde(rename = "IsLatest")]
    pub is_latest: bool,
    /// Modification timestamp in RFC 3339 form.
    #[serde(rename = "LastModified")]
    pub last_modified: String,
    /// Version payload size in bytes.
    #[serde(rename = "Size")]
    pub size: u64,
    /// Backend-assigned version identifier.
    #[serde(rename = "VersionId")]
    pub version_id: String,
}

/// Envelope for `GET /api/list-files`.
#[derive(Debug, Deserialize)]
pub(crate) struct ListFilesResponse {
    #[serde(default)]
    pub(crate) error: Option<String>,
    #[serde(default)]
    pub(crate) files: Option<Vec<String>>,
}

impl ListFilesResponse {
    /// A missing `files` field without an error means an empty bucket.
    pub(crate) fn into_result(self) -> Result<Vec<String>, ApiError> {
        match (self.files, self.error) {
            (Some(files), _) => Ok(files),
            (None, Some(error)) => Err(ApiError::Backend(error)),
            (None, None) => Ok(Vec::new()),
        }
    }
}

/// Envelope for `GET /api/list-folders`.
#[derive(Debug, Deserialize)]
pub(crate) struct ListFoldersResponse {
    #[serde(default)]
    pub(crate) error: Option<String>,
    #[serde(default)]
    pub(crate) folders: Option<Vec<String>>,
}

impl ListFoldersResponse {
    pub(crate) fn into_result(self) -> Result<Vec<String>, ApiError> {
        match (self.folders, self.error) {
            (Some(folders), _) => Ok(folders),
            (None, Some(error)) => Err(ApiError::Backend(error)),
            (None, None) => Ok(Vec::new()),
        }
    }
}

/// Envelope for `POST /api/upload`.
#[derive(Debug, Deserialize)]
pub(crate) struct UploadResponse {
    #[serde(default)]
    pub(crate) error: Option<String>,
    #[serde(default)]
    pub(crate) filename: Option<String>,
    #[serde(default)]
    pub(crate) success: bool,
}

impl UploadResponse {
    /// Returns the full stored key of the uploaded object.
    pub(crate) fn into_result(self) -> Result<String, ApiError> {
        if self.success {
            self.filename
                .ok_or_else(|| ApiError::Backend("response missing filename".to_string()))
        } else {
            Err(ApiError::Backend(
                self.error.unwrap_or_else(|| "upload failed".to_string()),
            ))
        }
    }
}

/// Envelope for acknowledgement-only endpoints (delete, edit).
#[derive(Debug, Deserialize)]
pub(crate) struct AckResponse {
    #[serde(default)]
    pub(crate) error: Option<String>,
    #[serde(default)]
    pub(crate) success: bool,
}

impl AckResponse {
    pub(crate) fn into_result(self) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Backend(
                self.error.unwrap_or_else(|| "request failed".to_string()),
            ))
        }
    }
}

/// Envelope for `GET /api/get-file`.
#[derive(Debug, Deserialize)]
pub(crate) struct FileContentResponse {
    #[serde(default)]
    pub(crate) content: Option<String>,
    #[serde(default)]
    pub(crate) error: Option<String>,
}

impl FileContentResponse {
    pub(crate) fn into_result(self) -> Result<String, ApiError> {
        match (self.content, self.error) {
            (Some(content), _) => Ok(content),
            (None, error) => Err(ApiError::Backend(
                error.unwrap_or_else(|| "Unable to fetch file.".to_string()),
            )),
        }
    }
}

/// Envelope for `GET /api/list-versions`.
#[derive(Debug, Deserialize)]
pub(crate) struct ListVersionsResponse {
    #[serde(default)]
    pub(crate) error: Option<String>,
    #[serde(default)]
    pub(crate) versions: Option<Vec<VersionRecord>>,
}

impl ListVersionsResponse {
    /// An empty version list is a valid result, not an error.
    pub(crate) fn into_result(self) -> Result<Vec<VersionRecord>, ApiError> {
        match (self.versions, self.error) {
            (Some(versions), _) => Ok(versions),
            (None, Some(error)) => Err(ApiError::Backend(error)),
            (None, None) => Ok(Vec::new()),
        }
    }
}

/// Envelope for `POST /api/create-folder`.
#[derive(Debug, Deserialize)]
pub(crate) struct CreateFolderResponse {
    #[serde(default)]
    pub(crate) error: Option<String>,
    #[serde(default)]
    pub(crate) folder: Option<String>,
    #[serde(default)]
    pub(crate) success: bool,
}

impl CreateFolderResponse {
    /// Returns the normalized folder name (with its trailing slash).
    pub(crate) fn into_result(self, requested: String) -> Result<String, ApiError> {
        if self.success {
            Ok(self.folder.unwrap_or(requested))
        } else {
            Err(ApiError::Backend(
                self.error
                    .unwrap_or_else(|| "Error creating folder.".to_string()),
            ))
        }
    }
}

/// Envelope for `GET /api/logs`.
#[derive(Debug, Deserialize)]
pub(crate) struct LogsResponse {
    #[serde(default)]
    pub(crate) error: Option<String>,
    #[serde(default)]
    pub(crate) log: Option<String>,
}

impl LogsResponse {
    pub(crate) fn into_result(self) -> Result<String, ApiError> {
        match (self.log, self.error) {
            (Some(log), _) => Ok(log),
            (None, Some(error)) => Err(ApiError::Backend(error)),
            (None, None) => Ok(String::new()),
        }
    }
}

/// Envelope for `GET /api/versioning`.
#[derive(Debug, Deserialize)]
pub(crate) struct VersioningResponse {
    #[serde(default)]
    pub(crate) error: Option<String>,
    #[serde(default)]
    pub(crate) versioning: Option<String>,
}

impl VersioningResponse {
    pub(crate) fn into_result(self) -> Result<String, ApiError> {
        match (self.versioning, self.error) {
            (Some(versioning), _) => Ok(versioning),
            (None, Some(error)) => Err(ApiError::Backend(error)),
            (None, None) => Ok(String::new()),
        }
    }
}

/// Error payload attached to non-success byte responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub(crate) error: Option<String>,
}
