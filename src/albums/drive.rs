use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const FILES_ENDPOINT: &str = "https://www.googleapis.com/drive/v3/files";
pub const FOLDER_MIME: &str = "application/vnd.google-apps.folder";

const PAGE_SIZE: &str = "100";
const FIELDS: &str = "nextPageToken,files(id,name,mimeType)";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub mime_type: String,
}

impl DriveFile {
    pub fn is_folder(&self) -> bool {
        self.mime_type == FOLDER_MIME
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

/// One response page of `files.list`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilePage {
    #[serde(default)]
    pub files: Vec<DriveFile>,
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug)]
pub struct DriveError(pub String);

impl std::fmt::Display for DriveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for DriveError {}

/// Source of folder listings, one page per call.
pub trait FolderLister {
    fn list_page(
        &self,
        folder_id: &str,
        api_key: &str,
        page_token: Option<&str>,
    ) -> Result<FilePage, DriveError>;
}

/// All children of a folder, following continuation tokens until the API
/// stops returning one. Any page carrying an error object fails the listing.
pub fn list_folder<L: FolderLister + ?Sized>(
    lister: &L,
    folder_id: &str,
    api_key: &str,
) -> Result<Vec<DriveFile>, DriveError> {
    let mut all = Vec::new();
    let mut page_token: Option<String> = None;
    loop {
        let page = lister.list_page(folder_id, api_key, page_token.as_deref())?;
        if let Some(err) = page.error {
            return Err(DriveError(err.message));
        }
        all.extend(page.files);
        match page.next_page_token.filter(|t| !t.is_empty()) {
            Some(token) => page_token = Some(token),
            None => break,
        }
    }
    Ok(all)
}

/// Blocking HTTP client for the Drive v3 `files.list` endpoint, authorized
/// with a plain API key.
pub struct DriveClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl DriveClient {
    pub fn new() -> Result<Self, DriveError> {
        Self::with_endpoint(FILES_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: &str) -> Result<Self, DriveError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| DriveError(format!("HTTP client error: {}", e)))?;
        Ok(DriveClient {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }
}

impl FolderLister for DriveClient {
    fn list_page(
        &self,
        folder_id: &str,
        api_key: &str,
        page_token: Option<&str>,
    ) -> Result<FilePage, DriveError> {
        let mut query: Vec<(&str, String)> = vec![
            ("q", format!("'{}' in parents and trashed=false", folder_id)),
            ("key", api_key.to_string()),
            ("fields", FIELDS.to_string()),
            ("pageSize", PAGE_SIZE.to_string()),
            ("orderBy", "name".to_string()),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token.to_string()));
        }

        log::debug!("[drive] listing folder {} (page token: {:?})", folder_id, page_token);

        // Error responses still carry a JSON body with an `error` object, so
        // the status code is not checked separately.
        let resp = self
            .http
            .get(&self.endpoint)
            .query(&query)
            .send()
            .map_err(|e| DriveError(format!("Drive request failed: {}", e)))?;

        resp.json::<FilePage>()
            .map_err(|e| DriveError(format!("Drive returned an unreadable listing: {}", e)))
    }
}
