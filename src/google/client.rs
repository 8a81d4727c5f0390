//! Authenticated REST client context for the Slides and Drive APIs.
//!
//! One context per process; handlers obtain it through `AppState` after the
//! credentials check. Every method is a single outbound round trip with the
//! remote service as the sole source of truth — nothing is cached here.

use std::sync::Arc;

use crate::errors::AppError;
use crate::google::auth::TokenSource;
use crate::google::types::{
    BatchUpdateBody, DriveCopyBody, DriveFile, Presentation, Request,
};

const SLIDES_API: &str = "https://slides.googleapis.com/v1";
const DRIVE_API: &str = "https://www.googleapis.com/drive/v3";

/// Outcome of independently probing both access paths to a presentation.
/// Partial access is a valid, reportable state, not an error.
#[derive(Debug, Clone)]
pub struct AccessReport {
    pub presentation_id: String,
    pub file_name: String,
    pub slide_count: usize,
    pub slides_api_access: bool,
    pub slides_api_error: Option<String>,
    pub drive_api_access: bool,
    pub drive_api_error: Option<String>,
    pub overall_access: bool,
}

#[derive(Clone)]
pub struct GoogleContext {
    http: reqwest::Client,
    tokens: Arc<TokenSource>,
}

impl GoogleContext {
    pub fn new(http: reqwest::Client, tokens: Arc<TokenSource>) -> Self {
        GoogleContext { http, tokens }
    }

    async fn checked(
        response: reqwest::Response,
        operation: &str,
    ) -> Result<reqwest::Response, AppError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Remote(format!("{operation} failed ({status}): {body}")))
    }

    /// Fetch the full document tree of a presentation.
    pub async fn get_presentation(
        &self,
        presentation_id: &str,
    ) -> Result<Presentation, AppError> {
        let token = self.tokens.bearer_token().await?;
        let response = self
            .http
            .get(format!("{SLIDES_API}/presentations/{presentation_id}"))
            .bearer_auth(&token)
            .send()
            .await?;
        let response = Self::checked(response, "presentations.get").await?;
        Ok(response.json().await?)
    }

    /// Submit one atomic batch of mutation operations. A call with no
    /// operations is a no-op rather than a remote error.
    pub async fn batch_update(
        &self,
        presentation_id: &str,
        requests: Vec<Request>,
    ) -> Result<(), AppError> {
        if requests.is_empty() {
            return Ok(());
        }
        let count = requests.len();
        let token = self.tokens.bearer_token().await?;
        let response = self
            .http
            .post(format!("{SLIDES_API}/presentations/{presentation_id}:batchUpdate"))
            .bearer_auth(&token)
            .json(&BatchUpdateBody { requests })
            .send()
            .await?;
        Self::checked(response, "presentations.batchUpdate").await?;
        log::info!("Applied batch of {count} operations to {presentation_id}");
        Ok(())
    }

    /// Drive metadata for a file (name and MIME type).
    pub async fn drive_file(&self, file_id: &str) -> Result<DriveFile, AppError> {
        let token = self.tokens.bearer_token().await?;
        let response = self
            .http
            .get(format!("{DRIVE_API}/files/{file_id}"))
            .query(&[("fields", "name,mimeType"), ("supportsAllDrives", "true")])
            .bearer_auth(&token)
            .send()
            .await?;
        let response = Self::checked(response, "files.get").await?;
        Ok(response.json().await?)
    }

    /// Copy a Drive file, optionally into a folder. Returns the new file id.
    pub async fn drive_copy(
        &self,
        file_id: &str,
        name: &str,
        folder_id: Option<&str>,
    ) -> Result<String, AppError> {
        let token = self.tokens.bearer_token().await?;
        let body = DriveCopyBody {
            name: name.to_string(),
            parents: folder_id.map(|f| vec![f.to_string()]),
        };
        let response = self
            .http
            .post(format!("{DRIVE_API}/files/{file_id}/copy"))
            .query(&[("supportsAllDrives", "true")])
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await?;
        let response = Self::checked(response, "files.copy").await?;
        let file: DriveFile = response.json().await?;
        file.id
            .ok_or_else(|| AppError::Remote("copy response carried no file id".to_string()))
    }

    /// Probe read access through the Slides path and the Drive path
    /// independently. Neither probe failing fails the call.
    pub async fn verify_access(&self, presentation_id: &str) -> AccessReport {
        let (slides_api_access, slides_api_error, slide_count) =
            match self.get_presentation(presentation_id).await {
                Ok(presentation) => (true, None, presentation.slides.len()),
                Err(e) => (false, Some(e.to_string()), 0),
            };

        let (drive_api_access, drive_api_error, file_name) =
            match self.drive_file(presentation_id).await {
                Ok(file) => (true, None, file.name.unwrap_or_else(|| "Unknown".to_string())),
                Err(e) => (false, Some(e.to_string()), "Unknown".to_string()),
            };

        AccessReport {
            presentation_id: presentation_id.to_string(),
            file_name,
            slide_count,
            slides_api_access,
            slides_api_error,
            drive_api_access,
            drive_api_error,
            overall_access: slides_api_access && drive_api_access,
        }
    }
}
