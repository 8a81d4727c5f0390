use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

/// Crate-wide error type. Everything except `Remote` is a caller problem and
/// maps to 400; `Remote` wraps failures reported by the Slides/Drive services
/// (or the transport on the way there) and maps to 500.
#[derive(Debug)]
pub enum AppError {
    InvalidReference(String),
    SlideNotFound(String),
    MissingMarkers(Vec<String>),
    EmptyIdentifierSet,
    EmptyReplacementSet,
    NothingToReplace,
    UnsupportedFormat(String),
    EmptyExtraction,
    CredentialsMissing(String),
    BadRequest(String),
    Remote(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidReference(reference) => {
                write!(f, "Could not extract an id from: {reference}")
            }
            AppError::SlideNotFound(ids) => {
                write!(f, "No slide contains the identifiers: {ids}")
            }
            AppError::MissingMarkers(markers) => {
                write!(f, "Markers missing from the target slide: {}", markers.join(", "))
            }
            AppError::EmptyIdentifierSet => {
                write!(f, "At least one slide identifier is required (e.g. $intro)")
            }
            AppError::EmptyReplacementSet => write!(f, "The replacement map is empty"),
            AppError::NothingToReplace => {
                write!(f, "None of the requested markers were found on the slide")
            }
            AppError::UnsupportedFormat(ext) => {
                write!(f, "Unsupported document format: {ext} (expected .pdf or .docx)")
            }
            AppError::EmptyExtraction => {
                write!(f, "No text could be extracted from the document")
            }
            AppError::CredentialsMissing(detail) => {
                write!(f, "Credentials file not available: {detail}")
            }
            AppError::BadRequest(msg) => write!(f, "{msg}"),
            AppError::Remote(msg) => write!(f, "Remote service error: {msg}"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Remote(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Remote(_) => log::error!("{self}"),
            _ => log::warn!("{self}"),
        }
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "success": false,
            "error": self.to_string(),
        }))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Remote(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Remote(format!("malformed response body: {e}"))
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        AppError::Remote(format!("failed to sign token assertion: {e}"))
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Remote(format!("io error: {e}"))
    }
}
