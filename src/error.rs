use reqwest::StatusCode;
use serde::Deserialize;
use std::fmt::Display;
use thiserror::Error;

/// Error object returned by the query API inside its JSON envelope.
#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub description: String,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
}

impl Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(kind) = &self.error_type {
            write!(f, "{}: {}", kind, self.description)
        } else {
            write!(f, "{}", self.description)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

impl Display for ApiErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Unauthorized - dataset is private or the token is invalid")]
    Unauthorized,

    #[error("API error: {0}")]
    ApiError(ApiErrorResponse),

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Response format error: {0}")]
    ResponseError(#[from] ResponseError),

    #[error("Missing configuration: {0}")]
    MissingConfig(String),
}

#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("Unexpected response structure: {0}")]
    UnexpectedStructure(String),

    #[error("Invalid response: {0}")]
    Invalid(String),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: StatusCode, body: String },
}

impl ResponseError {
    pub fn unexpected_structure(description: impl Into<String>) -> Self {
        Self::UnexpectedStructure(description.into())
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid(reason.into())
    }

    pub fn http_status(status: StatusCode, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }
}
