use thiserror::Error;

pub const NOT_FOUND_MESSAGE: &str = "Resource not found.";
pub const INVALID_DATA_MESSAGE: &str = "Invalid data provided.";
pub const SERVER_ERROR_MESSAGE: &str = "Server error occurred.";
pub const DEFAULT_SERVER_MESSAGE: &str = "An error occurred";
pub const NO_CONNECTION_MESSAGE: &str =
    "Unable to connect to server. Please check your internet connection.";
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Server rejected request with status {status}")]
    ServerRejected { status: u16, detail: Option<String> },

    #[error("No response from server: {reason}")]
    NoResponse { reason: String },

    #[error("Request could not be sent: {reason}")]
    RequestFailed { reason: String },

    #[error("Response body could not be decoded: {reason}")]
    InvalidResponse { reason: String },

    #[error("Configuration error in {field}: {message}")]
    Config { field: String, message: String },

    #[error("Validation error in {field}: {message}")]
    Validation { field: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        let reason = err.to_string();
        if err.is_builder() {
            ApiError::RequestFailed { reason }
        } else if err.is_timeout() || err.is_connect() || err.is_request() {
            ApiError::NoResponse { reason }
        } else if err.is_decode() || err.is_body() {
            ApiError::InvalidResponse { reason }
        } else if let Some(status) = err.status() {
            ApiError::ServerRejected {
                status: status.as_u16(),
                detail: None,
            }
        } else {
            ApiError::RequestFailed { reason }
        }
    }
}

/// The user-facing message categories a failure can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    NotFound,
    InvalidData,
    ServerError,
    ServerMessage,
    NoConnection,
    Unexpected,
}

impl ApiError {
    pub fn class(&self) -> ErrorClass {
        match self {
            ApiError::ServerRejected { status: 404, .. } => ErrorClass::NotFound,
            ApiError::ServerRejected { status: 422, .. } => ErrorClass::InvalidData,
            ApiError::ServerRejected { status: 500, .. } => ErrorClass::ServerError,
            ApiError::ServerRejected { .. } => ErrorClass::ServerMessage,
            ApiError::NoResponse { .. } => ErrorClass::NoConnection,
            _ => ErrorClass::Unexpected,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        handle_api_error(self)
    }

    pub fn is_connectivity(&self) -> bool {
        self.class() == ErrorClass::NoConnection
    }
}

/// Turns any failure into the message shown to the visitor.
pub fn handle_api_error(error: &ApiError) -> String {
    match error.class() {
        ErrorClass::NotFound => NOT_FOUND_MESSAGE.to_string(),
        ErrorClass::InvalidData => INVALID_DATA_MESSAGE.to_string(),
        ErrorClass::ServerError => SERVER_ERROR_MESSAGE.to_string(),
        ErrorClass::ServerMessage => match error {
            ApiError::ServerRejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => DEFAULT_SERVER_MESSAGE.to_string(),
        },
        ErrorClass::NoConnection => NO_CONNECTION_MESSAGE.to_string(),
        ErrorClass::Unexpected => UNEXPECTED_MESSAGE.to_string(),
    }
}

/// Pulls `detail`, then `message`, out of an error body. Empty strings count as absent.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["detail", "message"].iter().find_map(|key| {
        value
            .get(key)
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}
