use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use serde::Serialize;
use thiserror::Error;

use crate::models::ValidationError;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
}

impl ErrorBody {
    pub fn new(error: &str, code: &str) -> Self {
        ErrorBody { error: error.to_string(), code: code.to_string() }
    }
}

/// Every failure a route can report. Converted to a JSON `{error, code}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("invalid request body: {0}")]
    BadPayload(String),
    #[error("malformatted id")]
    MalformedId,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("password hashing failed: {0}")]
    PasswordHash(String),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::Validation(_) | ApiError::BadPayload(_) | ApiError::MalformedId => Status::BadRequest,
            ApiError::NotFound(_) => Status::NotFound,
            ApiError::Database(_) | ApiError::PasswordHash(_) => Status::InternalServerError,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) | ApiError::BadPayload(_) => "VALIDATION_ERROR",
            ApiError::MalformedId => "MALFORMED_ID",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Database(_) => "DB_ERROR",
            ApiError::PasswordHash(_) => "INTERNAL_ERROR",
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        if status.code >= 500 {
            log::error!("{} {} failed: {}", req.method(), req.uri(), self);
        }
        (status, Json(ErrorBody::new(&self.to_string(), self.code()))).respond_to(req)
    }
}

impl From<password_hash::Error> for ApiError {
    fn from(e: password_hash::Error) -> Self {
        ApiError::PasswordHash(e.to_string())
    }
}

/// Parses a record identifier, rejecting anything that is not a UUID.
pub fn parse_id(id: &str) -> Result<uuid::Uuid, ApiError> {
    uuid::Uuid::parse_str(id).map_err(|_| ApiError::MalformedId)
}
