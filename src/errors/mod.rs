use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

pub const DB_UNAVAILABLE_MESSAGE: &str = "Database connection not available.";

#[derive(Debug)]
pub enum AppError {
    DatabaseUnavailable,
    DatabaseError(String),
    AWSError(String),
    IoError(String),
    InvalidColor(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DatabaseUnavailable => write!(f, "{}", DB_UNAVAILABLE_MESSAGE),
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
            AppError::AWSError(msg) => write!(f, "AWS Error: {}", msg),
            AppError::IoError(msg) => write!(f, "IO Error: {}", msg),
            AppError::InvalidColor(msg) => write!(f, "Invalid color {}", msg),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl ResponseError for AppError {
    // Plain text bodies: the only user-visible one is the unavailability message.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}
