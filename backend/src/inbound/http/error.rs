//! HTTP adapter mapping for domain errors.
//!
//! The JSON surface renders [`Error`] as its serialised envelope. The HTML
//! surface wraps failures in [`PageError`], which renders the message as
//! plain text.

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Result alias for JSON handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Result alias for HTML handlers.
pub type PageResult<T> = Result<T, PageError>;

pub(crate) fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn log_if_internal(error: &Error) {
    if error.code() == ErrorCode::InternalError {
        error!(reason = error.message(), trace_id = error.trace_id(), "request failed");
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        log_if_internal(self);
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(self)
    }
}

/// Failure on the HTML surface, rendered as a plain-text body.
#[derive(Debug, Clone, PartialEq)]
pub struct PageError(Error);

impl PageError {
    /// Wrap an error with a replacement client-facing message.
    ///
    /// The status still follows the original error code.
    pub fn with_message(error: Error, message: &str) -> Self {
        let mut replaced = Error::new(error.code(), message);
        if let Some(id) = error.trace_id() {
            replaced = replaced.with_trace_id(id.to_owned());
        }
        if error.code() == ErrorCode::InternalError {
            error!(cause = error.message(), "{message}");
        }
        Self(replaced)
    }

    pub fn inner(&self) -> &Error {
        &self.0
    }
}

impl From<Error> for PageError {
    fn from(value: Error) -> Self {
        Self(value)
    }
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.message())
    }
}

impl ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        status_for(self.0.code())
    }

    fn error_response(&self) -> HttpResponse {
        log_if_internal(&self.0);
        let mut builder = HttpResponse::build(self.status_code());
        builder.content_type(ContentType::plaintext());
        if let Some(id) = self.0.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.body(self.0.message().to_owned())
    }
}
