//! OpenAPI schema wrappers for domain types.
//!
//! Domain types stay free of `ToSchema`; these mirrors register their shape
//! with utoipa under the domain type names.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested habit does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// Storage or another collaborator failed.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message; storage failures carry the driver message.
    #[schema(example = "name must not be empty")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "6f1c1f7e-1b38-4a8e-9d55-0a3bb7b3e2a1")]
    trace_id: Option<String>,
    /// Validation context such as the offending field.
    details: Option<serde_json::Value>,
}
