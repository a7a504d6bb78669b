//! Registry response models and error classification.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Status codes used by the registry's RPC error responses.
///
/// Mirrors the Connect/gRPC code vocabulary; the wire form is snake_case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCode {
    Canceled,
    Unknown,
    InvalidArgument,
    DeadlineExceeded,
    NotFound,
    AlreadyExists,
    PermissionDenied,
    ResourceExhausted,
    FailedPrecondition,
    Aborted,
    OutOfRange,
    Unimplemented,
    Internal,
    Unavailable,
    DataLoss,
    Unauthenticated,
}

impl StatusCode {
    /// Parse a wire code. Unrecognized codes become [`StatusCode::Unknown`].
    pub fn from_wire(code: &str) -> Self {
        match code {
            "canceled" | "cancelled" => StatusCode::Canceled,
            "invalid_argument" => StatusCode::InvalidArgument,
            "deadline_exceeded" => StatusCode::DeadlineExceeded,
            "not_found" => StatusCode::NotFound,
            "already_exists" => StatusCode::AlreadyExists,
            "permission_denied" => StatusCode::PermissionDenied,
            "resource_exhausted" => StatusCode::ResourceExhausted,
            "failed_precondition" => StatusCode::FailedPrecondition,
            "aborted" => StatusCode::Aborted,
            "out_of_range" => StatusCode::OutOfRange,
            "unimplemented" => StatusCode::Unimplemented,
            "internal" => StatusCode::Internal,
            "unavailable" => StatusCode::Unavailable,
            "data_loss" => StatusCode::DataLoss,
            "unauthenticated" => StatusCode::Unauthenticated,
            _ => StatusCode::Unknown,
        }
    }

    /// Fallback code for an HTTP status when the body carries none.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => StatusCode::InvalidArgument,
            401 => StatusCode::Unauthenticated,
            403 => StatusCode::PermissionDenied,
            404 => StatusCode::NotFound,
            408 | 504 => StatusCode::DeadlineExceeded,
            409 => StatusCode::AlreadyExists,
            429 | 502 | 503 => StatusCode::Unavailable,
            499 => StatusCode::Canceled,
            501 => StatusCode::Unimplemented,
            500 => StatusCode::Internal,
            _ => StatusCode::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCode::Canceled => "canceled",
            StatusCode::Unknown => "unknown",
            StatusCode::InvalidArgument => "invalid_argument",
            StatusCode::DeadlineExceeded => "deadline_exceeded",
            StatusCode::NotFound => "not_found",
            StatusCode::AlreadyExists => "already_exists",
            StatusCode::PermissionDenied => "permission_denied",
            StatusCode::ResourceExhausted => "resource_exhausted",
            StatusCode::FailedPrecondition => "failed_precondition",
            StatusCode::Aborted => "aborted",
            StatusCode::OutOfRange => "out_of_range",
            StatusCode::Unimplemented => "unimplemented",
            StatusCode::Internal => "internal",
            StatusCode::Unavailable => "unavailable",
            StatusCode::DataLoss => "data_loss",
            StatusCode::Unauthenticated => "unauthenticated",
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A failed create call as reported by the registry or the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryFailure {
    pub code: StatusCode,
    pub message: String,
}

impl RegistryFailure {
    pub fn new(code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for RegistryFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Result of a single create call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The record was created. The registry-assigned identifier is kept when
    /// the response carried a non-empty one.
    Created { id: Option<String> },
    /// The natural key already exists in the registry.
    Conflict { detail: String },
    /// Any other failure.
    Failed(RegistryFailure),
}

impl CreateOutcome {
    /// Created outcome, dropping blank identifiers.
    pub fn created(id: Option<String>) -> Self {
        CreateOutcome::Created {
            id: id.filter(|id| !id.trim().is_empty()),
        }
    }

    /// Classify an error reported by the registry.
    ///
    /// `already_exists` is the only benign code. A cancelled call is not an
    /// item outcome at all and surfaces as [`Error::Cancelled`].
    pub fn from_status(code: StatusCode, message: impl Into<String>) -> Result<Self> {
        let message = message.into();
        match code {
            StatusCode::AlreadyExists => Ok(CreateOutcome::Conflict { detail: message }),
            StatusCode::Canceled => Err(Error::Cancelled),
            code => Ok(CreateOutcome::Failed(RegistryFailure::new(code, message))),
        }
    }
}

/// An asset as returned by the registry's `ListAssets` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredAsset {
    pub asset_id: String,
    pub symbol: String,
}
