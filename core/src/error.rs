//! Error types for the account client.
//!
//! # Design
//! Every status the account service documents gets its own `AccountError`
//! variant so callers can match on outcomes instead of strings. Anything the
//! service was not expected to return lands in `RequestFailed` with the raw
//! status and body. Failures to complete the exchange at all are kept apart
//! in `Transport`.

use thiserror::Error;
use uuid::Uuid;

/// Errors returned by the mapper, the gateway and the service facade.
#[derive(Debug, Error)]
pub enum AccountError {
    /// A wire field that must hold a UUID (or a closed enum value) did not.
    #[error("malformed {field}: {value:?}")]
    MalformedIdentifier { field: &'static str, value: String },

    /// A caller-supplied identifier string is not a UUID.
    #[error("given id must be a valid uuid type")]
    InvalidId(String),

    /// The service rejected the payload (400 or 409 on create).
    #[error("{message}")]
    ValidationFailed {
        message: String,
        code: Option<String>,
    },

    /// No account exists with the given identifier.
    #[error("account with uid {id} not found")]
    NotFound { id: Uuid },

    /// The account exists but not at the version supplied on delete.
    #[error("account {id} does not exist at version {version}")]
    VersionConflict { id: Uuid, version: u64 },

    /// The service returned a status the operation does not expect.
    #[error("unexpected status {status}")]
    RequestFailed { status: u16, body: String },

    /// The HTTP exchange could not be completed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

/// The transport failed before a response status was available.
#[derive(Debug, Error)]
#[error("account service unreachable: {source}")]
pub struct TransportError {
    #[source]
    source: Box<dyn std::error::Error + Send + Sync + 'static>,
}

impl TransportError {
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// Errors raised while assembling a `GatewayConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("base url must not be empty")]
    EmptyBaseUrl,
}
