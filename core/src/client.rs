//! Stateless HTTP request builder and response classifier for the account
//! service.
//!
//! # Design
//! `AccountClient` holds only a `base_url` (the account collection resource)
//! and carries no mutable state between calls. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! turns an `HttpResponse` into a typed outcome. `AccountGateway` drives both
//! halves over a `Transport`; hosts that run their own I/O can use this type
//! directly.

use uuid::Uuid;

use crate::dto::{AccountDto, ErrorDocument};
use crate::error::AccountError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, CONTENT_TYPE};
use crate::message::extract_error_message;

/// Request builder and response classifier for the account endpoints.
#[derive(Debug, Clone)]
pub struct AccountClient {
    base_url: String,
}

impl AccountClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_create(&self, dto: &AccountDto) -> Result<HttpRequest, AccountError> {
        let body =
            serde_json::to_string(dto).map_err(|e| AccountError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.base_url.clone(),
            headers: vec![("content-type".to_string(), CONTENT_TYPE.to_string())],
            body: Some(body),
        })
    }

    pub fn build_get(&self, id: Uuid) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/{id}", self.base_url),
            headers: vec![("accept".to_string(), CONTENT_TYPE.to_string())],
            body: None,
        }
    }

    pub fn build_delete(&self, id: Uuid, version: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/{id}?version={version}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// 201 yields the stored document; 400 and 409 carry the service's
    /// validation message.
    pub fn parse_create(&self, response: HttpResponse) -> Result<AccountDto, AccountError> {
        match response.status {
            201 => decode(&response.body),
            400 | 409 => Err(validation_failure(&response.body)),
            status => Err(request_failed(status, response.body)),
        }
    }

    pub fn parse_get(&self, id: Uuid, response: HttpResponse) -> Result<AccountDto, AccountError> {
        match response.status {
            200 => decode(&response.body),
            404 => Err(AccountError::NotFound { id }),
            status => Err(request_failed(status, response.body)),
        }
    }

    pub fn parse_delete(
        &self,
        id: Uuid,
        version: u64,
        response: HttpResponse,
    ) -> Result<(), AccountError> {
        match response.status {
            _ if response.is_success() => Ok(()),
            404 => Err(AccountError::NotFound { id }),
            409 => Err(AccountError::VersionConflict { id, version }),
            status => Err(request_failed(status, response.body)),
        }
    }
}

fn decode(body: &str) -> Result<AccountDto, AccountError> {
    serde_json::from_str(body).map_err(|e| AccountError::Deserialization(e.to_string()))
}

/// Build `ValidationFailed` from an error document. A body that is not an
/// error document is surfaced verbatim (last line) rather than dropped.
fn validation_failure(body: &str) -> AccountError {
    match serde_json::from_str::<ErrorDocument>(body) {
        Ok(doc) => AccountError::ValidationFailed {
            message: extract_error_message(&doc.error_message),
            code: doc.error_code,
        },
        Err(_) => AccountError::ValidationFailed {
            message: extract_error_message(body),
            code: None,
        },
    }
}

fn request_failed(status: u16, body: String) -> AccountError {
    AccountError::RequestFailed { status, body }
}
