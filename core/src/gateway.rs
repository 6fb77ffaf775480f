//! Executes account operations over a `Transport`.
//!
//! # Design
//! The gateway owns an `AccountClient` and a transport and nothing else, so
//! it can be shared across threads when the transport can. Each call is one
//! request/response cycle. Failures are returned exactly once; retrying is
//! left to the caller.

use uuid::Uuid;

use crate::client::AccountClient;
use crate::config::GatewayConfig;
use crate::dto::AccountDto;
use crate::error::AccountError;
use crate::http::{HttpRequest, HttpResponse, Transport};

/// Blocking gateway to the account collection resource.
#[derive(Debug, Clone)]
pub struct AccountGateway<T> {
    client: AccountClient,
    transport: T,
}

#[cfg(feature = "ureq")]
impl AccountGateway<crate::transport::UreqTransport> {
    /// Gateway backed by a fresh `UreqTransport`.
    pub fn new(config: &GatewayConfig) -> Self {
        Self::with_transport(config, crate::transport::UreqTransport::new())
    }
}

impl<T: Transport> AccountGateway<T> {
    pub fn with_transport(config: &GatewayConfig, transport: T) -> Self {
        Self {
            client: AccountClient::new(config.base_url()),
            transport,
        }
    }

    pub fn client(&self) -> &AccountClient {
        &self.client
    }

    /// POST a new account document.
    pub fn create(&self, dto: &AccountDto) -> Result<AccountDto, AccountError> {
        let request = self.client.build_create(dto)?;
        let response = self.send(&request)?;
        self.client.parse_create(response)
    }

    /// GET the account stored under `id`.
    pub fn get(&self, id: Uuid) -> Result<AccountDto, AccountError> {
        let request = self.client.build_get(id);
        let response = self.send(&request)?;
        self.client.parse_get(id, response)
    }

    /// DELETE the account `id`, which must currently be at `version`.
    pub fn delete(&self, id: Uuid, version: u64) -> Result<(), AccountError> {
        let request = self.client.build_delete(id, version);
        let response = self.send(&request)?;
        self.client.parse_delete(id, version, response)
    }

    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, AccountError> {
        tracing::debug!(method = %request.method, url = %request.path, "sending account request");
        let response = self.transport.execute(request)?;
        tracing::debug!(
            method = %request.method,
            url = %request.path,
            status = response.status,
            "account service responded"
        );
        Ok(response)
    }
}
