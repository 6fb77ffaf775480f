//! Domain-level facade over `AccountGateway`.

use uuid::Uuid;

use crate::account::Account;
use crate::error::AccountError;
use crate::gateway::AccountGateway;
use crate::http::Transport;
use crate::mapper::{from_wire, to_wire};

/// Creates, fetches and deletes `Account` values.
///
/// Identifiers given as strings are parsed before any request is sent; an
/// unparsable one fails with `AccountError::InvalidId`.
#[derive(Debug, Clone)]
pub struct AccountService<T> {
    gateway: AccountGateway<T>,
}

impl<T: Transport> AccountService<T> {
    pub fn new(gateway: AccountGateway<T>) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &AccountGateway<T> {
        &self.gateway
    }

    /// Register `account` and return it as stored, with the service-assigned
    /// version and timestamps.
    pub fn create_account(&self, account: &Account) -> Result<Account, AccountError> {
        let created = self.gateway.create(&to_wire(account))?;
        from_wire(created)
    }

    pub fn get_account(&self, id: &str) -> Result<Account, AccountError> {
        let id = parse_id(id)?;
        from_wire(self.gateway.get(id)?)
    }

    pub fn delete_account(&self, id: &str, version: u64) -> Result<(), AccountError> {
        let id = parse_id(id)?;
        self.gateway.delete(id, version)
    }
}

fn parse_id(id: &str) -> Result<Uuid, AccountError> {
    Uuid::parse_str(id).map_err(|_| AccountError::InvalidId(id.to_string()))
}
