//! Blocking client core for the account service.
//!
//! # Overview
//! Maps `Account` domain values to the service's JSON:API-style documents,
//! issues create / fetch / delete requests, and classifies each HTTP outcome
//! into a typed `AccountError`.
//!
//! # Design
//! - `AccountClient` is stateless: it holds only `base_url` and splits every
//!   operation into `build_*` (produces an `HttpRequest`) and `parse_*`
//!   (consumes an `HttpResponse`). Hosts that own their I/O can stop there.
//! - `AccountGateway` pairs the client with a `Transport` and runs the round
//!   trip. `UreqTransport` is the default blocking transport.
//! - `AccountService` works in domain terms on top of the gateway, running
//!   every payload through `mapper`.
//! - Wire types (`dto`) are defined independently from the mock-server crate;
//!   integration tests catch schema drift.

pub mod account;
pub mod client;
pub mod config;
pub mod dto;
pub mod error;
pub mod gateway;
pub mod http;
pub mod mapper;
pub mod message;
pub mod service;
#[cfg(feature = "ureq")]
pub mod transport;

pub use account::{Account, Classification};
pub use client::AccountClient;
pub use config::GatewayConfig;
pub use dto::{AccountAttributes, AccountData, AccountDto, ErrorDocument};
pub use error::{AccountError, ConfigError, TransportError};
pub use gateway::AccountGateway;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use mapper::{from_wire, to_wire};
pub use message::extract_error_message;
pub use service::AccountService;
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
