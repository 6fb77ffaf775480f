//! Wire documents exchanged with the account service.
//!
//! # Design
//! Identifiers and the classification stay as strings here; `mapper` is the
//! single place they are validated. Optional string attributes are left out
//! of outbound documents when empty, and every field decodes to its zero
//! value when absent. `name` and `alternative_names` additionally treat
//! `null` as an empty list and are always serialized as arrays.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Resource type tag carried by every account document.
pub const RESOURCE_TYPE: &str = "accounts";

/// Top-level `{"data": ...}` envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountDto {
    pub data: AccountData,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountData {
    #[serde(rename = "type", default = "resource_type")]
    pub resource_type: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub organisation_id: String,
    #[serde(default)]
    pub version: u64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created_on: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub modified_on: String,
    #[serde(default)]
    pub attributes: AccountAttributes,
}

impl Default for AccountData {
    fn default() -> Self {
        Self {
            resource_type: resource_type(),
            id: String::new(),
            organisation_id: String::new(),
            version: 0,
            created_on: String::new(),
            modified_on: String::new(),
            attributes: AccountAttributes::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountAttributes {
    #[serde(default)]
    pub country: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub base_currency: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub account_number: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bank_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bank_id_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bic: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub iban: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub alternative_names: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub account_classification: String,
    #[serde(default)]
    pub joint_account: bool,
    #[serde(default)]
    pub account_matching_opt_out: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub secondary_identification: String,
    #[serde(default)]
    pub switched: bool,
}

/// Error body returned by the service on 4xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDocument {
    #[serde(default)]
    pub error_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl fmt::Display for ErrorDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error_code {
            Some(code) => write!(f, "error '{}' with code '{code}'", self.error_message),
            None => write!(f, "error '{}'", self.error_message),
        }
    }
}

fn resource_type() -> String {
    RESOURCE_TYPE.to_string()
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
