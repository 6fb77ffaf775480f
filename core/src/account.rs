//! Domain model for a bank account registered with the account service.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use uuid::Uuid;

/// Classification of an account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Classification {
    #[default]
    Personal,
    Business,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Personal => "Personal",
            Classification::Business => "Business",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names neither `Personal` nor `Business`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown account classification {0:?}")]
pub struct UnknownClassification(pub String);

impl FromStr for Classification {
    type Err = UnknownClassification;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Personal" => Ok(Classification::Personal),
            "Business" => Ok(Classification::Business),
            other => Err(UnknownClassification(other.to_string())),
        }
    }
}

/// A bank account as seen by callers of this crate.
///
/// `id` and `organisation_id` are fixed at construction. `version`,
/// `created_on` and `modified_on` are assigned by the service and only
/// change when an account is read back through the mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: Uuid,
    organisation_id: Uuid,
    pub(crate) version: u64,
    pub(crate) created_on: String,
    pub(crate) modified_on: String,
    /// ISO 3166 code of the account's domicile.
    pub country: String,
    /// ISO 4217 code of the base currency.
    pub base_currency: String,
    pub account_number: String,
    /// Local country bank identifier.
    pub bank_id: String,
    /// Type of bank identifier in `bank_id`, e.g. `GBDSC`.
    pub bank_id_code: String,
    pub bic: String,
    pub iban: String,
    /// Account holder name, one entry per printed line (up to four).
    pub name: Vec<String>,
    pub alternative_names: Vec<String>,
    pub classification: Classification,
    pub joint_account: bool,
    pub account_matching_opt_out: bool,
    pub secondary_identification: String,
    pub switched: bool,
}

impl Account {
    /// Create an account with every optional attribute at its default:
    /// version 0, empty strings, `Personal`, flags off, no alternative names.
    pub fn new(id: Uuid, organisation_id: Uuid, country: &str, name: Vec<String>) -> Self {
        Self {
            id,
            organisation_id,
            version: 0,
            created_on: String::new(),
            modified_on: String::new(),
            country: country.to_string(),
            base_currency: String::new(),
            account_number: String::new(),
            bank_id: String::new(),
            bank_id_code: String::new(),
            bic: String::new(),
            iban: String::new(),
            name,
            alternative_names: Vec::new(),
            classification: Classification::Personal,
            joint_account: false,
            account_matching_opt_out: false,
            secondary_identification: String::new(),
            switched: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn organisation_id(&self) -> Uuid {
        self.organisation_id
    }

    /// Version last observed from the service. Pass it back on delete.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn created_on(&self) -> &str {
        &self.created_on
    }

    pub fn modified_on(&self) -> &str {
        &self.modified_on
    }

    pub fn with_base_currency(mut self, currency: &str) -> Self {
        self.base_currency = currency.to_string();
        self
    }

    pub fn with_account_number(mut self, number: &str) -> Self {
        self.account_number = number.to_string();
        self
    }

    pub fn with_bank_id(mut self, bank_id: &str, bank_id_code: &str) -> Self {
        self.bank_id = bank_id.to_string();
        self.bank_id_code = bank_id_code.to_string();
        self
    }

    pub fn with_bic(mut self, bic: &str) -> Self {
        self.bic = bic.to_string();
        self
    }

    pub fn with_iban(mut self, iban: &str) -> Self {
        self.iban = iban.to_string();
        self
    }

    pub fn with_alternative_names(mut self, names: Vec<String>) -> Self {
        self.alternative_names = names;
        self
    }

    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classification = classification;
        self
    }

    pub fn with_secondary_identification(mut self, value: &str) -> Self {
        self.secondary_identification = value.to_string();
        self
    }
}
