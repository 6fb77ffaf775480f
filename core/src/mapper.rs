//! Conversion between `Account` and its wire document.

use uuid::Uuid;

use crate::account::{Account, Classification};
use crate::dto::{AccountAttributes, AccountData, AccountDto, RESOURCE_TYPE};
use crate::error::AccountError;

/// Build the wire document for `account`. Every field is copied; nothing in
/// the result borrows from `account`.
pub fn to_wire(account: &Account) -> AccountDto {
    AccountDto {
        data: AccountData {
            resource_type: RESOURCE_TYPE.to_string(),
            id: account.id().to_string(),
            organisation_id: account.organisation_id().to_string(),
            version: account.version,
            created_on: account.created_on.clone(),
            modified_on: account.modified_on.clone(),
            attributes: AccountAttributes {
                country: account.country.clone(),
                base_currency: account.base_currency.clone(),
                account_number: account.account_number.clone(),
                bank_id: account.bank_id.clone(),
                bank_id_code: account.bank_id_code.clone(),
                bic: account.bic.clone(),
                iban: account.iban.clone(),
                name: account.name.clone(),
                alternative_names: account.alternative_names.clone(),
                account_classification: account.classification.as_str().to_string(),
                joint_account: account.joint_account,
                account_matching_opt_out: account.account_matching_opt_out,
                secondary_identification: account.secondary_identification.clone(),
                switched: account.switched,
            },
        },
    }
}

/// Rebuild an `Account` from a wire document.
///
/// Fails with `MalformedIdentifier` when `type` is not `accounts`, when `id`
/// or `organisation_id` is not a UUID, or when the classification is neither
/// `Personal` nor `Business`.
/// An empty classification decodes to `Personal`.
pub fn from_wire(dto: AccountDto) -> Result<Account, AccountError> {
    let data = dto.data;
    if data.resource_type != RESOURCE_TYPE {
        return Err(AccountError::MalformedIdentifier {
            field: "type",
            value: data.resource_type,
        });
    }
    let id = parse_uuid("id", &data.id)?;
    let organisation_id = parse_uuid("organisation_id", &data.organisation_id)?;
    let attributes = data.attributes;

    let classification = match attributes.account_classification.as_str() {
        "" => Classification::default(),
        raw => raw.parse().map_err(|_| AccountError::MalformedIdentifier {
            field: "account_classification",
            value: raw.to_string(),
        })?,
    };

    let mut account = Account::new(id, organisation_id, &attributes.country, attributes.name);
    account.version = data.version;
    account.created_on = data.created_on;
    account.modified_on = data.modified_on;
    account.base_currency = attributes.base_currency;
    account.account_number = attributes.account_number;
    account.bank_id = attributes.bank_id;
    account.bank_id_code = attributes.bank_id_code;
    account.bic = attributes.bic;
    account.iban = attributes.iban;
    account.alternative_names = attributes.alternative_names;
    account.classification = classification;
    account.joint_account = attributes.joint_account;
    account.account_matching_opt_out = attributes.account_matching_opt_out;
    account.secondary_identification = attributes.secondary_identification;
    account.switched = attributes.switched;
    Ok(account)
}

fn parse_uuid(field: &'static str, value: &str) -> Result<Uuid, AccountError> {
    Uuid::parse_str(value).map_err(|_| AccountError::MalformedIdentifier {
        field,
        value: value.to_string(),
    })
}

impl From<&Account> for AccountDto {
    fn from(account: &Account) -> Self {
        to_wire(account)
    }
}

impl TryFrom<AccountDto> for Account {
    type Error = AccountError;

    fn try_from(dto: AccountDto) -> Result<Self, Self::Error> {
        from_wire(dto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MALFORMED: &[&str] = &[
        "",
        "not-a-uuid",
        "c1-70-41-9a-e21",
        "ad27e265-9605-4b4b-a0e5-3003ea9cc4d",
        "ad27e265-9605-4b4b-a0e5-3003ea9cc4dcX",
        "zd27e265-9605-4b4b-a0e5-3003ea9cc4dc",
        "{ad27e265-9605-4b4b-a0e5",
        "ünïcödé",
        "   ",
    ];

    fn full_account() -> Account {
        let mut account = Account::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "GB",
            vec!["Samantha".to_string(), "Holder".to_string()],
        )
        .with_base_currency("GBP")
        .with_account_number("41426819")
        .with_bank_id("400300", "GBDSC")
        .with_bic("NWBKGB22")
        .with_iban("GB11NWBK40030041426819")
        .with_alternative_names(vec!["Sam Holder".to_string()])
        .with_classification(Classification::Business)
        .with_secondary_identification("A1B2C3D4");
        account.joint_account = true;
        account.account_matching_opt_out = true;
        account.switched = true;
        account
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let account = full_account();
        let back = from_wire(to_wire(&account)).unwrap();
        assert_eq!(back, account);
    }

    #[test]
    fn round_trip_of_defaults() {
        let account = Account::new(Uuid::new_v4(), Uuid::new_v4(), "PT", vec!["Pedro".to_string()]);
        let back = from_wire(to_wire(&account)).unwrap();
        assert_eq!(back, account);
    }

    #[test]
    fn to_wire_sets_type_and_identifiers() {
        let account = full_account();
        let dto = to_wire(&account);
        assert_eq!(dto.data.resource_type, "accounts");
        assert_eq!(dto.data.id, account.id().to_string());
        assert_eq!(dto.data.organisation_id, account.organisation_id().to_string());
        assert_eq!(dto.data.attributes.account_classification, "Business");
        assert_eq!(dto.data.attributes.name, vec!["Samantha", "Holder"]);
    }

    #[test]
    fn to_wire_copies_name_lines() {
        let mut account = full_account();
        let dto = to_wire(&account);
        account.name[0] = "Changed".to_string();
        assert_eq!(dto.data.attributes.name[0], "Samantha");
    }

    #[test]
    fn server_fields_are_read_back() {
        let mut dto = to_wire(&full_account());
        dto.data.version = 4;
        dto.data.created_on = "2021-03-01T10:00:00.000Z".to_string();
        dto.data.modified_on = "2021-03-02T10:00:00.000Z".to_string();

        let account = from_wire(dto).unwrap();
        assert_eq!(account.version(), 4);
        assert_eq!(account.created_on(), "2021-03-01T10:00:00.000Z");
        assert_eq!(account.modified_on(), "2021-03-02T10:00:00.000Z");
    }

    #[test]
    fn malformed_id_is_reported() {
        for bad in MALFORMED {
            let mut dto = to_wire(&full_account());
            dto.data.id = bad.to_string();
            match from_wire(dto) {
                Err(AccountError::MalformedIdentifier { field, value }) => {
                    assert_eq!(field, "id");
                    assert_eq!(value, *bad);
                }
                other => panic!("{bad:?}: expected MalformedIdentifier, got {other:?}"),
            }
        }
    }

    #[test]
    fn malformed_organisation_id_is_reported() {
        for bad in MALFORMED {
            let mut dto = to_wire(&full_account());
            dto.data.organisation_id = bad.to_string();
            let err = from_wire(dto).unwrap_err();
            assert!(
                matches!(err, AccountError::MalformedIdentifier { field: "organisation_id", .. }),
                "{bad:?}: got {err:?}"
            );
        }
    }

    #[test]
    fn unknown_classification_is_rejected() {
        let mut dto = to_wire(&full_account());
        dto.data.attributes.account_classification = "Corporate".to_string();
        let err = from_wire(dto).unwrap_err();
        assert!(matches!(
            err,
            AccountError::MalformedIdentifier { field: "account_classification", .. }
        ));
    }

    #[test]
    fn other_resource_type_is_rejected() {
        let mut dto = to_wire(&full_account());
        dto.data.resource_type = "payments".to_string();
        match from_wire(dto) {
            Err(AccountError::MalformedIdentifier { field, value }) => {
                assert_eq!(field, "type");
                assert_eq!(value, "payments");
            }
            other => panic!("expected MalformedIdentifier, got {other:?}"),
        }
    }

    #[test]
    fn missing_classification_defaults_to_personal() {
        let mut dto = to_wire(&full_account());
        dto.data.attributes.account_classification.clear();
        let account = from_wire(dto).unwrap();
        assert_eq!(account.classification, Classification::Personal);
    }

    #[test]
    fn absent_optionals_decode_to_zero_values() {
        let dto: AccountDto = serde_json::from_str(
            r#"{"data":{"type":"accounts",
                "id":"ad27e265-9605-4b4b-a0e5-3003ea9cc4dc",
                "organisation_id":"eb0bd6f5-c3f5-44b2-b677-acd23cdde73c",
                "attributes":{"country":"GB","name":["Only"],"alternative_names":null}}}"#,
        )
        .unwrap();
        let account = Account::try_from(dto).unwrap();
        assert_eq!(account.version(), 0);
        assert_eq!(account.name, vec!["Only"]);
        assert!(account.alternative_names.is_empty());
        assert!(account.iban.is_empty());
        assert!(!account.joint_account);
        assert_eq!(account.classification, Classification::Personal);
    }
}
