use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const ACCOUNTS_PATH: &str = "/v1/organisation/accounts";

const MAX_NAME_LINES: usize = 4;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccountDocument {
    pub data: AccountRecord,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccountRecord {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub organisation_id: String,
    #[serde(default)]
    pub version: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<String>,
    #[serde(default)]
    pub attributes: Attributes,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(default)]
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_id_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(default)]
    pub name: Vec<String>,
    pub alternative_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_classification: Option<String>,
    #[serde(default)]
    pub joint_account: bool,
    #[serde(default)]
    pub account_matching_opt_out: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_identification: Option<String>,
    #[serde(default)]
    pub switched: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

#[derive(Deserialize)]
pub struct DeleteParams {
    pub version: Option<u64>,
}

pub type Db = Arc<RwLock<HashMap<Uuid, AccountRecord>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route(ACCOUNTS_PATH, post(create_account))
        .route(
            &format!("{ACCOUNTS_PATH}/{{id}}"),
            get(fetch_account).delete(delete_account),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn error(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ErrorBody {
        error_message: message.into(),
        error_code: None,
    };
    (status, Json(body)).into_response()
}

/// Collect every violation in `record`, formatted the way the upstream
/// validator nests them.
fn validate(record: &AccountRecord) -> Option<String> {
    let mut failures = Vec::new();
    if record.kind != "accounts" {
        failures.push("type in body should be one of [accounts]".to_string());
    }
    if Uuid::parse_str(&record.id).is_err() {
        failures.push(format!("id in body must be of type uuid: {:?}", record.id));
    }
    if Uuid::parse_str(&record.organisation_id).is_err() {
        failures.push(format!(
            "organisation_id in body must be of type uuid: {:?}",
            record.organisation_id
        ));
    }

    let attributes = &record.attributes;
    if attributes.country.is_empty() {
        failures.push("country in body is required".to_string());
    }
    if attributes.name.is_empty() {
        failures.push("name in body should have at least 1 items".to_string());
    }
    if attributes.name.len() > MAX_NAME_LINES {
        failures.push(format!("name in body should have at most {MAX_NAME_LINES} items"));
    }
    for (index, line) in attributes.name.iter().enumerate() {
        if line.is_empty() {
            failures.push(format!("name.{index} in body should be at least 1 chars long"));
        }
    }
    if let Some(classification) = &attributes.account_classification {
        if classification != "Personal" && classification != "Business" {
            failures.push(
                "account_classification in body should be one of [Personal Business]".to_string(),
            );
        }
    }

    if failures.is_empty() {
        None
    } else {
        Some(format!(
            "validation failure list:\nvalidation failure list:\n{}",
            failures.join("\n")
        ))
    }
}

async fn create_account(State(db): State<Db>, Json(input): Json<AccountDocument>) -> Response {
    let mut record = input.data;
    if let Some(message) = validate(&record) {
        return error(StatusCode::BAD_REQUEST, message);
    }
    let Ok(id) = Uuid::parse_str(&record.id) else {
        return error(StatusCode::BAD_REQUEST, "id in body must be of type uuid");
    };

    let mut accounts = db.write().await;
    if accounts.contains_key(&id) {
        return error(
            StatusCode::CONFLICT,
            "Account cannot be created as it violates a duplicate constraint",
        );
    }

    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    record.version = 0;
    record.created_on = Some(now.clone());
    record.modified_on = Some(now);
    accounts.insert(id, record.clone());
    tracing::debug!(%id, "account created");

    (StatusCode::CREATED, Json(AccountDocument { data: record })).into_response()
}

async fn fetch_account(State(db): State<Db>, Path(id): Path<Uuid>) -> Response {
    let accounts = db.read().await;
    match accounts.get(&id) {
        Some(record) => Json(AccountDocument {
            data: record.clone(),
        })
        .into_response(),
        None => error(StatusCode::NOT_FOUND, format!("record {id} does not exist")),
    }
}

async fn delete_account(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Query(params): Query<DeleteParams>,
) -> Response {
    let Some(version) = params.version else {
        return error(StatusCode::BAD_REQUEST, "version is required");
    };

    let mut accounts = db.write().await;
    let stored = accounts.get(&id).map(|record| record.version);
    match stored {
        None => StatusCode::NOT_FOUND.into_response(),
        Some(current) if current != version => error(StatusCode::CONFLICT, "invalid version"),
        Some(_) => {
            accounts.remove(&id);
            tracing::debug!(%id, version, "account deleted");
            StatusCode::NO_CONTENT.into_response()
        }
    }
}
