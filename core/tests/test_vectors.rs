//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected outcomes. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences.

use account_core::{AccountClient, AccountDto, AccountError, HttpMethod, HttpResponse};
use uuid::Uuid;

const BASE_URL: &str = "http://localhost:8080/v1/organisation/accounts";

fn client() -> AccountClient {
    AccountClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn simulated_response(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

/// Check an error against the vector's `expected_error` (and, where given,
/// `expected_message` / `expected_status`).
fn assert_expected_error(name: &str, case: &serde_json::Value, err: AccountError) {
    let expected = case["expected_error"].as_str().unwrap();
    match (expected, err) {
        ("ValidationFailed", AccountError::ValidationFailed { message, .. }) => {
            assert_eq!(message, case["expected_message"].as_str().unwrap(), "{name}: message");
        }
        ("NotFound", AccountError::NotFound { id }) => {
            assert_eq!(id.to_string(), case["input_id"].as_str().unwrap(), "{name}: id");
        }
        ("VersionConflict", AccountError::VersionConflict { version, .. }) => {
            assert_eq!(version, case["input_version"].as_u64().unwrap(), "{name}: version");
        }
        ("RequestFailed", AccountError::RequestFailed { status, .. }) => {
            assert_eq!(
                u64::from(status),
                case["expected_status"].as_u64().unwrap(),
                "{name}: status"
            );
        }
        (expected, err) => panic!("{name}: expected {expected}, got {err:?}"),
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let raw = include_str!("../../test-vectors/create.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: AccountDto = serde_json::from_value(case["input"].clone()).unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_create(&input).unwrap();
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");

        let expected_headers: Vec<(String, String)> = expected_req["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");

        let req_body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(req_body, expected_req["body"], "{name}: body");

        // Verify parse
        let result = c.parse_create(simulated_response(case));
        if case.get("expected_error").is_some() {
            assert_expected_error(name, case, result.unwrap_err());
        } else {
            let expected: AccountDto = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[test]
fn get_test_vectors() {
    let raw = include_str!("../../test-vectors/get.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id: Uuid = case["input_id"].as_str().unwrap().parse().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_get(id);
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");
        assert!(req.body.is_none(), "{name}: body should be None");

        // Verify parse
        let result = c.parse_get(id, simulated_response(case));
        if case.get("expected_error").is_some() {
            assert_expected_error(name, case, result.unwrap_err());
        } else {
            let expected: AccountDto = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let raw = include_str!("../../test-vectors/delete.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id: Uuid = case["input_id"].as_str().unwrap().parse().unwrap();
        let version = case["input_version"].as_u64().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_delete(id, version);
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");
        assert!(req.body.is_none(), "{name}: body should be None");

        // Verify parse
        let result = c.parse_delete(id, version, simulated_response(case));
        if case.get("expected_error").is_some() {
            assert_expected_error(name, case, result.unwrap_err());
        } else {
            assert!(result.is_ok(), "{name}: expected success");
        }
    }
}
