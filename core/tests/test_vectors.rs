//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and either the expected parse result or the expected error message.
//! Comparing parsed JSON (not raw strings) avoids false negatives from
//! field-ordering differences.

use karyawan_core::{
    ApiError, ClientConfig, EmployeeRecord, HttpMethod, HttpRequest, HttpResponse,
    ResourceClient, Transport,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

const BASE_URL: &str = "http://localhost:3000";

/// Vectors drive build and parse directly; nothing is sent.
struct Unused;

impl Transport for Unused {
    fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
        panic!("test vectors never execute requests");
    }
}

fn client() -> ResourceClient<Unused> {
    ResourceClient::with_transport(ClientConfig::new(BASE_URL), Unused)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn cases(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

fn simulated(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

fn assert_route(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.path, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: path");
}

/// Check a request that carries a JSON body.
fn assert_json_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_route(name, req, expected);

    let expected_headers: Vec<(String, String)> = expected["headers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| {
            let arr = h.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect();
    assert_eq!(req.headers, expected_headers, "{name}: headers");

    let req_body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
    assert_eq!(req_body, expected["body"], "{name}: body");
}

/// Compare a parse outcome with `expected_result` or `expected_error`.
fn assert_outcome<T>(name: &str, case: &Value, result: Result<T, ApiError>)
where
    T: DeserializeOwned + PartialEq + std::fmt::Debug,
{
    if let Some(expected_error) = case.get("expected_error") {
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), expected_error.as_str().unwrap(), "{name}: error");
    } else {
        let value = result.unwrap();
        let expected: T = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(value, expected, "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/create.json")) {
        let name = case["name"].as_str().unwrap();
        let input: EmployeeRecord = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_create(&input).unwrap();
        assert_json_request(name, &req, &case["expected_request"]);

        assert_outcome(name, &case, c.parse_create(simulated(&case)));
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/list.json")) {
        let name = case["name"].as_str().unwrap();

        let req = c.build_list_all();
        assert_route(name, &req, &case["expected_request"]);
        assert!(req.body.is_none(), "{name}: body should be None");

        assert_outcome(name, &case, c.parse_list_all(simulated(&case)));
    }
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[test]
fn get_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/get.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_i64().unwrap();

        let req = c.build_find_by_id(id);
        assert_route(name, &req, &case["expected_request"]);
        assert!(req.body.is_none(), "{name}: body should be None");

        assert_outcome(name, &case, c.parse_find_by_id(simulated(&case)));
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn update_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/update.json")) {
        let name = case["name"].as_str().unwrap();
        let input: EmployeeRecord = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_update(&input).unwrap();
        assert_json_request(name, &req, &case["expected_request"]);

        assert_outcome(name, &case, c.parse_update(simulated(&case)));
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/delete.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_i64().unwrap();

        let req = c.build_delete_by_id(id);
        assert_route(name, &req, &case["expected_request"]);
        assert!(req.body.is_none(), "{name}: body should be None");

        let result = c.parse_delete_by_id(simulated(&case));
        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            assert_eq!(err.to_string(), expected_error.as_str().unwrap(), "{name}: error");
        } else {
            assert!(result.is_ok(), "{name}: expected success");
        }
    }
}
