//! Integration tests for `AdminClient` collection mutations.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no real
//! network traffic is made. Covers the happy paths, userErrors-as-warnings,
//! and every error variant the mutations can propagate.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use citydeals_shopify::{product_gid, AdminClient, AdminError, ADMIN_API_VERSION};

/// Builds an `AdminClient` pointed at the mock server: 5-second timeout, no retries.
fn test_client(server: &MockServer) -> AdminClient {
    AdminClient::with_base_url(&server.uri(), "shpat_test", 5, "citydeals-test/0.1")
        .expect("failed to build test AdminClient")
}

fn graphql_path() -> String {
    format!("/admin/api/{ADMIN_API_VERSION}/graphql.json")
}

/// A successful mutation response with no userErrors.
fn clean_response(field: &str) -> serde_json::Value {
    json!({ "data": { field: { "userErrors": [] } } })
}

// ---------------------------------------------------------------------------
// Test 1 – add happy path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn add_products_succeeds_with_no_user_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(graphql_path()))
        .and(header("X-Shopify-Access-Token", "shpat_test"))
        .and(body_partial_json(json!({
            "variables": {
                "id": "gid://shopify/Collection/1",
                "pids": ["gid://shopify/Product/42"]
            }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(&clean_response("collectionAddProducts")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client
        .collection_add_products("gid://shopify/Collection/1", &product_gid(42))
        .await;

    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    assert!(result.unwrap().is_empty(), "expected no userErrors");
}

// ---------------------------------------------------------------------------
// Test 2 – remove happy path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn remove_products_succeeds_with_no_user_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(graphql_path()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(&clean_response("collectionRemoveProducts")),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client
        .collection_remove_products("gid://shopify/Collection/2", &product_gid(42))
        .await;

    assert!(result.is_ok(), "expected Ok, got: {result:?}");
}

// ---------------------------------------------------------------------------
// Test 3 – userErrors are returned, not raised
// ---------------------------------------------------------------------------

#[tokio::test]
async fn user_errors_are_surfaced_as_warnings_not_failures() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(graphql_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "data": {
                "collectionAddProducts": {
                    "userErrors": [
                        { "field": ["productIds"], "message": "Product is archived" }
                    ]
                }
            }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client
        .collection_add_products("gid://shopify/Collection/1", &product_gid(42))
        .await;

    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let warnings = result.unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].message, "Product is archived");
    assert_eq!(warnings[0].field.as_deref(), Some(&["productIds".to_owned()][..]));
}

// ---------------------------------------------------------------------------
// Test 4 – top-level GraphQL errors fail the call
// ---------------------------------------------------------------------------

#[tokio::test]
async fn top_level_graphql_errors_become_graphql_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(graphql_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "errors": [
                { "message": "Invalid global id" },
                { "message": "Throttled" }
            ]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client
        .collection_add_products("not-a-gid", &product_gid(42))
        .await;

    match result {
        Err(AdminError::Graphql(msg)) => {
            assert!(msg.contains("Invalid global id"), "got: {msg}");
            assert!(msg.contains("Throttled"), "got: {msg}");
        }
        other => panic!("expected Graphql error, got: {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Test 5 – non-2xx status
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_success_status_becomes_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(graphql_path()))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client
        .collection_remove_products("gid://shopify/Collection/1", &product_gid(42))
        .await;

    assert!(
        matches!(result, Err(AdminError::UnexpectedStatus { status: 500, .. })),
        "expected UnexpectedStatus(500), got: {result:?}"
    );
}

// ---------------------------------------------------------------------------
// Test 6 – malformed response body
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_body_becomes_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(graphql_path()))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client
        .collection_add_products("gid://shopify/Collection/1", &product_gid(42))
        .await;

    assert!(
        matches!(result, Err(AdminError::Deserialize { .. })),
        "expected Deserialize error, got: {result:?}"
    );
}

// ---------------------------------------------------------------------------
// Test 7 – data present but mutation field missing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_mutation_field_becomes_graphql_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(graphql_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({ "data": {} })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client
        .collection_add_products("gid://shopify/Collection/1", &product_gid(42))
        .await;

    assert!(
        matches!(result, Err(AdminError::Graphql(_))),
        "expected Graphql error, got: {result:?}"
    );
}
