//! `POST /api/catalogue/{key}` against a mock GraphQL endpoint.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use httpmock::prelude::*;
use serde_json::{Value, json};
use tower::ServiceExt;

use saleor_dashboard_admin::routes;
use saleor_dashboard_admin::saleor::CatalogueQuery;
use saleor_dashboard_admin::saleor::queries::CountAllProducts;
use saleor_dashboard_integration_tests::{GRAPHQL_PATH, app_state_for_api};

async fn post(base_url: &str, uri: &str, variables: &Value) -> (StatusCode, String) {
    let app = routes::routes().with_state(app_state_for_api(base_url, None));
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(variables.to_string()))
        .expect("valid request");

    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    (status, String::from_utf8(body.to_vec()).expect("utf-8 body"))
}

#[tokio::test]
async fn test_entry_returns_data() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path(GRAPHQL_PATH).json_body(json!({
            "query": CountAllProducts::document(),
            "operationName": "CountAllProducts",
            "variables": {}
        }));
        then.status(200)
            .json_body(json!({"data": {"products": {"totalCount": 42}}}));
    });

    let (status, body) = post(
        &server.base_url(),
        "/api/catalogue/count-all-products",
        &json!({}),
    )
    .await;

    mock.assert();
    assert_eq!(status, StatusCode::OK);
    let data: Value = serde_json::from_str(&body).expect("json body");
    assert_eq!(data["products"]["totalCount"], 42);
}

#[tokio::test]
async fn test_unknown_entry_is_not_found() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path(GRAPHQL_PATH);
        then.status(200).json_body(json!({"data": {}}));
    });

    let (status, _) = post(&server.base_url(), "/api/catalogue/product-lists", &json!({})).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(mock.hits(), 0);
}

#[tokio::test]
async fn test_invalid_variables_are_rejected_before_dispatch() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path(GRAPHQL_PATH);
        then.status(200).json_body(json!({"data": {}}));
    });

    let (mixed, _) = post(
        &server.base_url(),
        "/api/catalogue/product-list",
        &json!({"first": 10, "last": 10}),
    )
    .await;
    let (missing, _) = post(&server.base_url(), "/api/catalogue/product-details", &json!({})).await;

    assert_eq!(mixed, StatusCode::BAD_REQUEST);
    assert_eq!(missing, StatusCode::BAD_REQUEST);
    assert_eq!(mock.hits(), 0);
}

#[tokio::test]
async fn test_graphql_errors_are_bad_gateway() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(GRAPHQL_PATH);
        then.status(200)
            .json_body(json!({"data": null, "errors": [{"message": "Permission denied"}]}));
    });

    let (status, body) = post(
        &server.base_url(),
        "/api/catalogue/count-all-products",
        &json!({}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, "External service error");
}
