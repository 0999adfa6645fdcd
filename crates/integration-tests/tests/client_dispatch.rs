//! Executor behaviour against a mock GraphQL endpoint.

use graphql_client::GraphQLQuery;
use httpmock::prelude::*;
use serde_json::json;

use saleor_dashboard_admin::saleor::queries::{
    CountAllProducts, ProductList, SearchProductTypes, count_all_products, product_list,
};
use saleor_dashboard_admin::saleor::{CatalogueQuery, SaleorError, TopLevelSearch, catalogue};
use saleor_dashboard_core::{PageRequest, PaginationError};
use saleor_dashboard_integration_tests::{GRAPHQL_PATH, client};

fn product_page(has_next_page: bool) -> serde_json::Value {
    json!({
        "data": {
            "products": {
                "edges": [{
                    "node": {
                        "id": "UHJvZHVjdDox",
                        "name": "Apple Juice",
                        "thumbnail": {"url": "https://cdn.example.com/juice.png"},
                        "isAvailable": true,
                        "isPublished": true,
                        "productType": {
                            "id": "UHJvZHVjdFR5cGU6MQ==",
                            "name": "Juice",
                            "hasVariants": true
                        },
                        "pricing": null,
                        "jsonPrivateMetadata": "{}"
                    }
                }],
                "pageInfo": {
                    "hasPreviousPage": false,
                    "hasNextPage": has_next_page,
                    "startCursor": "YQ==",
                    "endCursor": "Yg=="
                },
                "totalCount": 1
            }
        }
    })
}

#[tokio::test]
async fn test_first_page_request_body() {
    let server = MockServer::start();
    let variables = product_list::Variables::new(PageRequest::first(10));
    let expected = serde_json::to_value(ProductList::build_query(variables.clone()))
        .expect("body serializes");

    assert_eq!(expected["operationName"], "ProductList");
    assert_eq!(expected["variables"]["first"], 10);
    assert!(expected["variables"]["after"].is_null());
    assert!(expected["variables"]["last"].is_null());
    assert!(expected["variables"]["before"].is_null());

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(GRAPHQL_PATH)
            .header("content-type", "application/json")
            .json_body(expected);
        then.status(200).json_body(product_page(true));
    });

    let data = client(&server.base_url(), None)
        .query::<ProductList>(variables)
        .await
        .expect("query succeeds");

    mock.assert();
    let products = data.products.expect("connection");
    assert_eq!(products.total_count, Some(1));
    assert!(products.page_info.has_next_page);
    let node = &products.edges[0].node;
    assert_eq!(node.product.name, "Apple Juice");
    assert_eq!(node.product.product_type.name, "Juice");
}

#[tokio::test]
async fn test_mixed_paging_never_reaches_the_server() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path(GRAPHQL_PATH);
        then.status(200).json_body(product_page(false));
    });

    let variables = product_list::Variables {
        first: Some(10),
        last: Some(10),
        ..Default::default()
    };
    let result = client(&server.base_url(), None)
        .query::<ProductList>(variables)
        .await;

    assert!(matches!(
        result,
        Err(SaleorError::Contract(PaginationError::MixedDirections))
    ));
    assert_eq!(mock.hits(), 0);
}

#[tokio::test]
async fn test_bearer_token_is_sent() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(GRAPHQL_PATH)
            .header("authorization", "Bearer k3Yq9vLz2pWm7RtX");
        then.status(200)
            .json_body(json!({"data": {"products": {"totalCount": 42}}}));
    });

    let data = client(&server.base_url(), Some("k3Yq9vLz2pWm7RtX"))
        .query::<CountAllProducts>(count_all_products::Variables {})
        .await
        .expect("query succeeds");

    mock.assert();
    assert_eq!(data.products.and_then(|p| p.total_count), Some(42));
}

#[tokio::test]
async fn test_graphql_errors_are_returned_verbatim() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(GRAPHQL_PATH);
        then.status(200).json_body(json!({
            "data": null,
            "errors": [
                {"message": "You do not have permission", "path": ["products"]},
                {"message": "Second problem"}
            ]
        }));
    });

    let err = client(&server.base_url(), None)
        .query::<CountAllProducts>(count_all_products::Variables {})
        .await
        .expect_err("errors fail the query");

    let SaleorError::GraphQL(errors) = err else {
        panic!("expected GraphQL errors, got {err:?}");
    };
    let messages: Vec<_> = errors.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, ["You do not have permission", "Second problem"]);
}

#[tokio::test]
async fn test_partial_data_is_available_through_query_response() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(GRAPHQL_PATH);
        then.status(200).json_body(json!({
            "data": {"products": {"totalCount": 3}},
            "errors": [{"message": "Channel slug missing"}]
        }));
    });

    let response = client(&server.base_url(), None)
        .query_response::<CountAllProducts>(count_all_products::Variables {})
        .await
        .expect("transport succeeds");

    assert_eq!(
        response.data.and_then(|d| d.products).and_then(|p| p.total_count),
        Some(3)
    );
    assert_eq!(response.errors.map(|e| e.len()), Some(1));
}

#[tokio::test]
async fn test_error_status_maps_to_status_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(GRAPHQL_PATH);
        then.status(502).body("upstream unavailable");
    });

    let err = client(&server.base_url(), None)
        .query::<CountAllProducts>(count_all_products::Variables {})
        .await
        .expect_err("502 fails");

    match err {
        SaleorError::Status { status, body } => {
            assert_eq!(status.as_u16(), 502);
            assert_eq!(body, "upstream unavailable");
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn test_bad_request_with_graphql_errors() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(GRAPHQL_PATH);
        then.status(400).json_body(json!({
            "errors": [{"message": "Cannot query field \"foo\" on type \"Product\"."}]
        }));
    });

    let err = client(&server.base_url(), None)
        .query::<CountAllProducts>(count_all_products::Variables {})
        .await
        .expect_err("400 fails");

    assert!(matches!(err, SaleorError::GraphQL(errors) if errors.len() == 1));
}

#[tokio::test]
async fn test_query_entry_with_json_variables() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path(GRAPHQL_PATH);
        then.status(200).json_body(product_page(false));
    });

    let entry = catalogue::find("product-list").expect("entry exists");
    let data = client(&server.base_url(), None)
        .query_entry(entry, json!({"first": 10}))
        .await
        .expect("query succeeds");

    mock.assert();
    assert_eq!(data["products"]["edges"][0]["node"]["name"], "Apple Juice");

    let result = client(&server.base_url(), None)
        .query_entry(entry, json!({"first": 10, "before": "YQ=="}))
        .await;
    assert!(matches!(result, Err(SaleorError::Contract(_))));
    assert_eq!(mock.hits(), 1);
}

#[tokio::test]
async fn test_query_entry_sends_only_declared_variables() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path(GRAPHQL_PATH).json_body(json!({
            "query": ProductList::document(),
            "operationName": "ProductList",
            "variables": {
                "first": 10, "after": null, "last": null, "before": null,
                "filter": {"search": "juice"}, "sort": null
            }
        }));
        then.status(200).json_body(product_page(false));
    });

    let entry = catalogue::find("product-list").expect("entry exists");
    client(&server.base_url(), None)
        .query_entry(
            entry,
            json!({"first": 10, "bogus": 1, "filter": {"search": "juice", "notAField": true}}),
        )
        .await
        .expect("query succeeds");

    mock.assert();
}

#[tokio::test]
async fn test_search_loads_more_until_exhausted() {
    let server = MockServer::start();

    let first_page = server.mock(|when, then| {
        when.method(POST)
            .path(GRAPHQL_PATH)
            .json_body(json!({
                "query": SearchProductTypes::document(),
                "operationName": "SearchProductTypes",
                "variables": {"after": null, "first": 1, "query": "ju"}
            }));
        then.status(200).json_body(json!({"data": {"search": {
            "edges": [{"node": {
                "id": "UHJvZHVjdFR5cGU6MQ==", "name": "Juice", "hasVariants": true,
                "slug": "juice", "productAttributes": [], "taxType": null
            }}],
            "pageInfo": {"hasPreviousPage": false, "hasNextPage": true,
                         "startCursor": "YQ==", "endCursor": "YQ=="}
        }}}));
    });
    let second_page = server.mock(|when, then| {
        when.method(POST)
            .path(GRAPHQL_PATH)
            .json_body(json!({
                "query": SearchProductTypes::document(),
                "operationName": "SearchProductTypes",
                "variables": {"after": "YQ==", "first": 1, "query": "ju"}
            }));
        then.status(200).json_body(json!({"data": {"search": {
            "edges": [{"node": {
                "id": "UHJvZHVjdFR5cGU6Mg==", "name": "Juice Box", "hasVariants": false,
                "slug": "juice-box", "productAttributes": null, "taxType": null
            }}],
            "pageInfo": {"hasPreviousPage": true, "hasNextPage": false,
                         "startCursor": "Yg==", "endCursor": "Yg=="}
        }}}));
    });

    let mut search =
        TopLevelSearch::<SearchProductTypes>::new(client(&server.base_url(), None))
            .with_page_size(1);

    let results = search.search("ju").await.expect("first page");
    assert_eq!(results.len(), 1);
    assert!(search.has_more());

    assert!(search.load_more().await.expect("second page"));
    assert!(!search.has_more());
    assert!(!search.load_more().await.expect("nothing left"));

    let names: Vec<_> = search.results().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Juice", "Juice Box"]);
    first_page.assert();
    second_page.assert();
}
