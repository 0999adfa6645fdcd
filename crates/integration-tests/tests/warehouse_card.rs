//! The "assign to shop" card, rendered directly and through the router.

use askama::Template;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use saleor_dashboard_admin::components::WarehouseAssignToShop;
use saleor_dashboard_admin::i18n::Messages;
use saleor_dashboard_admin::routes;
use saleor_dashboard_integration_tests::app_state;

async fn get(uri: &str, default_locale: Option<&str>) -> (StatusCode, String) {
    let app = routes::routes().with_state(app_state(default_locale));
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request");

    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    (status, String::from_utf8(body.to_vec()).expect("utf-8 body"))
}

#[test]
fn test_card_renders_identically_every_time() {
    let messages = Messages::builtin().expect("embedded catalogues parse");
    let renders: Vec<String> = (0..3)
        .map(|_| {
            WarehouseAssignToShop::new(&messages, None)
                .render()
                .expect("render")
        })
        .collect();
    assert!(renders.windows(2).all(|pair| pair[0] == pair[1]));
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get("/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_card_partial_default_messages() {
    let (status, body) = get("/components/warehouse-assign-to-shop", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Przydziel magazyn"));
    assert!(body.contains("This warehouse has no shop assigned."));
    assert!(!body.contains("<html"));
}

#[tokio::test]
async fn test_card_partial_polish() {
    let (status, body) = get("/components/warehouse-assign-to-shop?locale=pl", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Ten magazyn nie ma przypisanego sklepu."));
}

#[tokio::test]
async fn test_configured_default_locale_applies() {
    let (_, body) = get("/components/warehouse-assign-to-shop", Some("pl")).await;
    assert!(body.contains("Ten magazyn nie ma przypisanego sklepu."));

    let (_, body) = get("/components/warehouse-assign-to-shop?locale=en", Some("pl")).await;
    assert!(body.contains("This warehouse has no shop assigned."));
}

#[tokio::test]
async fn test_warehouse_page_embeds_card() {
    let (status, body) = get("/warehouses/V2FyZWhvdXNlOjE=/assign-shop?locale=pl-PL", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<html lang="pl">"#));
    assert!(body.contains(r#"data-warehouse-id="V2FyZWhvdXNlOjE=""#));
    assert!(body.contains(r#"style="margin-top: 10%""#));
    assert!(body.contains("Ten magazyn nie ma przypisanego sklepu."));
}

#[tokio::test]
async fn test_invalid_locale_is_rejected() {
    let (status, _) = get("/components/warehouse-assign-to-shop?locale=%3Cscript%3E", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
