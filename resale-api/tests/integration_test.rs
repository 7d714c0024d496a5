use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use resale_api::{app, AppState};
use resale_catalog::Settings;
use resale_core::{BlobStore, ORDERS_KEY};
use resale_order::{OrderManager, OrderStatus, SummaryTemplate};
use resale_store::{FileBlobStore, MemoryBlobStore};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> (Router, Arc<MemoryBlobStore>) {
    let store = Arc::new(MemoryBlobStore::new());
    let manager = OrderManager::load(store.clone(), Settings::default());
    (app(AppState::new(manager, SummaryTemplate::default())), store)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create(app: &Router, name: &str, payment: &str) -> Value {
    let (status, order) = send(
        app,
        "POST",
        "/v1/orders",
        Some(json!({
            "customerName": name,
            "phone": "+258 84 000 0000",
            "originalPrice": 500,
            "currency": "ZAR",
            "pieceCategory": "LIGHT_MEDIUM",
            "paymentStatus": payment,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    order
}

#[tokio::test]
async fn test_health() {
    let (app, _) = test_app();
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_quote_does_not_store() {
    let (app, store) = test_app();

    let (status, quote) = send(
        &app,
        "POST",
        "/v1/quote",
        Some(json!({"originalPrice": "500", "currency": "ZAR", "pieceCategory": "LIGHT_MEDIUM", "paymentStatus": "PAID_BASE"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(quote["convertedAmount"], 2500.0);
    assert_eq!(quote["baseCost"], 2680.0);
    assert_eq!(quote["margin"], 1340.0);
    assert_eq!(quote["total"], 4020.0);
    assert!(quote["summary"].as_str().unwrap().contains("Saldo: 1340,00\u{a0}MTn"));

    assert!(store.load(ORDERS_KEY).unwrap().is_none());
}

#[tokio::test]
async fn test_order_flow() {
    let (app, store) = test_app();

    let order = create(&app, "Ana", "NOT_PAID").await;
    assert_eq!(order["orderStatus"], "AWAITING_PAYMENT");
    assert_eq!(order["total"], 4020.0);
    let id = order["id"].as_str().unwrap().to_string();

    let (status, order) = send(
        &app,
        "PUT",
        &format!("/v1/orders/{id}/payment"),
        Some(json!({"paymentStatus": "PAID_BASE"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["orderStatus"], "PAID");

    let (status, order) = send(
        &app,
        "PUT",
        &format!("/v1/orders/{id}/status"),
        Some(json!({"status": "IN_TRANSIT"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["orderStatus"], "IN_TRANSIT");

    let (_, summary) = send(&app, "GET", &format!("/v1/orders/{id}/summary"), None).await;
    let text = summary["text"].as_str().unwrap();
    assert!(text.contains("Pago: 2680,00\u{a0}MTn"));
    assert!(text.contains("Saldo: 1340,00\u{a0}MTn"));

    // Revoking payment sends the order back to the start.
    let (_, order) = send(
        &app,
        "PUT",
        &format!("/v1/orders/{id}/payment"),
        Some(json!({"paymentStatus": "NOT_PAID"})),
    )
    .await;
    assert_eq!(order["orderStatus"], "AWAITING_PAYMENT");

    let persisted: Value = serde_json::from_str(&store.load(ORDERS_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(persisted[0]["orderStatus"], "AWAITING_PAYMENT");
    assert_eq!(persisted[0]["paymentStatus"], "NOT_PAID");

    let (status, _) = send(&app, "DELETE", &format!("/v1/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", &format!("/v1/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_requires_customer_name() {
    let (app, _) = test_app();

    let (status, body) = send(&app, "POST", "/v1/orders", Some(json!({"customerName": "  ", "originalPrice": 10}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "customer name is required");

    let (_, orders) = send(&app, "GET", "/v1/orders", None).await;
    assert_eq!(orders.as_array().unwrap().len(), 0);

    let order = create(&app, "  Bia  ", "NOT_PAID").await;
    assert_eq!(order["customerName"], "Bia");
}

#[tokio::test]
async fn test_malformed_price_is_zero() {
    let (app, _) = test_app();

    let (status, order) = send(
        &app,
        "POST",
        "/v1/orders",
        Some(json!({"customerName": "Bia", "originalPrice": "doze", "pieceCategory": "HEAVY"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["originalPrice"], 0.0);
    assert_eq!(order["baseCost"], 250.0);
    assert_eq!(order["total"], 375.0);
}

#[tokio::test]
async fn test_unknown_order_is_not_found() {
    let (app, _) = test_app();
    create(&app, "Ana", "NOT_PAID").await;

    let (status, body) = send(
        &app,
        "PUT",
        "/v1/orders/nope/status",
        Some(json!({"status": "DELIVERED"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Order not found: nope");

    let (status, _) = send(&app, "DELETE", "/v1/orders/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, orders) = send(&app, "GET", "/v1/orders", None).await;
    assert_eq!(orders[0]["orderStatus"], "AWAITING_PAYMENT");
}

#[tokio::test]
async fn test_settings_update_keeps_existing_orders() {
    let (app, _) = test_app();
    let order = create(&app, "Ana", "PAID_TOTAL").await;

    let (status, settings) = send(
        &app,
        "PUT",
        "/v1/settings",
        Some(json!({
            "marginPercentage": 20,
            "lightPieceTax": 100,
            "heavyPieceTax": 200,
            "zarRate": 4,
            "usdRate": 60,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(settings["marginPercentage"], 20);

    let (_, settings) = send(&app, "GET", "/v1/settings", None).await;
    assert_eq!(settings["zarRate"], 4.0);

    let id = order["id"].as_str().unwrap();
    let (_, stored) = send(&app, "GET", &format!("/v1/orders/{id}"), None).await;
    assert_eq!(stored["total"], 4020.0);

    let newer = create(&app, "Bruno", "NOT_PAID").await;
    assert_eq!(newer["baseCost"], 2100.0);
    assert_eq!(newer["total"], 2520.0);
}

#[tokio::test]
async fn test_search_and_dashboard() {
    let (app, _) = test_app();
    create(&app, "Ana Matsinhe", "NOT_PAID").await;
    let paid = create(&app, "Bruno", "PAID_BASE").await;
    create(&app, "Mariana", "NOT_PAID").await;

    let (_, found) = send(&app, "GET", "/v1/orders?q=ana", None).await;
    let names: Vec<_> = found
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["customerName"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Mariana", "Ana Matsinhe"]);

    let id = paid["id"].as_str().unwrap();
    send(&app, "PUT", &format!("/v1/orders/{id}/status"), Some(json!({"status": "DELIVERED"}))).await;

    let (status, dashboard) = send(&app, "GET", "/v1/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dashboard["received"], 2680.0);
    assert_eq!(dashboard["pending"], 2680.0);
    assert_eq!(dashboard["profit"], 1340.0);
    assert_eq!(dashboard["active"], 2);
    assert_eq!(dashboard["recent"].as_array().unwrap().len(), 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_orders_survive_restart_with_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileBlobStore::new(dir.path()).unwrap());
    let app = app(AppState::new(
        OrderManager::load(store, Settings::default()),
        SummaryTemplate::default(),
    ));

    let first = create(&app, "Ana", "PAID_TOTAL").await;
    create(&app, "Bruno", "NOT_PAID").await;
    let id = first["id"].as_str().unwrap();
    send(&app, "PUT", &format!("/v1/orders/{id}/status"), Some(json!({"status": "IN_TRANSIT"}))).await;

    let reopened = Arc::new(FileBlobStore::new(dir.path()).unwrap());
    let manager = OrderManager::load(reopened, Settings::default());
    let names: Vec<_> = manager.orders().iter().map(|o| o.customer_name.as_str()).collect();
    assert_eq!(names, vec!["Bruno", "Ana"]);
    assert_eq!(manager.orders()[1].order_status, OrderStatus::InTransit);
}
