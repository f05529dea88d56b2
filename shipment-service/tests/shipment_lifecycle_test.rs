//! Shipment lifecycle integration tests.

mod common;

use common::{sample_shipment_body, TestApp};
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn create_shipment(app: &TestApp) -> Value {
    let response = app
        .client
        .post(app.url("/shipments"))
        .json(&sample_shipment_body())
        .send()
        .await
        .expect("Failed to create shipment");
    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.expect("Invalid shipment JSON")
}

async fn patch_status(app: &TestApp, id: &str, status: &str) -> reqwest::Response {
    app.client
        .patch(app.url(&format!("/shipments/{}/status", id)))
        .json(&json!({ "status": status }))
        .send()
        .await
        .expect("Failed to send status update")
}

async fn assign(app: &TestApp, id: &str, trucker_id: &str, trucker_name: &str) -> reqwest::Response {
    app.client
        .post(app.url(&format!("/shipments/{}/assign", id)))
        .json(&json!({ "truckerId": trucker_id, "truckerName": trucker_name }))
        .send()
        .await
        .expect("Failed to send assignment")
}

#[tokio::test]
async fn create_shipment_enters_quoted_with_a_price() {
    let app = TestApp::spawn().await;

    let shipment = create_shipment(&app).await;

    assert!(shipment["id"].as_str().unwrap().starts_with("ship-"));
    assert_eq!(shipment["status"], "quoted");
    assert_eq!(shipment["paymentStatus"], "pending");
    assert!(shipment.get("truckerId").is_none());
    assert!(shipment.get("truckerName").is_none());
    assert!(shipment.get("deliveryDate").is_none());
    assert!(shipment.get("ebmReceiptNumber").is_none());

    let price = shipment["price"].as_i64().expect("Missing quoted price");
    assert!((50_000..=200_000).contains(&price));
    assert_eq!(price % 1_000, 0);
}

#[tokio::test]
async fn create_shipment_rejects_invalid_input() {
    let app = TestApp::spawn().await;

    let mut body = sample_shipment_body();
    body["weight"] = json!(0.0);
    let response = app
        .client
        .post(app.url("/shipments"))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let mut body = sample_shipment_body();
    body["businessId"] = json!("");
    let response = app
        .client
        .post(app.url("/shipments"))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn business_can_confirm_a_quoted_shipment() {
    let app = TestApp::spawn().await;
    let shipment = create_shipment(&app).await;
    let id = shipment["id"].as_str().unwrap();

    let response = patch_status(&app, id, "confirmed").await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["status"], "confirmed");
}

#[tokio::test]
async fn skipping_lifecycle_states_is_rejected() {
    let app = TestApp::spawn().await;
    let shipment = create_shipment(&app).await;
    let id = shipment["id"].as_str().unwrap();

    let response = patch_status(&app, id, "delivered").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = patch_status(&app, id, "in_transit").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // The shipment is untouched by the rejected updates.
    let current: Value = app
        .client
        .get(app.url(&format!("/shipments/{}", id)))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(current["status"], "quoted");
}

#[tokio::test]
async fn second_trucker_cannot_claim_an_assigned_shipment() {
    let app = TestApp::spawn().await;
    let shipment = create_shipment(&app).await;
    let id = shipment["id"].as_str().unwrap();

    let response = assign(&app, id, "t-1", "First Trucker").await;
    assert_eq!(response.status(), StatusCode::OK);
    let assigned: Value = response.json().await.unwrap();
    assert_eq!(assigned["status"], "assigned");
    assert_eq!(assigned["truckerId"], "t-1");
    assert_eq!(assigned["truckerName"], "First Trucker");

    let response = assign(&app, id, "t-2", "Second Trucker").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // The first claim stands.
    let current: Value = app
        .client
        .get(app.url(&format!("/shipments/{}", id)))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(current["truckerId"], "t-1");
    assert_eq!(current["truckerName"], "First Trucker");
}

#[tokio::test]
async fn delivery_flow_stamps_delivery_date_but_no_receipt_number() {
    let app = TestApp::spawn().await;
    let shipment = create_shipment(&app).await;
    let id = shipment["id"].as_str().unwrap();

    assert_eq!(assign(&app, id, "t-9", "Driver").await.status(), StatusCode::OK);
    assert_eq!(patch_status(&app, id, "in_transit").await.status(), StatusCode::OK);

    let response = patch_status(&app, id, "delivered").await;
    assert_eq!(response.status(), StatusCode::OK);
    let delivered: Value = response.json().await.unwrap();

    assert_eq!(delivered["status"], "delivered");
    assert!(delivered.get("deliveryDate").is_some());
    // Receipt numbers are minted by the receipt generator, never by delivery.
    assert!(delivered.get("ebmReceiptNumber").is_none());
}

#[tokio::test]
async fn unknown_shipment_returns_not_found() {
    let app = TestApp::spawn().await;

    let response = patch_status(&app, "nonexistent-id", "delivered").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = assign(&app, "nonexistent-id", "t-1", "Trucker").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .client
        .get(app.url("/shipments/nonexistent-id"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn active_shipments_can_be_canceled_but_delivered_cannot() {
    let app = TestApp::spawn().await;

    let shipment = create_shipment(&app).await;
    let id = shipment["id"].as_str().unwrap().to_string();
    let response = patch_status(&app, &id, "canceled").await;
    assert_eq!(response.status(), StatusCode::OK);
    // A canceled shipment is terminal.
    let response = patch_status(&app, &id, "confirmed").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let shipment = create_shipment(&app).await;
    let id = shipment["id"].as_str().unwrap().to_string();
    assign(&app, &id, "t-1", "Driver").await;
    patch_status(&app, &id, "in_transit").await;
    patch_status(&app, &id, "delivered").await;
    let response = patch_status(&app, &id, "canceled").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
