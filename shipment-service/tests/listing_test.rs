//! Listing, filtering and sorting integration tests.

mod common;

use common::TestApp;
use serde_json::Value;

async fn list(app: &TestApp, query: &str) -> Vec<Value> {
    app.client
        .get(app.url(&format!("/shipments{}", query)))
        .send()
        .await
        .expect("Failed to list shipments")
        .json()
        .await
        .expect("Invalid listing JSON")
}

fn ids(shipments: &[Value]) -> Vec<&str> {
    shipments.iter().filter_map(|s| s["id"].as_str()).collect()
}

#[tokio::test]
async fn available_jobs_are_quoted_and_unassigned() {
    let app = TestApp::spawn_seeded().await;

    let available = list(&app, "?available=true").await;
    let mut available_ids = ids(&available);
    available_ids.sort_unstable();

    assert_eq!(available_ids, vec!["ship-003", "ship-007"]);
    for shipment in &available {
        assert_eq!(shipment["status"], "quoted");
        assert!(shipment.get("truckerId").is_none());
    }
}

#[tokio::test]
async fn listings_scope_to_business_or_trucker() {
    let app = TestApp::spawn_seeded().await;

    let for_business = list(&app, "?businessId=b-123").await;
    assert!(!for_business.is_empty());
    for shipment in &for_business {
        assert_eq!(shipment["businessId"], "b-123");
    }

    let for_trucker = list(&app, "?truckerId=t-123").await;
    let mut trucker_ids = ids(&for_trucker);
    trucker_ids.sort_unstable();
    assert_eq!(trucker_ids, vec!["ship-001", "ship-004"]);
}

#[tokio::test]
async fn exact_filters_apply_to_status_and_load_type() {
    let app = TestApp::spawn_seeded().await;

    let delivered = list(&app, "?status=delivered").await;
    assert_eq!(delivered.len(), 3);

    let agricultural = list(&app, "?loadType=agricultural").await;
    let mut agri_ids = ids(&agricultural);
    agri_ids.sort_unstable();
    assert_eq!(agri_ids, vec!["ship-001", "ship-003"]);

    let refrigerated = list(&app, "?truckType=refrigerated").await;
    assert_eq!(ids(&refrigerated), vec!["ship-004"]);
}

#[tokio::test]
async fn search_matches_route_names_and_ids_case_insensitively() {
    let app = TestApp::spawn_seeded().await;

    let by_route = list(&app, "?search=butare").await;
    assert_eq!(ids(&by_route), vec!["ship-001"]);

    let by_id = list(&app, "?search=SHIP-007").await;
    assert_eq!(ids(&by_id), vec!["ship-007"]);
}

#[tokio::test]
async fn date_range_filters_on_creation_time() {
    let app = TestApp::spawn_seeded().await;

    let february = list(&app, "?from=2025-02-01T00:00:00Z&to=2025-02-28T23:59:59Z").await;
    let mut feb_ids = ids(&february);
    feb_ids.sort_unstable();
    assert_eq!(feb_ids, vec!["ship-002", "ship-003", "ship-005", "ship-007"]);
}

#[tokio::test]
async fn price_sort_orders_the_whole_listing() {
    let app = TestApp::spawn_seeded().await;

    let ascending = list(&app, "?sortBy=price&sortDir=asc").await;
    let prices: Vec<i64> = ascending
        .iter()
        .map(|s| s["price"].as_i64().unwrap_or(0))
        .collect();
    let mut expected = prices.clone();
    expected.sort_unstable();
    assert_eq!(prices, expected);
    assert_eq!(ascending.first().unwrap()["id"], "ship-007");
    assert_eq!(ascending.last().unwrap()["id"], "ship-005");
}

#[tokio::test]
async fn default_listing_is_newest_first() {
    let app = TestApp::spawn_seeded().await;

    let listing = list(&app, "").await;
    assert_eq!(listing.len(), 7);

    let created: Vec<&str> = listing
        .iter()
        .filter_map(|s| s["createdAt"].as_str())
        .collect();
    let mut expected = created.clone();
    expected.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(created, expected);
}
