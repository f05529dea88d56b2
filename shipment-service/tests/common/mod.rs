//! Test helper module for shipment-service integration tests.

#![allow(dead_code)]

use rust_decimal::Decimal;
use shipment_service::config::{BillingConfig, Config, ServerConfig};
use shipment_service::services::init_metrics;
use shipment_service::{AppState, Application};

/// Test application wrapper for integration tests.
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub state: AppState,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn an empty application on a random port.
    pub async fn spawn() -> Self {
        Self::spawn_with_seed(false).await
    }

    /// Spawn an application preloaded with the demo fixtures.
    pub async fn spawn_seeded() -> Self {
        Self::spawn_with_seed(true).await
    }

    async fn spawn_with_seed(seed_demo_data: bool) -> Self {
        init_metrics();

        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            billing: BillingConfig {
                vat_rate: Decimal::new(18, 2),
                invoice_due_days: 15,
            },
            seed_demo_data,
            service_name: "shipment-service".to_string(),
        };

        let application = Application::build(config)
            .await
            .expect("Failed to build application");
        let port = application.port();
        let state = application.state();
        tokio::spawn(application.run_until_stopped());

        Self {
            address: format!("http://127.0.0.1:{}", port),
            port,
            state,
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

/// A valid creation payload for POST /shipments.
pub fn sample_shipment_body() -> serde_json::Value {
    serde_json::json!({
        "businessId": "b-123",
        "businessName": "ABC Distributors",
        "loadType": "retail",
        "truckType": "medium",
        "weight": 2000.0,
        "pickupLocation": { "name": "Kigali", "address": "KN 5 Ave, Kigali" },
        "deliveryLocation": { "name": "Butare", "address": "University Road, Butare" },
        "pickupDate": "2025-03-10T09:00:00Z",
        "description": "Retail goods"
    })
}
