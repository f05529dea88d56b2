use anyhow::Result;
use dotenvy::dotenv;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub billing: BillingConfig,
    /// Load the demo marketplace fixtures at startup.
    pub seed_demo_data: bool,
    pub service_name: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Clone, Debug)]
pub struct BillingConfig {
    /// VAT rate applied on receipts (0.18 = 18%).
    pub vat_rate: Decimal,
    /// Days between invoice issue and due date.
    pub invoice_due_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let host = env::var("SHIPMENT_SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("SHIPMENT_SERVICE_PORT")
            .unwrap_or_else(|_| "3004".to_string())
            .parse()?;

        let vat_rate = env::var("SHIPMENT_VAT_RATE")
            .unwrap_or_else(|_| "0.18".to_string())
            .parse::<Decimal>()?;
        let invoice_due_days = env::var("SHIPMENT_INVOICE_DUE_DAYS")
            .unwrap_or_else(|_| "15".to_string())
            .parse()?;

        let seed_demo_data = env::var("SHIPMENT_SEED_DEMO_DATA")
            .unwrap_or_else(|_| "false".to_string())
            .parse()
            .unwrap_or(false);

        Ok(Self {
            server: ServerConfig { host, port },
            billing: BillingConfig {
                vat_rate,
                invoice_due_days,
            },
            seed_demo_data,
            service_name: "shipment-service".to_string(),
        })
    }
}
