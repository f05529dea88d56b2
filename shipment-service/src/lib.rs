pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;

use axum::middleware::from_fn;
use axum::{
    routing::{get, patch, post},
    Router,
};
use service_core::middleware::tracing::request_id_middleware;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use config::Config;
use service_core::error::AppError;
use services::{seed, InvoiceRepository, ShipmentRepository};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub shipments: ShipmentRepository,
    pub invoices: InvoiceRepository,
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
    state: AppState,
}

impl Application {
    /// Build the application: repositories, optional demo seed, router,
    /// and a bound listener (port 0 picks a random port for tests).
    pub async fn build(config: Config) -> Result<Self, AppError> {
        let shipments = ShipmentRepository::new();
        let invoices = InvoiceRepository::new();

        if config.seed_demo_data {
            seed::seed_demo_data(&shipments, &invoices).await?;
        }

        let state = AppState {
            config: config.clone(),
            shipments,
            invoices,
        };

        let router = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/metrics", get(handlers::metrics))
            // Shipment endpoints
            .route(
                "/shipments",
                post(handlers::shipments::create_shipment).get(handlers::shipments::list_shipments),
            )
            .route("/shipments/:id", get(handlers::shipments::get_shipment))
            .route(
                "/shipments/:id/status",
                patch(handlers::shipments::update_status),
            )
            .route(
                "/shipments/:id/assign",
                post(handlers::shipments::assign_trucker),
            )
            .route(
                "/shipments/:id/receipt",
                post(handlers::receipts::generate_receipt),
            )
            // Invoice endpoints
            .route("/invoices/generate", post(handlers::invoices::generate_invoice))
            .route("/invoices", get(handlers::invoices::list_invoices))
            .route("/invoices/:id", get(handlers::invoices::get_invoice))
            .route("/invoices/:id/pay", post(handlers::invoices::pay_invoice))
            .layer(CorsLayer::permissive())
            .layer(from_fn(request_id_middleware))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                    let request_id = request
                        .headers()
                        .get("x-request-id")
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or("-");

                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                }),
            )
            .with_state(state.clone());

        let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
        let listener = TcpListener::bind(&addr).await?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            router,
            state,
        })
    }

    /// The port the server is bound to.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// The shared application state, for tests that seed fixtures directly.
    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    pub async fn run_until_stopped(self) -> anyhow::Result<()> {
        tracing::info!("Listening on port {}", self.port);
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }
}
