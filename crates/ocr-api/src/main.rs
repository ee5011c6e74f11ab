//! ocr-api — HTTP server for the company registry filing service.
//!
//! Reads config from env vars:
//!   OCR_BIND_ADDR — listen address (default: 0.0.0.0:4200)
//!   OCR_TODAY     — pin the service date, `YYYY-MM-DD` (optional; when
//!                   unset the wall clock is used)

use std::sync::Arc;

use tokio::net::TcpListener;

use ocr_api::{build_router, AppState};
use ocr_store::{Clock, FixedClock, RegistryStore, SystemClock};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ocr_api=debug".into()),
        )
        .init();

    let bind_addr = std::env::var("OCR_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:4200".into());
    let clock: Arc<dyn Clock> = match std::env::var("OCR_TODAY") {
        Ok(date) => Arc::new(FixedClock::new(date)),
        Err(_) => Arc::new(SystemClock),
    };

    let store = Arc::new(RegistryStore::seeded(clock));
    let app = build_router(AppState { store });

    let listener = TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {bind_addr}: {e}"));
    tracing::info!("ocr-api listening on {bind_addr}");

    axum::serve(listener, app).await.expect("server error");
}
