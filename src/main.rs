// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::clock::{Clock, IdGenerator};
use crate::application::dashboard_store::DashboardStore;
use crate::application::widget_service::WidgetService;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::system_clock::{RandomIdGenerator, SystemClock};
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // System adapters (infrastructure layer)
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let ids: Arc<dyn IdGenerator> = Arc::new(RandomIdGenerator);

    // Store and services (application layer)
    let store = Arc::new(DashboardStore::new(clock.clone()));
    let widget_service = WidgetService::new(store.clone(), clock, ids);

    // Create application state
    let state = Arc::new(AppState {
        store,
        widget_service,
        limits: config.limits,
        management: config.management,
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    tracing::info!("Starting security-dashboard service on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
