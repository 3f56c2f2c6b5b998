// Presentation layer - HTTP API over the dashboard store
pub mod app_state;
pub mod errors;
pub mod handlers;
pub mod router;
pub mod views;
