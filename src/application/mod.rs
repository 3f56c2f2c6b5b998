// Application layer - State store, reducer and dashboard use cases
pub mod clock;
pub mod dashboard_store;
pub mod reducer;
pub mod search;
pub mod widget_service;
