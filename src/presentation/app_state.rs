// Application state for HTTP handlers
use crate::application::dashboard_store::DashboardStore;
use crate::application::widget_service::WidgetService;
use crate::infrastructure::config::{InputLimits, ManagementSettings};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DashboardStore>,
    pub widget_service: WidgetService,
    pub limits: InputLimits,
    pub management: ManagementSettings,
}
