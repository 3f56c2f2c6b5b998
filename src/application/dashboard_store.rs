// Dashboard store - Holds the current snapshot and applies actions to it
use crate::application::clock::Clock;
use crate::application::reducer::{reduce, DashboardAction, StoreError};
use crate::domain::catalog::seed_state;
use crate::domain::dashboard::DashboardState;
use crate::domain::widget::Widget;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Single owner of the dashboard tree. Every dispatch replaces the snapshot
/// wholesale; readers holding an older `Arc` keep seeing the old tree.
///
/// No confirmation happens here, callers gate destructive actions.
pub struct DashboardStore {
    state: RwLock<Arc<DashboardState>>,
    clock: Arc<dyn Clock>,
}

impl DashboardStore {
    /// Start from the seed catalog.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let initial = seed_state(clock.now());
        Self {
            state: RwLock::new(Arc::new(initial)),
            clock,
        }
    }

    pub async fn snapshot(&self) -> Arc<DashboardState> {
        self.state.read().await.clone()
    }

    pub async fn dispatch(&self, action: DashboardAction) -> Result<Arc<DashboardState>, StoreError> {
        let mut guard = self.state.write().await;
        let next = Arc::new(reduce(&guard, action, self.clock.now())?);
        *guard = next.clone();
        Ok(next)
    }

    pub async fn add_widget(
        &self,
        category_id: &str,
        widget: Widget,
    ) -> Result<Arc<DashboardState>, StoreError> {
        let widget_id = widget.id.clone();
        let state = self
            .dispatch(DashboardAction::AddWidget {
                category_id: category_id.to_string(),
                widget,
            })
            .await?;
        tracing::info!(category_id, widget_id = %widget_id, "Widget added");
        Ok(state)
    }

    pub async fn remove_widget(
        &self,
        category_id: &str,
        widget_id: &str,
    ) -> Result<Arc<DashboardState>, StoreError> {
        let state = self
            .dispatch(DashboardAction::RemoveWidget {
                category_id: category_id.to_string(),
                widget_id: widget_id.to_string(),
            })
            .await?;
        tracing::info!(category_id, widget_id, "Widget removed");
        Ok(state)
    }

    pub async fn reset(&self) -> Arc<DashboardState> {
        let mut guard = self.state.write().await;
        let next = Arc::new(seed_state(self.clock.now()));
        *guard = next.clone();
        tracing::info!("Dashboard reset to initial state");
        next
    }
}
