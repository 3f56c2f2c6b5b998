// Dashboard reducer - Pure (state, action) -> state transitions
use crate::domain::catalog::seed_state;
use crate::domain::dashboard::DashboardState;
use crate::domain::widget::Widget;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    AddWidget { category_id: String, widget: Widget },
    RemoveWidget { category_id: String, widget_id: String },
    ResetDashboard,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Category '{category_id}' not found")]
    CategoryNotFound { category_id: String },
}

/// Apply `action` to `state`, returning the next snapshot.
///
/// The input is never touched. Adding a widget whose id already exists in
/// the category replaces it (last write wins); ids are not checked across
/// categories. Removing a widget that is not there still yields a fresh
/// snapshot. Reset ignores `state` and returns the seed tree.
pub fn reduce(
    state: &DashboardState,
    action: DashboardAction,
    now: DateTime<Utc>,
) -> Result<DashboardState, StoreError> {
    match action {
        DashboardAction::AddWidget {
            category_id,
            widget,
        } => {
            let mut next = state.clone();
            let category = next
                .category_mut(&category_id)
                .ok_or(StoreError::CategoryNotFound { category_id })?;
            category.insert(widget);
            next.last_updated = now;
            Ok(next)
        }
        DashboardAction::RemoveWidget {
            category_id,
            widget_id,
        } => {
            let mut next = state.clone();
            let category = next
                .category_mut(&category_id)
                .ok_or(StoreError::CategoryNotFound { category_id })?;
            category.remove(&widget_id);
            next.last_updated = now;
            Ok(next)
        }
        DashboardAction::ResetDashboard => Ok(seed_state(now)),
    }
}
