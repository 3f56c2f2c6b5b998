// HTTP request handlers
use crate::application::search::{filter_widgets, flatten, CategoryFilter};
use crate::application::widget_service::{WidgetForm, WidgetKind};
use crate::domain::widget::ChartType;
use crate::presentation::app_state::AppState;
use crate::presentation::errors::ApiError;
use crate::presentation::views::{
    dashboard_view, search_view, widget_view, DashboardView, SearchView, WidgetView,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize, Default)]
pub struct Confirmation {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Deserialize, Default)]
pub struct SearchQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Deserialize, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum WidgetTypeParam {
    #[default]
    Text,
    Chart,
}

#[derive(Debug, Deserialize, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartTypeParam {
    #[default]
    Donut,
    Bar,
    Line,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWidgetRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub text: String,
    #[serde(rename = "type", default)]
    pub kind: WidgetTypeParam,
    #[serde(default)]
    pub chart_type: ChartTypeParam,
}

impl CreateWidgetRequest {
    fn into_form(self, name_max: usize, text_max: usize) -> WidgetForm {
        let kind = match self.kind {
            WidgetTypeParam::Text => WidgetKind::Text,
            WidgetTypeParam::Chart => WidgetKind::Chart(match self.chart_type {
                ChartTypeParam::Donut => ChartType::Donut,
                ChartTypeParam::Bar => ChartType::Bar,
                ChartTypeParam::Line => ChartType::Line,
            }),
        };

        WidgetForm {
            name: truncate_chars(&self.name, name_max),
            text: truncate_chars(&self.text, text_max),
            kind,
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Current dashboard snapshot
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardView> {
    let snapshot = state.store.snapshot().await;
    Json(dashboard_view(&snapshot))
}

/// Validate the submitted form and add the widget to the category
pub async fn create_widget(
    Path(category_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateWidgetRequest>,
) -> Result<(StatusCode, Json<WidgetView>), ApiError> {
    let form = request.into_form(state.limits.name_max_chars, state.limits.text_max_chars);

    match state.widget_service.create_widget(&category_id, form).await {
        Ok(widget) => Ok((StatusCode::CREATED, Json(widget_view(&widget)))),
        Err(e) => {
            tracing::warn!(category_id = %category_id, error = %e, "Widget rejected");
            Err(e.into())
        }
    }
}

/// Remove a widget; requires `confirm=true`
pub async fn remove_widget(
    Path((category_id, widget_id)): Path<(String, String)>,
    Query(confirmation): Query<Confirmation>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardView>, ApiError> {
    if !confirmation.confirm {
        tracing::warn!(category_id = %category_id, widget_id = %widget_id, "Widget removal not confirmed");
        return Err(ApiError::ConfirmationRequired {
            action: "remove this widget",
        });
    }

    let snapshot = state.store.remove_widget(&category_id, &widget_id).await?;
    Ok(Json(dashboard_view(&snapshot)))
}

/// Reset the dashboard to its seed content; requires `confirm=true`
pub async fn reset_dashboard(
    Query(confirmation): Query<Confirmation>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardView>, ApiError> {
    if !confirmation.confirm {
        tracing::warn!("Dashboard reset not confirmed");
        return Err(ApiError::ConfirmationRequired {
            action: "reset the dashboard and remove all custom widgets",
        });
    }

    let snapshot = state.store.reset().await;
    Ok(Json(dashboard_view(&snapshot)))
}

/// Management listing filtered by free text and category
pub async fn search_widgets(
    Query(query): Query<SearchQuery>,
    State(state): State<Arc<AppState>>,
) -> Json<SearchView> {
    let snapshot = state.store.snapshot().await;
    let filter = CategoryFilter::from(query.category.as_str());
    let entries = flatten(&snapshot);
    let matched = filter_widgets(&entries, &query.search, &filter);

    Json(search_view(
        &snapshot,
        &matched,
        entries.len(),
        &query.search,
        &filter,
        state.management.preview_chars,
    ))
}

fn truncate_chars(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}
