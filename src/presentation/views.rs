// Mapper from domain snapshots to JSON response bodies
use crate::application::search::{CategoryFilter, WidgetEntry};
use crate::domain::category::Category;
use crate::domain::dashboard::DashboardState;
use crate::domain::widget::{BarPoint, DonutSlice, LinePoint, Widget, WidgetBody};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub total_widgets: usize,
    pub total_categories: usize,
    pub last_updated: DateTime<Utc>,
    pub categories: Vec<CategoryView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    pub id: String,
    pub name: String,
    pub widget_count: usize,
    pub widgets: Vec<WidgetView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetView {
    pub id: String,
    pub name: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_data: Option<ChartDataView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ChartDataView {
    Donut(Vec<DonutSliceView>),
    Bar(Vec<BarPointView>),
    Line(Vec<LinePointView>),
}

#[derive(Debug, Serialize)]
pub struct DonutSliceView {
    pub name: String,
    pub value: u64,
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct BarPointView {
    pub name: String,
    pub alerts: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct LinePointView {
    pub time: String,
    pub alerts: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchView {
    pub shown: usize,
    pub total: usize,
    pub filters_active: bool,
    pub groups: Vec<SearchGroupView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchGroupView {
    pub category_id: String,
    pub category_name: String,
    pub count: usize,
    pub widgets: Vec<WidgetSummaryView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetSummaryView {
    pub id: String,
    pub name: String,
    pub preview: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

pub fn dashboard_view(state: &DashboardState) -> DashboardView {
    DashboardView {
        total_widgets: state.total_widgets(),
        total_categories: state.total_categories(),
        last_updated: state.last_updated,
        categories: state.categories().map(category_view).collect(),
    }
}

fn category_view(category: &Category) -> CategoryView {
    CategoryView {
        id: category.id.clone(),
        name: category.name.clone(),
        widget_count: category.len(),
        widgets: category.widgets().map(widget_view).collect(),
    }
}

pub fn widget_view(widget: &Widget) -> WidgetView {
    WidgetView {
        id: widget.id.clone(),
        name: widget.name.clone(),
        text: widget.text.clone(),
        kind: widget_kind(&widget.body),
        chart_type: widget.body.chart_type().map(|c| c.as_str()),
        chart_data: chart_data_view(&widget.body),
        created_at: widget.created_at,
    }
}

fn widget_kind(body: &WidgetBody) -> &'static str {
    if body.is_chart() { "chart" } else { "text" }
}

fn chart_data_view(body: &WidgetBody) -> Option<ChartDataView> {
    match body {
        WidgetBody::Text => None,
        WidgetBody::Donut(slices) => Some(ChartDataView::Donut(slices.iter().map(donut_slice_view).collect())),
        WidgetBody::Bar(points) => Some(ChartDataView::Bar(points.iter().map(bar_point_view).collect())),
        WidgetBody::Line(points) => Some(ChartDataView::Line(points.iter().map(line_point_view).collect())),
    }
}

fn donut_slice_view(slice: &DonutSlice) -> DonutSliceView {
    DonutSliceView {
        name: slice.name.clone(),
        value: slice.value,
        color: slice.color.clone(),
    }
}

fn bar_point_view(point: &BarPoint) -> BarPointView {
    BarPointView {
        name: point.name.clone(),
        alerts: point.alerts,
        severity: point.severity.map(|s| s.as_str()),
    }
}

fn line_point_view(point: &LinePoint) -> LinePointView {
    LinePointView {
        time: point.time.clone(),
        alerts: point.alerts,
    }
}

/// Group matched widgets by category, in category order, skipping empty groups.
pub fn search_view(
    state: &DashboardState,
    matched: &[WidgetEntry<'_>],
    total: usize,
    query: &str,
    filter: &CategoryFilter,
    preview_chars: usize,
) -> SearchView {
    let groups = state
        .categories()
        .filter_map(|category| {
            let widgets: Vec<WidgetSummaryView> = matched
                .iter()
                .filter(|entry| entry.category_id == category.id)
                .map(|entry| WidgetSummaryView {
                    id: entry.widget.id.clone(),
                    name: entry.widget.name.clone(),
                    preview: preview(&entry.widget.text, preview_chars),
                    kind: widget_kind(&entry.widget.body),
                })
                .collect();

            if widgets.is_empty() {
                return None;
            }

            Some(SearchGroupView {
                category_id: category.id.clone(),
                category_name: category.name.clone(),
                count: widgets.len(),
                widgets,
            })
        })
        .collect();

    SearchView {
        shown: matched.len(),
        total,
        filters_active: !query.is_empty() || !filter.is_all(),
        groups,
    }
}

/// First `max_chars` characters, with `...` appended when something was cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push_str("...");
    cut
}
