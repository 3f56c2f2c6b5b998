// Seed catalog - initial dashboard content and sample chart datasets
use super::category::Category;
use super::dashboard::DashboardState;
use super::widget::{BarPoint, ChartType, DonutSlice, LinePoint, Severity, Widget, WidgetBody};
use chrono::{DateTime, Utc};

pub const CSPM_EXECUTIVE: &str = "cspm-executive";
pub const CWPP_DASHBOARD: &str = "cwpp-dashboard";
pub const REGISTRY_SCAN: &str = "registry-scan";

/// Build the seed dashboard, stamped with `now`.
pub fn seed_state(now: DateTime<Utc>) -> DashboardState {
    DashboardState::new(seed_categories(), now)
}

pub fn seed_categories() -> Vec<Category> {
    vec![cspm_executive(), cwpp_dashboard(), registry_scan()]
}

/// Dataset attached to a user-created chart widget of the given type.
pub fn sample_body(chart_type: ChartType) -> WidgetBody {
    match chart_type {
        ChartType::Donut => WidgetBody::Donut(vec![
            DonutSlice::new("Active", 65, "#10B981"),
            DonutSlice::new("Inactive", 25, "#EF4444"),
            DonutSlice::new("Pending", 10, "#F59E0B"),
        ]),
        ChartType::Bar => WidgetBody::Bar(vec![
            BarPoint::new("Jan", 12, None),
            BarPoint::new("Feb", 19, None),
            BarPoint::new("Mar", 15, None),
            BarPoint::new("Apr", 8, None),
            BarPoint::new("May", 22, None),
        ]),
        ChartType::Line => WidgetBody::Line(vec![
            LinePoint::new("00:00", 5),
            LinePoint::new("06:00", 12),
            LinePoint::new("12:00", 8),
            LinePoint::new("18:00", 15),
            LinePoint::new("24:00", 3),
        ]),
    }
}

fn seed_widget(id: &str, name: &str, text: &str, body: WidgetBody) -> Widget {
    Widget::new(id.to_string(), name.to_string(), text.to_string(), body)
}

fn cspm_executive() -> Category {
    let mut category = Category::new(CSPM_EXECUTIVE, "CSPM Executive Dashboard");
    category.insert(seed_widget(
        "cloud-accounts",
        "Cloud Accounts",
        "Connected (2)\nNot Connected (2)\n\nTotal: 4 Accounts",
        WidgetBody::Donut(vec![
            DonutSlice::new("Connected", 2, "#10B981"),
            DonutSlice::new("Not Connected", 2, "#EF4444"),
        ]),
    ));
    category.insert(seed_widget(
        "cloud-risk-assessment",
        "Cloud Account Risk Assessment",
        "Failed (1689)\nWarning (681)\nNot available (36)\nPassed (7253)\n\nTotal: 9,659 Assessments",
        WidgetBody::Donut(vec![
            DonutSlice::new("Failed", 1689, "#EF4444"),
            DonutSlice::new("Warning", 681, "#F59E0B"),
            DonutSlice::new("Not Available", 36, "#6B7280"),
            DonutSlice::new("Passed", 7253, "#10B981"),
        ]),
    ));
    category
}

fn cwpp_dashboard() -> Category {
    let mut category = Category::new(CWPP_DASHBOARD, "CWPP Dashboard");
    category.insert(seed_widget(
        "namespace-alerts",
        "Top 5 Namespace Specific Alerts",
        "No Graph data available!\n\nPlease check your data source configuration.",
        WidgetBody::Bar(vec![
            BarPoint::new("kube-system", 45, Some(Severity::High)),
            BarPoint::new("default", 32, Some(Severity::Medium)),
            BarPoint::new("monitoring", 28, Some(Severity::High)),
            BarPoint::new("ingress-nginx", 15, Some(Severity::Low)),
            BarPoint::new("cert-manager", 12, Some(Severity::Medium)),
        ]),
    ));
    category.insert(seed_widget(
        "workload-alerts",
        "Workload Alerts",
        "No Graph data available!\n\nWorkload monitoring is currently offline.",
        WidgetBody::Line(vec![
            LinePoint::new("00:00", 12),
            LinePoint::new("04:00", 8),
            LinePoint::new("08:00", 15),
            LinePoint::new("12:00", 22),
            LinePoint::new("16:00", 18),
            LinePoint::new("20:00", 9),
        ]),
    ));
    category
}

fn registry_scan() -> Category {
    let mut category = Category::new(REGISTRY_SCAN, "Registry Scan");
    category.insert(seed_widget(
        "image-risk",
        "Image Risk Assessment",
        "Critical (9)\nHigh (150)\nMedium (50)\nLow (2)\n\nTotal Images Scanned: 211",
        WidgetBody::Donut(vec![
            DonutSlice::new("Critical", 9, "#DC2626"),
            DonutSlice::new("High", 150, "#EA580C"),
            DonutSlice::new("Medium", 50, "#D97706"),
            DonutSlice::new("Low", 2, "#65A30D"),
        ]),
    ));
    category.insert(seed_widget(
        "image-security",
        "Image Security Issues",
        "Critical (2)\nHigh (2)\nMedium (4)\nLow (10)\n\nTotal Issues: 18",
        WidgetBody::Donut(vec![
            DonutSlice::new("Critical", 2, "#DC2626"),
            DonutSlice::new("High", 2, "#EA580C"),
            DonutSlice::new("Medium", 4, "#D97706"),
            DonutSlice::new("Low", 10, "#65A30D"),
        ]),
    ));
    category
}
