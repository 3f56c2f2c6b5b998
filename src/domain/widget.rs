// Widget domain model
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonutSlice {
    pub name: String,
    pub value: u64,
    pub color: String,
}

impl DonutSlice {
    pub fn new(name: &str, value: u64, color: &str) -> Self {
        Self {
            name: name.to_string(),
            value,
            color: color.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarPoint {
    pub name: String,
    pub alerts: u64,
    pub severity: Option<Severity>,
}

impl BarPoint {
    pub fn new(name: &str, alerts: u64, severity: Option<Severity>) -> Self {
        Self {
            name: name.to_string(),
            alerts,
            severity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePoint {
    pub time: String,
    pub alerts: u64,
}

impl LinePoint {
    pub fn new(time: &str, alerts: u64) -> Self {
        Self {
            time: time.to_string(),
            alerts,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartType {
    Donut,
    Bar,
    Line,
}

impl ChartType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Donut => "donut",
            ChartType::Bar => "bar",
            ChartType::Line => "line",
        }
    }
}

/// What a widget displays. Chart variants carry only the dataset their chart needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetBody {
    Text,
    Donut(Vec<DonutSlice>),
    Bar(Vec<BarPoint>),
    Line(Vec<LinePoint>),
}

impl WidgetBody {
    pub fn chart_type(&self) -> Option<ChartType> {
        match self {
            WidgetBody::Text => None,
            WidgetBody::Donut(_) => Some(ChartType::Donut),
            WidgetBody::Bar(_) => Some(ChartType::Bar),
            WidgetBody::Line(_) => Some(ChartType::Line),
        }
    }

    pub fn is_chart(&self) -> bool {
        self.chart_type().is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    pub id: String,
    pub name: String,
    /// Textual summary; chart widgets keep one too so clients can switch views.
    pub text: String,
    pub body: WidgetBody,
    /// Seed widgets have no creation time.
    pub created_at: Option<DateTime<Utc>>,
}

impl Widget {
    pub fn new(id: String, name: String, text: String, body: WidgetBody) -> Self {
        Self {
            id,
            name,
            text,
            body,
            created_at: None,
        }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}
