// Widget search - Flattening and filtering for the management view
use crate::domain::dashboard::DashboardState;
use crate::domain::widget::Widget;

pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, category_id: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => id == category_id,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

/// `"all"` and the empty string mean no category restriction.
impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() || s == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(s.to_string())
        }
    }
}

/// A widget together with the category that owns it.
#[derive(Debug, Clone, Copy)]
pub struct WidgetEntry<'a> {
    pub category_id: &'a str,
    pub category_name: &'a str,
    pub widget: &'a Widget,
}

/// All widgets, category order first, then widget order within a category.
pub fn flatten(state: &DashboardState) -> Vec<WidgetEntry<'_>> {
    state
        .categories()
        .flat_map(|category| {
            category.widgets().map(move |widget| WidgetEntry {
                category_id: &category.id,
                category_name: &category.name,
                widget,
            })
        })
        .collect()
}

/// Keep the entries that pass both the category filter and the text query.
///
/// The query is a case-insensitive substring match against the widget name,
/// the widget text or the category name. Input order is preserved.
pub fn filter_widgets<'a>(
    entries: &[WidgetEntry<'a>],
    query: &str,
    category: &CategoryFilter,
) -> Vec<WidgetEntry<'a>> {
    let needle = query.to_lowercase();
    let matched: Vec<WidgetEntry<'a>> = entries
        .iter()
        .filter(|entry| category.matches(entry.category_id))
        .filter(|entry| needle.is_empty() || matches_query(entry, &needle))
        .copied()
        .collect();

    tracing::debug!(
        query,
        ?category,
        matched = matched.len(),
        total = entries.len(),
        "Filtered widgets"
    );

    matched
}

fn matches_query(entry: &WidgetEntry<'_>, needle: &str) -> bool {
    [entry.widget.name.as_str(), entry.widget.text.as_str(), entry.category_name]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
