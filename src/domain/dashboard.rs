// Dashboard domain model
use super::category::Category;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Root of the widget tree. Categories are fixed once the state is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    categories: HashMap<String, Category>,
    order: Vec<String>,
    pub last_updated: DateTime<Utc>,
}

impl DashboardState {
    pub fn new(categories: Vec<Category>, last_updated: DateTime<Utc>) -> Self {
        let mut map = HashMap::new();
        let mut order = Vec::new();
        for category in categories {
            if !map.contains_key(&category.id) {
                order.push(category.id.clone());
            }
            map.insert(category.id.clone(), category);
        }

        Self {
            categories: map,
            order,
            last_updated,
        }
    }

    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.get(category_id)
    }

    pub fn category_mut(&mut self, category_id: &str) -> Option<&mut Category> {
        self.categories.get_mut(category_id)
    }

    /// Categories in seed order
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.order.iter().filter_map(|id| self.categories.get(id))
    }

    pub fn total_categories(&self) -> usize {
        self.order.len()
    }

    pub fn total_widgets(&self) -> usize {
        self.categories().map(Category::len).sum()
    }
}
