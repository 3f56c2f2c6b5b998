// Category domain model
use super::widget::Widget;
use std::collections::HashMap;

/// A named group of widgets. Lookup is by id; display order is kept
/// separately in `order` because the map does not preserve it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    widgets: HashMap<String, Widget>,
    order: Vec<String>,
}

impl Category {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            widgets: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Insert keyed by `widget.id`. An existing widget with the same id is
    /// replaced in place and keeps its position.
    pub fn insert(&mut self, widget: Widget) {
        if !self.widgets.contains_key(&widget.id) {
            self.order.push(widget.id.clone());
        }
        self.widgets.insert(widget.id.clone(), widget);
    }

    pub fn remove(&mut self, widget_id: &str) -> Option<Widget> {
        let removed = self.widgets.remove(widget_id)?;
        self.order.retain(|id| id != widget_id);
        Some(removed)
    }

    pub fn get(&self, widget_id: &str) -> Option<&Widget> {
        self.widgets.get(widget_id)
    }

    pub fn contains(&self, widget_id: &str) -> bool {
        self.widgets.contains_key(widget_id)
    }

    /// Widgets in insertion order
    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.order.iter().filter_map(|id| self.widgets.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::widget::WidgetBody;

    fn text_widget(id: &str, name: &str) -> Widget {
        Widget::new(
            id.to_string(),
            name.to_string(),
            "some body text".to_string(),
            WidgetBody::Text,
        )
    }

    #[test]
    fn test_widgets_iterate_in_insertion_order() {
        let mut category = Category::new("c", "C");
        category.insert(text_widget("b", "B"));
        category.insert(text_widget("a", "A"));
        category.insert(text_widget("c", "C"));

        let ids: Vec<&str> = category.widgets().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut category = Category::new("c", "C");
        category.insert(text_widget("a", "first"));
        category.insert(text_widget("b", "B"));
        category.insert(text_widget("a", "second"));

        assert_eq!(category.len(), 2);
        let names: Vec<&str> = category.widgets().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["second", "B"]);
    }

    #[test]
    fn test_remove_missing_is_none() {
        let mut category = Category::new("c", "C");
        category.insert(text_widget("a", "A"));

        assert!(category.remove("zzz").is_none());
        assert!(category.remove("a").is_some());
        assert!(category.is_empty());
        assert!(!category.contains("a"));
    }
}
