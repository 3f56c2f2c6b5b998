// Widget service - Use case for turning a submitted form into a dashboard widget
use crate::application::clock::{Clock, IdGenerator};
use crate::application::dashboard_store::DashboardStore;
use crate::application::reducer::StoreError;
use crate::domain::catalog::sample_body;
use crate::domain::validation::{validate, ValidationErrors};
use crate::domain::widget::{ChartType, Widget, WidgetBody};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    Text,
    Chart(ChartType),
}

#[derive(Debug, Clone)]
pub struct WidgetForm {
    pub name: String,
    pub text: String,
    pub kind: WidgetKind,
}

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Clone)]
pub struct WidgetService {
    store: Arc<DashboardStore>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl WidgetService {
    pub fn new(store: Arc<DashboardStore>, clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, clock, ids }
    }

    pub async fn create_widget(&self, category_id: &str, form: WidgetForm) -> Result<Widget, WidgetError> {
        // category is checked before the form
        if self.store.snapshot().await.category(category_id).is_none() {
            return Err(StoreError::CategoryNotFound {
                category_id: category_id.to_string(),
            }
            .into());
        }

        let validated = validate(&form.name, &form.text)?;
        let now = self.clock.now();

        let body = match form.kind {
            WidgetKind::Text => WidgetBody::Text,
            WidgetKind::Chart(chart_type) => sample_body(chart_type),
        };
        let widget = Widget::new(self.ids.widget_id(now), validated.name, validated.text, body)
            .with_created_at(now);

        self.store.add_widget(category_id, widget.clone()).await?;
        Ok(widget)
    }
}
