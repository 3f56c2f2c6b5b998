// API errors and their HTTP mapping
use crate::application::reducer::StoreError;
use crate::application::widget_service::WidgetError;
use crate::domain::validation::ValidationErrors;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Map, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Confirmation required to {action}; repeat the request with confirm=true")]
    ConfirmationRequired { action: &'static str },

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<WidgetError> for ApiError {
    fn from(err: WidgetError) -> Self {
        match err {
            WidgetError::Invalid(errors) => ApiError::Validation(errors),
            WidgetError::Store(err) => ApiError::Store(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            ApiError::ConfirmationRequired { .. } => {
                (StatusCode::PRECONDITION_REQUIRED, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Validation(errors) => {
                let fields: Map<String, Value> = errors
                    .iter()
                    .map(|(field, error)| (field.as_str().to_string(), Value::String(error.to_string())))
                    .collect();
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "error": message, "fields": fields })),
                )
                    .into_response()
            }
            ApiError::Store(StoreError::CategoryNotFound { .. }) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
            }
        }
    }
}
