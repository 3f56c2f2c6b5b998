// Domain layer - Dashboard model, seed catalog and form rules
pub mod catalog;
pub mod category;
pub mod dashboard;
pub mod validation;
pub mod widget;
