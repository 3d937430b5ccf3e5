// Domain layer - Dashboard and layout models
pub mod dashboard;
pub mod layout;
