// Application layer - Use cases over the domain models
pub mod dashboard_store;
pub mod fixtures;
pub mod layout_builder;
pub mod screenshot_urls;
