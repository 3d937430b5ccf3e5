// Peripheral utilities of the chartdeck web application: URL construction
// for the headless rendering subsystem and dashboard layout fixtures for
// integration testing.
pub mod application;
pub mod domain;
pub mod infrastructure;
