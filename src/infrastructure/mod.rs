// Infrastructure layer - Configuration, routing and storage adapters
pub mod config;
pub mod memory_store;
pub mod routes;
pub mod urls;
