#[path = "integration/config.rs"]
mod config;
#[path = "integration/error_handling.rs"]
mod error_handling;
#[path = "integration/execution.rs"]
mod execution;
#[path = "integration/properties.rs"]
mod properties;
#[path = "integration/translation.rs"]
mod translation;
