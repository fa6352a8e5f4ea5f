//! Configuration types for calgrid.

mod global_config;

pub use global_config::{DEFAULT_LOCALE, GlobalConfig, OutputFormat};
