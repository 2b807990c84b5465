pub mod color;
pub mod config;
pub mod edges;
pub mod gradient;
pub mod layout;

pub use config::{config_fallback, get_config, reload_config};
