//! Configuration loading and settings resolution.
mod loader;
pub mod settings;
pub mod types;

#[cfg(test)]
mod tests;

pub use loader::load_config;
pub use settings::{Settings, parse_overrides, resolve_settings};

#[cfg(test)]
pub(crate) use loader::load_config_file;
