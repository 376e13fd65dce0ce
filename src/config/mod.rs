//! Configuration module for the obra dashboard
//!
//! - Config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ObraPaths;
pub use settings::Settings;
