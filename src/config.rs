//! Configuration file parsing and defaults

pub mod settings;

pub use settings::{AccountConfig, ApiConfig, ColorOption, OutputConfig, Settings};
