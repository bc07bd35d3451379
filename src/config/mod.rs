pub mod toml_config;

pub use toml_config::{CodecConfig, TomlConfig};
