pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{JsonCodec, TextCodec};
pub use config::CodecConfig;
pub use core::{Codec, Element, Set};
pub use utils::error::{Result, SetError};
