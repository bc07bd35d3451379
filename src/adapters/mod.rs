// Adapters layer: concrete codecs behind the `Codec` port.

pub mod json_codec;
pub mod text_codec;

pub use json_codec::JsonCodec;
pub use text_codec::TextCodec;
