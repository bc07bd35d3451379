use crate::config::CodecConfig;
use crate::core::{Codec, Element, Result, Set};
use crate::utils::error::SetError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::str::FromStr;

/// Text codec: a set becomes the UTF-8 bytes of a JSON array.
#[derive(Debug, Clone, Default)]
pub struct TextCodec {
    config: CodecConfig,
}

impl TextCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }
}

impl Codec for TextCodec {
    type Encoded = Vec<u8>;
    type Source = [u8];

    fn encode<T>(&self, set: &Set<T>) -> Result<Vec<u8>>
    where
        T: Element + Serialize,
    {
        let bytes = if self.config.pretty {
            serde_json::to_vec_pretty(set)?
        } else {
            serde_json::to_vec(set)?
        };
        tracing::debug!("Encoded set of {} elements to {} bytes", set.len(), bytes.len());
        Ok(bytes)
    }

    fn decode<T>(&self, input: &[u8]) -> Result<Set<T>>
    where
        T: Element + DeserializeOwned,
    {
        let set: Set<T> = serde_json::from_slice(input)?;
        self.config.check_element_count(set.len())?;
        tracing::debug!("Decoded set of {} elements from {} bytes", set.len(), input.len());
        Ok(set)
    }
}

impl<T: Element + Serialize> Set<T> {
    pub fn to_text(&self) -> Result<Vec<u8>> {
        TextCodec::default().encode(self)
    }
}

impl<T: Element + DeserializeOwned> Set<T> {
    pub fn from_text(text: &[u8]) -> Result<Self> {
        TextCodec::default().decode(text)
    }

    /// Decodes `text` and, only if that succeeds, replaces the contents of `self`.
    pub fn replace_from_text(&mut self, text: &[u8]) -> Result<()> {
        *self = Self::from_text(text)?;
        Ok(())
    }
}

impl<T: Element + DeserializeOwned> FromStr for Set<T> {
    type Err = SetError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s.as_bytes())
    }
}
