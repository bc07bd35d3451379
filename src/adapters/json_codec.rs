use crate::config::CodecConfig;
use crate::core::{Codec, Element, Result, Set};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured codec: a set becomes a `serde_json::Value::Array`.
#[derive(Debug, Clone, Default)]
pub struct JsonCodec {
    config: CodecConfig,
}

impl JsonCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }
}

impl Codec for JsonCodec {
    type Encoded = Value;
    type Source = Value;

    fn encode<T>(&self, set: &Set<T>) -> Result<Value>
    where
        T: Element + Serialize,
    {
        let value = serde_json::to_value(set)?;
        tracing::debug!("Encoded set of {} elements to structured form", set.len());
        Ok(value)
    }

    fn decode<T>(&self, input: &Value) -> Result<Set<T>>
    where
        T: Element + DeserializeOwned,
    {
        let set = Set::<T>::deserialize(input)?;
        self.config.check_element_count(set.len())?;
        tracing::debug!("Decoded set of {} elements from structured form", set.len());
        Ok(set)
    }
}

impl<T: Element + Serialize> Set<T> {
    /// Structured form: an array of the elements, in unspecified order.
    pub fn to_value(&self) -> Result<Value> {
        JsonCodec::default().encode(self)
    }
}

impl<T: Element + DeserializeOwned> Set<T> {
    pub fn from_value(value: &Value) -> Result<Self> {
        JsonCodec::default().decode(value)
    }
}
