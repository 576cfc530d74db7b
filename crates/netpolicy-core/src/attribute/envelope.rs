//! `{type, data}` envelope shared by all attribute variants.
//!
//! Inbound envelopes keep `data` as `RawValue` so nothing is parsed until the
//! discriminator has been checked. Absent or `null` fields read as their zero
//! value and unknown fields are ignored, matching what existing producers emit.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use super::AttrType;
use crate::error::{PolicyError, Result};

/// Inbound envelope with a lazily parsed payload.
#[derive(Debug, Deserialize, Serialize)]
pub struct RawEnvelope {
    /// Discriminator (field name is `type` in JSON).
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub attr_type: String,
    /// Payload, stored as raw JSON until the variant parses it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Box<RawValue>>,
}

impl RawEnvelope {
    pub fn parse(buf: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(buf)?)
    }

    /// Parse `data` as the payload of `expected`.
    ///
    /// The discriminator is checked before the payload is touched, so a
    /// foreign envelope is reported as a mismatch rather than a shape error.
    pub fn payload<T>(&self, expected: AttrType) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        if self.attr_type != expected.as_str() {
            return Err(PolicyError::DiscriminatorMismatch {
                received: self.attr_type.clone(),
                expected: expected.as_str(),
            });
        }
        match &self.data {
            Some(raw) => Ok(serde_json::from_str(raw.get())?),
            None => Ok(T::default()),
        }
    }
}

/// Outbound envelope borrowing a variant's payload.
#[derive(Debug, Serialize)]
pub(crate) struct OutEnvelope<'a, D: Serialize> {
    #[serde(rename = "type")]
    pub attr_type: &'static str,
    pub data: &'a D,
}

/// `null` reads as the zero value instead of failing.
pub(crate) fn null_as_default<'de, D, T>(d: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}
