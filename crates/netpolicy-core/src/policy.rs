//! Policy aggregate.
//!
//! A `Policy` attaches attributes to one instance of a category, e.g. the
//! network named by `category_instance` when `category` is `"network"`.
//!
//! Decoding is two-pass: the outer object is parsed with every attribute
//! kept as a raw `{type, data}` envelope, then each envelope is dispatched on
//! its discriminator. The first bad attribute fails the whole policy.

use bytes::Bytes;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::attribute::envelope::{null_as_default, RawEnvelope};
use crate::attribute::{AttrType, Attribute, PolicyAttribute};
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Policy {
    pub category: String,
    pub category_instance: String,
    /// Kept in wire order. Repeated discriminators are legal.
    pub attributes: Vec<Attribute>,
}

/// Loosely parsed policy: attributes are still untyped envelopes.
#[derive(Debug, Deserialize)]
struct WirePolicy {
    #[serde(default, deserialize_with = "null_as_default")]
    category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    category_instance: String,
    #[serde(default, deserialize_with = "null_as_default")]
    attributes: Vec<RawEnvelope>,
}

#[derive(Serialize)]
struct WirePolicyOut<'a> {
    category: &'a str,
    category_instance: &'a str,
    attributes: &'a [Attribute],
}

#[derive(Debug, Deserialize)]
struct WirePolicySet {
    #[serde(rename = "Policies", default, deserialize_with = "null_as_default")]
    policies: Vec<WirePolicy>,
}

#[derive(Serialize)]
struct WirePolicySetOut<'a> {
    #[serde(rename = "Policies")]
    policies: &'a [Policy],
}

impl Policy {
    pub fn new(category: impl Into<String>, category_instance: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            category_instance: category_instance.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attr: impl Into<Attribute>) -> Self {
        self.push_attribute(attr);
        self
    }

    pub fn push_attribute(&mut self, attr: impl Into<Attribute>) {
        self.attributes.push(attr.into());
    }

    /// First attribute carrying `attr_type`, if any.
    pub fn attribute(&self, attr_type: AttrType) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.attr_type() == attr_type)
    }

    pub fn decode(buf: &[u8]) -> Result<Self> {
        let wire: WirePolicy = serde_json::from_slice(buf)?;
        Self::from_wire(wire)
    }

    pub fn encode(&self) -> Result<Bytes> {
        Ok(Bytes::from(serde_json::to_vec(self)?))
    }

    fn from_wire(wire: WirePolicy) -> Result<Self> {
        let attributes = wire
            .attributes
            .iter()
            .map(Attribute::from_envelope)
            .collect::<Result<Vec<_>>>()?;

        tracing::trace!(
            category = %wire.category,
            instance = %wire.category_instance,
            count = attributes.len(),
            "decoded policy"
        );

        Ok(Policy {
            category: wire.category,
            category_instance: wire.category_instance,
            attributes,
        })
    }
}

impl Serialize for Policy {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        WirePolicyOut {
            category: &self.category,
            category_instance: &self.category_instance,
            attributes: &self.attributes,
        }
        .serialize(s)
    }
}

impl<'de> Deserialize<'de> for Policy {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let wire = WirePolicy::deserialize(d)?;
        Policy::from_wire(wire).map_err(de::Error::custom)
    }
}

/// Decode a policy collection.
///
/// Accepts a bare array of policies or an object holding them under
/// `"Policies"`. Any bad policy fails the whole collection.
pub fn decode_policies(buf: &[u8]) -> Result<Vec<Policy>> {
    let bare = buf
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|b| *b == b'[');

    let wire: Vec<WirePolicy> = if bare {
        serde_json::from_slice(buf)?
    } else {
        serde_json::from_slice::<WirePolicySet>(buf)?.policies
    };

    let policies = wire
        .into_iter()
        .map(Policy::from_wire)
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(count = policies.len(), "decoded policy set");
    Ok(policies)
}

/// Encode a policy collection as `{"Policies": [...]}`.
pub fn encode_policies(policies: &[Policy]) -> Result<Bytes> {
    Ok(Bytes::from(serde_json::to_vec(&WirePolicySetOut {
        policies,
    })?))
}
