//! Policy attributes and their discriminator table.
//!
//! Four closed shapes travel on the wire as `{"type": <discriminator>, "data": ...}`:
//!
//! | type              | data                                   |
//! |-------------------|----------------------------------------|
//! | `firewall`        | `{"rules": [...], "groupId": "..."}`   |
//! | `bandwidth`       | string                                 |
//! | `cos`             | integer                                |
//! | `vendor-specific` | string                                 |
//!
//! Each variant decodes independently and rejects envelopes tagged for
//! another variant. `Attribute` is the closed sum over all four and is what a
//! `Policy` holds.

use std::fmt;

use bytes::Bytes;
use serde::{Serialize, Serializer};

use crate::error::{PolicyError, Result};

/// `Deserialize` through the variant's own envelope check (JSON only).
macro_rules! envelope_deserialize {
    ($ty:ty) => {
        impl<'de> ::serde::Deserialize<'de> for $ty {
            fn deserialize<D>(d: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let env = <$crate::attribute::envelope::RawEnvelope as ::serde::Deserialize>::deserialize(d)?;
                Self::from_envelope(&env).map_err(::serde::de::Error::custom)
            }
        }
    };
}
pub(crate) use envelope_deserialize;

pub mod envelope;
pub mod firewall;
pub mod scalar;

pub use envelope::RawEnvelope;
pub use firewall::{FirewallAttr, FirewallRule};
pub use scalar::{BandwidthAttr, CosAttr, VendorSpecificAttr};

/// Attribute discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttrType {
    Firewall,
    Bandwidth,
    Cos,
    VendorSpecific,
}

impl AttrType {
    /// Every allowed discriminator. Anything else is rejected on decode.
    pub const ALLOWED: [AttrType; 4] = [
        AttrType::Firewall,
        AttrType::Bandwidth,
        AttrType::Cos,
        AttrType::VendorSpecific,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AttrType::Firewall => "firewall",
            AttrType::Bandwidth => "bandwidth",
            AttrType::Cos => "cos",
            AttrType::VendorSpecific => "vendor-specific",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALLOWED.into_iter().find(|t| t.as_str() == s)
    }

    pub fn is_allowed(s: &str) -> bool {
        Self::parse(s).is_some()
    }
}

impl fmt::Display for AttrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability shared by every attribute variant.
pub trait PolicyAttribute: Serialize + Sized {
    fn attr_type(&self) -> AttrType;

    /// Discriminator string written to the envelope's `type` field.
    fn type_tag(&self) -> &'static str {
        self.attr_type().as_str()
    }

    /// Serialize as a `{type, data}` envelope.
    fn encode(&self) -> Result<Bytes> {
        Ok(Bytes::from(serde_json::to_vec(self)?))
    }

    /// Parse a `{type, data}` envelope.
    fn decode(buf: &[u8]) -> Result<Self>;
}

/// Any one of the four attribute variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    Firewall(FirewallAttr),
    Bandwidth(BandwidthAttr),
    Cos(CosAttr),
    VendorSpecific(VendorSpecificAttr),
}

impl Attribute {
    /// Decode `buf` as the variant for `attr_type`.
    ///
    /// The variant still checks the envelope's own discriminator.
    pub fn decode_as(attr_type: AttrType, buf: &[u8]) -> Result<Self> {
        Ok(match attr_type {
            AttrType::Firewall => Attribute::Firewall(FirewallAttr::decode(buf)?),
            AttrType::Bandwidth => Attribute::Bandwidth(BandwidthAttr::decode(buf)?),
            AttrType::Cos => Attribute::Cos(CosAttr::decode(buf)?),
            AttrType::VendorSpecific => {
                Attribute::VendorSpecific(VendorSpecificAttr::decode(buf)?)
            }
        })
    }

    /// Look up the discriminator, then hand the re-serialized envelope to
    /// the matching variant so it enforces its own shape.
    pub(crate) fn from_envelope(env: &RawEnvelope) -> Result<Self> {
        let Some(attr_type) = AttrType::parse(&env.attr_type) else {
            tracing::debug!(attr_type = %env.attr_type, "rejecting unknown attribute type");
            return Err(PolicyError::UnknownAttributeType(env.attr_type.clone()));
        };
        tracing::trace!(%attr_type, "dispatching attribute");
        let buf = serde_json::to_vec(env)?;
        Self::decode_as(attr_type, &buf)
    }
}

impl PolicyAttribute for Attribute {
    fn attr_type(&self) -> AttrType {
        match self {
            Attribute::Firewall(a) => a.attr_type(),
            Attribute::Bandwidth(a) => a.attr_type(),
            Attribute::Cos(a) => a.attr_type(),
            Attribute::VendorSpecific(a) => a.attr_type(),
        }
    }

    fn decode(buf: &[u8]) -> Result<Self> {
        Self::from_envelope(&RawEnvelope::parse(buf)?)
    }
}

impl Serialize for Attribute {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Attribute::Firewall(a) => a.serialize(s),
            Attribute::Bandwidth(a) => a.serialize(s),
            Attribute::Cos(a) => a.serialize(s),
            Attribute::VendorSpecific(a) => a.serialize(s),
        }
    }
}

envelope_deserialize!(Attribute);

impl From<FirewallAttr> for Attribute {
    fn from(a: FirewallAttr) -> Self {
        Attribute::Firewall(a)
    }
}

impl From<BandwidthAttr> for Attribute {
    fn from(a: BandwidthAttr) -> Self {
        Attribute::Bandwidth(a)
    }
}

impl From<CosAttr> for Attribute {
    fn from(a: CosAttr) -> Self {
        Attribute::Cos(a)
    }
}

impl From<VendorSpecificAttr> for Attribute {
    fn from(a: VendorSpecificAttr) -> Self {
        Attribute::VendorSpecific(a)
    }
}
