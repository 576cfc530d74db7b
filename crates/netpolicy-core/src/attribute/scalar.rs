//! Single-value attributes: bandwidth, class of service, vendor tag.
//!
//! None of these constrain their value; bandwidth and vendor tags are opaque
//! text and class of service is any integer.

use serde::{Serialize, Serializer};

use super::envelope::{OutEnvelope, RawEnvelope};
use super::{AttrType, PolicyAttribute};
use crate::error::Result;

macro_rules! scalar_attr {
    ($(#[$doc:meta])* $name:ident($inner:ty), $kind:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
        pub struct $name($inner);

        impl $name {
            pub fn new(value: impl Into<$inner>) -> Self {
                Self(value.into())
            }

            pub(crate) fn from_envelope(env: &RawEnvelope) -> Result<Self> {
                Ok(Self(env.payload($kind)?))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
                OutEnvelope {
                    attr_type: $kind.as_str(),
                    data: &self.0,
                }
                .serialize(s)
            }
        }

        impl PolicyAttribute for $name {
            fn attr_type(&self) -> AttrType {
                $kind
            }

            fn decode(buf: &[u8]) -> Result<Self> {
                Self::from_envelope(&RawEnvelope::parse(buf)?)
            }
        }

        super::envelope_deserialize!($name);
    };
}

scalar_attr!(
    /// Bandwidth available to traffic originating from the endpoint.
    BandwidthAttr(String),
    AttrType::Bandwidth
);

scalar_attr!(
    /// Class of service applied to traffic originating from the endpoint.
    CosAttr(i64),
    AttrType::Cos
);

scalar_attr!(
    /// Vendor label selecting vendor-specific handling of endpoint traffic.
    VendorSpecificAttr(String),
    AttrType::VendorSpecific
);

impl BandwidthAttr {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl CosAttr {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl VendorSpecificAttr {
    pub fn value(&self) -> &str {
        &self.0
    }
}
