//! Policy kinds and the kind-keyed `PolicyMap`.
//!
//! Only the six kinds below exist; unknown strings are rejected on decode,
//! and one unknown key fails a whole `PolicyMap`.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{PolicyError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PolicyType {
    NetworkFireWallPolicy,
    NetworkPriorityPolicy,
    NetworkBandwidthPolicy,
    NetworkLoadBalancePolicy,
    StorageRateLimitPolicy,
    StorageSnapshotPolicy,
}

impl PolicyType {
    pub const ALL: [PolicyType; 6] = [
        PolicyType::NetworkFireWallPolicy,
        PolicyType::NetworkPriorityPolicy,
        PolicyType::NetworkBandwidthPolicy,
        PolicyType::NetworkLoadBalancePolicy,
        PolicyType::StorageRateLimitPolicy,
        PolicyType::StorageSnapshotPolicy,
    ];

    /// Canonical wire string.
    pub fn as_str(self) -> &'static str {
        match self {
            PolicyType::NetworkFireWallPolicy => "network-firewall-policy",
            PolicyType::NetworkPriorityPolicy => "network-priority-policy",
            PolicyType::NetworkBandwidthPolicy => "network-bandwidth-policy",
            PolicyType::NetworkLoadBalancePolicy => "network-loadbalance-policy",
            PolicyType::StorageRateLimitPolicy => "storage-ratelimit-policy",
            PolicyType::StorageSnapshotPolicy => "storage-snapshot-policy",
        }
    }
}

impl FromStr for PolicyType {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| PolicyError::UnsupportedPolicyType(s.to_string()))
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PolicyType {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PolicyType {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Free-text value per policy kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyMap(BTreeMap<PolicyType, String>);

impl PolicyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the previous value for `kind`, if any.
    pub fn insert(&mut self, kind: PolicyType, value: impl Into<String>) -> Option<String> {
        self.0.insert(kind, value.into())
    }

    pub fn get(&self, kind: PolicyType) -> Option<&str> {
        self.0.get(&kind).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PolicyType, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Every key is validated before anything is inserted.
    pub fn decode(buf: &[u8]) -> Result<Self> {
        let raw: BTreeMap<String, String> = serde_json::from_slice(buf)?;
        Self::from_raw(raw)
    }

    pub fn encode(&self) -> Result<Bytes> {
        Ok(Bytes::from(serde_json::to_vec(self)?))
    }

    fn from_raw(raw: BTreeMap<String, String>) -> Result<Self> {
        let mut out = BTreeMap::new();
        for (key, value) in raw {
            let kind = match key.parse::<PolicyType>() {
                Ok(kind) => kind,
                Err(e) => {
                    tracing::debug!(key = %key, "rejecting unknown policy type key");
                    return Err(e);
                }
            };
            out.insert(kind, value);
        }
        Ok(PolicyMap(out))
    }
}

impl FromIterator<(PolicyType, String)> for PolicyMap {
    fn from_iter<I: IntoIterator<Item = (PolicyType, String)>>(iter: I) -> Self {
        PolicyMap(iter.into_iter().collect())
    }
}

impl Serialize for PolicyMap {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.collect_map(self.0.iter().map(|(k, v)| (k.as_str(), v)))
    }
}

impl<'de> Deserialize<'de> for PolicyMap {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let raw = BTreeMap::<String, String>::deserialize(d)?;
        PolicyMap::from_raw(raw).map_err(de::Error::custom)
    }
}
