//! Firewall attribute: an ordered rule list plus a group identifier.

use serde::{Deserialize, Serialize, Serializer};

use super::envelope::{null_as_default, OutEnvelope, RawEnvelope};
use super::{AttrType, PolicyAttribute};
use crate::error::Result;

/// One firewall rule. All fields are opaque text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FirewallRule {
    #[serde(default, deserialize_with = "null_as_default")]
    pub direction: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub action: String,
    // older producers emit the capitalised key
    #[serde(default, alias = "Protocol", deserialize_with = "null_as_default")]
    pub protocol: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub port: String,
    #[serde(rename = "peerGroupId", default, deserialize_with = "null_as_default")]
    pub peer_group_id: String,
    #[serde(rename = "peerCIDR", default, deserialize_with = "null_as_default")]
    pub peer_cidr: String,
}

impl FirewallRule {
    pub fn new(
        direction: impl Into<String>,
        action: impl Into<String>,
        protocol: impl Into<String>,
        port: impl Into<String>,
        peer_group_id: impl Into<String>,
        peer_cidr: impl Into<String>,
    ) -> Self {
        Self {
            direction: direction.into(),
            action: action.into(),
            protocol: protocol.into(),
            port: port.into(),
            peer_group_id: peer_group_id.into(),
            peer_cidr: peer_cidr.into(),
        }
    }
}

/// Security policy: actions for traffic matching L3/L4 protocol and L4 port.
///
/// Rules keep insertion order; duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FirewallAttr {
    rules: Vec<FirewallRule>,
    group_id: String,
}

#[derive(Serialize)]
struct DataOut<'a> {
    rules: &'a [FirewallRule],
    #[serde(rename = "groupId")]
    group_id: &'a str,
}

#[derive(Default, Deserialize)]
struct DataIn {
    #[serde(rename = "groupId", default, deserialize_with = "null_as_default")]
    group_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    rules: Vec<FirewallRule>,
}

impl FirewallAttr {
    /// Empty rule list, empty group id.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = group_id.into();
        self
    }

    pub fn with_rule(mut self, rule: FirewallRule) -> Self {
        self.add_rule(rule);
        self
    }

    /// Append a rule after the existing ones.
    pub fn add_rule(&mut self, rule: FirewallRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[FirewallRule] {
        &self.rules
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub(crate) fn from_envelope(env: &RawEnvelope) -> Result<Self> {
        let data: DataIn = env.payload(AttrType::Firewall)?;
        let mut fw = FirewallAttr::new().with_group_id(data.group_id);
        for rule in data.rules {
            fw.add_rule(rule);
        }
        Ok(fw)
    }
}

impl Serialize for FirewallAttr {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        OutEnvelope {
            attr_type: AttrType::Firewall.as_str(),
            data: &DataOut {
                rules: &self.rules,
                group_id: &self.group_id,
            },
        }
        .serialize(s)
    }
}

impl PolicyAttribute for FirewallAttr {
    fn attr_type(&self) -> AttrType {
        AttrType::Firewall
    }

    fn decode(buf: &[u8]) -> Result<Self> {
        Self::from_envelope(&RawEnvelope::parse(buf)?)
    }
}

super::envelope_deserialize!(FirewallAttr);
