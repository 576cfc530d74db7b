#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use netpolicy_core::{
    AttrType, Attribute, BandwidthAttr, CosAttr, ErrorCode, FirewallAttr, FirewallRule,
    PolicyAttribute, PolicyError, VendorSpecificAttr,
};

#[test]
fn empty_firewall_encodes_rules_and_group_id() {
    let out = FirewallAttr::new().encode().unwrap();
    assert_eq!(
        &out[..],
        br#"{"type":"firewall","data":{"rules":[],"groupId":""}}"#
    );

    let back = FirewallAttr::decode(&out).unwrap();
    assert_eq!(back, FirewallAttr::new());
    assert!(back.rules().is_empty());
}

#[test]
fn firewall_rules_keep_order_and_duplicates() {
    let ssh = FirewallRule::new("in", "allow", "tcp", "22", "admins", "");
    let dns = FirewallRule::new("out", "allow", "udp", "53", "", "10.0.0.0/8");

    let mut fw = FirewallAttr::new().with_group_id("edge");
    fw.add_rule(ssh.clone());
    fw.add_rule(dns.clone());
    fw.add_rule(ssh.clone());

    let back = FirewallAttr::decode(&fw.encode().unwrap()).unwrap();
    assert_eq!(back.group_id(), "edge");
    assert_eq!(back.rules(), &[ssh.clone(), dns, ssh][..]);
}

#[test]
fn firewall_rule_wire_keys() {
    let fw = FirewallAttr::new()
        .with_group_id("g")
        .with_rule(FirewallRule::new("in", "allow", "tcp", "22", "peers", "1.2.3.4/32"));
    let v: serde_json::Value = serde_json::from_slice(&fw.encode().unwrap()).unwrap();
    assert_eq!(
        v,
        serde_json::json!({
            "type": "firewall",
            "data": {
                "rules": [{
                    "direction": "in",
                    "action": "allow",
                    "protocol": "tcp",
                    "port": "22",
                    "peerGroupId": "peers",
                    "peerCIDR": "1.2.3.4/32"
                }],
                "groupId": "g"
            }
        })
    );
}

#[test]
fn scalar_attrs_encode_plain_payloads() {
    assert_eq!(
        &BandwidthAttr::new("bw100").encode().unwrap()[..],
        br#"{"type":"bandwidth","data":"bw100"}"#
    );
    assert_eq!(&CosAttr::new(1).encode().unwrap()[..], br#"{"type":"cos","data":1}"#);
    assert_eq!(
        &VendorSpecificAttr::new("vendor1").encode().unwrap()[..],
        br#"{"type":"vendor-specific","data":"vendor1"}"#
    );
}

#[test]
fn scalar_values_are_not_constrained() {
    let cos = CosAttr::decode(br#"{"type":"cos","data":-7}"#).unwrap();
    assert_eq!(cos.value(), -7);

    let bw = BandwidthAttr::decode(br#"{"type":"bandwidth","data":"not a number"}"#).unwrap();
    assert_eq!(bw.value(), "not a number");
}

#[test]
fn bandwidth_rejects_cos_envelope() {
    let err = BandwidthAttr::decode(br#"{"type":"cos","data":1}"#).unwrap_err();
    assert_eq!(
        err,
        PolicyError::DiscriminatorMismatch {
            received: "cos".into(),
            expected: "bandwidth",
        }
    );
    assert_eq!(err.code(), ErrorCode::DiscriminatorMismatch);
    assert_eq!(
        err.to_string(),
        r#"invalid policy attribute string: "cos". Expected: "bandwidth""#
    );
}

#[test]
fn discriminator_checked_before_payload() {
    // payload shape is wrong for a firewall too, but the tag wins
    let err = FirewallAttr::decode(br#"{"type":"cos","data":1}"#).unwrap_err();
    assert_eq!(err.code(), ErrorCode::DiscriminatorMismatch);
}

#[test]
fn wrong_payload_shape_is_malformed() {
    let err = CosAttr::decode(br#"{"type":"cos","data":1.5}"#).unwrap_err();
    assert_eq!(err.code(), ErrorCode::MalformedEnvelope);

    let err = VendorSpecificAttr::decode(b"not json").unwrap_err();
    assert_eq!(err.code(), ErrorCode::MalformedEnvelope);
}

#[test]
fn attribute_dispatches_on_discriminator() {
    let attr = Attribute::decode(br#"{"type":"vendor-specific","data":"acme"}"#).unwrap();
    assert_eq!(attr, Attribute::VendorSpecific(VendorSpecificAttr::new("acme")));
    assert_eq!(attr.attr_type(), AttrType::VendorSpecific);

    let err = Attribute::decode(br#"{"type":"bogus","data":"x"}"#).unwrap_err();
    assert_eq!(err, PolicyError::UnknownAttributeType("bogus".into()));
}

#[test]
fn decode_as_still_checks_the_tag() {
    let err = Attribute::decode_as(AttrType::Cos, br#"{"type":"bandwidth","data":"x"}"#)
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::DiscriminatorMismatch);
}

#[test]
fn allowed_discriminators() {
    for t in AttrType::ALLOWED {
        assert!(AttrType::is_allowed(t.as_str()));
        assert_eq!(AttrType::parse(t.as_str()), Some(t));
    }
    assert!(!AttrType::is_allowed("Firewall"));
    assert!(!AttrType::is_allowed(""));
}

#[test]
fn attributes_embed_in_caller_documents() {
    let attrs: Vec<Attribute> = serde_json::from_str(
        r#"[{"type":"cos","data":4},{"type":"bandwidth","data":"1g"}]"#,
    )
    .unwrap();
    assert_eq!(
        attrs,
        vec![
            Attribute::Cos(CosAttr::new(4)),
            Attribute::Bandwidth(BandwidthAttr::new("1g")),
        ]
    );

    let err = serde_json::from_str::<Vec<Attribute>>(r#"[{"type":"qos","data":1}]"#)
        .unwrap_err();
    assert!(err.to_string().contains("invalid policy attribute type \"qos\""));
}
