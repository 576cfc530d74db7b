//! Policy decode vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use netpolicy_core::{Attribute, Policy, PolicyAttribute};

use vector_loader::load;

fn strings(v: &serde_json::Value) -> Vec<String> {
    v.as_array()
        .unwrap()
        .iter()
        .map(|s| s.as_str().unwrap().to_string())
        .collect()
}

#[test]
fn policy_vectors() {
    let files = [
        "policy_mixed_order.json",
        "policy_unknown_type.json",
        "policy_bad_cos_payload.json",
        "policy_not_utf8.json",
        "policy_attributes_not_list.json",
        "policy_firewall_rules.json",
        "policy_capitalised_protocol.json",
        "policy_empty_object.json",
        "policy_null_payloads.json",
        "policy_missing_type.json",
    ];

    for f in files {
        let v = load(f);
        let raw = v.frame.decode();
        let res = Policy::decode(&raw);

        if let Some(err) = v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(e.code().as_str(), err.code, "vector={}", v.description);
            continue;
        }

        let policy = res.expect("expected ok policy");
        let ex = v.expect.expect("missing expect block");

        assert_eq!(policy.category, ex["category"].as_str().unwrap(), "vector={}", v.description);
        assert_eq!(
            policy.category_instance,
            ex["category_instance"].as_str().unwrap(),
            "vector={}",
            v.description
        );

        let tags: Vec<String> = policy
            .attributes
            .iter()
            .map(|a| a.type_tag().to_string())
            .collect();
        assert_eq!(tags, strings(&ex["attribute_types"]), "vector={}", v.description);

        if let Some(fw_ex) = ex.get("firewall") {
            let Some(Attribute::Firewall(fw)) = policy.attributes.first() else {
                panic!("vector={}: first attribute is not a firewall", v.description);
            };
            assert_eq!(fw.group_id(), fw_ex["group_id"].as_str().unwrap(), "vector={}", v.description);
            let ports: Vec<String> = fw.rules().iter().map(|r| r.port.clone()).collect();
            assert_eq!(ports, strings(&fw_ex["ports"]), "vector={}", v.description);
            if let Some(protocols) = fw_ex.get("protocols") {
                let got: Vec<String> = fw.rules().iter().map(|r| r.protocol.clone()).collect();
                assert_eq!(got, strings(protocols), "vector={}", v.description);
            }
        }
    }
}
