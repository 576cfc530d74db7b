//! Decode-then-reencode pass over configured documents.

use std::fs;
use std::io::Write;

use bytes::Bytes;
use serde::Serialize;

use netpolicy_core::{decode_policies, encode_policies, Policy, PolicyError, PolicyMap};

use crate::config::{CheckConfig, DocumentConfig, DocumentKind};
use crate::error::{Result, ToolError};

/// Outcome of checking one document.
#[derive(Debug)]
pub struct Checked {
    pub kind: DocumentKind,
    /// Policies (or map entries) in the document.
    pub items: usize,
    /// Canonical re-encoding.
    pub output: Bytes,
}

#[derive(Serialize)]
struct PoliciesOut<'a> {
    #[serde(rename = "Policies")]
    policies: &'a [Policy],
}

fn pretty<T: Serialize>(value: &T) -> netpolicy_core::Result<Bytes> {
    Ok(Bytes::from(serde_json::to_vec_pretty(value)?))
}

/// Decode `buf` as `kind` and re-encode it.
pub fn check_bytes(
    kind: DocumentKind,
    buf: &[u8],
    pretty_out: bool,
) -> netpolicy_core::Result<Checked> {
    let (items, output) = match kind {
        DocumentKind::Policies => {
            let policies = decode_policies(buf)?;
            let out = if pretty_out {
                pretty(&PoliciesOut {
                    policies: &policies,
                })?
            } else {
                encode_policies(&policies)?
            };
            (policies.len(), out)
        }
        DocumentKind::Policy => {
            let policy = Policy::decode(buf)?;
            let out = if pretty_out {
                pretty(&policy)?
            } else {
                policy.encode()?
            };
            (1, out)
        }
        DocumentKind::PolicyMap => {
            let map = PolicyMap::decode(buf)?;
            let out = if pretty_out { pretty(&map)? } else { map.encode()? };
            (map.len(), out)
        }
    };
    Ok(Checked {
        kind,
        items,
        output,
    })
}

pub fn check_file(doc: &DocumentConfig, pretty_out: bool) -> Result<Checked> {
    let buf = fs::read(&doc.path)
        .map_err(|e| ToolError::Io(format!("read {} failed: {e}", doc.path)))?;
    check_bytes(doc.kind, &buf, pretty_out).map_err(|source: PolicyError| ToolError::Document {
        path: doc.path.clone(),
        source,
    })
}

/// Check every configured document in order, writing each re-encoding as
/// one line to `out`. Stops at the first failing document.
pub fn run<W: Write>(cfg: &CheckConfig, out: &mut W) -> Result<usize> {
    for doc in &cfg.documents {
        let checked = check_file(doc, cfg.output.pretty)?;
        tracing::info!(
            path = %doc.path,
            kind = checked.kind.as_str(),
            items = checked.items,
            "document ok"
        );
        out.write_all(&checked.output)
            .and_then(|_| out.write_all(b"\n"))
            .map_err(|e| ToolError::Io(format!("write output failed: {e}")))?;
    }
    Ok(cfg.documents.len())
}
