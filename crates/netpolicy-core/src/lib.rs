//! netpolicy core: network-policy attributes and their tagged wire format.
//!
//! A `Policy` binds a category/instance pair to an ordered list of attributes.
//! Every attribute travels as a `{"type": ..., "data": ...}` envelope, and the
//! discriminator decides which concrete shape `data` is parsed into. This
//! crate carries no transport or runtime dependencies: callers hand in byte
//! buffers and get back decoded values or a typed `PolicyError`.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Malformed input always surfaces as `PolicyError`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod attribute;
pub mod error;
pub mod policy;
pub mod policy_type;

pub use attribute::{
    AttrType, Attribute, BandwidthAttr, CosAttr, FirewallAttr, FirewallRule, PolicyAttribute,
    VendorSpecificAttr,
};
/// Shared result type.
pub use error::{ErrorCode, PolicyError, Result};
pub use policy::{decode_policies, encode_policies, Policy};
pub use policy_type::{PolicyMap, PolicyType};
