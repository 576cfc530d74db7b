//! Top-level facade crate for netpolicy.
//!
//! Re-exports the core codec and the checker library so users can depend on a single crate.

pub mod core {
    pub use netpolicy_core::*;
}

pub mod check {
    pub use netpolicy_check::*;
}
