//! netpolicy-check library entry.
//!
//! Loads a strict YAML config naming policy documents, runs each one through
//! the core decoder, and produces the canonical re-encoding. The binary
//! (`main.rs`) and integration tests both drive it from here.

pub mod check;
pub mod config;
pub mod error;
