//! Error surface for policy (de)serialization.

use thiserror::Error;

/// Stable error codes (safe to match on from callers and tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Outer or inner structure does not match the expected shape.
    MalformedEnvelope,
    /// Attribute discriminator outside the allowed set.
    UnknownAttributeType,
    /// Variant decode called with another variant's envelope.
    DiscriminatorMismatch,
    /// Policy kind outside the fixed enumeration.
    UnsupportedPolicyType,
}

impl ErrorCode {
    /// String representation used in logs and test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MalformedEnvelope => "MALFORMED_ENVELOPE",
            ErrorCode::UnknownAttributeType => "UNKNOWN_ATTRIBUTE_TYPE",
            ErrorCode::DiscriminatorMismatch => "DISCRIMINATOR_MISMATCH",
            ErrorCode::UnsupportedPolicyType => "UNSUPPORTED_POLICY_TYPE",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PolicyError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),
    #[error("invalid policy attribute type {0:?}")]
    UnknownAttributeType(String),
    #[error("invalid policy attribute string: {received:?}. Expected: {expected:?}")]
    DiscriminatorMismatch {
        received: String,
        expected: &'static str,
    },
    #[error("unsupported policy type {0:?}")]
    UnsupportedPolicyType(String),
}

impl PolicyError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PolicyError::MalformedEnvelope(_) => ErrorCode::MalformedEnvelope,
            PolicyError::UnknownAttributeType(_) => ErrorCode::UnknownAttributeType,
            PolicyError::DiscriminatorMismatch { .. } => ErrorCode::DiscriminatorMismatch,
            PolicyError::UnsupportedPolicyType(_) => ErrorCode::UnsupportedPolicyType,
        }
    }
}

impl From<serde_json::Error> for PolicyError {
    fn from(e: serde_json::Error) -> Self {
        PolicyError::MalformedEnvelope(e.to_string())
    }
}
