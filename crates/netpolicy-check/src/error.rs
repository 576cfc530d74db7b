use netpolicy_core::PolicyError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ToolError>;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("invalid config: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("{path}: {source}")]
    Document {
        path: String,
        #[source]
        source: PolicyError,
    },
}

impl ToolError {
    pub fn code(&self) -> &'static str {
        match self {
            ToolError::Config(_) => "CONFIG",
            ToolError::Io(_) => "IO",
            ToolError::Document { source, .. } => source.code().as_str(),
        }
    }
}
