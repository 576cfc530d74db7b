use serde::Deserialize;

use crate::error::{Result, ToolError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    pub version: u32,

    #[serde(default)]
    pub output: OutputSection,

    #[serde(default)]
    pub documents: Vec<DocumentConfig>,
}

impl CheckConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ToolError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }
        if self.documents.is_empty() {
            return Err(ToolError::Config("documents must not be empty".into()));
        }
        for (i, doc) in self.documents.iter().enumerate() {
            if doc.path.trim().is_empty() {
                return Err(ToolError::Config(format!(
                    "documents[{i}].path must not be empty"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Pretty-print re-encoded documents.
    #[serde(default)]
    pub pretty: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentConfig {
    pub path: String,
    #[serde(default)]
    pub kind: DocumentKind,
}

/// How a document's top level is shaped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// `[...]` or `{"Policies": [...]}`
    #[default]
    Policies,
    /// a single policy object
    Policy,
    /// `{"<policy-type>": "<value>", ...}`
    PolicyMap,
}

impl DocumentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::Policies => "policies",
            DocumentKind::Policy => "policy",
            DocumentKind::PolicyMap => "policy_map",
        }
    }
}
