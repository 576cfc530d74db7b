//! Tool config loader (strict parsing).

pub mod schema;

use std::fs;

use crate::error::{Result, ToolError};

pub use schema::{CheckConfig, DocumentConfig, DocumentKind, OutputSection};

pub fn load_from_file(path: &str) -> Result<CheckConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| ToolError::Io(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<CheckConfig> {
    let cfg: CheckConfig =
        serde_yaml::from_str(s).map_err(|e| ToolError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
