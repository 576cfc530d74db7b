//! netpolicy-check
//!
//! Usage: `netpolicy-check [config.yaml]` (default `netpolicy.yaml`).
//! Logging is controlled through `RUST_LOG`.

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use netpolicy_check::{check, config};

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "netpolicy.yaml".to_string());
    tracing::info!(config = %path, "netpolicy-check starting");

    let res = config::load_from_file(&path).and_then(|cfg| {
        let stdout = std::io::stdout();
        check::run(&cfg, &mut stdout.lock())
    });

    match res {
        Ok(n) => {
            tracing::info!(documents = n, "all documents valid");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(code = e.code(), error = %e, "netpolicy-check failed");
            ExitCode::FAILURE
        }
    }
}
