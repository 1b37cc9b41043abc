//! Logging Infrastructure
//!
//! The terminal belongs to the UI, so logs go to a daily rolling file.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Default log directory
pub const DEFAULT_LOG_DIR: &str = "./logs";

/// Initialize the logger
///
/// Level comes from `RUST_LOG` (default `cupom_tui=info,cupom_client=info`).
pub fn init_logger(log_dir: Option<&str>) -> anyhow::Result<()> {
    let dir = Path::new(log_dir.unwrap_or(DEFAULT_LOG_DIR));
    std::fs::create_dir_all(dir)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cupom_tui=info,cupom_client=info,shared=info"));
    let file_appender = tracing_appender::rolling::daily(dir, "cupom-tui");

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))?;

    Ok(())
}
