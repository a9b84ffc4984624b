use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, LogFormat};
use crate::core::{Result, ServiceObjectError};

/// Install a global tracing subscriber for the calling application.
///
/// `RUST_LOG` wins over `config.log_level`. Fails if a global subscriber is
/// already set.
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| ServiceObjectError::configuration(format!("Invalid log level: {e}")))?;

    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.log_format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
    };

    installed.map_err(|e| ServiceObjectError::configuration(format!("Tracing already initialized: {e}")))
}
