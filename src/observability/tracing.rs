use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LogLevel};

static TRACING_INIT: OnceCell<()> = OnceCell::new();

/// Install the global tracing subscriber once.
///
/// Events go to stderr so stdout stays free for CSV output. `RUST_LOG`
/// directives override `level` when present.
///
/// # Errors
/// Returns an error when another global subscriber is already installed.
pub fn init_tracing(format: LogFormat, level: LogLevel) -> Result<()> {
    TRACING_INIT.get_or_try_init(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::default().add_directive(Level::from(level).into()));

        match format {
            LogFormat::Json => tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .flatten_event(true)
                        .with_current_span(true)
                        .with_writer(std::io::stderr),
                )
                .with(env_filter)
                .try_init(),
            LogFormat::Pretty => tracing_subscriber::registry()
                .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
                .with(env_filter)
                .try_init(),
        }
        .context("failed to install tracing subscriber")
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_initialisation_is_a_no_op() {
        init_tracing(LogFormat::Pretty, LogLevel::Info).expect("first init");
        init_tracing(LogFormat::Json, LogLevel::Debug).expect("second init");
    }
}
