//! Tracing subscriber setup.

use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize the tracing subscriber with an env-driven filter and a fmt
/// layer. Filter comes from `WEFT_LOG`, then `RUST_LOG`, then "info".
///
/// Safe to call once per process; a second call returns an error from the
/// subscriber registry, which is reported back rather than panicking.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = std::env::var("WEFT_LOG")
        .map(tracing_subscriber::EnvFilter::new)
        .or_else(|_| tracing_subscriber::EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    info!(target: "telemetry", "Tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_reports_an_error_instead_of_panicking() {
        assert!(init_tracing().is_ok());
        assert!(init_tracing().is_err());
    }
}
