use tracing_subscriber::{fmt, EnvFilter};

/// Installs the stderr subscriber once per process. `RUST_LOG` wins over `default_level`;
/// an unparsable `default_level` falls back to `info`.
pub fn init_logging(service: &'static str, default_level: &str) {
    if tracing::dispatcher::has_been_set() {
        return;
    }

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(service, "logging initialised");
    }
}
