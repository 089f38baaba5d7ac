use tracing_subscriber::EnvFilter;

/// Sends diagnostics to stderr so stdout only carries the rendered session.
/// `RUST_LOG` takes precedence over `--verbose`.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "noteapp=debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
