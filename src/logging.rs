use tracing_subscriber::EnvFilter;

/// Logs go to stderr. Without RUST_LOG only warnings and errors are shown,
/// so a clean run prints nothing.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("Warning: Logger initialization failed: {}", e);
    }
}
