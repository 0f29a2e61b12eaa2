use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Diagnostics go to stderr behind `DAYDIFF_LOG`; user-facing messages stay
/// on the notifier path.
pub fn setup_logger() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var("DAYDIFF_LOG")
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
