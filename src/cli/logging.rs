use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `CVM_LOG=stackvm=trace`.
pub const LOG_ENV: &str = "CVM_LOG";

/// Installs a stderr subscriber. Safe to call more than once.
pub fn init() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
