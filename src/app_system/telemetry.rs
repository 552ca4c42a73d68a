/// Configure tracing once at application startup.
///
/// `RUST_LOG` controls verbosity and defaults to `info`. Logs go to stderr so
/// they stay out of the console menu on stdout.
///
/// ```bash
/// RUST_LOG=debug rrs
/// RUST_LOG=restaurant_reservations::ledger=debug,warn rrs
/// ```
pub fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
