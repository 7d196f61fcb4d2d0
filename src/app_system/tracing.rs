/// Configures the global tracing subscriber once for the whole application.
///
/// `RUST_LOG` controls verbosity (`RUST_LOG=debug`, `RUST_LOG=info`, or
/// per-module filters like `RUST_LOG=food_orders::order_actor=debug`).
pub fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
