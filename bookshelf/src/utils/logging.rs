use tracing_subscriber::EnvFilter;

// RUST_LOG overrides the default info level
pub fn setup_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        // disable printing the name of the module in every log line.
        .with_target(false);
    if json {
        // ANSI codes and local timestamps are noise in collected JSON logs.
        builder
            .with_ansi(false)
            .without_time()
            .json()
            .init();
    } else {
        builder.init();
    }
}
