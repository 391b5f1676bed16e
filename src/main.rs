//! keydoc CLI entry point

fn main() {
    // Structured logging on stderr (stdout carries the HTML), env-based filter defaulting to warn
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    keydoc::cli::run();
}
