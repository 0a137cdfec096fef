use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directives used when `RUST_LOG` is not set.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "stack_rank=debug,warn"
    } else {
        "stack_rank=info,warn"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// Logs go to stderr so that reports printed to stdout stay pipeable.
/// `json` swaps the compact human format for one JSON object per event.
pub fn init_logger(verbose: bool, json: bool) {
    let compact = (!json).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
    });
    let structured = json.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(false)
    });

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(compact)
        .with(structured)
        .init();
}
