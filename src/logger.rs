use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logs go to stderr so stdout only ever carries the answer. `RUST_LOG` overrides the level.
pub fn init(verbose: bool) {
    let default = if verbose {
        "calorie_counting=debug,day01=debug"
    } else {
        "calorie_counting=warn,day01=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
