use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, filter::Targets, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
};

const APP_TARGET: &str = "curconv";

/// Installs the global subscriber. Only `curconv` events are emitted; within
/// them `RUST_LOG` wins over `--verbose`. Logs go to stderr so stdout stays
/// clean for JSON and CSV output.
pub fn init_logging(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env().ok();
    let app_filter = app_targets(verbose, env_filter.is_some());
    let env_filter = env_filter.unwrap_or_else(|| {
        EnvFilter::new(if verbose { "curconv=debug" } else { "off" })
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .pretty()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(app_filter)
        .with(env_filter)
        .init();
}

/// Levels the crate may log at. With `RUST_LOG` set the env filter decides,
/// so the crate target is opened fully.
fn app_targets(verbose: bool, env_set: bool) -> Targets {
    let level_filter = if env_set {
        LevelFilter::TRACE
    } else if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::OFF
    };
    Targets::new().with_target(APP_TARGET, level_filter)
}
