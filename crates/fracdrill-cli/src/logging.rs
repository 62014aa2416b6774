//! Logging setup.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Map a numeric verbosity (10 debug, 20 info, 30 warning, 40 error,
/// 50 critical) onto a tracing level. Anything above 50 silences logging.
pub fn level_filter(verbosity: u32) -> LevelFilter {
    match verbosity {
        0..=9 => LevelFilter::TRACE,
        10..=19 => LevelFilter::DEBUG,
        20..=29 => LevelFilter::INFO,
        30..=39 => LevelFilter::WARN,
        40..=50 => LevelFilter::ERROR,
        _ => LevelFilter::OFF,
    }
}

/// Install the global subscriber. Logs go to stderr so they never mix with
/// the drill on stdout; `RUST_LOG` still overrides the default level.
pub fn init(verbosity: u32) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_filter(verbosity).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
