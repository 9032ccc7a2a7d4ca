use tracing::Level;

/// Installs a `fmt` subscriber filtered at `level` ("error", "warn", "info",
/// "debug" or "trace", case-insensitive; anything else means "info").
///
/// Returns false when a global subscriber was already set, in which case
/// the existing one is left alone.
pub fn init(level: &str) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(parse_level(level))
        .with_target(false)
        .try_init()
        .is_ok()
}

pub(crate) fn parse_level(level: &str) -> Level {
    match level.to_ascii_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" | "warning" => Level::WARN,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    }
}
