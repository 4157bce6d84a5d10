use tracing_subscriber::{fmt, EnvFilter};

fn filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    }
}

/// Initialize the tracing subscriber with timestamp, level, and structured fields.
/// If `debug` is true, sets the log level to DEBUG; otherwise INFO.
///
/// Panics if a global subscriber is already installed; see [`try_init`].
pub fn init(debug: bool) {
    fmt()
        .with_env_filter(filter(debug))
        .with_timer(fmt::time::SystemTime)
        .with_level(true)
        .with_target(true)
        .init();
}

/// Like [`init`], but returns `false` instead of panicking when a global
/// subscriber has already been set (e.g. by the host service or a test).
pub fn try_init(debug: bool) -> bool {
    fmt()
        .with_env_filter(filter(debug))
        .with_timer(fmt::time::SystemTime)
        .with_level(true)
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_init_only_succeeds_once() {
        // Tests share the process-wide subscriber, so the first call may
        // already have been made elsewhere; the second call must always fail.
        let _ = try_init(true);
        assert!(!try_init(false));
    }
}
