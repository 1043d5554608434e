use tracing_subscriber::{fmt, EnvFilter};

/// Install the global fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `level` (normally `AppConfig::log_level`)
/// applies to our crates while sqlx and hyper stay at `warn`.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_env("RUST_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    // A second call (tests, admin subcommands) keeps the first subscriber.
    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}

fn default_directives(level: &str) -> String {
    format!("{level},sqlx=warn,hyper=warn")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directives_quiet_driver_crates() {
        assert_eq!(default_directives("debug"), "debug,sqlx=warn,hyper=warn");
    }

    #[test]
    fn init_tracing_twice_does_not_panic() {
        init_tracing("info");
        init_tracing("debug");
    }
}
