use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` wins when set; otherwise `--verbose` lifts the crate to debug.
fn default_directive(verbose: bool, quiet: &'static str) -> &'static str {
    if verbose {
        "read_my_chart=debug,info"
    } else {
        quiet
    }
}

pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, "read_my_chart=warn")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, "read_my_chart=info")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(), // keeps stdout clean for --format json
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_lifts_both_loggers_to_debug() {
        assert_eq!(default_directive(true, "read_my_chart=warn"), "read_my_chart=debug,info");
        assert_eq!(default_directive(true, "read_my_chart=info"), "read_my_chart=debug,info");
    }

    #[test]
    fn test_quiet_keeps_each_logger_default() {
        assert_eq!(default_directive(false, "read_my_chart=warn"), "read_my_chart=warn");
        assert_eq!(default_directive(false, "read_my_chart=info"), "read_my_chart=info");
    }
}
