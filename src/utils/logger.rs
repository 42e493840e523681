use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVES: &str = "apod_gateway=info";
const VERBOSE_DIRECTIVES: &str = "apod_gateway=debug,tower_http=debug,info";

/// Filter directives used when `RUST_LOG` is unset.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_DIRECTIVES
    } else {
        DEFAULT_DIRECTIVES
    }
}

// RUST_LOG wins, e.g. `RUST_LOG=apod_gateway=trace,tower_http=debug`.
fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(fmt::layer().with_target(verbose).compact())
        .init();
}

/// One flat JSON object per event; Lambda stamps the time itself.
pub fn init_lambda_logger() {
    tracing_subscriber::registry()
        .with(env_filter(false))
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .json()
                .flatten_event(true),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_enables_request_tracing() {
        assert_eq!(default_directives(false), "apod_gateway=info");
        assert!(default_directives(true).contains("tower_http=debug"));
        assert!(default_directives(true).parse::<EnvFilter>().is_ok());
    }
}
