use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "rotation_redeploy=info";

/// `RUST_LOG` wins over the built-in directive when set.
fn filter_or(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        filter_or("rotation_redeploy=debug,aws_config=info,warn")
    } else {
        filter_or(DEFAULT_DIRECTIVE)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(verbose).compact())
        .init();
}

/// One JSON object per line, with event fields at the top level for CloudWatch Logs Insights.
pub fn init_lambda_logger() {
    tracing_subscriber::registry()
        .with(filter_or("rotation_redeploy=info,lambda=info"))
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(false)
                .with_span_list(false)
                .with_target(false)
                .without_time(), // the Lambda log stream stamps each line
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_parses() {
        let filter = EnvFilter::new(DEFAULT_DIRECTIVE);
        assert!(filter.to_string().contains("rotation_redeploy=info"));
    }
}
