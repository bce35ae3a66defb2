use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Without `debug` the level is pinned to
/// `info`; with it, `RUST_LOG` may override the default `debug` filter.
/// Output goes to stderr so `lookup` can print results on stdout.
///
/// Fails if a global subscriber is already installed.
pub fn init(debug: bool) -> anyhow::Result<()> {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_reported() {
        // the first call may race other tests for the global slot
        let _ = init(false);
        assert!(init(true).is_err());
    }
}
