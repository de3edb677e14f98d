use crate::{Config, error::LookupError, model::LookupOutcome};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod http;

pub use http::HttpLookup;

/// Abstraction over the remote endpoint that resolves a free-text location
/// to weather attributes and coordinates.
#[async_trait]
pub trait WeatherLookup: Send + Sync + Debug {
    /// Resolve `location`, suspending until the endpoint responds or the
    /// transport fails. Does not retry and enforces no timeout of its own.
    async fn lookup(&self, location: &str) -> Result<LookupOutcome, LookupError>;
}

/// Construct the lookup client from config.
pub fn lookup_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherLookup>> {
    let endpoint = config.endpoint().ok_or_else(|| {
        anyhow::anyhow!(
            "No lookup endpoint configured.\n\
             Hint: run `weathermap configure` and enter the endpoint URL."
        )
    })?;

    Ok(Box::new(HttpLookup::new(endpoint.to_owned())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn lookup_from_config_errors_when_endpoint_missing() {
        let cfg = Config::default();
        let err = lookup_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("No lookup endpoint configured"));
        assert!(err.to_string().contains("Hint: run `weathermap configure`"));
    }

    #[test]
    fn lookup_from_config_works_when_endpoint_set() {
        let mut cfg = Config::default();
        cfg.set_endpoint("https://example.test/exec".to_string());

        let lookup = lookup_from_config(&cfg);
        assert!(lookup.is_ok());
    }
}
