use crate::{Config, error::WeatherError, provider::visualcrossing::VisualCrossingProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod visualcrossing;

/// Fetch client: resolves a city to the upstream timeline JSON.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_timeline(&self, city: &str) -> Result<serde_json::Value, WeatherError>;
}

/// Construct the Visual Crossing provider from the stored API key and endpoint.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No Visual Crossing API key configured.\n\
                 Hint: run `weather configure` and enter your API key."
        )
    })?;

    Ok(Box::new(VisualCrossingProvider::new(
        api_key.to_owned(),
        config.endpoint().to_owned(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = provider_from_config(&cfg).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("No Visual Crossing API key configured"));
        assert!(msg.contains("Hint: run `weather configure`"));
    }

    #[test]
    fn provider_from_config_works_when_key_is_set() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        let provider = provider_from_config(&cfg).expect("provider");
        assert!(format!("{provider:?}").contains("VisualCrossingProvider"));
    }

    #[test]
    fn debug_output_hides_api_key() {
        let mut cfg = Config::default();
        cfg.set_api_key("SECRET-KEY".to_string());

        let provider = provider_from_config(&cfg).expect("provider");
        assert!(!format!("{provider:?}").contains("SECRET-KEY"));
    }
}
