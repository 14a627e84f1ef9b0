use async_trait::async_trait;
use reqwest::{Client, Url};
use std::fmt;

use crate::error::WeatherError;

use super::WeatherProvider;

pub const DEFAULT_ENDPOINT: &str =
    "https://weather.visualcrossing.com/VisualCrossingWebServices/rest/services/timeline/";

#[derive(Clone)]
pub struct VisualCrossingProvider {
    api_key: String,
    endpoint: String,
    http: Client,
}

impl fmt::Debug for VisualCrossingProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisualCrossingProvider")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl VisualCrossingProvider {
    pub fn new(api_key: String, endpoint: String) -> Self {
        Self {
            api_key,
            endpoint,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherProvider for VisualCrossingProvider {
    async fn fetch_timeline(&self, city: &str) -> Result<serde_json::Value, WeatherError> {
        if city.is_empty() {
            return Err(WeatherError::EmptyCity);
        }

        let url = timeline_url(&self.endpoint, city, &self.api_key)?;
        tracing::debug!(city, endpoint = %self.endpoint, "requesting timeline");

        let res = self.http.get(url).send().await.map_err(WeatherError::Request)?;

        let status = res.status();
        let body = res.text().await.map_err(WeatherError::Request)?;

        if !status.is_success() {
            tracing::warn!(city, %status, body = %truncate_body(&body), "timeline request failed");
            return Err(WeatherError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(WeatherError::Decode)
    }
}

/// `<endpoint>/<lower-cased city>?key=..&unitGroup=us&contentType=json`.
///
/// `unitGroup=us` keeps temperatures in Fahrenheit, which the normalizer expects.
pub fn timeline_url(endpoint: &str, city: &str, api_key: &str) -> Result<Url, WeatherError> {
    let invalid = || WeatherError::InvalidEndpoint(endpoint.to_owned());

    let mut url = Url::parse(endpoint).map_err(|_| invalid())?;
    url.path_segments_mut()
        .map_err(|_| invalid())?
        .pop_if_empty()
        .push(&city.to_lowercase());

    url.query_pairs_mut()
        .append_pair("key", api_key)
        .append_pair("unitGroup", "us")
        .append_pair("contentType", "json");

    Ok(url)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(url: &Url, name: &str) -> Option<String> {
        url.query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }

    #[test]
    fn appends_lower_cased_city_segment() {
        let url = timeline_url(DEFAULT_ENDPOINT, "London", "KEY").unwrap();

        assert_eq!(url.host_str(), Some("weather.visualcrossing.com"));
        assert_eq!(
            url.path(),
            "/VisualCrossingWebServices/rest/services/timeline/london"
        );
    }

    #[test]
    fn encodes_city_as_single_segment() {
        let url = timeline_url(DEFAULT_ENDPOINT, "New York/NY", "KEY").unwrap();
        assert!(url.path().ends_with("/timeline/new%20york%2Fny"));
    }

    #[test]
    fn endpoint_without_trailing_slash() {
        let url = timeline_url("http://localhost:8080/timeline", "Oslo", "KEY").unwrap();
        assert_eq!(url.path(), "/timeline/oslo");
    }

    #[test]
    fn query_carries_key_and_unit_group() {
        let url = timeline_url(DEFAULT_ENDPOINT, "Paris", "A B&C").unwrap();

        assert_eq!(query(&url, "key").as_deref(), Some("A B&C"));
        assert_eq!(query(&url, "unitGroup").as_deref(), Some("us"));
        assert_eq!(query(&url, "contentType").as_deref(), Some("json"));
    }

    #[test]
    fn rejects_unusable_endpoints() {
        for endpoint in ["not a url", "mailto:weather@example.com"] {
            let err = timeline_url(endpoint, "Paris", "KEY").unwrap_err();
            assert!(matches!(err, WeatherError::InvalidEndpoint(_)), "{endpoint}");
        }
    }

    #[test]
    fn truncates_long_bodies_on_char_boundary() {
        let body = "é".repeat(150);
        let short = truncate_body(&body);

        assert!(short.ends_with("..."));
        assert!(short.len() <= 203);
        assert_eq!(truncate_body("short"), "short");
    }
}
