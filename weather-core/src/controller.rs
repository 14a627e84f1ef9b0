//! One submission: read city → fetch → normalize → render or report.

use crate::{
    error::WeatherError,
    model::WeatherView,
    normalize::normalize_value,
    provider::WeatherProvider,
    render::{CityInput, RenderSink},
};

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a city name";

/// Wires a provider, an input source and a render sink together.
///
/// All collaborators are injected; the controller holds no other state.
#[derive(Debug)]
pub struct WeatherController<I, S> {
    provider: Box<dyn WeatherProvider>,
    input: I,
    sink: S,
}

impl<I: CityInput, S: RenderSink> WeatherController<I, S> {
    pub fn new(provider: Box<dyn WeatherProvider>, input: I, sink: S) -> Self {
        Self { provider, input, sink }
    }

    /// Read the city from the injected input and submit it.
    pub async fn on_submit(&mut self) -> Option<WeatherView> {
        let city = self.input.read_city().unwrap_or_default();
        self.submit(&city).await
    }

    /// Look up `input` and push the outcome to the sink.
    ///
    /// Returns the rendered view, or `None` after an error was shown.
    pub async fn submit(&mut self, input: &str) -> Option<WeatherView> {
        self.sink.clear_error();

        let city = input.trim();
        if city.is_empty() {
            self.fail(EMPTY_INPUT_MESSAGE);
            return None;
        }

        match self.lookup(city).await {
            Ok(view) => {
                tracing::debug!(?view, "processed weather data");
                self.sink.render(&view);
                Some(view)
            }
            Err(err) => {
                tracing::warn!(city, error = %err, "weather lookup failed");
                self.fail(&err.to_string());
                None
            }
        }
    }

    async fn lookup(&self, city: &str) -> Result<WeatherView, WeatherError> {
        let raw = self.provider.fetch_timeline(city).await?;

        normalize_value(&raw).ok_or_else(|| WeatherError::Unavailable { city: city.to_owned() })
    }

    fn fail(&mut self, message: &str) {
        self.sink.clear_weather();
        self.sink.show_error(message);
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
