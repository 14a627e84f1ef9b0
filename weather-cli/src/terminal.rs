use chrono::NaiveDate;
use std::io::{self, Write};
use weather_core::{RenderSink, WeatherPanel, WeatherView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Writes weather panels to `out` and error banners to `err`.
///
/// Terminal output is append-only, so the clear operations have nothing to undo.
#[derive(Debug)]
pub struct TerminalSink<W, E> {
    out: W,
    err: E,
    format: OutputFormat,
}

impl<W: Write, E: Write> TerminalSink<W, E> {
    pub fn new(out: W, err: E, format: OutputFormat) -> Self {
        Self { out, err, format }
    }

    fn write_view(&mut self, view: &WeatherView) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.out, view)?;
                writeln!(self.out)
            }
            OutputFormat::Text => write_panel(&mut self.out, &WeatherPanel::from(view)),
        }
    }

    #[cfg(test)]
    fn into_parts(self) -> (W, E) {
        (self.out, self.err)
    }
}

impl<W: Write, E: Write> RenderSink for TerminalSink<W, E> {
    fn render(&mut self, view: &WeatherView) {
        if let Err(err) = self.write_view(view) {
            tracing::warn!(error = %err, "failed to write weather output");
        }
    }

    fn show_error(&mut self, message: &str) {
        if let Err(err) = writeln!(self.err, "Error: {message}") {
            tracing::warn!(error = %err, "failed to write error message");
        }
    }

    fn clear_error(&mut self) {}

    fn clear_weather(&mut self) {}
}

fn write_panel(out: &mut impl Write, panel: &WeatherPanel) -> io::Result<()> {
    writeln!(out, "{}", panel.location)?;
    writeln!(out, "  {}", panel.temperature)?;
    writeln!(out, "  {}", panel.conditions)?;
    writeln!(out, "  {}", panel.wind_speed)?;
    writeln!(out, "  {}", panel.precipitation)?;
    writeln!(out, "  {}", panel.updated)?;

    if panel.forecast.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "Forecast")?;
    for card in &panel.forecast {
        writeln!(out, "  {}", display_date(&card.date))?;
        writeln!(out, "    {}", card.max_temp)?;
        writeln!(out, "    {}", card.min_temp)?;
        writeln!(out, "    {}", card.conditions)?;
    }

    Ok(())
}

/// `2024-05-01` → `Wed 2024-05-01`; anything else is printed as is.
fn display_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => format!("{} {date}", parsed.format("%a")),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weather_core::normalize_value;

    fn view() -> WeatherView {
        normalize_value(&serde_json::json!({
            "address": "Lisbon",
            "timezone": "Europe/Lisbon",
            "currentConditions": {
                "datetime": "10:00:00", "temp": 77, "conditions": "Clear",
                "icon": "clear-day", "precipprob": 5, "windspeed": 9.5
            },
            "days": [
                { "datetime": "2024-05-01", "tempmax": 80.6, "tempmin": 59,
                  "conditions": "Clear", "icon": "clear-day" }
            ]
        }))
        .expect("valid payload")
    }

    fn render(format: OutputFormat) -> (String, String) {
        let mut sink = TerminalSink::new(Vec::new(), Vec::new(), format);
        sink.render(&view());
        let (out, err) = sink.into_parts();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn text_panel() {
        let (out, err) = render(OutputFormat::Text);

        assert!(err.is_empty());
        assert!(out.starts_with("Weather in Lisbon\n"));
        assert!(out.contains("  Temperature: 25.0°C\n"));
        assert!(out.contains("  Wind Speed: 9.5 km/h\n"));
        assert!(out.contains("  Precipitation: 5%\n"));
        assert!(out.contains("  Wed 2024-05-01\n"));
        assert!(out.contains("    Max Temp: 27.0°C\n"));
        assert!(out.contains("    Min Temp: 15.0°C\n"));
    }

    #[test]
    fn json_output_is_the_view() {
        let (out, _) = render(OutputFormat::Json);

        let parsed: WeatherView = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, view());
    }

    #[test]
    fn errors_go_to_error_stream() {
        let mut sink = TerminalSink::new(Vec::new(), Vec::new(), OutputFormat::Text);
        sink.clear_weather();
        sink.show_error("Please enter a city name");

        let (out, err) = sink.into_parts();
        assert!(out.is_empty());
        assert_eq!(String::from_utf8(err).unwrap(), "Error: Please enter a city name\n");
    }

    #[test]
    fn non_iso_dates_pass_through() {
        assert_eq!(display_date("tomorrow"), "tomorrow");
        assert_eq!(display_date("2024-05-04"), "Sat 2024-05-04");
    }
}
