//! Render a forecast from an inline OpenWeatherMap body and write the
//! MBROLA phoneme file next to the working directory.
//!
//! Run with:
//! ```bash
//! cargo run --example basic
//! ```

use std::path::Path;

use prognoza::{phoneme, ClockTime, Forecast, ForecastKind, Observation, TextPreprocessor};

const BODY: &str = r#"{
    "weather": [{"id": 803}],
    "main": {"temp": 17.6},
    "wind": {"speed": 6.2, "deg": 40}
}"#;

fn main() -> prognoza::Result<()> {
    let observation = Observation::from_openweathermap_json(BODY)?;
    let forecast = Forecast::new(observation, ClockTime::new(9, 41)?);

    println!("{}", forecast.render(ForecastKind::Text)?);

    let sentence = forecast.render(ForecastKind::Mbrola)?;
    println!("{sentence}");

    let text = TextPreprocessor::new().process(&sentence);
    let records = phoneme::write_phoneme_file(&text, Path::new("mbrola_text.txt"))?;
    println!("Wrote {records} phonemes to mbrola_text.txt");
    Ok(())
}
