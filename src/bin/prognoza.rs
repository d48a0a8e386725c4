//! `prognoza` — command-line front end.
//!
//! ```text
//! prognoza words -- -42
//! prognoza encode "dobar dan" -o mbrola_text.txt
//! prognoza forecast --weather weather.json --time 14:05
//! prognoza forecast --weather weather.json --worldtime zagreb.txt --mode text
//! ```
//!
//! Fetching the payloads is left to the caller (e.g. `curl`). Set `RUST_LOG`
//! for diagnostics.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use prognoza::{
    numerals, phoneme, ClockTime, Forecast, ForecastConfig, ForecastKind, Observation,
    TextPreprocessor,
};

#[derive(Parser)]
#[command(name = "prognoza", version, about = "Croatian weather forecasts for MBROLA")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a number in Croatian words.
    Words {
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },

    /// Encode text into MBROLA phoneme lines.
    Encode {
        text: String,

        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Encode the text as given, without spelling numbers or removing punctuation.
        #[arg(long)]
        raw: bool,
    },

    /// Render the forecast from an OpenWeatherMap response.
    #[command(group(ArgGroup::new("clock").required(true).args(["time", "worldtime"])))]
    Forecast {
        /// OpenWeatherMap `weather` response (JSON, metric units).
        #[arg(long)]
        weather: PathBuf,

        /// Local time as HH:MM.
        #[arg(long)]
        time: Option<ClockTime>,

        /// worldtimeapi plain-text response.
        #[arg(long)]
        worldtime: Option<PathBuf>,

        #[arg(long, value_enum)]
        mode: Option<ForecastKind>,

        /// Phoneme file path (MBROLA mode).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON config file.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Words { number } => {
            let words = numerals::number_to_words(number)
                .with_context(|| format!("Cannot spell {number}"))?;
            println!("{}", words.join(" "));
        }

        Command::Encode { text, output, raw } => {
            let text = if raw { text } else { TextPreprocessor::new().process(&text) };
            match output {
                Some(path) => {
                    let n = phoneme::write_phoneme_file(&text, &path)
                        .with_context(|| format!("Cannot write phonemes to {}", path.display()))?;
                    info!(records = n, path = %path.display(), "phoneme file written");
                }
                None => {
                    let phonemes = phoneme::encode(&text).context("Encoding failed")?;
                    println!("{}", phoneme::serialize(&phonemes));
                }
            }
        }

        Command::Forecast { weather, time, worldtime, mode, output, config } => {
            let mut cfg = match config {
                Some(path) => ForecastConfig::load(&path)
                    .with_context(|| format!("Cannot load config {}", path.display()))?,
                None => ForecastConfig::default(),
            };
            if let Some(mode) = mode {
                cfg.mode = mode;
            }
            if let Some(output) = output {
                cfg.output_path = output;
            }

            let body = std::fs::read_to_string(&weather)
                .with_context(|| format!("Cannot read {}", weather.display()))?;
            let observation = Observation::from_openweathermap_json(&body)
                .context("Failed to parse OpenWeatherMap response")?;

            let clock = match (time, worldtime) {
                (Some(clock), _) => clock,
                (None, Some(path)) => {
                    let body = std::fs::read_to_string(&path)
                        .with_context(|| format!("Cannot read {}", path.display()))?;
                    ClockTime::from_worldtime_text(&body)
                        .context("Failed to parse worldtime response")?
                }
                (None, None) => unreachable!("clap requires --time or --worldtime"),
            };

            let sentence = Forecast::new(observation, clock)
                .render(cfg.mode)
                .context("Cannot render forecast")?;
            println!("{sentence}");

            if cfg.mode == ForecastKind::Mbrola {
                let text = cfg.preprocessor().process(&sentence);
                let n = phoneme::write_phoneme_file(&text, &cfg.output_path).with_context(|| {
                    format!("Cannot write phonemes to {}", cfg.output_path.display())
                })?;
                info!(records = n, path = %cfg.output_path.display(), "phoneme file written");
            }
        }
    }

    Ok(())
}
