//! # prognoza
//!
//! Spoken Croatian weather forecasts for the MBROLA speech synthesiser:
//! numerals in words, numeral–noun agreement, and per-phoneme durations.
//!
//! ## Quick start
//!
//! ```
//! use prognoza::{numerals, phoneme};
//!
//! let words = numerals::number_to_words(158).unwrap();
//! assert_eq!(words, ["sto", "pedeset", "i", "osam"]);
//!
//! let phonemes = phoneme::encode("sto pedeset i osam").unwrap();
//! let file = phoneme::serialize(&phonemes);
//! assert!(file.starts_with("s - 91\nt - 76\n"));
//! ```
//!
//! A whole forecast, from parsed payloads to the phoneme file:
//!
//! ```no_run
//! use prognoza::{Forecast, ForecastKind, Observation, ClockTime, TextPreprocessor};
//!
//! let body = std::fs::read_to_string("weather.json").unwrap();
//! let observation = Observation::from_openweathermap_json(&body).unwrap();
//! let clock: ClockTime = "14:05".parse().unwrap();
//!
//! let sentence = Forecast::new(observation, clock).render(ForecastKind::Mbrola).unwrap();
//! let text = TextPreprocessor::new().process(&sentence);
//! prognoza::phoneme::write_phoneme_file(&text, std::path::Path::new("mbrola_text.txt")).unwrap();
//! ```
//!
//! ## Pipeline
//! 1. **Splitting** — `158` → `100`, `50`, `8`; trailing teens collapse.
//! 2. **Word forming** — irregular stems (`četrdeset`, `dvjesto`, `šesnaest`).
//! 3. **Agreement** — `sat` / `sata` / `sati`, `stupanj` / `stupnja`.
//! 4. **Sentence** — intro, time, temperature, conditions, wind.
//! 5. **Preprocessing** — leftover numbers spelled, punctuation removed.
//! 6. **Encoding** — graphemes (digraphs first) → durations → phoneme file.

pub mod agreement;
pub mod config;
pub mod error;
pub mod forecast;
pub mod numerals;
pub mod phoneme;
pub mod preprocess;
pub mod weather;

// ─── Re-exports for convenience ─────────────────────────────────────────────

pub use config::ForecastConfig;
pub use error::{Error, Result};
pub use forecast::{Forecast, ForecastKind};
pub use phoneme::Phoneme;
pub use preprocess::TextPreprocessor;
pub use weather::{ClockTime, Observation};
