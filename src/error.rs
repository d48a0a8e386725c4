//! Error type shared by every stage of the rendering pipeline.

use thiserror::Error;

/// Everything that can go wrong while rendering a forecast.
///
/// All variants except [`Error::Io`] are deterministic validation failures:
/// retrying with the same input gives the same error.
#[derive(Debug, Error)]
pub enum Error {
    /// Numeral out of range, non-integral input, malformed payload text.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A numeral token contained something other than decimal digits.
    #[error("unknown digit {digit:?} in numeral token {token:?}")]
    UnknownDigit { digit: char, token: String },

    /// Text contained a character or digraph with no MBROLA duration.
    #[error("no duration for grapheme {grapheme:?} at position {position}")]
    UnmappedGrapheme { grapheme: String, position: usize },

    /// OpenWeatherMap condition code missing from the description table.
    #[error("unknown weather condition code {0}")]
    UnknownWeatherCode(u32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let e = Error::UnmappedGrapheme { grapheme: "7".into(), position: 3 };
        assert_eq!(e.to_string(), "no duration for grapheme \"7\" at position 3");

        let e = Error::UnknownDigit { digit: 'x', token: "1x".into() };
        assert!(e.to_string().contains("'x'"), "got: {e}");
    }

    #[test]
    fn test_io_converts() {
        fn fails() -> Result<()> {
            std::fs::read_to_string("/nonexistent/prognoza/config.json")?;
            Ok(())
        }
        assert!(matches!(fails(), Err(Error::Io(_))));
    }
}
