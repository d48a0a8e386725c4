//! JSON configuration for the forecast binary.
//!
//! ```json
//! { "output_path": "mbrola_text.txt", "mode": "mbrola", "preprocess": true }
//! ```
//!
//! Every field is optional.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::{
    error::Result,
    forecast::ForecastKind,
    preprocess::{PreprocessorConfig, TextPreprocessor},
};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Where the MBROLA phoneme file is written.
    pub output_path: PathBuf,

    /// Which sentence flavour to produce.
    pub mode: ForecastKind,

    /// Run [`TextPreprocessor`] over the sentence before encoding it.
    pub preprocess: bool,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("mbrola_text.txt"),
            mode: ForecastKind::default(),
            preprocess: true,
        }
    }
}

impl ForecastConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let config: Self = serde_json::from_slice(&bytes)?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Preprocessor for the encoder; a pass-through when `preprocess` is off.
    pub fn preprocessor(&self) -> TextPreprocessor {
        if self.preprocess {
            TextPreprocessor::new()
        } else {
            TextPreprocessor::with_config(PreprocessorConfig {
                spell_numbers: false,
                remove_punctuation: false,
                lowercase: false,
                remove_extra_whitespace: false,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_defaults() {
        let cfg: ForecastConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.output_path, PathBuf::from("mbrola_text.txt"));
        assert_eq!(cfg.mode, ForecastKind::Mbrola);
        assert!(cfg.preprocess);
    }

    #[test]
    fn test_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prognoza.json");
        std::fs::write(&path, r#"{"mode": "text", "output_path": "out.txt", "preprocess": false}"#)
            .unwrap();

        let cfg = ForecastConfig::load(&path).unwrap();
        assert_eq!(cfg.mode, ForecastKind::Text);
        assert_eq!(cfg.output_path, PathBuf::from("out.txt"));
        assert_eq!(cfg.preprocessor().process("Sat 5."), "Sat 5.");
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            ForecastConfig::load(&dir.path().join("missing.json")),
            Err(Error::Io(_))
        ));

        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"mode": "loud"}"#).unwrap();
        assert!(matches!(ForecastConfig::load(&path), Err(Error::Json(_))));
    }
}
