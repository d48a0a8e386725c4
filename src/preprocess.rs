//! Text preparation before phoneme encoding.
//!
//! The encoder only knows Croatian letters, so anything else has to be
//! turned into letters or removed first: integer literals are spelled out,
//! punctuation becomes a space, whitespace runs collapse.

use std::borrow::Cow;

use fancy_regex::{Captures, Regex as FancyRegex};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::numerals::spoken_number;

// ─────────────────────────────────────────────────────────────────────────────
// Compiled regexes (lazily initialised once)
// ─────────────────────────────────────────────────────────────────────────────

/// Standalone integer, optionally signed; digits glued to letters are skipped.
static RE_INTEGER: Lazy<FancyRegex> =
    Lazy::new(|| FancyRegex::new(r"(?<![\p{L}\d])-?\d+(?![\p{L}\d])").unwrap());
static RE_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N}\s]").unwrap());
static RE_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

// ─────────────────────────────────────────────────────────────────────────────
// Steps
// ─────────────────────────────────────────────────────────────────────────────

/// Replace integer literals with their spoken form.
///
/// Literals outside the supported numeral range are left as they are; the
/// encoder will then reject them.
pub fn spell_numbers(text: &str) -> String {
    RE_INTEGER
        .replace_all(text, |caps: &Captures| {
            caps[0]
                .parse::<i64>()
                .ok()
                .and_then(|n| spoken_number(n).ok())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

pub fn remove_punctuation(text: &str) -> Cow<'_, str> {
    RE_PUNCT.replace_all(text, " ")
}

pub fn remove_extra_whitespace(text: &str) -> String {
    RE_SPACES.replace_all(text.trim(), " ").into_owned()
}

// ─────────────────────────────────────────────────────────────────────────────
// TextPreprocessor — full pipeline
// ─────────────────────────────────────────────────────────────────────────────

/// Which preprocessing steps run.
#[derive(Debug, Clone)]
pub struct PreprocessorConfig {
    pub spell_numbers: bool,
    pub remove_punctuation: bool,
    pub lowercase: bool,
    pub remove_extra_whitespace: bool,
}

impl Default for PreprocessorConfig {
    fn default() -> Self {
        Self {
            spell_numbers: true,
            remove_punctuation: true,
            lowercase: true,
            remove_extra_whitespace: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TextPreprocessor {
    pub config: PreprocessorConfig,
}

impl TextPreprocessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PreprocessorConfig) -> Self {
        Self { config }
    }

    pub fn process(&self, text: &str) -> String {
        let cfg = &self.config;
        let mut text = text.to_string();

        // Before punctuation removal, which would eat the minus sign.
        if cfg.spell_numbers {
            text = spell_numbers(&text);
        }
        if cfg.remove_punctuation {
            text = remove_punctuation(&text).into_owned();
        }
        if cfg.lowercase {
            text = text.to_lowercase();
        }
        if cfg.remove_extra_whitespace {
            text = remove_extra_whitespace(&text);
        }

        text
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phoneme::encode;

    #[test]
    fn test_spell_numbers() {
        assert_eq!(spell_numbers("sada je 14 sati"), "sada je četrnaest sati");
        assert_eq!(spell_numbers("vani je -3"), "vani je minus tri");
        assert_eq!(spell_numbers("158"), "sto pedeset i osam");
    }

    #[test]
    fn test_spell_numbers_leaves_unsupported() {
        assert_eq!(spell_numbers("godina 2024"), "godina 2024");
        assert_eq!(spell_numbers("A4 papir"), "A4 papir");
    }

    #[test]
    fn test_punctuation_and_whitespace() {
        assert_eq!(remove_punctuation("dan, noć."), "dan  noć ");
        assert_eq!(remove_extra_whitespace("  dobar \t dan  "), "dobar dan");
    }

    #[test]
    fn test_underscore_is_punctuation() {
        assert_eq!(remove_punctuation("snijeg_i_kiša"), "snijeg i kiša");
        let out = TextPreprocessor::new().process("jak_vjetar");
        assert_eq!(out, "jak vjetar");
        assert!(encode(&out).is_ok());
    }

    #[test]
    fn test_full_pipeline_is_encodable() {
        let pp = TextPreprocessor::new();
        let out = pp.process("Dobar dan! Sada je 21 sat i 5 minuta, vani je -2°C.");
        assert_eq!(
            out,
            "dobar dan sada je dvadeset i jedan sat i pet minuta vani je minus dva c"
        );
        assert!(encode(&out).is_ok(), "got: {out}");
    }

    #[test]
    fn test_disabled_steps() {
        let pp = TextPreprocessor::with_config(PreprocessorConfig {
            spell_numbers: false,
            lowercase: false,
            ..PreprocessorConfig::default()
        });
        assert_eq!(pp.process("Sat 5."), "Sat 5");
    }
}
