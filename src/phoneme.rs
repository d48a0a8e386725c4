//! MBROLA phoneme encoder — Croatian text → `(grapheme, duration)` records.
//!
//! Every letter of the Croatian alphabet, plus the digraphs `dž`, `lj` and
//! `nj`, has a fixed playback duration in milliseconds. Text is scanned left
//! to right; a digraph is always preferred over its two letters, so `"nju"`
//! encodes as `nj`, `u`.
//!
//! The serialised form is one `"<grapheme> - <duration>"` line per record,
//! lines joined with `\n`, no trailing newline.

use std::{
    collections::HashMap,
    fmt,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::{Error, Result};

// ─────────────────────────────────────────────────────────────────────────────
// Duration table
// ─────────────────────────────────────────────────────────────────────────────

const DIGRAPHS: [&str; 3] = ["dž", "lj", "nj"];

const DURATIONS_MS: [(&str, u32); 30] = [
    ("a", 61), ("b", 65), ("c", 113), ("č", 90), ("ć", 98),
    ("d", 54), ("dž", 56), ("đ", 61), ("e", 53), ("f", 86),
    ("g", 56), ("h", 68), ("i", 49), ("j", 53), ("k", 81),
    ("l", 35), ("lj", 59), ("m", 56), ("n", 45), ("nj", 60),
    ("o", 54), ("p", 85), ("r", 25), ("s", 91), ("š", 99),
    ("t", 76), ("u", 50), ("v", 40), ("z", 68), ("ž", 74),
];

/// Grapheme → duration map, built on first use.
static DURATIONS: Lazy<HashMap<&'static str, u32>> =
    Lazy::new(|| DURATIONS_MS.iter().copied().collect());

/// Duration of `grapheme` in milliseconds, `None` if it has no entry.
pub fn duration_ms(grapheme: &str) -> Option<u32> {
    DURATIONS.get(grapheme).copied()
}

// ─────────────────────────────────────────────────────────────────────────────
// Records
// ─────────────────────────────────────────────────────────────────────────────

/// One line of the phoneme file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phoneme {
    pub grapheme: String,
    pub duration_ms: u32,
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.grapheme, self.duration_ms)
    }
}

fn lookup(grapheme: String, position: usize) -> Result<Phoneme> {
    match duration_ms(&grapheme) {
        Some(duration_ms) => Ok(Phoneme { grapheme, duration_ms }),
        None => Err(Error::UnmappedGrapheme { grapheme, position }),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Encoding
// ─────────────────────────────────────────────────────────────────────────────

/// Lowercase `text`, drop all whitespace and map it to phoneme records.
///
/// Fails with [`Error::UnmappedGrapheme`] on the first character without a
/// duration (digits, punctuation, non-Croatian letters); `position` counts
/// characters after whitespace removal.
pub fn encode(text: &str) -> Result<Vec<Phoneme>> {
    let chars: Vec<char> = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let mut phonemes = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let pair: Option<String> = chars.get(i..i + 2).map(|p| p.iter().collect());
        match pair {
            Some(digraph) if DIGRAPHS.contains(&digraph.as_str()) => {
                phonemes.push(lookup(digraph, i)?);
                i += 2;
            }
            _ => {
                phonemes.push(lookup(chars[i].to_string(), i)?);
                i += 1;
            }
        }
    }
    debug!(chars = chars.len(), records = phonemes.len(), "encoded text");
    Ok(phonemes)
}

/// Join records into the file format.
pub fn serialize(phonemes: &[Phoneme]) -> String {
    phonemes
        .iter()
        .map(Phoneme::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Encode `text` and write the phoneme file to `path`.
///
/// The whole text is encoded before the file is touched, so an unmapped
/// grapheme leaves no partial file behind. An existing file is truncated.
pub fn write_phoneme_file(text: &str, path: &Path) -> Result<usize> {
    let phonemes = encode(text)?;
    let contents = serialize(&phonemes);

    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(contents.as_bytes())?;
    writer.flush()?;

    debug!(records = phonemes.len(), path = %path.display(), "wrote phoneme file");
    Ok(phonemes.len())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
