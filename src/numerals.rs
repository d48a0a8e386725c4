//! Croatian numerals — place-value splitting and word forming.
//!
//! A number is first split into place-value magnitudes, then every magnitude
//! is turned into one word:
//!
//! ```text
//! 158 → ["100", "50", "8"] → ["sto", "pedeset", "i", "osam"]
//! 218 → ["200", "18"]      → ["dvjesto", "osamnaest"]
//! -42 → ["minus", "40", "2"]
//! ```
//!
//! Only magnitudes of up to three digits are supported, so the accepted range
//! is `-999..=999`.

use std::{fmt, str::FromStr};

use crate::error::{Error, Result};

// ─────────────────────────────────────────────────────────────────────────────
// Lexicon
// ─────────────────────────────────────────────────────────────────────────────

/// Largest absolute value [`split`] accepts.
pub const MAX_ABS: i64 = 999;

const DIGITS: [&str; 10] = [
    "nula", "jedan", "dva", "tri", "četiri", "pet", "šest", "sedam", "osam", "devet",
];
const TEN: &str = "deset";
const HUNDRED: &str = "sto";
const TEEN_SUFFIX: &str = "naest";

const SIGN_WORD: &str = "minus";
const CONJUNCTION: &str = "i";

// ─────────────────────────────────────────────────────────────────────────────
// Magnitudes and tokens
// ─────────────────────────────────────────────────────────────────────────────

/// One place-value chunk of a number, e.g. the `50` in `158`, or a collapsed
/// teen such as `18`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Magnitude(u32);

impl Magnitude {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Which word-forming rule applies, and the digit that selects the stem.
    fn place(self) -> Result<(Place, usize)> {
        let v = self.0;
        match v {
            0..=9 => Ok((Place::Units, v as usize)),
            11..=19 => Ok((Place::Teen, (v % 10) as usize)),
            10..=90 if v % 10 == 0 => Ok((Place::Tens, (v / 10) as usize)),
            100..=900 if v % 100 == 0 => Ok((Place::Hundreds, (v / 100) as usize)),
            _ => Err(Error::InvalidInput(format!(
                "{v} is not a single place-value magnitude"
            ))),
        }
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An element of a split number: the sign marker or a magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Minus,
    Magnitude(Magnitude),
}

impl Token {
    fn is_single_digit(&self) -> bool {
        matches!(self, Token::Magnitude(m) if m.value() < 10)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Minus => f.write_str(SIGN_WORD),
            Token::Magnitude(m) => write!(f, "{m}"),
        }
    }
}

impl FromStr for Token {
    type Err = Error;

    /// Accepts `"minus"` or a string of decimal digits.
    fn from_str(s: &str) -> Result<Self> {
        if s == SIGN_WORD {
            return Ok(Token::Minus);
        }
        if let Some(digit) = s.chars().find(|c| !c.is_ascii_digit()) {
            return Err(Error::UnknownDigit { digit, token: s.to_string() });
        }
        let value: u32 = s
            .parse()
            .map_err(|_| Error::InvalidInput(format!("cannot read numeral token {s:?}")))?;
        Ok(Token::Magnitude(Magnitude(value)))
    }
}

/// Result of [`split`]: the sign and the magnitudes in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceValues {
    pub negative: bool,
    pub magnitudes: Vec<Magnitude>,
}

impl PlaceValues {
    /// Magnitudes with the `minus` marker in front for negative numbers.
    pub fn tokens(&self) -> Vec<Token> {
        let sign = self.negative.then_some(Token::Minus);
        sign.into_iter()
            .chain(self.magnitudes.iter().copied().map(Token::Magnitude))
            .collect()
    }

    /// Magnitudes only, sign dropped.
    pub fn unsigned_tokens(&self) -> Vec<Token> {
        self.magnitudes.iter().copied().map(Token::Magnitude).collect()
    }

    /// The string form, e.g. `["minus", "40", "2"]`.
    pub fn to_strings(&self) -> Vec<String> {
        self.tokens().iter().map(Token::to_string).collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Splitting
// ─────────────────────────────────────────────────────────────────────────────

/// Split `number` into place-value magnitudes.
///
/// A trailing tens + units pair summing to 11–19 collapses into one teen
/// magnitude, and zero magnitudes are dropped unless the number itself is 0.
pub fn split(number: i64) -> Result<PlaceValues> {
    if !(-MAX_ABS..=MAX_ABS).contains(&number) {
        return Err(Error::InvalidInput(format!(
            "{number} is outside -{MAX_ABS}..={MAX_ABS}"
        )));
    }
    let negative = number < 0;

    let digits: Vec<u32> = number
        .unsigned_abs()
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();
    let len = digits.len();

    let mut magnitudes: Vec<u32> = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| d * 10u32.pow((len - 1 - i) as u32))
        .collect();

    if magnitudes.len() >= 2 {
        let last = magnitudes.len() - 1;
        let sum = magnitudes[last - 1] + magnitudes[last];
        if (11..=19).contains(&sum) {
            magnitudes[last - 1] = sum;
            magnitudes.truncate(last);
        }
    }

    if magnitudes != [0] {
        magnitudes.retain(|&m| m != 0);
    }

    Ok(PlaceValues {
        negative,
        magnitudes: magnitudes.into_iter().map(Magnitude).collect(),
    })
}

/// [`split`] for values that arrive as floats (e.g. parsed JSON).
pub fn split_f64(value: f64) -> Result<PlaceValues> {
    if !value.is_finite() {
        return Err(Error::InvalidInput(format!("{value} is not a finite number")));
    }
    if value.fract() != 0.0 {
        return Err(Error::InvalidInput(format!("{value} is not an integer")));
    }
    split(value as i64)
}

// ─────────────────────────────────────────────────────────────────────────────
// Word forming
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Place {
    Units,
    Teen,
    Tens,
    Hundreds,
}

/// How the digit word is cut before the place word is appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stem {
    Whole,
    DropLast,
    Prefix(usize),
    PrefixWith(usize, &'static str),
}

impl Stem {
    fn apply(self, word: &str) -> String {
        match self {
            Stem::Whole => word.to_string(),
            Stem::DropLast => {
                let keep = word.chars().count().saturating_sub(1);
                word.chars().take(keep).collect()
            }
            Stem::Prefix(n) => word.chars().take(n).collect(),
            Stem::PrefixWith(n, tail) => word.chars().take(n).chain(tail.chars()).collect(),
        }
    }
}

/// Irregular morphology: stem cut and place word for every (place, digit).
fn rule(place: Place, digit: usize) -> (Stem, &'static str) {
    match (place, digit) {
        (Place::Units, _) => (Stem::Whole, ""),

        // jedanaest, četrnaest, šesnaest
        (Place::Teen, 1) => (Stem::Whole, &TEEN_SUFFIX[1..]),
        (Place::Teen, 4) => (Stem::PrefixWith(3, "r"), TEEN_SUFFIX),
        (Place::Teen, 6) => (Stem::DropLast, TEEN_SUFFIX),
        (Place::Teen, _) => (Stem::Whole, TEEN_SUFFIX),

        // deset, četrdeset, pedeset
        (Place::Tens, 1) => (Stem::Prefix(0), TEN),
        (Place::Tens, 4) => (Stem::PrefixWith(3, "r"), TEN),
        (Place::Tens, 5 | 6 | 9) => (Stem::DropLast, TEN),
        (Place::Tens, _) => (Stem::Whole, TEN),

        // sto, dvjesto, četrsto, šesto
        (Place::Hundreds, 1) => (Stem::Prefix(0), HUNDRED),
        (Place::Hundreds, 2) => (Stem::PrefixWith(2, "je"), HUNDRED),
        (Place::Hundreds, 4) => (Stem::PrefixWith(3, "r"), HUNDRED),
        (Place::Hundreds, 6) => (Stem::Prefix(2), HUNDRED),
        (Place::Hundreds, _) => (Stem::Whole, HUNDRED),
    }
}

fn token_word(token: &Token) -> Result<String> {
    let magnitude = match token {
        Token::Minus => return Ok(SIGN_WORD.to_string()),
        Token::Magnitude(m) => *m,
    };
    let (place, digit) = magnitude.place()?;
    let (stem, place_word) = rule(place, digit);
    Ok(stem.apply(DIGITS[digit]) + place_word)
}

/// Turn split tokens into Croatian words, one word per token.
///
/// When the last token is a single digit and there is more than one token,
/// the conjunction `"i"` goes right before the last word. The position is
/// fixed, so `["minus", "5"]` becomes `["minus", "i", "pet"]`; use
/// [`spoken_number`] to render signed values without that shape.
pub fn to_words(tokens: &[Token]) -> Result<Vec<String>> {
    let mut words = Vec::with_capacity(tokens.len() + 1);
    for token in tokens {
        words.push(token_word(token)?);
    }

    let last_is_single_digit =
        tokens.len() > 1 && tokens.last().is_some_and(Token::is_single_digit);
    if last_is_single_digit {
        let at = words.len() - 1;
        words.insert(at, CONJUNCTION.to_string());
    }
    Ok(words)
}

/// [`to_words`] over string tokens such as `["100", "50", "8"]`.
pub fn words_from_strs<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<String>> {
    let tokens = tokens
        .iter()
        .map(|t| t.as_ref().parse())
        .collect::<Result<Vec<Token>>>()?;
    to_words(&tokens)
}

/// `to_words(split(n))`.
pub fn number_to_words(number: i64) -> Result<Vec<String>> {
    to_words(&split(number)?.tokens())
}

/// Spoken form of `number` joined with spaces, sign read as a separate
/// leading `minus`: `-5` → `"minus pet"`, `158` → `"sto pedeset i osam"`.
pub fn spoken_number(number: i64) -> Result<String> {
    let values = split(number)?;
    let words = to_words(&values.unsigned_tokens())?.join(" ");
    Ok(if values.negative {
        format!("{SIGN_WORD} {words}")
    } else {
        words
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
