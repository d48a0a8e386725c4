//! Numeral–noun agreement suffixes.
//!
//! Croatian nouns after a numeral take an ending that depends on the last
//! digit, with the teens as exceptions: `1 sat`, `2 sata`, `5 sati`,
//! `12 sati`. Digits are read from the decimal form of `|n|`; the "leading"
//! digit is the first one, so 12–14 (and 112–114) never take the paucal
//! ending.

fn last_and_leading_digit(n: i64) -> (u32, u32) {
    let digits = n.unsigned_abs().to_string();
    let digit_at = |c: Option<char>| c.and_then(|c| c.to_digit(10)).unwrap_or(0);
    (digit_at(digits.chars().last()), digit_at(digits.chars().next()))
}

fn is_paucal(n: i64) -> bool {
    let (last, leading) = last_and_leading_digit(n);
    matches!(last, 2..=4) && leading != 1
}

/// Ending of `sat` (hour): `""`, `"a"` or `"i"`.
pub fn hour_suffix(hour: i64) -> &'static str {
    let (last, _) = last_and_leading_digit(hour);
    if last == 1 && hour != 11 {
        ""
    } else if is_paucal(hour) {
        "a"
    } else {
        "i"
    }
}

/// Ending of `minut` (minute): `"e"` or `"a"`.
pub fn minute_suffix(minute: i64) -> &'static str {
    if is_paucal(minute) {
        "e"
    } else {
        "a"
    }
}

/// Ending of `stup-` (degree): `"anj"` for `stupanj`, `"nja"` for `stupnja`.
pub fn temperature_suffix(degrees: i64) -> &'static str {
    let (last, _) = last_and_leading_digit(degrees);
    if last == 1 && degrees != 11 {
        "anj"
    } else {
        "nja"
    }
}
