//! Chilean RUT (Rol Único Tributario) formatting and modulus-11 validation.
//!
//! Formatting is purely textual and never validates; validation never reformats. The
//! free functions are called on every keystroke, so they accept partial input and never panic.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Shortest cleaned RUT (body plus check character) accepted by [`is_valid`].
pub const MIN_VALID_LENGTH: usize = 8;

const WEIGHTS: [u32; 6] = [2, 3, 4, 5, 6, 7];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RutError {
    #[error("RUT must contain at least 8 characters, found {0}")]
    TooShort(usize),
    #[error("RUT body must contain only digits: '{0}'")]
    InvalidBody(String),
    #[error("RUT check digit mismatch (expected {expected}, found {found})")]
    CheckDigitMismatch { expected: char, found: char },
}

/// Keep digits and the letter K, uppercased.
fn clean(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, 'k' | 'K'))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

fn split_check(cleaned: &str) -> Option<(&str, char)> {
    let check = cleaned.chars().last()?;
    let body = &cleaned[..cleaned.len() - check.len_utf8()];
    Some((body, check))
}

/// Render a RUT as `12.345.678-5`. Empty or garbage input yields an empty string.
pub fn format_for_display(raw: &str) -> String {
    let cleaned = clean(raw);
    let Some((body, check)) = split_check(&cleaned) else {
        return String::new();
    };

    if body.is_empty() {
        return check.to_string();
    }

    format!("{}-{}", group_thousands(body), check)
}

/// Canonical storage form `12345678-5`; idempotent.
pub fn normalize(raw: &str) -> String {
    let cleaned = clean(raw);
    let Some((body, check)) = split_check(&cleaned) else {
        return String::new();
    };

    if body.is_empty() {
        return check.to_string();
    }

    format!("{body}-{check}")
}

fn group_thousands(body: &str) -> String {
    let chars: Vec<char> = body.chars().collect();
    let mut grouped = String::with_capacity(chars.len() + chars.len() / 3);
    for (index, c) in chars.iter().enumerate() {
        if index > 0 && (chars.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }
    grouped
}

/// Modulus-11 check character for a digit-only body.
pub fn check_digit(body: &str) -> Option<char> {
    if body.is_empty() {
        return None;
    }

    let mut sum = 0u32;
    for (position, c) in body.chars().rev().enumerate() {
        let digit = c.to_digit(10)?;
        sum = (sum + digit * WEIGHTS[position % WEIGHTS.len()]) % 11;
    }

    match 11 - (sum % 11) {
        11 => Some('0'),
        10 => Some('K'),
        digit => char::from_digit(digit, 10),
    }
}

/// Whether the RUT carries a correct check character. Dots and dashes are ignored.
pub fn is_valid(rut: &str) -> bool {
    verify(rut).is_ok()
}

fn verify(rut: &str) -> Result<(String, char), RutError> {
    let cleaned: String = rut
        .chars()
        .filter(|c| !matches!(c, '.' | '-'))
        .collect::<String>()
        .to_uppercase();

    let length = cleaned.chars().count();
    if length < MIN_VALID_LENGTH {
        return Err(RutError::TooShort(length));
    }

    let (body, found) = split_check(&cleaned).ok_or(RutError::TooShort(length))?;
    let expected = check_digit(body).ok_or_else(|| RutError::InvalidBody(body.to_string()))?;
    if expected != found {
        return Err(RutError::CheckDigitMismatch { expected, found });
    }

    Ok((body.to_string(), found))
}

/// A RUT whose check character has been verified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rut {
    body: String,
    check: char,
}

impl Rut {
    pub fn parse(raw: &str) -> Result<Self, RutError> {
        let (body, check) = verify(raw.trim())?;
        Ok(Self { body, check })
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn check(&self) -> char {
        self.check
    }

    pub fn normalized(&self) -> String {
        format!("{}-{}", self.body, self.check)
    }
}

impl FromStr for Rut {
    type Err = RutError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

impl fmt::Display for Rut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", group_thousands(&self.body), self.check)
    }
}

impl Serialize for Rut {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.normalized())
    }
}

impl<'de> Deserialize<'de> for Rut {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Rut::parse(&raw).map_err(serde::de::Error::custom)
    }
}
