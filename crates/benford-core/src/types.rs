//! Value and digit types shared by every stage of the pipeline.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A single datum of the analysed column.
///
/// Values read from a file are either numbers or text that spells a number.
/// Each variant carries its own leading-digit rule, see
/// [`leading_digit`](crate::digits::leading_digit).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObservedValue {
    /// An integer or floating-point number.
    Numeric(f64),
    /// A textual representation of a number.
    Text(String),
}

impl ObservedValue {
    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ObservedValue::Numeric(_) => "numeric",
            ObservedValue::Text(_) => "text",
        }
    }
}

impl fmt::Display for ObservedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObservedValue::Numeric(v) => write!(f, "{}", v),
            ObservedValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for ObservedValue {
    fn from(v: f64) -> Self {
        ObservedValue::Numeric(v)
    }
}

impl From<f32> for ObservedValue {
    fn from(v: f32) -> Self {
        ObservedValue::Numeric(f64::from(v))
    }
}

impl From<i32> for ObservedValue {
    fn from(v: i32) -> Self {
        ObservedValue::Numeric(f64::from(v))
    }
}

impl From<u32> for ObservedValue {
    fn from(v: u32) -> Self {
        ObservedValue::Numeric(f64::from(v))
    }
}

// 64-bit integers can exceed f64 precision; keep their exact digits.
impl From<i64> for ObservedValue {
    fn from(v: i64) -> Self {
        ObservedValue::Text(v.to_string())
    }
}

impl From<u64> for ObservedValue {
    fn from(v: u64) -> Self {
        ObservedValue::Text(v.to_string())
    }
}

impl From<&str> for ObservedValue {
    fn from(s: &str) -> Self {
        ObservedValue::Text(s.to_string())
    }
}

impl From<String> for ObservedValue {
    fn from(s: String) -> Self {
        ObservedValue::Text(s)
    }
}

/// A leading significant digit, always in `1..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Create a digit, returning `None` outside `1..=9`.
    pub fn new(value: u8) -> Option<Self> {
        (1..=9).contains(&value).then_some(Digit(value))
    }

    /// Parse an ASCII character `'1'..='9'`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='9' => Some(Digit(c as u8 - b'0')),
            _ => None,
        }
    }

    /// The digit's numeric value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Position of this digit in count and proportion sequences.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Digit::new(value).ok_or_else(|| format!("digit must be in 1..=9, got {}", value))
    }
}

impl From<Digit> for u8 {
    fn from(d: Digit) -> u8 {
        d.0
    }
}
