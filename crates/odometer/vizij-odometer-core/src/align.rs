//! Digit alignment of a lesser and a greater value.
//!
//! Both values are turned into character streams of equal length:
//! - the lesser stream is left-padded with zeros up to the greater's integer width
//! - both fractional parts are right-padded with zeros to a common width
//!   (at least hundredths once any fraction exists)
//! - a decimal point is inserted on the side that had none when the other has one

use std::fmt;
use std::iter;

use serde::{Deserialize, Serialize};

use crate::error::ComputationError;
use crate::number_string::{analyze, NumberStringInfo};
use crate::value::format_number;

/// One aligned position: a digit `0..=9` or the decimal point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlignedChar {
    Digit(u8),
    Point,
}

impl AlignedChar {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(AlignedChar::Point),
            _ => c.to_digit(10).map(|d| AlignedChar::Digit(d as u8)),
        }
    }

    #[inline]
    pub fn as_char(self) -> char {
        match self {
            AlignedChar::Digit(d) => char::from(b'0' + d),
            AlignedChar::Point => '.',
        }
    }
}

impl fmt::Display for AlignedChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Result of aligning a lesser value with an optional greater value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlignedDigits {
    /// Index of the last zero prepended to `lesser`; `None` when nothing was prepended.
    pub last_padding_index: Option<usize>,
    pub lesser: Vec<AlignedChar>,
    /// `None` in single-value mode.
    pub greater: Option<Vec<AlignedChar>>,
}

impl AlignedDigits {
    /// True when `index` falls inside the zeros prepended to the lesser stream.
    #[inline]
    pub fn is_padding(&self, index: usize) -> bool {
        self.last_padding_index.is_some_and(|last| index <= last)
    }

    pub fn lesser_text(&self) -> String {
        collect_text(&self.lesser)
    }

    pub fn greater_text(&self) -> Option<String> {
        self.greater.as_deref().map(collect_text)
    }
}

fn collect_text(chars: &[AlignedChar]) -> String {
    chars.iter().map(|c| c.as_char()).collect()
}

fn to_chars(text: &str) -> Vec<AlignedChar> {
    text.chars().filter_map(AlignedChar::from_char).collect()
}

/// Right-pad the fractional part of `digits` to `width` digits.
fn extend_fraction(digits: &mut Vec<AlignedChar>, info: &NumberStringInfo, width: usize) {
    if width <= info.fractional_digit_count {
        return;
    }
    if !info.has_point() {
        digits.push(AlignedChar::Point);
    }
    digits.extend(iter::repeat(AlignedChar::Digit(0)).take(width - info.fractional_digit_count));
}

/// Align `lesser` and `greater` digit by digit.
///
/// With no greater value the lesser stream only receives its own minimum right
/// pad. Fails with [`ComputationError::OutOfOrder`] when `greater < lesser`.
pub fn align(lesser: f64, greater: Option<f64>) -> Result<AlignedDigits, ComputationError> {
    let lesser_text = format_number(lesser);
    let lesser_info = analyze(&lesser_text);

    let Some(greater) = greater else {
        let mut digits = to_chars(&lesser_text);
        extend_fraction(&mut digits, &lesser_info, lesser_info.fractional_width());
        return Ok(AlignedDigits {
            last_padding_index: None,
            lesser: digits,
            greater: None,
        });
    };

    if greater < lesser {
        return Err(ComputationError::OutOfOrder { lesser, greater });
    }

    let greater_text = format_number(greater);
    let greater_info = analyze(&greater_text);

    let padding = greater_info
        .integer_digit_count
        .saturating_sub(lesser_info.integer_digit_count);

    let mut lesser_digits = Vec::with_capacity(padding + greater_text.len() + 2);
    lesser_digits.extend(iter::repeat(AlignedChar::Digit(0)).take(padding));
    lesser_digits.extend(to_chars(&lesser_text));
    let mut greater_digits = to_chars(&greater_text);

    let width = lesser_info
        .fractional_width()
        .max(greater_info.fractional_width());
    extend_fraction(&mut lesser_digits, &lesser_info, width);
    extend_fraction(&mut greater_digits, &greater_info, width);

    Ok(AlignedDigits {
        last_padding_index: padding.checked_sub(1),
        lesser: lesser_digits,
        greater: Some(greater_digits),
    })
}
