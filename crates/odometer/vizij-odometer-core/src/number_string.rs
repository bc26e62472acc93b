//! Shape of a canonical number string: where the point sits and how many
//! digits surround it.

/// Facts about one value's canonical text (see [`crate::value::format_number`]).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NumberStringInfo {
    pub decimal_point_index: Option<usize>,
    pub fractional_digit_count: usize,
    pub integer_digit_count: usize,
    /// Zeros to append so a fractional value shows at least hundredths (0 or 1).
    pub minimum_right_pad: usize,
}

impl NumberStringInfo {
    /// Fractional digits once the minimum right pad is applied.
    #[inline]
    pub fn fractional_width(&self) -> usize {
        self.fractional_digit_count + self.minimum_right_pad
    }

    #[inline]
    pub fn has_point(&self) -> bool {
        self.decimal_point_index.is_some()
    }
}

/// Inspect the canonical text of a non-negative value.
pub fn analyze(text: &str) -> NumberStringInfo {
    match text.find('.') {
        Some(idx) => {
            let fractional_digit_count = text.len() - idx - 1;
            NumberStringInfo {
                decimal_point_index: Some(idx),
                fractional_digit_count,
                integer_digit_count: idx,
                minimum_right_pad: usize::from(fractional_digit_count == 1),
            }
        }
        None => NumberStringInfo {
            decimal_point_index: None,
            fractional_digit_count: 0,
            integer_digit_count: text.len(),
            minimum_right_pad: 0,
        },
    }
}
