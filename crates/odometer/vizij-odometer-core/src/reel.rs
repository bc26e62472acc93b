//! Reel parameter synthesis.
//!
//! Walks aligned positions left to right. Each digit position gets a strip of
//! repeated `0123456789` rotations, an initial vertical offset and a delay
//! bucket. How long a strip is depends on the position before it, which makes
//! a carry (19 -> 21) spin the more significant reels further, the way a
//! mechanical odometer does.
//!
//! The thresholds below are tuned by eye. Changing them changes the perceived
//! speed of every transition.

use serde::{Deserialize, Serialize};

use crate::align::{AlignedChar, AlignedDigits};
use crate::error::ComputationError;

const BASE_REEL: &str = "0123456789";

/// Delay buckets saturate here.
pub const MAX_DELAY_BUCKET: u8 = 4;

/// Presentation tag attached to a position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ReelTag {
    Dot,
    LeadingZero,
    Delay(u8),
}

/// Render parameters for one aligned position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DigitConfig {
    pub index: usize,
    /// Copies of the 10-digit unit in the strip; 0 means a static character.
    pub strip_repeat_count: u8,
    /// Greater digit minus lesser digit, in `-9..=9`. Zero for static positions.
    pub difference: i8,
    /// Initial-frame offset such as `"-40%"`; `None` for static positions.
    pub vertical_offset_percent: Option<String>,
    pub animation_delay_bucket: u8,
    pub strip_text: String,
    pub is_decimal_point: bool,
    pub is_leading_padding: bool,
}

impl DigitConfig {
    /// A position that never rolls: the decimal point, or any position in single-value mode.
    fn fixed(index: usize, c: AlignedChar, is_leading_padding: bool) -> Self {
        Self {
            index,
            strip_repeat_count: 0,
            difference: 0,
            vertical_offset_percent: None,
            animation_delay_bucket: 0,
            strip_text: c.to_string(),
            is_decimal_point: c == AlignedChar::Point,
            is_leading_padding,
        }
    }

    pub fn tags(&self) -> Vec<ReelTag> {
        let mut tags = Vec::new();
        if self.is_decimal_point {
            tags.push(ReelTag::Dot);
        }
        if self.is_leading_padding {
            tags.push(ReelTag::LeadingZero);
        }
        if self.animation_delay_bucket > 0 {
            tags.push(ReelTag::Delay(self.animation_delay_bucket));
        }
        tags
    }
}

/// State carried from the last digit position (decimal points are skipped).
///
/// The default value stands in for "no previous position".
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ReelCarry {
    pub difference: i8,
    pub reel_count: u8,
    pub delay: u8,
}

/// Number of strip repetitions for a position.
pub fn reel_count(difference: i8, carry: &ReelCarry) -> u8 {
    match carry.reel_count {
        0 => u8::from(difference > 0),
        1 => {
            let prev = i32::from(carry.difference);
            let relative = i32::from(difference) + 10 * (prev + if prev > 0 { 0 } else { 10 });
            match relative {
                r if r < 10 => 1,
                r if r < 20 => 2,
                r if r < 30 => 3,
                r if r < 40 => 4,
                _ => 6,
            }
        }
        2 | 3 => 4,
        _ => 6,
    }
}

/// Distance, in percent of strip height, between the strip top and the lesser digit.
pub fn offset_percent(reel_count: u8, difference: i8) -> f64 {
    let d = f64::from(difference);
    let c = f64::from(reel_count);
    match reel_count {
        0 => 0.0,
        1 => {
            if difference > 0 {
                d * 10.0
            } else {
                (d + 10.0) * 10.0
            }
        }
        _ => {
            if difference >= 0 {
                ((d + 10.0 * (c - 1.0)) * 10.0) / c
            } else {
                ((d + 10.0 * c) * 10.0) / c
            }
        }
    }
}

/// Stagger bucket for long strips following another long or delayed strip.
pub fn delay_bucket(reel_count: u8, carry: &ReelCarry) -> u8 {
    if reel_count > 3 && (carry.delay > 0 || carry.reel_count == reel_count) {
        (carry.delay + 1).min(MAX_DELAY_BUCKET)
    } else {
        0
    }
}

/// Literal strip content for a digit position.
///
/// The unit is the 0-9 rotation starting at `lesser`, reversed when
/// `flow_reverse`. A reversed leading-padding strip loses its final character.
pub fn strip_text(
    lesser: u8,
    reel_count: u8,
    flow_reverse: bool,
    is_leading_padding: bool,
) -> String {
    if reel_count == 0 {
        return AlignedChar::Digit(lesser).to_string();
    }
    let start = usize::from(lesser % 10);
    let unit: String = if flow_reverse {
        BASE_REEL[start..]
            .chars()
            .chain(BASE_REEL[..start].chars())
            .rev()
            .collect()
    } else {
        [&BASE_REEL[start..], &BASE_REEL[..start]].concat()
    };
    let mut strip = unit.repeat(usize::from(reel_count));
    if flow_reverse && is_leading_padding {
        strip.pop();
    }
    strip
}

/// Render a percentage the way a stylesheet expects it (`-40%`, never `-0%`).
pub(crate) fn format_percent(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}%")
}

fn vertical_offset(reel_count: u8, difference: i8, flow_reverse: bool) -> String {
    let offset = offset_percent(reel_count, difference);
    let shifted = if flow_reverse && reel_count > 0 {
        (100.0 - 10.0 / f64::from(reel_count)) - offset
    } else {
        offset
    };
    format_percent(-shifted)
}

/// Build the config for one pair of digits and the carry for the next position.
pub fn roll_digit(
    carry: ReelCarry,
    index: usize,
    lesser: u8,
    greater: u8,
    is_leading_padding: bool,
    flow_reverse: bool,
) -> (DigitConfig, ReelCarry) {
    let difference = greater as i8 - lesser as i8;
    let count = reel_count(difference, &carry);
    let delay = delay_bucket(count, &carry);

    let config = DigitConfig {
        index,
        strip_repeat_count: count,
        difference,
        vertical_offset_percent: Some(vertical_offset(count, difference, flow_reverse)),
        animation_delay_bucket: delay,
        strip_text: strip_text(lesser, count, flow_reverse, is_leading_padding),
        is_decimal_point: false,
        is_leading_padding,
    };
    let next = ReelCarry {
        difference,
        reel_count: count,
        delay,
    };
    (config, next)
}

/// Produce one [`DigitConfig`] per aligned position, in order.
pub fn build_configs(
    aligned: &AlignedDigits,
    flow_reverse: bool,
) -> Result<Vec<DigitConfig>, ComputationError> {
    let is_leading_zero =
        |index: usize, c: AlignedChar| c == AlignedChar::Digit(0) && aligned.is_padding(index);

    let Some(greater) = aligned.greater.as_deref() else {
        return Ok(aligned
            .lesser
            .iter()
            .enumerate()
            .map(|(index, &c)| DigitConfig::fixed(index, c, is_leading_zero(index, c)))
            .collect());
    };

    if greater.len() != aligned.lesser.len() {
        return Err(ComputationError::Misaligned {
            index: greater.len().min(aligned.lesser.len()),
        });
    }

    let mut configs = Vec::with_capacity(greater.len());
    let mut carry = ReelCarry::default();
    for (index, (&lesser, &greater)) in aligned.lesser.iter().zip(greater).enumerate() {
        match (lesser, greater) {
            (AlignedChar::Point, AlignedChar::Point) => {
                configs.push(DigitConfig::fixed(index, AlignedChar::Point, false));
            }
            (AlignedChar::Digit(l), AlignedChar::Digit(g)) => {
                let (config, next) = roll_digit(
                    carry,
                    index,
                    l,
                    g,
                    is_leading_zero(index, lesser),
                    flow_reverse,
                );
                configs.push(config);
                carry = next;
            }
            _ => return Err(ComputationError::Misaligned { index }),
        }
    }
    Ok(configs)
}
