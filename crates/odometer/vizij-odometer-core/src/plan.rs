//! Entry point: raw values in, per-digit plan out.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::align::align;
use crate::error::ComputationError;
use crate::reel::{build_configs, DigitConfig};
use crate::value::{format_number, normalize, Normalized, RawValue};

/// Everything a renderer needs to morph `from_value` into `to_value`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DigitPlan {
    pub from_value: f64,
    /// `None` when the second value is absent (single-value display).
    pub to_value: Option<f64>,
    /// `from_value <= to_value`; true when `to_value` is absent.
    pub from_lesser_to_greater: bool,
    /// Whether the value currently on display is the lesser operand.
    pub showing_lesser: bool,
    pub digit_configs: Vec<DigitConfig>,
}

impl DigitPlan {
    /// Whether the lesser operand is on display at the given position.
    #[inline]
    pub fn is_lesser_at(&self, first_position: bool) -> bool {
        if first_position {
            self.from_lesser_to_greater
        } else {
            !self.from_lesser_to_greater
        }
    }

    /// Value on display at the given position; the second position falls back
    /// to `from_value` while `to_value` is absent.
    pub fn value_at(&self, first_position: bool) -> f64 {
        match self.to_value {
            Some(to) if !first_position => to,
            _ => self.from_value,
        }
    }

    /// Value on display for the position this plan was computed for.
    pub fn current_value(&self) -> f64 {
        self.value_at(self.showing_lesser == self.from_lesser_to_greater)
    }

    /// Accessible text for [`DigitPlan::current_value`].
    pub fn current_label(&self) -> String {
        format_number(self.current_value())
    }
}

/// Compute the digit plan for a transition between two raw values.
///
/// `from` must normalize to a value. `to` may be absent or invalid, in which
/// case every position is static.
pub fn compute_digit_plan(
    from: Option<&RawValue>,
    to: Option<&RawValue>,
    current_position_is_first: bool,
    flow_reverse: bool,
) -> Result<DigitPlan, ComputationError> {
    let from_value = primary_value(from, normalize(from))?;
    let to_value = secondary_value(to, normalize(to));
    plan_for_values(from_value, to_value, current_position_is_first, flow_reverse)
}

/// The primary operand must normalize to a value.
pub(crate) fn primary_value(
    raw: Option<&RawValue>,
    normalized: Normalized,
) -> Result<f64, ComputationError> {
    match (normalized, raw) {
        (Normalized::Value(v), _) => Ok(v),
        (_, Some(raw)) => Err(ComputationError::invalid(format!(
            "fromValue {raw} is not a non-negative number"
        ))),
        (_, None) => Err(ComputationError::invalid("fromValue is missing")),
    }
}

/// An invalid secondary operand degrades to single-value mode.
pub(crate) fn secondary_value(raw: Option<&RawValue>, normalized: Normalized) -> Option<f64> {
    if let (Normalized::Invalid, Some(raw)) = (normalized, raw) {
        warn!("odometer: toValue {raw} is invalid; showing fromValue only");
    }
    normalized.value()
}

fn check_value(name: &str, value: f64) -> Result<(), ComputationError> {
    match normalize(Some(&RawValue::Number(value))) {
        Normalized::Value(_) => Ok(()),
        _ => Err(ComputationError::invalid(format!(
            "{name} {value} is not a non-negative number"
        ))),
    }
}

/// Same as [`compute_digit_plan`] for values that are already numbers.
///
/// Both values must be finite and non-negative.
pub fn plan_for_values(
    from_value: f64,
    to_value: Option<f64>,
    current_position_is_first: bool,
    flow_reverse: bool,
) -> Result<DigitPlan, ComputationError> {
    check_value("fromValue", from_value)?;
    if let Some(to) = to_value {
        check_value("toValue", to)?;
    }
    let from_lesser_to_greater = to_value.map_or(true, |to| from_value <= to);

    let aligned = match to_value {
        Some(to) if !from_lesser_to_greater => align(to, Some(from_value))?,
        _ => align(from_value, to_value)?,
    };
    let digit_configs = build_configs(&aligned, flow_reverse)?;

    debug!(
        "odometer: planned {} -> {:?} over {} positions (padding through {:?})",
        from_value,
        to_value,
        digit_configs.len(),
        aligned.last_padding_index
    );

    let mut plan = DigitPlan {
        from_value,
        to_value,
        from_lesser_to_greater,
        showing_lesser: false,
        digit_configs,
    };
    plan.showing_lesser = plan.is_lesser_at(current_position_is_first);
    Ok(plan)
}
