use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use vizij_odometer_core::{Config, CurrentPosition, Odometer, RawValue};

#[wasm_bindgen]
pub struct VizijOdometer {
    core: Odometer,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Numbers and strings pass through; anything else counts as "no value".
fn raw_value(v: &JsValue) -> Option<RawValue> {
    if let Some(n) = v.as_f64() {
        return Some(RawValue::Number(n));
    }
    v.as_string().map(RawValue::Text)
}

fn parse_config(config: JsValue) -> Result<Config, JsError> {
    if jsvalue_is_undefined_or_null(&config) {
        Ok(Config::default())
    } else {
        swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))
    }
}

#[wasm_bindgen]
impl VizijOdometer {
    /// Create an odometer. Pass a config object or undefined/null for defaults.
    /// Example:
    ///   new VizijOdometer({ flow_reverse: true, fade_color: "#000" })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<VizijOdometer, JsError> {
        console_error_panic_hook::set_once();
        Ok(VizijOdometer {
            core: Odometer::new(parse_config(config)?),
        })
    }

    /// Replace the config. Changing `flow_reverse` replans the current values immediately.
    #[wasm_bindgen(js_name = set_config)]
    pub fn set_config(&mut self, config: JsValue) -> Result<(), JsError> {
        self.core.set_config(parse_config(config)?);
        Ok(())
    }

    /// Feed `fromValue`/`toValue` (number, numeric string, or undefined).
    /// Returns false when the normalized values did not change.
    #[wasm_bindgen(js_name = set_values)]
    pub fn set_values(&mut self, from: JsValue, to: JsValue) -> bool {
        self.core
            .set_values(raw_value(&from).as_ref(), raw_value(&to).as_ref())
    }

    /// Render data for position 0 (from) or 1 (to). Empty after a failed computation.
    #[wasm_bindgen]
    pub fn frame(&self, current_position: u8) -> Result<JsValue, JsError> {
        let position = CurrentPosition::try_from(current_position)
            .map_err(|e| JsError::new(&format!("frame error: {e}")))?;
        swb::to_value(&self.core.frame(position))
            .map_err(|e| JsError::new(&format!("frame error: {e}")))
    }

    /// Last computed plan, or null.
    #[wasm_bindgen]
    pub fn plan(&self) -> Result<JsValue, JsError> {
        match self.core.plan() {
            Some(plan) => {
                swb::to_value(plan).map_err(|e| JsError::new(&format!("plan error: {e}")))
            }
            None => Ok(JsValue::NULL),
        }
    }

    /// Message of the last failed computation, if any.
    #[wasm_bindgen]
    pub fn error(&self) -> Option<String> {
        self.core.error().map(ToString::to_string)
    }
}

/// Stateless entry point: compute the digit plan for one transition.
#[wasm_bindgen(js_name = compute_digit_plan)]
pub fn compute_digit_plan(
    from: JsValue,
    to: JsValue,
    current_position_is_first: bool,
    flow_reverse: bool,
) -> Result<JsValue, JsError> {
    let plan = vizij_odometer_core::compute_digit_plan(
        raw_value(&from).as_ref(),
        raw_value(&to).as_ref(),
        current_position_is_first,
        flow_reverse,
    )
    .map_err(|e| JsError::new(&format!("compute_digit_plan error: {e}")))?;
    swb::to_value(&plan).map_err(|e| JsError::new(&format!("compute_digit_plan error: {e}")))
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
