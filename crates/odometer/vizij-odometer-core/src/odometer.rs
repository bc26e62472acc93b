//! Stateful odometer: caches the last plan and recomputes only when inputs change.

use log::{debug, warn};

use crate::config::Config;
use crate::error::ComputationError;
use crate::frame::{CurrentPosition, RenderFrame};
use crate::plan::{plan_for_values, primary_value, secondary_value, DigitPlan};
use crate::value::{normalize, Normalized, RawValue};

/// Normalized inputs of the last computation, used to skip redundant work.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Inputs {
    from: Normalized,
    to: Normalized,
    flow_reverse: bool,
}

/// Host-side odometer model.
#[derive(Debug, Default)]
pub struct Odometer {
    config: Config,
    last_inputs: Option<Inputs>,
    plan: Option<DigitPlan>,
    error: Option<ComputationError>,
}

impl Odometer {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the configuration. A direction change rebuilds the cached plan
    /// right away so the next frame never mixes strips of the old direction.
    pub fn set_config(&mut self, config: Config) {
        let direction_changed = config.flow_reverse != self.config.flow_reverse;
        self.config = config;
        if !direction_changed {
            return;
        }
        if let Some(inputs) = self.last_inputs.as_mut() {
            inputs.flow_reverse = self.config.flow_reverse;
        }
        // A failed computation stays failed: its error does not depend on direction.
        let Some(plan) = self.plan.take() else {
            return;
        };
        debug!("odometer: direction changed, replanning");
        let flow_reverse = self.config.flow_reverse;
        self.store(plan_for_values(plan.from_value, plan.to_value, true, flow_reverse));
    }

    /// Feed new values. Returns `false` when nothing changed and the cached
    /// plan was kept; a failed computation clears the plan and keeps the error.
    pub fn set_values(&mut self, from: Option<&RawValue>, to: Option<&RawValue>) -> bool {
        let inputs = Inputs {
            from: normalize(from),
            to: normalize(to),
            flow_reverse: self.config.flow_reverse,
        };
        if self.last_inputs == Some(inputs) {
            debug!("odometer: values unchanged, keeping cached plan");
            return false;
        }
        self.last_inputs = Some(inputs);

        let to_value = secondary_value(to, inputs.to);
        let result = primary_value(from, inputs.from).and_then(|from_value| {
            plan_for_values(from_value, to_value, true, inputs.flow_reverse)
        });
        self.store(result);
        true
    }

    fn store(&mut self, result: Result<DigitPlan, ComputationError>) {
        match result {
            Ok(plan) => {
                self.plan = Some(plan);
                self.error = None;
            }
            Err(err) => {
                warn!("odometer: {err}");
                self.plan = None;
                self.error = Some(err);
            }
        }
    }

    pub fn plan(&self) -> Option<&DigitPlan> {
        self.plan.as_ref()
    }

    pub fn error(&self) -> Option<&ComputationError> {
        self.error.as_ref()
    }

    /// Render data for the given position; empty after a failed computation.
    pub fn frame(&self, position: CurrentPosition) -> RenderFrame {
        RenderFrame::build(self.plan.as_ref(), &self.config, position)
    }
}
