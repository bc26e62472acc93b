//! Vizij Odometer Core (engine-agnostic)
//!
//! Plans rolling-digit transitions between two non-negative numbers. Inputs are
//! normalized, their digits aligned position by position, and each position gets
//! a reel configuration (strip text, initial offset, delay bucket) that an
//! adapter can render with plain CSS transforms.
//!
//! Pipeline: [`value::normalize`] -> [`align::align`] -> [`reel::build_configs`],
//! wrapped by [`plan::compute_digit_plan`]. [`Odometer`] caches the result for
//! hosts that re-render often, and [`frame::RenderFrame`] derives per-frame data.

pub mod align;
pub mod config;
pub mod error;
pub mod frame;
pub mod number_string;
pub mod odometer;
pub mod plan;
pub mod reel;
pub mod value;

// Re-exports for consumers (adapters)
pub use align::{align, AlignedChar, AlignedDigits};
pub use config::Config;
pub use error::ComputationError;
pub use frame::{CurrentPosition, DigitFrame, Overlay, RenderFrame};
pub use number_string::{analyze, NumberStringInfo};
pub use odometer::Odometer;
pub use plan::{compute_digit_plan, plan_for_values, DigitPlan};
pub use reel::{build_configs, DigitConfig, ReelCarry, ReelTag};
pub use value::{normalize, Normalized, RawValue};
