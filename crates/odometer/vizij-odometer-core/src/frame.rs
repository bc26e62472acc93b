//! Render-frame derivation.
//!
//! Turns a [`DigitPlan`] into the per-position data a host needs for one frame:
//! class names, the strip text and an optional `translate3d` transform, plus the
//! hidden overlay that carries the accessible copy of the current value.
//! Nothing here touches a DOM; adapters apply the result.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::plan::DigitPlan;
use crate::reel::{format_percent, DigitConfig, ReelTag};
use crate::value::format_number;

pub const FRAME_CLASS: &str = "digit-frame";
pub const FRAME_REVERSE_CLASS: &str = "digit-frame--reverse";
pub const REEL_CLASS: &str = "digit-reel";
pub const OVERLAY_CLASS: &str = "digit-secret";
pub const OVERLAY_FADED_CLASS: &str = "digit-secret--faded-border";

/// Which of the two values is on display.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CurrentPosition {
    #[default]
    From,
    To,
}

impl CurrentPosition {
    #[inline]
    pub fn is_first(self) -> bool {
        self == CurrentPosition::From
    }
}

impl TryFrom<u8> for CurrentPosition {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(CurrentPosition::From),
            1 => Ok(CurrentPosition::To),
            other => Err(format!("current position must be 0 or 1, got {other}")),
        }
    }
}

impl From<CurrentPosition> for u8 {
    fn from(p: CurrentPosition) -> u8 {
        match p {
            CurrentPosition::From => 0,
            CurrentPosition::To => 1,
        }
    }
}

impl ReelTag {
    pub fn class_name(&self) -> String {
        match self {
            ReelTag::Dot => format!("{REEL_CLASS}--dot"),
            ReelTag::LeadingZero => format!("{REEL_CLASS}--leading-zero"),
            ReelTag::Delay(n) => format!("{REEL_CLASS}--delay-{n}"),
        }
    }
}

/// One digit position ready to be drawn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DigitFrame {
    pub index: usize,
    pub frame_class_names: Vec<String>,
    pub reel_class_names: Vec<String>,
    pub strip_text: String,
    /// CSS transform for the reel, e.g. `translate3d(0, -40%, 0)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
}

/// Transparent copy of the current value laid over the reels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Overlay {
    pub label: String,
    pub class_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Everything needed to draw the odometer for one current position.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    /// Accessible label for the wrapper; `None` when nothing can be shown.
    pub label: Option<String>,
    pub digits: Vec<DigitFrame>,
    pub overlay: Option<Overlay>,
}

impl RenderFrame {
    /// Frame for a computed plan. Pass `None` after a failed computation to get an empty frame.
    pub fn build(plan: Option<&DigitPlan>, config: &Config, position: CurrentPosition) -> Self {
        let Some(plan) = plan else {
            return RenderFrame::default();
        };

        let showing_lesser = plan.is_lesser_at(position.is_first());
        let label = format_number(plan.value_at(position.is_first()));

        let mut frame_class_names = vec![FRAME_CLASS.to_string()];
        if config.flow_reverse {
            frame_class_names.push(FRAME_REVERSE_CLASS.to_string());
        }

        let digits = plan
            .digit_configs
            .iter()
            .map(|cfg| DigitFrame {
                index: cfg.index,
                frame_class_names: frame_class_names.clone(),
                reel_class_names: reel_class_names(cfg),
                strip_text: cfg.strip_text.clone(),
                transform: transform(cfg, showing_lesser, config.flow_reverse),
            })
            .collect();

        let mut overlay_classes = vec![OVERLAY_CLASS.to_string()];
        if config.faded_border {
            overlay_classes.push(OVERLAY_FADED_CLASS.to_string());
        }
        let color = (config.faded_border && !config.fade_color.is_empty())
            .then(|| config.fade_color.clone());

        RenderFrame {
            label: Some(label.clone()),
            digits,
            overlay: Some(Overlay {
                label,
                class_names: overlay_classes,
                color,
            }),
        }
    }
}

fn reel_class_names(cfg: &DigitConfig) -> Vec<String> {
    std::iter::once(REEL_CLASS.to_string())
        .chain(cfg.tags().iter().map(ReelTag::class_name))
        .collect()
}

/// Reels are shifted by their offset while the greater value is showing.
/// Otherwise reversed strips rest on their last unit and normal strips at the top.
fn transform(cfg: &DigitConfig, showing_lesser: bool, flow_reverse: bool) -> Option<String> {
    match &cfg.vertical_offset_percent {
        Some(offset) if !showing_lesser => Some(format!("translate3d(0, {offset}, 0)")),
        _ if flow_reverse && cfg.strip_repeat_count > 0 => {
            let rest = 100.0 - 10.0 / f64::from(cfg.strip_repeat_count);
            Some(format!("translate3d(0, {}, 0)", format_percent(-rest)))
        }
        _ => None,
    }
}
