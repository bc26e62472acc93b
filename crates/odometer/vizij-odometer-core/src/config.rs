//! Odometer configuration.

use serde::{Deserialize, Serialize};

/// Host-facing options. Missing fields fall back to [`Config::default`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Lay strips out bottom-to-top so reels spin upwards.
    pub flow_reverse: bool,
    /// Fade the frame borders into the background.
    pub faded_border: bool,
    /// Background color digits fade into; empty means the host default (white).
    pub fade_color: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            flow_reverse: false,
            faded_border: true,
            fade_color: String::new(),
        }
    }
}
