//! Core configuration for bubble-tabbar-core.

use serde::{Deserialize, Serialize};

use crate::error::TabBarError;
use crate::layout::LayoutConstants;
use crate::spring::SpringProfile;
use crate::theme::BarStyle;

/// Tuning for layout, bar geometry and the two spring legs.
/// Every field has a default, so partial JSON documents are accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabBarConfig {
    pub layout: LayoutConstants,
    pub style: BarStyle,
    /// Profile used when a tab gains focus.
    pub expand: SpringProfile,
    /// Profile used when a tab loses focus.
    pub collapse: SpringProfile,
    /// Longest integration sub-step in seconds.
    pub max_step: f32,
}

impl Default for TabBarConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConstants::default(),
            style: BarStyle::default(),
            expand: SpringProfile::expand(),
            collapse: SpringProfile::collapse(),
            max_step: 0.004,
        }
    }
}

impl TabBarConfig {
    pub fn from_json_str(json: &str) -> Result<Self, TabBarError> {
        Ok(serde_json::from_str(json)?)
    }
}
