//! Comparison chart configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::chart::{MIN_CHART_HEIGHT, MIN_CHART_WIDTH};

/// Upper bound for either side of the SVG canvas
pub const MAX_CHART_SIDE: u32 = 4096;

/// SVG canvas size for the comparison chart
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ChartConfig {
    /// Canvas width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Canvas height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
}

impl ChartConfig {
    /// Validate chart dimensions
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.width < MIN_CHART_WIDTH || self.height < MIN_CHART_HEIGHT {
            return Err(ValidationError::ChartTooSmall {
                width: self.width,
                height: self.height,
                min_width: MIN_CHART_WIDTH,
                min_height: MIN_CHART_HEIGHT,
            });
        }
        if self.width > MAX_CHART_SIDE || self.height > MAX_CHART_SIDE {
            return Err(ValidationError::ChartTooLarge(MAX_CHART_SIDE));
        }
        Ok(())
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_width() -> u32 {
    480
}

fn default_height() -> u32 {
    320
}
