//! QoL tier classification used to colour outcome nodes.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

/// Lowest QoL rated "high".
pub const HIGH_QOL_THRESHOLD: u8 = 75;

/// Lowest QoL rated "medium".
pub const MEDIUM_QOL_THRESHOLD: u8 = 40;

/// Three-tier desirability band of a QoL rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QolTier {
    Low,    // < 40
    Medium, // 40..75
    High,   // >= 75
}

impl QolTier {
    /// Classifies a QoL rating. Boundaries are inclusive on the lower bound.
    pub fn classify(quality_of_life: Percentage) -> Self {
        match quality_of_life.value() {
            q if q >= HIGH_QOL_THRESHOLD => QolTier::High,
            q if q >= MEDIUM_QOL_THRESHOLD => QolTier::Medium,
            _ => QolTier::Low,
        }
    }

    /// Graphviz/X11 fill colour for the tier.
    pub fn fill_color(&self) -> &'static str {
        match self {
            QolTier::High => "palegreen",
            QolTier::Medium => "khaki",
            QolTier::Low => "lightcoral",
        }
    }
}
