//! RenderComparisonChartHandler - Query handler producing the bar chart.

use std::sync::Arc;

use tracing::debug;

use crate::domain::analysis::DecisionEvaluator;
use crate::domain::strategy::DecisionInputs;
use crate::ports::{ChartRenderer, RenderError};

use super::RenderedArtifact;

/// Query to render the comparison chart for one input snapshot.
#[derive(Debug, Clone)]
pub struct RenderComparisonChartQuery {
    pub inputs: DecisionInputs,
}

/// Handler for rendering the comparison chart.
pub struct RenderComparisonChartHandler {
    renderer: Arc<dyn ChartRenderer>,
}

impl RenderComparisonChartHandler {
    pub fn new(renderer: Arc<dyn ChartRenderer>) -> Self {
        Self { renderer }
    }

    pub fn handle(
        &self,
        query: RenderComparisonChartQuery,
    ) -> Result<RenderedArtifact, RenderError> {
        let report = DecisionEvaluator::evaluate(&query.inputs);
        let body = self.renderer.render(&report.chart)?;

        debug!(bars = report.chart.bars.len(), "Rendered comparison chart");

        Ok(RenderedArtifact {
            content_type: self.renderer.content_type(),
            body,
        })
    }
}
