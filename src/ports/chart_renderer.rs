//! Chart Renderer Port - draws the expected value comparison.

use crate::domain::chart::ComparisonChart;

use super::RenderError;

/// Port for rendering the comparison bar chart.
///
/// # Contract
///
/// Implementations must:
/// - Draw one bar per chart entry, in order, labelled with the bar label
/// - Scale bars so that equal values have equal length
/// - Be deterministic
pub trait ChartRenderer: Send + Sync {
    /// MIME type of the rendered output.
    fn content_type(&self) -> &'static str;

    /// Render the chart.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the chart is empty or cannot fit the
    /// configured canvas.
    fn render(&self, chart: &ComparisonChart) -> Result<String, RenderError>;
}
