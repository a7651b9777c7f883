//! SVG bar chart renderer for the expected value comparison.

use crate::domain::chart::ComparisonChart;
use crate::domain::strategy::StrategyKind;
use crate::ports::{ChartRenderer, RenderError};

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

pub const MIN_CHART_WIDTH: u32 = 200;
pub const MIN_CHART_HEIGHT: u32 = 150;

const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 40.0;
const MARGIN_LEFT: f64 = 50.0;
const MARGIN_RIGHT: f64 = 20.0;

/// Share of each slot occupied by its bar.
const BAR_FILL_RATIO: f64 = 0.6;

/// Axis maximum never drops below the top of the QoL scale.
const MIN_SCALE: f64 = 100.0;

/// Vertical bar chart rendered as standalone SVG.
#[derive(Debug, Clone)]
pub struct SvgBarChartRenderer {
    width: u32,
    height: u32,
}

impl SvgBarChartRenderer {
    /// Creates a renderer for the given canvas size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    fn bar_color(strategy: StrategyKind) -> &'static str {
        match strategy {
            StrategyKind::Surgery => "#4c78a8",
            StrategyKind::Wait => "#f58518",
        }
    }
}

impl Default for SvgBarChartRenderer {
    fn default() -> Self {
        Self::new(480, 320)
    }
}

impl ChartRenderer for SvgBarChartRenderer {
    fn content_type(&self) -> &'static str {
        SVG_CONTENT_TYPE
    }

    fn render(&self, chart: &ComparisonChart) -> Result<String, RenderError> {
        if self.width < MIN_CHART_WIDTH || self.height < MIN_CHART_HEIGHT {
            return Err(RenderError::InvalidDimensions {
                width: self.width,
                height: self.height,
                min_width: MIN_CHART_WIDTH,
                min_height: MIN_CHART_HEIGHT,
            });
        }
        if chart.bars.is_empty() {
            return Err(RenderError::EmptyChart);
        }

        let width = f64::from(self.width);
        let height = f64::from(self.height);
        let plot_width = width - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_height = height - MARGIN_TOP - MARGIN_BOTTOM;
        let baseline = MARGIN_TOP + plot_height;
        let scale = chart.max_value().value().max(MIN_SCALE);
        let slot = plot_width / chart.bars.len() as f64;
        let bar_width = slot * BAR_FILL_RATIO;

        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = self.width,
            h = self.height
        ));
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"24\" font-family=\"Helvetica\" font-size=\"14\" text-anchor=\"middle\">{}</text>",
            width / 2.0,
            xml_escape(&chart.title)
        ));
        svg.push_str(&format!(
            "<line x1=\"{MARGIN_LEFT:.1}\" y1=\"{baseline:.1}\" x2=\"{:.1}\" y2=\"{baseline:.1}\" stroke=\"#333\"/>",
            width - MARGIN_RIGHT
        ));
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" font-family=\"Helvetica\" font-size=\"10\" text-anchor=\"end\">{:.0}</text>",
            MARGIN_LEFT - 6.0,
            MARGIN_TOP + 4.0,
            scale
        ));

        for (idx, bar) in chart.bars.iter().enumerate() {
            let value = bar.value.value();
            let bar_height = value / scale * plot_height;
            let x = MARGIN_LEFT + slot * idx as f64 + (slot - bar_width) / 2.0;
            let y = baseline - bar_height;
            let center = x + bar_width / 2.0;

            svg.push_str(&format!(
                "<rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{bar_width:.1}\" height=\"{bar_height:.1}\" fill=\"{}\"/>",
                Self::bar_color(bar.strategy)
            ));
            svg.push_str(&format!(
                "<text x=\"{center:.1}\" y=\"{:.1}\" font-family=\"Helvetica\" font-size=\"12\" text-anchor=\"middle\">{}</text>",
                y - 6.0,
                bar.value
            ));
            svg.push_str(&format!(
                "<text x=\"{center:.1}\" y=\"{:.1}\" font-family=\"Helvetica\" font-size=\"12\" text-anchor=\"middle\">{}</text>",
                baseline + 18.0,
                xml_escape(&bar.label)
            ));
        }

        svg.push_str("</svg>");
        Ok(svg)
    }
}

fn xml_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
