//! Chart adapter - SVG output for the comparison chart.

mod svg_renderer;

pub use svg_renderer::{SvgBarChartRenderer, MIN_CHART_HEIGHT, MIN_CHART_WIDTH, SVG_CONTENT_TYPE};
