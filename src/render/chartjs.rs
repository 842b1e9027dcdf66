use tracing::debug;

use crate::error::Result;
use crate::page::DrawingContext;
use crate::render::chart::{ChartConfig, ChartingCapability};

/// Canvas attribute carrying the serialized chart configuration.
pub const CHART_ATTRIBUTE: &str = "data-chart";

/// Chart.js in the browser draws the chart: the configuration is attached to
/// the canvas as JSON and the page script builds `new Chart(ctx, config)`
/// from it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartJs;

impl ChartingCapability for ChartJs {
    fn create_chart(&mut self, mut context: DrawingContext<'_>, config: &ChartConfig) -> Result<()> {
        let json = serde_json::to_string(config)?;
        debug!(canvas = context.canvas_id(), bytes = json.len(), "chart attached");
        context.attach(CHART_ATTRIBUTE, json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CitationSeries;
    use crate::page::Element;

    #[test]
    fn test_config_attached_to_canvas() {
        let series = CitationSeries::new(vec![2023, 2024], vec![1, 4]).unwrap();
        let config = ChartConfig::citation_bars(&series);
        let mut canvas = Element::canvas("citationChart");

        let context = canvas.context_2d().unwrap();
        ChartJs.create_chart(context, &config).unwrap();

        let raw = canvas.attribute(CHART_ATTRIBUTE).unwrap();
        let parsed: ChartConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed, config);
    }
}
