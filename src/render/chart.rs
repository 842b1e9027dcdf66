use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::models::CitationSeries;
use crate::page::{DrawingContext, TargetProvider};

/// Default id of the citation chart canvas.
pub const CHART_TARGET: &str = "citationChart";

pub const SERIES_LABEL: &str = "Citations";
pub const TOOLTIP_SUFFIX: &str = " citations";

const BAR_FILL: &str = "rgba(52, 152, 219, 0.6)";
const BAR_STROKE: &str = "rgba(52, 152, 219, 1)";
const GRID_COLOR: &str = "rgba(0, 0, 0, 0.05)";

/// Anything that can turn a chart configuration into a chart on a canvas.
pub trait ChartingCapability {
    fn create_chart(&mut self, context: DrawingContext<'_>, config: &ChartConfig) -> Result<()>;
}

impl<C: ChartingCapability + ?Sized> ChartingCapability for &mut C {
    fn create_chart(&mut self, context: DrawingContext<'_>, config: &ChartConfig) -> Result<()> {
        (**self).create_chart(context, config)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
}

// Field names follow the Chart.js configuration schema.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<i32>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<u32>,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
    pub border_radius: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plugins {
    pub legend: Legend,
    pub tooltip: Tooltip,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub display: bool,
}

/// The label callback itself lives in the page script; it appends
/// `label_suffix` to the hovered value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub label_suffix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<Ticks>,
    pub grid: Grid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    pub step_size: u32,
    pub precision: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ChartConfig {
    /// Bar chart of `series`: one bar per year, zero-based integer y axis,
    /// no legend and no vertical grid lines.
    pub fn citation_bars(series: &CitationSeries) -> Self {
        Self {
            kind: ChartKind::Bar,
            data: ChartData {
                labels: series.years().to_vec(),
                datasets: vec![Dataset {
                    label: SERIES_LABEL.to_string(),
                    data: series.citations().to_vec(),
                    background_color: BAR_FILL.to_string(),
                    border_color: BAR_STROKE.to_string(),
                    border_width: 2,
                    border_radius: 5,
                }],
            },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: true,
                plugins: Plugins {
                    legend: Legend { display: false },
                    tooltip: Tooltip {
                        label_suffix: TOOLTIP_SUFFIX.to_string(),
                    },
                },
                scales: Scales {
                    x: Axis {
                        begin_at_zero: None,
                        ticks: None,
                        grid: Grid {
                            display: Some(false),
                            color: None,
                        },
                    },
                    y: Axis {
                        begin_at_zero: Some(true),
                        ticks: Some(Ticks {
                            step_size: 1,
                            precision: 0,
                        }),
                        grid: Grid {
                            display: None,
                            color: Some(GRID_COLOR.to_string()),
                        },
                    },
                },
            },
        }
    }
}

/// Draws the citation series as a bar chart on its canvas.
#[derive(Debug, Clone)]
pub struct CitationChartRenderer<'a> {
    series: &'a CitationSeries,
    target_id: String,
}

impl<'a> CitationChartRenderer<'a> {
    pub fn new(series: &'a CitationSeries) -> Self {
        Self {
            series,
            target_id: CHART_TARGET.to_string(),
        }
    }

    pub fn with_target(mut self, target_id: impl Into<String>) -> Self {
        self.target_id = target_id.into();
        self
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    pub fn chart_config(&self) -> ChartConfig {
        ChartConfig::citation_bars(self.series)
    }

    /// Hands the chart to `charting`. A missing canvas, or an element without
    /// a 2-D context, is left alone.
    pub fn render<T, C>(&self, targets: &mut T, charting: &mut C) -> Result<()>
    where
        T: TargetProvider + ?Sized,
        C: ChartingCapability + ?Sized,
    {
        let Some(canvas) = targets.lookup(&self.target_id) else {
            debug!(target_id = %self.target_id, "citation chart not on page");
            return Ok(());
        };
        let Some(context) = canvas.context_2d() else {
            debug!(target_id = %self.target_id, "chart target has no 2d context");
            return Ok(());
        };

        charting.create_chart(context, &self.chart_config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Element, ElementTree};

    #[derive(Default)]
    struct RecordingChart {
        charts: Vec<(String, ChartConfig)>,
    }

    impl ChartingCapability for RecordingChart {
        fn create_chart(&mut self, context: DrawingContext<'_>, config: &ChartConfig) -> Result<()> {
            self.charts.push((context.canvas_id().to_string(), config.clone()));
            Ok(())
        }
    }

    fn series() -> CitationSeries {
        CitationSeries::new(vec![2023, 2024, 2025], vec![2, 2, 13]).unwrap()
    }

    #[test]
    fn test_config_pairs_labels_with_values() {
        let series = series();
        let config = ChartConfig::citation_bars(&series);

        assert_eq!(config.kind, ChartKind::Bar);
        assert_eq!(config.data.labels, vec![2023, 2024, 2025]);
        assert_eq!(config.data.datasets.len(), 1);
        let dataset = &config.data.datasets[0];
        assert_eq!(dataset.label, "Citations");
        assert_eq!(dataset.data, vec![2, 2, 13]);
        assert_eq!(config.data.labels.len(), dataset.data.len());
        for (i, (year, count)) in series.iter().enumerate() {
            assert_eq!(config.data.labels[i], year);
            assert_eq!(dataset.data[i], count);
        }
    }

    #[test]
    fn test_config_options() {
        let config = ChartConfig::citation_bars(&series());
        let options = &config.options;

        assert!(options.responsive);
        assert!(options.maintain_aspect_ratio);
        assert!(!options.plugins.legend.display);
        assert_eq!(options.plugins.tooltip.label_suffix, " citations");
        assert_eq!(options.scales.y.begin_at_zero, Some(true));
        assert_eq!(
            options.scales.y.ticks,
            Some(Ticks { step_size: 1, precision: 0 })
        );
        assert_eq!(options.scales.x.grid.display, Some(false));
    }

    #[test]
    fn test_config_serializes_chartjs_schema() {
        let value = serde_json::to_value(ChartConfig::citation_bars(&series())).unwrap();

        assert_eq!(value["type"], "bar");
        assert_eq!(value["data"]["datasets"][0]["backgroundColor"], "rgba(52, 152, 219, 0.6)");
        assert_eq!(value["data"]["datasets"][0]["borderRadius"], 5);
        assert_eq!(value["options"]["maintainAspectRatio"], true);
        assert_eq!(value["options"]["scales"]["y"]["beginAtZero"], true);
        assert_eq!(value["options"]["scales"]["y"]["ticks"]["stepSize"], 1);
        assert_eq!(value["options"]["scales"]["y"]["grid"]["color"], "rgba(0, 0, 0, 0.05)");
        assert_eq!(value["options"]["scales"]["x"]["grid"]["display"], false);
        assert!(value["options"]["scales"]["x"].get("beginAtZero").is_none());
    }

    #[test]
    fn test_render_hands_config_to_capability() {
        let series = series();
        let mut tree = ElementTree::new();
        tree.insert(Element::canvas(CHART_TARGET));
        let mut charting = RecordingChart::default();

        CitationChartRenderer::new(&series)
            .render(&mut tree, &mut charting)
            .unwrap();

        assert_eq!(charting.charts.len(), 1);
        assert_eq!(charting.charts[0].0, CHART_TARGET);
        assert_eq!(charting.charts[0].1.data.datasets[0].data, vec![2, 2, 13]);
    }

    #[test]
    fn test_missing_canvas_is_noop() {
        let series = series();
        let mut tree = ElementTree::new();
        let mut charting = RecordingChart::default();

        CitationChartRenderer::new(&series)
            .render(&mut tree, &mut charting)
            .unwrap();

        assert!(charting.charts.is_empty());
    }

    #[test]
    fn test_non_canvas_target_is_noop() {
        let series = series();
        let mut tree = ElementTree::new();
        tree.insert(Element::container(CHART_TARGET));
        let mut charting = RecordingChart::default();

        CitationChartRenderer::new(&series)
            .render(&mut tree, &mut charting)
            .unwrap();

        assert!(charting.charts.is_empty());
    }
}
