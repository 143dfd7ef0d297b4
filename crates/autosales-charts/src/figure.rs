//! Chart figures.
//!
//! A [`Figure`] serializes to the `{"data": [...], "layout": {...}}` shape
//! that plotly.js renders directly, so the browser only has to call
//! `Plotly.newPlot(element, figure.data, figure.layout)`.

use autosales_stats::{ChartKind, GroupedSeries};
use serde::{Deserialize, Serialize};

/// Horizontal position of every figure title (centred).
pub const TITLE_X: f64 = 0.5;

/// A single chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Traces drawn in the chart
    pub data: Vec<Trace>,
    /// Title and axes
    pub layout: Layout,
}

/// One trace of a figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    /// Line chart trace
    Scatter {
        /// Category or year labels
        x: Vec<String>,
        /// Values
        y: Vec<f64>,
        /// `lines` or `lines+markers`
        mode: String,
        /// Optional line styling
        #[serde(default, skip_serializing_if = "Option::is_none")]
        line: Option<LineStyle>,
    },
    /// Bar chart trace
    Bar {
        /// Category labels
        x: Vec<String>,
        /// Bar heights
        y: Vec<f64>,
    },
    /// Pie chart trace
    Pie {
        /// Slice labels
        labels: Vec<String>,
        /// Slice sizes
        values: Vec<f64>,
    },
}

/// Line styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Dash pattern (`solid`, `dot`, `dash`, ...)
    pub dash: String,
}

/// Figure layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Chart title
    pub title: Title,
    /// X axis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    /// Y axis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
}

/// Chart title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    /// Title text
    pub text: String,
    /// Horizontal position in paper coordinates
    pub x: f64,
}

/// Axis settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    /// Axis title
    pub title: AxisTitle,
}

/// Axis title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTitle {
    /// Title text
    pub text: String,
}

impl Axis {
    fn titled(text: &str) -> Self {
        Self {
            title: AxisTitle {
                text: text.to_string(),
            },
        }
    }
}

impl Figure {
    fn with_trace(trace: Trace, title: impl Into<String>) -> Self {
        Self {
            data: vec![trace],
            layout: Layout {
                title: Title {
                    text: title.into(),
                    x: TITLE_X,
                },
                xaxis: None,
                yaxis: None,
            },
        }
    }

    /// Line chart of a series.
    pub fn line(series: &GroupedSeries, title: impl Into<String>) -> Self {
        Self::with_trace(
            Trace::Scatter {
                x: series.labels.clone(),
                y: series.values.clone(),
                mode: "lines".to_string(),
                line: None,
            },
            title,
        )
    }

    /// Bar chart of a series.
    pub fn bar(series: &GroupedSeries, title: impl Into<String>) -> Self {
        Self::with_trace(
            Trace::Bar {
                x: series.labels.clone(),
                y: series.values.clone(),
            },
            title,
        )
    }

    /// Pie chart of a series.
    pub fn pie(series: &GroupedSeries, title: impl Into<String>) -> Self {
        Self::with_trace(
            Trace::Pie {
                labels: series.labels.clone(),
                values: series.values.clone(),
            },
            title,
        )
    }

    /// Chart of the given kind.
    pub fn of_kind(kind: ChartKind, series: &GroupedSeries, title: impl Into<String>) -> Self {
        match kind {
            ChartKind::Line => Self::line(series, title),
            ChartKind::Bar => Self::bar(series, title),
            ChartKind::Pie => Self::pie(series, title),
        }
    }

    /// Set axis titles. Pie charts have no axes and are left unchanged.
    pub fn with_axis_titles(mut self, x: &str, y: &str) -> Self {
        if self.is_pie() {
            return self;
        }
        self.layout.xaxis = Some(Axis::titled(x));
        self.layout.yaxis = Some(Axis::titled(y));
        self
    }

    /// Draw markers on line traces.
    pub fn with_markers(mut self) -> Self {
        for trace in &mut self.data {
            if let Trace::Scatter { mode, .. } = trace {
                *mode = "lines+markers".to_string();
            }
        }
        self
    }

    /// Draw line traces dotted.
    pub fn dotted(mut self) -> Self {
        for trace in &mut self.data {
            if let Trace::Scatter { line, .. } = trace {
                *line = Some(LineStyle {
                    dash: "dot".to_string(),
                });
            }
        }
        self
    }

    /// Title text.
    pub fn title(&self) -> &str {
        &self.layout.title.text
    }

    /// Whether every trace is a pie.
    pub fn is_pie(&self) -> bool {
        self.data.iter().all(|t| matches!(t, Trace::Pie { .. }))
    }
}
