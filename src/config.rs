use crate::units::TimeUnit;
use clap::ValueEnum;
use std::fmt;
use std::path::PathBuf;

// Figure geometry used when not given on the command line, matching the
// defaults of common plotting tools (6.4 x 4.8 inches at 100 dpi = 640x480).
const DEFAULT_WIDTH_INCHES: f64 = 6.4;
const DEFAULT_HEIGHT_INCHES: f64 = 4.8;
const DEFAULT_DPI: u32 = 100;

/// Which measured time field of a benchmark record is plotted on the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum YField {
    #[value(name = "real_time")]
    RealTime,
    #[value(name = "cpu_time")]
    CpuTime,
}

impl YField {
    /// Field name in a benchmark record.
    pub fn key(&self) -> &'static str {
        match self {
            YField::RealTime => "real_time",
            YField::CpuTime => "cpu_time",
        }
    }
}

impl fmt::Display for YField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// X-axis tick placement.
///
/// `end` of `None` means "derive the bound from the data"; `step` of `None`
/// leaves label placement to the charting library.
#[derive(Debug, Clone, Copy)]
pub struct XTicks {
    pub begin: f64,
    pub end: Option<f64>,
    pub step: Option<f64>,
}

impl Default for XTicks {
    fn default() -> Self {
        Self {
            begin: 0.0,
            end: None,
            step: None,
        }
    }
}

/// Figure geometry in inches plus output resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct FigureSize {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub dpi: Option<u32>,
}

impl FigureSize {
    /// Resolve to pixel dimensions, falling back to the default geometry for
    /// any unspecified component.
    pub fn pixel_dims(&self) -> (u32, u32) {
        let dpi = self.dpi.unwrap_or(DEFAULT_DPI) as f64;
        let width = self.width.unwrap_or(DEFAULT_WIDTH_INCHES);
        let height = self.height.unwrap_or(DEFAULT_HEIGHT_INCHES);
        ((width * dpi).round() as u32, (height * dpi).round() as u32)
    }
}

/// Plot configuration, built once from the command line and read-only
/// afterward.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Path to the JSON results file
    pub input: PathBuf,
    /// Path the chart image is written to
    pub output: PathBuf,
    /// Chart title
    pub title: String,
    /// Target unit all measurements are converted to
    pub time_unit: TimeUnit,
    /// Name of the counter holding the x value
    pub x_field: String,
    /// Measured time field plotted on the y axis
    pub y_field: YField,
    /// Explicit x-axis label, if any
    pub x_label: Option<String>,
    /// Explicit y-axis label, if any
    pub y_label: Option<String>,
    pub ticks: XTicks,
    /// One legend entry per benchmark group, indexed by group id
    pub descriptions: Vec<String>,
    pub figure: FigureSize,
}

impl PlotConfig {
    /// X-axis label; defaults to the x-field name.
    pub fn x_axis_label(&self) -> &str {
        self.x_label.as_deref().unwrap_or(&self.x_field)
    }

    /// Y-axis label; defaults to "Time in {unit}".
    pub fn y_axis_label(&self) -> String {
        self.y_label
            .clone()
            .unwrap_or_else(|| format!("Time in {}", self.time_unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PlotConfig {
        PlotConfig {
            input: PathBuf::from("results.json"),
            output: PathBuf::from("chart.svg"),
            title: "Benchmark Results".to_string(),
            time_unit: TimeUnit::Micros,
            x_field: "Size".to_string(),
            y_field: YField::RealTime,
            x_label: None,
            y_label: None,
            ticks: XTicks::default(),
            descriptions: vec!["push".to_string(), "access".to_string()],
            figure: FigureSize::default(),
        }
    }

    #[test]
    fn test_label_defaults() {
        let config = config();
        assert_eq!(config.x_axis_label(), "Size");
        assert_eq!(config.y_axis_label(), "Time in us");
    }

    #[test]
    fn test_explicit_labels_win() {
        let mut config = config();
        config.x_label = Some("Vector size".to_string());
        config.y_label = Some("Duration".to_string());
        assert_eq!(config.x_axis_label(), "Vector size");
        assert_eq!(config.y_axis_label(), "Duration");
    }

    #[test]
    fn test_figure_size_defaults() {
        assert_eq!(FigureSize::default().pixel_dims(), (640, 480));
    }

    #[test]
    fn test_figure_size_partial_override() {
        let figure = FigureSize {
            width: Some(10.0),
            height: None,
            dpi: None,
        };
        assert_eq!(figure.pixel_dims(), (1000, 480));

        let figure = FigureSize {
            width: None,
            height: Some(5.0),
            dpi: Some(200),
        };
        assert_eq!(figure.pixel_dims(), (1280, 1000));
    }
}
