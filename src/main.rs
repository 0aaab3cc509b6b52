use anyhow::Result;
use benchviz::chart::render;
use benchviz::config::{FigureSize, PlotConfig, XTicks, YField};
use benchviz::results::read_samples;
use benchviz::units::TimeUnit;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "benchviz", version)]
#[command(about = "Visualize Google Benchmark results as a line chart")]
struct Cli {
    /// Path to the JSON file with benchmark results
    #[arg(short, long)]
    input: PathBuf,

    /// Path where the chart image will be written (format by extension)
    #[arg(short, long)]
    output: PathBuf,

    /// Chart title
    #[arg(long, default_value = "Benchmark Results")]
    title: String,

    /// Time unit for measured durations
    #[arg(long, value_enum, default_value_t = TimeUnit::Nanos)]
    time_unit: TimeUnit,

    /// Name of the counter that stores the x value
    #[arg(short, long)]
    x_field: String,

    /// Measured time field to plot on the y axis
    #[arg(short, long, value_enum, default_value_t = YField::RealTime)]
    y_field: YField,

    /// Label on the x axis (defaults to the x field name)
    #[arg(long)]
    x_label: Option<String>,

    /// Label on the y axis (defaults to "Time in {unit}")
    #[arg(long)]
    y_label: Option<String>,

    /// Begin of the x ticks
    #[arg(long, default_value_t = 0.0)]
    x_tick_begin: f64,

    /// End of the x ticks (defaults to the largest observed x value)
    #[arg(long)]
    x_tick_end: Option<f64>,

    /// Step of the x ticks (defaults to automatic placement)
    #[arg(long)]
    x_tick_step: Option<f64>,

    /// One description per benchmark group, in group-id order
    #[arg(short = 'd', long = "description", num_args = 1.., required = true)]
    descriptions: Vec<String>,

    /// Horizontal size of the plot in inches
    #[arg(long)]
    x_size: Option<f64>,

    /// Vertical size of the plot in inches
    #[arg(long)]
    y_size: Option<f64>,

    /// Resolution of the plot in dots per inch
    #[arg(long)]
    dpi: Option<u32>,
}

impl Cli {
    fn into_config(self) -> PlotConfig {
        PlotConfig {
            input: self.input,
            output: self.output,
            title: self.title,
            time_unit: self.time_unit,
            x_field: self.x_field,
            y_field: self.y_field,
            x_label: self.x_label,
            y_label: self.y_label,
            ticks: XTicks {
                begin: self.x_tick_begin,
                end: self.x_tick_end,
                step: self.x_tick_step,
            },
            descriptions: self.descriptions,
            figure: FigureSize {
                width: self.x_size,
                height: self.y_size,
                dpi: self.dpi,
            },
        }
    }
}

fn main() -> Result<()> {
    let config = Cli::parse().into_config();
    let samples = read_samples(&config)?;
    render(&samples, &config)?;
    Ok(())
}
