use crate::config::PlotConfig;
use crate::results::Sample;
use anyhow::{bail, Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::collections::BTreeMap;

// Font sizes, scaled for the default 640x480 output.
const TITLE_FONT_SIZE: u32 = 24;
const AXIS_LABEL_FONT_SIZE: u32 = 16;
const TICK_LABEL_FONT_SIZE: u32 = 12;
const LEGEND_FONT_SIZE: u32 = 13;

/// Series color palette, cycled by group id.
const COLORS: &[RGBColor] = &[
    RGBColor(66, 133, 244),  // blue
    RGBColor(219, 68, 55),   // red
    RGBColor(244, 180, 0),   // yellow
    RGBColor(15, 157, 88),   // green
    RGBColor(171, 71, 188),  // purple
    RGBColor(0, 172, 193),   // teal
];

fn group_color(group: usize) -> RGBColor {
    COLORS[group % COLORS.len()]
}

/// One plot series: distinct x values in first-seen order, plus every y value
/// in arrival order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Series {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

/// Group samples by group id. Within a group a repeated x value is recorded
/// only once; every y value is kept.
pub fn group_samples(samples: &[Sample]) -> BTreeMap<usize, Series> {
    let mut map: BTreeMap<usize, Series> = BTreeMap::new();
    for sample in samples {
        let series = map.entry(sample.group).or_default();
        if !series.xs.contains(&sample.x) {
            series.xs.push(sample.x);
        }
        series.ys.push(sample.y);
    }
    map
}

/// Upper x-tick bound: the configured end, or the maximum x value observed
/// across all groups when none is configured.
pub fn x_tick_end(configured: Option<f64>, series: &BTreeMap<usize, Series>) -> f64 {
    configured.unwrap_or_else(|| {
        series
            .values()
            .flat_map(|s| s.xs.iter().copied())
            .fold(f64::MIN, f64::max)
    })
}

/// Render one connected marker-line series per group and write the image to
/// the configured output path. The backend is chosen by file extension:
/// `.svg` gets the SVG backend, everything else the bitmap backend.
pub fn render(samples: &[Sample], config: &PlotConfig) -> Result<()> {
    if samples.is_empty() {
        bail!("results file contains no benchmark records to plot");
    }

    let series = group_samples(samples);

    for (&group, s) in &series {
        if group >= config.descriptions.len() {
            bail!(
                "group id {group} has no description ({} given)",
                config.descriptions.len()
            );
        }
        if s.xs.len() != s.ys.len() {
            bail!(
                "group {group} has {} distinct x values but {} measurements; \
                 cannot draw a connected series",
                s.xs.len(),
                s.ys.len()
            );
        }
    }

    let dims = config.figure.pixel_dims();
    let path = &config.output;
    match path.extension().and_then(|e| e.to_str()) {
        Some("svg") => {
            let root = SVGBackend::new(path, dims).into_drawing_area();
            draw(&root, &series, config)?;
        }
        _ => {
            let root = BitMapBackend::new(path, dims).into_drawing_area();
            draw(&root, &series, config)?;
        }
    }

    println!("Generated: {}", path.display());
    Ok(())
}

fn draw<DB>(
    root: &DrawingArea<DB, Shift>,
    series: &BTreeMap<usize, Series>,
    config: &PlotConfig,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let x_begin = config.ticks.begin;
    let x_end = x_tick_end(config.ticks.end, series);
    if x_end <= x_begin {
        bail!("empty x range: ticks begin at {x_begin} but end at {x_end}");
    }
    if let Some(step) = config.ticks.step {
        if step <= 0.0 {
            bail!("x tick step must be positive, got {step}");
        }
    }

    let y_max = series
        .values()
        .flat_map(|s| s.ys.iter().copied())
        .fold(0.0_f64, f64::max);
    let y_end = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };

    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, ("sans-serif", TITLE_FONT_SIZE))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_begin..x_end, 0.0..y_end)?;

    // With a configured step, labels snap to begin + k*step and everything
    // between is blanked; otherwise plotters picks the positions.
    let step_labels = config.ticks.step.map(|step| {
        let begin = config.ticks.begin;
        move |x: &f64| -> String {
            let nearest = begin + ((x - begin) / step).round() * step;
            if (x - nearest).abs() < step * 0.05 {
                format!("{nearest:.0}")
            } else {
                String::new()
            }
        }
    });

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(config.x_axis_label())
        .y_desc(config.y_axis_label())
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE));
    if let Some(step) = config.ticks.step {
        mesh.x_labels(((x_end - x_begin) / step).floor() as usize + 1);
    }
    if let Some(formatter) = &step_labels {
        mesh.x_label_formatter(formatter);
    }
    mesh.draw()?;

    for (&group, s) in series {
        let color = group_color(group);
        let points: Vec<(f64, f64)> = s.xs.iter().copied().zip(s.ys.iter().copied()).collect();

        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))?
            .label(config.descriptions[group].as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });

        chart.draw_series(PointSeries::of_element(
            points,
            4,
            color.filled(),
            &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
        ))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", LEGEND_FONT_SIZE))
        .draw()?;

    root.present().context("Failed to write chart image")?;
    Ok(())
}
