//! Chart Renderer Module
//! Draws bar and pie charts to PNG with plotters, then hands the image to
//! the system viewer.

use plotters::coord::ranged1d::SegmentValue;
use plotters::element::Pie;
use plotters::prelude::*;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to render chart: {0}")]
    Draw(String),
    #[error("Failed to open chart viewer: {0}")]
    Viewer(#[from] std::io::Error),
}

fn draw_err(e: impl Display) -> RenderError {
    RenderError::Draw(e.to_string())
}

/// Color cycle for bars and pie slices.
const PALETTE: [RGBColor; 10] = [
    RGBColor(52, 152, 219),  // Blue
    RGBColor(231, 76, 60),   // Red
    RGBColor(46, 204, 113),  // Green
    RGBColor(155, 89, 182),  // Purple
    RGBColor(243, 156, 18),  // Orange
    RGBColor(26, 188, 156),  // Teal
    RGBColor(233, 30, 99),   // Pink
    RGBColor(0, 188, 212),   // Cyan
    RGBColor(255, 87, 34),   // Deep Orange
    RGBColor(96, 125, 139),  // Blue Grey
];

const CHART_SIZE: (u32, u32) = (900, 640);

/// Where chart images are written before being opened.
pub fn output_path(file_name: &str) -> PathBuf {
    std::env::temp_dir().join(file_name)
}

/// Open a rendered chart in the system's default image viewer.
pub fn show_chart(path: &Path) -> Result<(), RenderError> {
    open::that(path)?;
    Ok(())
}

fn sorted_by_value_desc(entries: &[(String, f64)]) -> Vec<(String, f64)> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}

fn pie_labels(entries: &[(String, f64)]) -> Vec<String> {
    let total: f64 = entries.iter().map(|(_, v)| v).sum();
    entries
        .iter()
        .map(|(label, value)| {
            let percent = if total > 0.0 { 100.0 * value / total } else { 0.0 };
            format!("{label} ({percent:.1}%)")
        })
        .collect()
}

/// Render a bar chart of the aggregate, tallest bar first.
pub fn render_bar_chart(
    entries: &[(String, f64)],
    category: &str,
    y_label: &str,
    out: &Path,
) -> Result<(), RenderError> {
    let entries = sorted_by_value_desc(entries);
    let labels: Vec<String> = entries.iter().map(|(label, _)| label.clone()).collect();
    let n = entries.len() as i32;

    let mut y_min = 0.0f64;
    let mut y_max = 0.0f64;
    for (_, v) in &entries {
        y_min = y_min.min(*v);
        y_max = y_max.max(*v);
    }
    if y_max == y_min {
        y_max = y_min + 1.0;
    }
    y_max *= 1.05;

    let root = BitMapBackend::new(out, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Bar Chart", ("sans-serif", 32))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d((0..n).into_segmented(), y_min..y_max)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|seg: &SegmentValue<i32>| match seg {
            SegmentValue::CenterOf(i) => {
                labels.get(*i as usize).cloned().unwrap_or_default()
            }
            _ => String::new(),
        })
        .x_desc(category)
        .y_desc(y_label)
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(entries.iter().enumerate().map(|(i, (_, value))| {
            let color = PALETTE[i % PALETTE.len()];
            Rectangle::new(
                [
                    (SegmentValue::Exact(i as i32), 0.0),
                    (SegmentValue::Exact(i as i32 + 1), *value),
                ],
                color.filled(),
            )
        }))
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    Ok(())
}

/// Render a pie chart of the aggregate, every slice labelled with its
/// share of the total to one decimal place.
pub fn render_pie_chart(entries: &[(String, f64)], out: &Path) -> Result<(), RenderError> {
    let sizes: Vec<f64> = entries.iter().map(|(_, value)| *value).collect();
    let colors: Vec<RGBColor> = (0..entries.len())
        .map(|i| PALETTE[i % PALETTE.len()])
        .collect();
    let labels = pie_labels(entries);

    let root = BitMapBackend::new(out, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;
    let root = root
        .titled("Pie Chart", ("sans-serif", 32))
        .map_err(draw_err)?;

    let center = (CHART_SIZE.0 as i32 / 2, CHART_SIZE.1 as i32 / 2);
    let radius = CHART_SIZE.1 as f64 * 0.32;

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style(("sans-serif", 18).into_font().color(&BLACK));
    pie.label_offset(12.0);
    root.draw(&pie).map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    Ok(())
}
