//! Plotters-powered chart widget for Ratatui.
//!
//! Why Plotters instead of Ratatui's built-in `Chart` widget?
//! - nicer axis + mesh rendering
//! - less manual work for ticks/labels
//! - easy to extend later (legend, annotations, exportable PNG/SVG backends, etc.)
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters::style::Color as _;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::domain::{AnalysisResult, CLASS_COUNT, ChartKind, PHI_ANCHOR};

const PHI_MAX: f64 = 5.0;

// Composition palette kept close to conventional gravel/sand/fines colors.
const GRAVEL_COLOR: RGBColor = RGBColor(102, 153, 204);
const SAND_COLOR: RGBColor = RGBColor(189, 183, 107);
const FINES_COLOR: RGBColor = RGBColor(230, 159, 0);

/// A lightweight, render-only chart description.
///
/// The widget is intentionally data-driven: all series are computed outside
/// the render call. This keeps `render()` focused on drawing and makes it
/// easy to test the data prep separately.
pub struct GrainChart<'a> {
    pub kind: ChartKind,
    pub result: &'a AnalysisResult,
}

impl Widget for GrainChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a chart.
        // In that case, we render a small hint rather than panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        match self.kind {
            ChartKind::Curve => render_curve(self.result, area, buf),
            ChartKind::Histogram => render_histogram(self.result, area, buf),
            ChartKind::Composition => render_composition(self.result, area, buf),
        }
    }
}

/// Cumulative "% finer" curve with percentile markers.
fn render_curve(result: &AnalysisResult, area: Rect, buf: &mut Buffer) {
    let series = curve_series(result);
    let markers = percentile_markers(result);

    let widget = widget_fn(move |root| {
        let mut chart = ChartBuilder::on(&root)
            .margin(1)
            // Terminal cells are low-res, so keep label areas compact.
            .set_label_area_size(LabelAreaPosition::Left, 6)
            .set_label_area_size(LabelAreaPosition::Bottom, 3)
            .build_cartesian_2d(PHI_ANCHOR..PHI_MAX, 0.0..100.0)?;

        // We disable the mesh lines to reduce visual clutter in low-resolution
        // terminal rendering; the axes + labels are usually enough.
        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_desc("phi")
            .y_desc("% finer")
            .x_labels(5)
            .y_labels(5)
            .x_label_formatter(&|v| format!("{v:.0}"))
            .y_label_formatter(&|v| format!("{v:.0}"))
            .label_style(("sans-serif", 10).into_font().color(&WHITE))
            .axis_style(&WHITE)
            .bold_line_style(&WHITE)
            .draw()?;

        chart.draw_series(LineSeries::new(series.iter().copied(), &RGBColor(0, 255, 255)))?;
        chart.draw_series(series.iter().map(|&(x, y)| Pixel::new((x, y), WHITE)))?;

        // Percentile markers (p5..p95). A colored `Pixel` gives a clean "dot"
        // that reliably overrides the base curve in terminal resolution.
        chart.draw_series(markers.iter().map(|&(x, y)| Pixel::new((x, y), RGBColor(0, 255, 0))))?;

        Ok(())
    });

    widget.render(area, buf);
}

/// Weight-% bars over the phi scale.
fn render_histogram(result: &AnalysisResult, area: Rect, buf: &mut Buffer) {
    let bars: Vec<(f64, f64)> = result
        .phi_points
        .iter()
        .zip(result.weight_percent.iter())
        .map(|(&phi, &wp)| (phi, wp))
        .collect();
    let y_max = bars
        .iter()
        .map(|&(_, wp)| wp)
        .fold(f64::MIN, f64::max)
        .max(1.0)
        * 1.1;

    let widget = widget_fn(move |root| {
        let mut chart = ChartBuilder::on(&root)
            .margin(1)
            .set_label_area_size(LabelAreaPosition::Left, 6)
            .set_label_area_size(LabelAreaPosition::Bottom, 3)
            .build_cartesian_2d((PHI_ANCHOR + 0.5)..(PHI_MAX + 0.5), 0.0..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_desc("phi")
            .y_desc("weight %")
            .x_labels(5)
            .y_labels(5)
            .x_label_formatter(&|v| format!("{v:.0}"))
            .y_label_formatter(&|v| format!("{v:.0}"))
            .label_style(("sans-serif", 10).into_font().color(&WHITE))
            .axis_style(&WHITE)
            .bold_line_style(&WHITE)
            .draw()?;

        chart.draw_series(bars.iter().map(|&(phi, wp)| {
            Rectangle::new([(phi - 0.35, 0.0), (phi + 0.35, wp)], RGBColor(54, 162, 235).filled())
        }))?;

        Ok(())
    });

    widget.render(area, buf);
}

/// Gravel/sand/fines stacked as three side-by-side bars.
fn render_composition(result: &AnalysisResult, area: Rect, buf: &mut Buffer) {
    let comp = result.composition();
    let bars = [
        (0.0, comp.gravel, GRAVEL_COLOR),
        (1.0, comp.sand, SAND_COLOR),
        (2.0, comp.fines, FINES_COLOR),
    ];

    let widget = widget_fn(move |root| {
        let mut chart = ChartBuilder::on(&root)
            .margin(1)
            .set_label_area_size(LabelAreaPosition::Left, 6)
            .set_label_area_size(LabelAreaPosition::Bottom, 3)
            .build_cartesian_2d(-0.5..2.5, 0.0..100.0)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .y_desc("weight %")
            .x_labels(3)
            .y_labels(5)
            .x_label_formatter(&|v| composition_label(*v))
            .label_style(("sans-serif", 10).into_font().color(&WHITE))
            .axis_style(&WHITE)
            .draw()?;

        chart.draw_series(bars.iter().map(|&(x, pct, color)| {
            Rectangle::new([(x - 0.3, 0.0), (x + 0.3, pct)], color.filled())
        }))?;

        Ok(())
    });

    widget.render(area, buf);
}

fn composition_label(v: f64) -> String {
    match v.round() as i64 {
        0 => "gravel".to_string(),
        1 => "sand".to_string(),
        2 => "fines".to_string(),
        _ => String::new(),
    }
}

/// Curve series: the (-4, 100%) anchor followed by (phi, % finer) per class.
pub fn curve_series(result: &AnalysisResult) -> Vec<(f64, f64)> {
    let mut series = Vec::with_capacity(CLASS_COUNT + 1);
    series.push((PHI_ANCHOR, 100.0));
    for i in 0..CLASS_COUNT {
        series.push((result.phi_points[i], result.cumulative_passing_percent[i]));
    }
    series
}

/// Marker positions for the five Folk percentiles; missing percentiles are
/// skipped rather than drawn at NaN.
pub fn percentile_markers(result: &AnalysisResult) -> Vec<(f64, f64)> {
    [
        (result.p5, 95.0),
        (result.p16, 84.0),
        (result.p50, 50.0),
        (result.p84, 16.0),
        (result.p95, 5.0),
    ]
    .into_iter()
    .filter(|(phi, _)| phi.is_finite())
    .collect()
}
