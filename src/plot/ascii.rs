//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - cumulative curve: `-` segments with `o` at the class points
//! - percentile markers (p5/p16/p50/p84/p95): `+`

use crate::domain::{AnalysisResult, CLASS_COUNT, PHI_ANCHOR};

const PHI_MAX: f64 = 5.0;

/// Render the cumulative "% finer" curve over the phi scale.
///
/// The curve includes the synthetic (-4, 100%) anchor so the coarse tail is
/// visible even when all the weight sits in the first class.
pub fn render_passing_curve(result: &AnalysisResult, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let mut grid = vec![vec![' '; width]; height];

    // Piecewise-linear curve sampled once per column.
    let points = curve_points(result);
    for col in 0..width {
        let phi = PHI_ANCHOR + (col as f64 / (width - 1) as f64) * (PHI_MAX - PHI_ANCHOR);
        if let Some(passing) = passing_at(&points, phi) {
            let row = map_y(passing, height);
            grid[row][col] = '-';
        }
    }

    // Class points overlay the curve.
    for (phi, passing) in &points {
        let col = map_x(*phi, width);
        let row = map_y(*passing, height);
        grid[row][col] = 'o';
    }

    // Percentile markers: cumulative passing at percentile p is 100 - p.
    for (p, phi) in [
        (5.0, result.p5),
        (16.0, result.p16),
        (50.0, result.p50),
        (84.0, result.p84),
        (95.0, result.p95),
    ] {
        if !phi.is_finite() {
            continue;
        }
        let col = map_x(phi, width);
        let row = map_y(100.0 - p, height);
        grid[row][col] = '+';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Cumulative curve: phi=[{PHI_ANCHOR}, {PHI_MAX}] | finer=[0, 100]%\n"
    ));
    for row in grid {
        let line: String = row.into_iter().collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out.push_str(&format!(
        "{:<w$}{PHI_MAX}\n",
        PHI_ANCHOR,
        w = width.saturating_sub(1)
    ));
    out
}

/// Render the weight-% histogram as horizontal bars, coarse class first.
pub fn render_histogram(result: &AnalysisResult, width: usize) -> String {
    let bar_width = width.max(20) - 14;
    let max_pct = result
        .weight_percent
        .iter()
        .cloned()
        .fold(f64::MIN, f64::max)
        .max(1e-9);

    let mut out = String::new();
    out.push_str("Weight % by phi class:\n");
    for i in 0..CLASS_COUNT {
        let pct = result.weight_percent[i];
        let len = ((pct / max_pct) * bar_width as f64).round() as usize;
        let label = if i == CLASS_COUNT - 1 {
            ">4".to_string()
        } else {
            format!("{}", result.phi_points[i])
        };
        out.push_str(&format!("{label:>4} | {:<bw$} {pct:>6.2}%\n", "#".repeat(len), bw = bar_width));
    }
    out
}

/// The charted curve: the -4/100% anchor followed by (phi, % finer) per class.
fn curve_points(result: &AnalysisResult) -> Vec<(f64, f64)> {
    let mut points = Vec::with_capacity(CLASS_COUNT + 1);
    points.push((PHI_ANCHOR, 100.0));
    for i in 0..CLASS_COUNT {
        points.push((result.phi_points[i], result.cumulative_passing_percent[i]));
    }
    points
}

/// Linear interpolation of the curve at `phi`; `None` outside the range.
fn passing_at(points: &[(f64, f64)], phi: f64) -> Option<f64> {
    for pair in points.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if x0 <= phi && phi <= x1 {
            if x1 <= x0 {
                return Some(y0);
            }
            return Some(y0 + (phi - x0) * (y1 - y0) / (x1 - x0));
        }
    }
    None
}

fn map_x(phi: f64, width: usize) -> usize {
    let u = (phi - PHI_ANCHOR) / (PHI_MAX - PHI_ANCHOR);
    ((u * (width - 1) as f64).round() as usize).min(width - 1)
}

fn map_y(passing: f64, height: usize) -> usize {
    let u = (passing / 100.0).clamp(0.0, 1.0);
    // Row 0 is the top of the grid (100%).
    ((1.0 - u) * (height - 1) as f64).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DEMO_WEIGHTS;
    use crate::engine::analyze;

    #[test]
    fn curve_is_deterministic_and_marks_classes() {
        let result = analyze(&DEMO_WEIGHTS).unwrap();
        let a = render_passing_curve(&result, 60, 18);
        let b = render_passing_curve(&result, 60, 18);
        assert_eq!(a, b);
        assert!(a.contains('o'));
        assert!(a.contains('+'));
        assert!(a.starts_with("Cumulative curve:"));
    }

    #[test]
    fn histogram_has_one_bar_per_class() {
        let result = analyze(&DEMO_WEIGHTS).unwrap();
        let text = render_histogram(&result, 60);
        assert_eq!(text.lines().count(), 1 + CLASS_COUNT);
        assert!(text.contains("  >4 |"));
        assert!(text.contains("  -3 |"));
    }

    #[test]
    fn passing_interpolation_brackets() {
        let points = vec![(-4.0, 100.0), (-3.0, 90.0), (-2.0, 50.0)];
        assert!((passing_at(&points, -3.5).unwrap() - 95.0).abs() < 1e-12);
        assert!((passing_at(&points, -2.0).unwrap() - 50.0).abs() < 1e-12);
        assert!(passing_at(&points, 0.0).is_none());
    }
}
