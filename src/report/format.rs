//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the engine stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{AnalysisResult, CLASS_COUNT, SIEVE_CLASSES};

/// Format the full run summary (sample stats + headline statistics).
pub fn format_run_summary(weights: &[f64; CLASS_COUNT], result: &AnalysisResult) -> String {
    let total: f64 = weights.iter().sum();
    let mut out = String::new();

    out.push_str("=== gsat - Grain Size Analysis ===\n");
    out.push_str(&format!(
        "Sample: total={total:.1} g | classes={CLASS_COUNT} (8 mm .. pan)\n"
    ));
    out.push('\n');
    out.push_str(&format_statistics(result));
    out
}

/// Format the headline statistics panel.
///
/// Degenerate statistics arrive as "NaN"/"inf" strings and display as "—".
pub fn format_statistics(result: &AnalysisResult) -> String {
    let mut out = String::new();
    out.push_str("Statistics (Folk & Ward):\n");
    out.push_str(&format!("- Graphic mean (Mz) : {} phi\n", headline(&result.mz)));
    out.push_str(&format!(
        "- Median (D50)      : {} mm ({} phi)\n",
        headline(&result.d50_mm),
        fmt_phi(result.p50)
    ));
    out.push_str(&format!("- Sorting (Sd)      : {} phi\n", headline(&result.sd)));
    out.push_str(&format!("- Skewness (Sk)     : {}\n", headline(&result.sk)));
    out.push_str(&format!("- Kurtosis (Kg)     : {}\n", headline(&result.kg)));
    out.push_str(&format!("- Modal class       : {} phi\n", result.mode));
    out
}

/// Format the per-class distribution table.
pub fn format_distribution_table(weights: &[f64; CLASS_COUNT], result: &AnalysisResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<8} {:>5} {:>12} {:>10} {:>10}\n",
        "sieve", "phi", "retained(g)", "weight%", "finer%"
    ));
    out.push_str(&format!(
        "{:-<8} {:-<5} {:-<12} {:-<10} {:-<10}\n",
        "", "", "", "", ""
    ));

    for (i, class) in SIEVE_CLASSES.iter().enumerate() {
        out.push_str(&format!(
            "{:<8} {:>5} {:>12.2} {:>10.2} {:>10.2}\n",
            class.label(),
            class.phi,
            weights[i],
            result.weight_percent[i],
            result.cumulative_passing_percent[i],
        ));
    }

    out
}

/// Format the gravel/sand/fines composition split.
pub fn format_composition(result: &AnalysisResult) -> String {
    let comp = result.composition();
    let mut out = String::new();
    out.push_str("Composition:\n");
    for (label, pct) in [
        ("gravel", comp.gravel),
        ("sand", comp.sand),
        ("fines", comp.fines),
    ] {
        let bar_len = (pct / 2.0).round().max(0.0) as usize;
        out.push_str(&format!("- {label:<6} {pct:>6.2}% {}\n", "#".repeat(bar_len)));
    }
    out
}

/// Map a non-finite headline string to the display dash.
fn headline(value: &str) -> &str {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => value,
        _ => "\u{2014}",
    }
}

fn fmt_phi(v: f64) -> String {
    if v.is_finite() {
        format!("{v:.2}")
    } else {
        "\u{2014}".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DEMO_WEIGHTS;
    use crate::engine::analyze;

    #[test]
    fn summary_contains_headline_statistics() {
        let result = analyze(&DEMO_WEIGHTS).unwrap();
        let summary = format_run_summary(&DEMO_WEIGHTS, &result);
        assert!(summary.contains("total=412.8 g"));
        assert!(summary.contains("Graphic mean (Mz) : 0.65 phi"));
        assert!(summary.contains("Median (D50)      : 0.659 mm (0.60 phi)"));
        assert!(summary.contains("Modal class       : 1 phi"));
    }

    #[test]
    fn table_lists_every_class() {
        let result = analyze(&DEMO_WEIGHTS).unwrap();
        let table = format_distribution_table(&DEMO_WEIGHTS, &result);
        assert_eq!(table.lines().count(), 2 + CLASS_COUNT);
        assert!(table.contains("8 mm"));
        assert!(table.contains("Pan"));
    }

    #[test]
    fn composition_percentages() {
        let result = analyze(&DEMO_WEIGHTS).unwrap();
        let text = format_composition(&result);
        assert!(text.contains("gravel"));
        assert!(text.contains("sand"));
        assert!(text.contains("fines"));
        // Gravel = classes 0-2 = (5.0 + 10.5 + 25.2) / 412.8.
        assert!(text.contains("gravel   9.86%"));
    }

    #[test]
    fn degenerate_headline_displays_as_dash() {
        assert_eq!(headline("NaN"), "\u{2014}");
        assert_eq!(headline("inf"), "\u{2014}");
        assert_eq!(headline("1.23"), "1.23");
    }
}
