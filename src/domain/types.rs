//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during analysis
//! - exported to JSON/CSV
//! - reloaded later for plotting or comparisons

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Number of sieve classes in the fixed stack (8 mesh sieves + pan).
pub const CLASS_COUNT: usize = 9;

/// Synthetic phi boundary prepended to the interpolation table.
///
/// It pairs with cumulative retained = 0 and anchors percentiles that fall
/// inside the coarsest class.
pub const PHI_ANCHOR: f64 = -4.0;

/// One bin of the sieve stack.
///
/// `opening_mm` is `None` for the pan, which catches everything finer than
/// the last mesh.
#[derive(Debug, Clone, Copy)]
pub struct SieveClass {
    pub opening_mm: Option<f64>,
    pub phi: f64,
}

impl SieveClass {
    /// Human-readable label for tables and the TUI entry panel.
    pub fn label(&self) -> String {
        match self.opening_mm {
            Some(mm) => format!("{mm} mm"),
            None => "Pan".to_string(),
        }
    }
}

/// The fixed, ordered sieve catalog (coarse to fine).
///
/// Process-wide constant; the engine does not support other sieve sets.
pub const SIEVE_CLASSES: [SieveClass; CLASS_COUNT] = [
    SieveClass { opening_mm: Some(8.0), phi: -3.0 },
    SieveClass { opening_mm: Some(4.0), phi: -2.0 },
    SieveClass { opening_mm: Some(2.0), phi: -1.0 },
    SieveClass { opening_mm: Some(1.0), phi: 0.0 },
    SieveClass { opening_mm: Some(0.5), phi: 1.0 },
    SieveClass { opening_mm: Some(0.25), phi: 2.0 },
    SieveClass { opening_mm: Some(0.125), phi: 3.0 },
    SieveClass { opening_mm: Some(0.062), phi: 4.0 },
    SieveClass { opening_mm: None, phi: 5.0 },
];

/// Phi values of the nine classes, coarse to fine.
pub fn phi_points() -> [f64; CLASS_COUNT] {
    let mut out = [0.0; CLASS_COUNT];
    for (i, class) in SIEVE_CLASSES.iter().enumerate() {
        out[i] = class.phi;
    }
    out
}

/// Modal class label.
///
/// The pan class is reported as the open-ended ">4" rather than its numeric
/// phi, matching how sedimentologists read the histogram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ModalClass {
    Phi(f64),
    OpenFines,
}

impl fmt::Display for ModalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModalClass::Phi(phi) => write!(f, "{phi}"),
            ModalClass::OpenFines => write!(f, ">4"),
        }
    }
}

/// The engine's output contract.
///
/// The five headline statistics are pre-formatted fixed-decimal strings (two
/// decimals, three for `d50_mm`) because downstream display assumes strings,
/// not raw floats. Non-finite values keep their `{:.2}` rendering ("NaN",
/// "inf"); mapping those to a display dash is a presentation concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Graphic mean (phi).
    pub mz: String,
    /// Inclusive graphic standard deviation / sorting (phi).
    pub sd: String,
    /// Inclusive graphic skewness (dimensionless).
    pub sk: String,
    /// Graphic kurtosis (dimensionless).
    pub kg: String,
    /// Median grain diameter in millimeters, `2^(-p50)`.
    pub d50_mm: String,

    pub p50: f64,
    pub mode: ModalClass,

    pub weight_percent: [f64; CLASS_COUNT],
    pub cumulative_passing_percent: [f64; CLASS_COUNT],
    pub phi_points: [f64; CLASS_COUNT],

    pub p5: f64,
    pub p16: f64,
    pub p84: f64,
    pub p95: f64,
}

impl AnalysisResult {
    /// Three-way gravel/sand/fines split of the weight percents.
    ///
    /// Classes 0-2 (>= 2 mm) are gravel, 3-7 are sand, the pan is fines.
    pub fn composition(&self) -> Composition {
        Composition {
            gravel: self.weight_percent[..3].iter().sum(),
            sand: self.weight_percent[3..8].iter().sum(),
            fines: self.weight_percent[8],
        }
    }
}

/// Gravel/sand/fines proportions in percent of total weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    pub gravel: f64,
    pub sand: f64,
    pub fines: f64,
}

/// Which chart to render (TUI cycling and `gsat plot --chart`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Cumulative "% finer" curve with percentile markers.
    Curve,
    /// Weight-% histogram over the phi scale.
    Histogram,
    /// Gravel/sand/fines composition bars.
    Composition,
}

// Clap renders `default_value_t` through `Display`; keep it aligned with the
// ValueEnum value names.
impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartKind::Curve => "curve",
            ChartKind::Histogram => "histogram",
            ChartKind::Composition => "composition",
        };
        write!(f, "{name}")
    }
}

impl ChartKind {
    pub fn display_name(self) -> &'static str {
        match self {
            ChartKind::Curve => "cumulative curve",
            ChartKind::Histogram => "histogram",
            ChartKind::Composition => "composition",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ChartKind::Curve => ChartKind::Histogram,
            ChartKind::Histogram => ChartKind::Composition,
            ChartKind::Composition => ChartKind::Curve,
        }
    }
}

/// Dashboard tool tabs.
///
/// Only the sedimentary tool has real analysis behind it; the other two are
/// placeholder pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RockTool {
    Sedimentary,
    Igneous,
    Metamorphic,
}

impl RockTool {
    pub const ALL: [RockTool; 3] = [RockTool::Sedimentary, RockTool::Igneous, RockTool::Metamorphic];

    pub fn display_name(self) -> &'static str {
        match self {
            RockTool::Sedimentary => "Sedimentary",
            RockTool::Igneous => "Igneous",
            RockTool::Metamorphic => "Metamorphic",
        }
    }

    pub fn next(self) -> Self {
        match self {
            RockTool::Sedimentary => RockTool::Igneous,
            RockTool::Igneous => RockTool::Metamorphic,
            RockTool::Metamorphic => RockTool::Sedimentary,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            RockTool::Sedimentary => RockTool::Metamorphic,
            RockTool::Igneous => RockTool::Sedimentary,
            RockTool::Metamorphic => RockTool::Igneous,
        }
    }
}

/// Settings for the synthetic sample generator.
#[derive(Debug, Clone, Copy)]
pub struct SampleConfig {
    pub seed: u64,
    /// Mean grain size on the phi scale.
    pub mean_phi: f64,
    /// Spread on the phi scale (sorting of the synthetic sediment).
    pub sigma_phi: f64,
    /// Number of grains to draw.
    pub grains: usize,
    /// Total sample mass in grams.
    pub mass: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_nine_classes_with_ascending_phi() {
        assert_eq!(SIEVE_CLASSES.len(), CLASS_COUNT);
        for pair in SIEVE_CLASSES.windows(2) {
            assert!(pair[0].phi < pair[1].phi);
        }
        // Openings strictly decrease until the pan sentinel.
        for pair in SIEVE_CLASSES[..8].windows(2) {
            assert!(pair[0].opening_mm.unwrap() > pair[1].opening_mm.unwrap());
        }
        assert!(SIEVE_CLASSES[8].opening_mm.is_none());
        assert_eq!(SIEVE_CLASSES[8].label(), "Pan");
        assert_eq!(SIEVE_CLASSES[0].label(), "8 mm");
    }

    #[test]
    fn modal_class_labels() {
        assert_eq!(ModalClass::Phi(1.0).to_string(), "1");
        assert_eq!(ModalClass::Phi(-3.0).to_string(), "-3");
        assert_eq!(ModalClass::OpenFines.to_string(), ">4");
    }

    #[test]
    fn composition_sums_to_total() {
        let result = AnalysisResult {
            mz: String::new(),
            sd: String::new(),
            sk: String::new(),
            kg: String::new(),
            d50_mm: String::new(),
            p50: 0.0,
            mode: ModalClass::Phi(0.0),
            weight_percent: [10.0, 5.0, 5.0, 20.0, 20.0, 15.0, 10.0, 10.0, 5.0],
            cumulative_passing_percent: [0.0; CLASS_COUNT],
            phi_points: phi_points(),
            p5: 0.0,
            p16: 0.0,
            p84: 0.0,
            p95: 0.0,
        };

        let comp = result.composition();
        assert!((comp.gravel - 20.0).abs() < 1e-12);
        assert!((comp.sand - 75.0).abs() < 1e-12);
        assert!((comp.fines - 5.0).abs() < 1e-12);
        assert!((comp.gravel + comp.sand + comp.fines - 100.0).abs() < 1e-9);
    }

    #[test]
    fn tool_tabs_cycle() {
        let mut tool = RockTool::Sedimentary;
        for _ in 0..3 {
            tool = tool.next();
        }
        assert_eq!(tool, RockTool::Sedimentary);
        assert_eq!(RockTool::Sedimentary.prev(), RockTool::Metamorphic);
    }
}
