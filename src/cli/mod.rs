//! Command-line parsing for the grain-size dashboard.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the engine/statistics code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::ChartKind;

pub mod picker;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "gsat", version, about = "Grain Size Analysis Tool (sieve statistics)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a sample: summary, distribution table, composition, plots, exports.
    Analyze(AnalyzeArgs),
    /// Print the headline statistics only (useful for scripting).
    Stats(AnalyzeArgs),
    /// Plot a previously exported analysis JSON.
    Plot(PlotArgs),
    /// Launch the interactive dashboard.
    ///
    /// This uses the same underlying analysis pipeline as `gsat analyze`, but
    /// renders results in a terminal UI using Ratatui.
    Tui(AnalyzeArgs),
}

/// Common options for analyzing and the TUI.
#[derive(Debug, Parser, Clone)]
pub struct AnalyzeArgs {
    /// Weights file: nine values, coarse to fine with the pan last,
    /// separated by newlines/commas/tabs.
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Inline weights, e.g. `--weights 5,10.5,25.2,75,150.8,80.4,45.1,15.6,5.2`.
    #[arg(long, value_delimiter = ',')]
    pub weights: Option<Vec<f64>>,

    /// Load the bundled demo sample (the documented worked example).
    #[arg(long)]
    pub demo: bool,

    /// Generate a synthetic sample instead of reading one.
    #[arg(long)]
    pub random: bool,

    /// Random seed for synthetic sample generation.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Mean grain size (phi) for synthetic samples.
    #[arg(long, default_value_t = 1.5)]
    pub mean_phi: f64,

    /// Phi spread (sorting) for synthetic samples.
    #[arg(long, default_value_t = 1.2)]
    pub sigma_phi: f64,

    /// Number of grains to draw for synthetic samples.
    #[arg(long, default_value_t = 4000)]
    pub grains: usize,

    /// Total mass (grams) for synthetic samples.
    #[arg(long, default_value_t = 400.0)]
    pub mass: f64,

    /// Render ASCII plots in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plots.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Export the per-class distribution table to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the full analysis (weights + result) to JSON.
    #[arg(long = "export-analysis")]
    pub export_analysis: Option<PathBuf>,
}

/// Options for plotting a saved analysis.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Analysis JSON file produced by `gsat analyze --export-analysis`.
    #[arg(long, value_name = "JSON")]
    pub analysis: PathBuf,

    /// Which chart to render.
    #[arg(long, value_enum, default_value_t = ChartKind::Curve)]
    pub chart: ChartKind,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}
