//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves the weight source (file, inline, demo, synthetic)
//! - runs the analysis pipeline
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{AnalyzeArgs, Command, PlotArgs};
use crate::domain::{ChartKind, SampleConfig};
use crate::error::AppError;

pub mod pipeline;

use pipeline::WeightSource;

/// Entry point for the `gsat` binary.
pub fn run() -> Result<(), AppError> {
    // We want `gsat` and `gsat --demo` to behave like `gsat tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Analyze(args) => handle_analyze(args, OutputMode::Full),
        Command::Stats(args) => handle_analyze(args, OutputMode::StatsOnly),
        Command::Plot(args) => handle_plot(args),
        Command::Tui(args) => crate::tui::run(args),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Full,
    StatsOnly,
}

fn handle_analyze(args: AnalyzeArgs, mode: OutputMode) -> Result<(), AppError> {
    let source = match resolve_source(&args, true)? {
        Some(source) => source,
        None => return Err(AppError::input("No weight source provided.")),
    };
    let run = pipeline::run_analysis(&source)?;

    match mode {
        OutputMode::Full => {
            println!("{}", crate::report::format_run_summary(&run.weights, &run.result));
            println!("{}", crate::report::format_distribution_table(&run.weights, &run.result));
            println!("{}", crate::report::format_composition(&run.result));
        }
        OutputMode::StatsOnly => {
            println!("{}", crate::report::format_statistics(&run.result));
        }
    }

    if mode == OutputMode::Full && args.plot && !args.no_plot {
        println!("{}", crate::plot::render_passing_curve(&run.result, args.width, args.height));
        println!("{}", crate::plot::render_histogram(&run.result, args.width));
    }

    // Optional exports.
    if let Some(path) = &args.export {
        crate::io::write_results_csv(path, &run.weights, &run.result)?;
    }
    if let Some(path) = &args.export_analysis {
        crate::io::write_analysis_json(path, &run.weights, &run.result)?;
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let analysis = crate::io::read_analysis_json(&args.analysis)?;

    let rendered = match args.chart {
        ChartKind::Curve => crate::plot::render_passing_curve(&analysis.result, args.width, args.height),
        ChartKind::Histogram => crate::plot::render_histogram(&analysis.result, args.width),
        ChartKind::Composition => crate::report::format_composition(&analysis.result),
    };

    println!("{rendered}");
    Ok(())
}

/// Resolve the weight source from flags; `analyze`/`stats` fall back to the
/// interactive picker, the TUI starts with an empty entry panel instead.
pub fn resolve_source(args: &AnalyzeArgs, pick_fallback: bool) -> Result<Option<WeightSource>, AppError> {
    if let Some(path) = &args.file {
        return Ok(Some(WeightSource::File(path.clone())));
    }
    if let Some(values) = &args.weights {
        return Ok(Some(WeightSource::Inline(crate::io::weights_from_list(values)?)));
    }
    if args.demo {
        return Ok(Some(WeightSource::Demo));
    }
    if args.random {
        return Ok(Some(WeightSource::Random(sample_config_from_args(args))));
    }

    if pick_fallback {
        let path = crate::cli::picker::prompt_for_weights_path()?;
        return Ok(Some(WeightSource::File(path)));
    }
    Ok(None)
}

pub fn sample_config_from_args(args: &AnalyzeArgs) -> SampleConfig {
    SampleConfig {
        seed: args.seed,
        mean_phi: args.mean_phi,
        sigma_phi: args.sigma_phi,
        grains: args.grains,
        mass: args.mass,
    }
}

/// Rewrite argv so `gsat` defaults to `gsat tui`.
///
/// Rules:
/// - `gsat`                     -> `gsat tui`
/// - `gsat --demo ...`          -> `gsat tui --demo ...`
/// - `gsat --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "analyze" | "stats" | "plot" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_tui() {
        assert_eq!(rewrite_args(argv(&["gsat"])), argv(&["gsat", "tui"]));
        assert_eq!(
            rewrite_args(argv(&["gsat", "--demo"])),
            argv(&["gsat", "tui", "--demo"])
        );
    }

    #[test]
    fn explicit_subcommands_pass_through() {
        assert_eq!(
            rewrite_args(argv(&["gsat", "analyze", "--demo"])),
            argv(&["gsat", "analyze", "--demo"])
        );
        assert_eq!(rewrite_args(argv(&["gsat", "--help"])), argv(&["gsat", "--help"]));
    }

    fn base_args() -> AnalyzeArgs {
        AnalyzeArgs {
            file: None,
            weights: None,
            demo: false,
            random: false,
            seed: 0,
            mean_phi: 1.5,
            sigma_phi: 1.2,
            grains: 100,
            mass: 100.0,
            plot: true,
            no_plot: false,
            width: 72,
            height: 20,
            export: None,
            export_analysis: None,
        }
    }

    #[test]
    fn inline_weights_resolve_without_prompting() {
        let mut args = base_args();
        args.weights = Some(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let source = resolve_source(&args, false).unwrap();
        assert!(matches!(source, Some(WeightSource::Inline(_))));
    }

    #[test]
    fn demo_flag_wins_over_random() {
        let mut args = base_args();
        args.demo = true;
        args.random = true;
        let source = resolve_source(&args, false).unwrap();
        assert!(matches!(source, Some(WeightSource::Demo)));
    }

    #[test]
    fn tui_without_source_starts_empty() {
        let source = resolve_source(&base_args(), false).unwrap();
        assert!(source.is_none());
    }
}
