use std::fmt::Write as _;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::core::{
    Benchmark, McConfig, ModelResult, SummaryStats, SweepParameter, SweepPoint,
    comparison_ranking, reference_scenarios, run_monte_carlo, summarize, sweep_baseline,
    sweep_scenario,
};

#[derive(Parser, Debug)]
#[command(
    name = "sbsp-lca",
    about = "Life-cycle emissions analysis for space-based solar power (sensitivity sweeps + Monte Carlo)"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Deterministic sensitivity sweep of one physical input across the
    /// fixed percent grid
    Sweep {
        #[arg(long, value_enum)]
        parameter: CliSweepParameter,
        /// Emit the chart payload as JSON instead of a console table
        #[arg(long)]
        json: bool,
    },
    /// Monte Carlo uncertainty propagation for all four configurations
    MonteCarlo {
        #[arg(long, default_value_t = 10_000)]
        samples: u32,
        #[arg(
            long,
            default_value_t = 0.25,
            help = "Input standard deviation as a fraction of its mean"
        )]
        std_frac: f64,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Include raw sample vectors in the JSON payload
        #[arg(long)]
        with_samples: bool,
        #[arg(long)]
        json: bool,
    },
    /// Rank SBSP median intensities against terrestrial generation sources
    Compare {
        #[arg(long, default_value_t = 10_000)]
        samples: u32,
        #[arg(long, default_value_t = 0.25)]
        std_frac: f64,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliSweepParameter {
    CapacityFactor,
    EnergyOutput,
    SystemDelivery,
    Launch,
    Satellite,
    Rectenna,
}

impl From<CliSweepParameter> for SweepParameter {
    fn from(value: CliSweepParameter) -> Self {
        match value {
            CliSweepParameter::CapacityFactor => SweepParameter::CapacityFactor,
            CliSweepParameter::EnergyOutput => SweepParameter::EnergyOutput,
            CliSweepParameter::SystemDelivery => SweepParameter::SystemDelivery,
            CliSweepParameter::Launch => SweepParameter::LaunchEmissions,
            CliSweepParameter::Satellite => SweepParameter::SatelliteEmissions,
            CliSweepParameter::Rectenna => SweepParameter::RectennaEmissions,
        }
    }
}

/// Sweep payload handed to the rendering collaborator: one series per
/// scenario, grouped renderer-side into one panel per material.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SweepChart {
    parameter: String,
    axis_label: String,
    series: Vec<SweepSeries>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SweepSeries {
    scenario: String,
    vehicle: String,
    material: String,
    calibration_mean: f64,
    points: Vec<SweepPoint>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DistributionChart {
    scenarios: Vec<DistributionSeries>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DistributionSeries {
    scenario: String,
    summary: SummaryStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    samples: Option<Vec<f64>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ComparisonChart {
    ranking: Vec<Benchmark>,
}

pub fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Command::Sweep { parameter, json } => {
            let chart = build_sweep_chart((*parameter).into())?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                print!("{}", render_sweep_console(&chart));
            }
        }
        Command::MonteCarlo {
            samples,
            std_frac,
            seed,
            with_samples,
            json,
        } => {
            let cfg = mc_config(*samples, *std_frac, *seed);
            let chart = build_distribution_chart(&cfg, *with_samples)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                print!("{}", render_distribution_console(&chart));
            }
        }
        Command::Compare {
            samples,
            std_frac,
            seed,
            json,
        } => {
            let cfg = mc_config(*samples, *std_frac, *seed);
            let chart = build_comparison_chart(&cfg)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                print!("{}", render_comparison_console(&chart));
            }
        }
    }
    Ok(())
}

fn mc_config(samples: u32, std_frac: f64, seed: u64) -> McConfig {
    McConfig {
        samples,
        std_frac,
        seed,
        ..McConfig::default()
    }
}

fn build_sweep_chart(parameter: SweepParameter) -> ModelResult<SweepChart> {
    let mut series = Vec::new();
    for scenario in reference_scenarios() {
        let baseline = sweep_baseline(&scenario, parameter);
        let sweep = sweep_scenario(&scenario, &baseline, parameter)?;
        series.push(SweepSeries {
            scenario: sweep.scenario,
            vehicle: scenario.vehicle.to_string(),
            material: scenario.material.to_string(),
            calibration_mean: sweep.calibration_mean,
            points: sweep.points,
        });
    }
    Ok(SweepChart {
        parameter: parameter.to_string(),
        axis_label: parameter.axis_label().to_string(),
        series,
    })
}

fn build_distribution_chart(
    cfg: &McConfig,
    with_samples: bool,
) -> ModelResult<DistributionChart> {
    let mut scenarios = Vec::new();
    for scenario in reference_scenarios() {
        let samples = run_monte_carlo(&scenario, cfg)?;
        let summary = summarize(&samples)?;
        scenarios.push(DistributionSeries {
            scenario: scenario.label(),
            summary,
            samples: with_samples.then_some(samples),
        });
    }
    Ok(DistributionChart { scenarios })
}

fn build_comparison_chart(cfg: &McConfig) -> ModelResult<ComparisonChart> {
    let mut summaries = Vec::new();
    for scenario in reference_scenarios() {
        let samples = run_monte_carlo(&scenario, cfg)?;
        summaries.push((scenario.label(), summarize(&samples)?));
    }
    Ok(ComparisonChart {
        ranking: comparison_ranking(&summaries),
    })
}

fn render_sweep_console(chart: &SweepChart) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Emissions sensitivity to {}", chart.parameter);
    for series in &chart.series {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} (mean = {:.2})",
            series.scenario, series.calibration_mean
        );
        for point in &series.points {
            let _ = writeln!(
                out,
                "  {:>4}%  {:>8.2} g CO2e/kWh",
                point.percent, point.intensity
            );
        }
    }
    out
}

fn render_distribution_console(chart: &DistributionChart) -> String {
    let mut out = String::new();
    for series in &chart.scenarios {
        let _ = writeln!(
            out,
            "{} Monte Carlo: Emissions per kWh (g CO2e)",
            series.scenario
        );
        let _ = writeln!(out, "  Mean: {:.2}", series.summary.mean);
        let _ = writeln!(out, "  Median: {:.2}", series.summary.median);
        let _ = writeln!(out, "  5th percentile: {:.2}", series.summary.p5);
        let _ = writeln!(out, "  95th percentile: {:.2}", series.summary.p95);
        let _ = writeln!(out, "  Std: {:.2}", series.summary.std);
        let _ = writeln!(out);
    }
    out
}

fn render_comparison_console(chart: &ComparisonChart) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Emissions comparison (sorted by median, g CO2e/kWh)");
    for bar in &chart.ranking {
        let _ = writeln!(
            out,
            "  {:<18} {:>8.2} +/- {:.2}",
            bar.source, bar.median, bar.error
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn small_cfg() -> McConfig {
        McConfig {
            samples: 1_000,
            ..McConfig::default()
        }
    }

    #[test]
    fn cli_definition_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_parameters_map_onto_core_sweep_parameters() {
        assert_eq!(
            SweepParameter::from(CliSweepParameter::CapacityFactor),
            SweepParameter::CapacityFactor
        );
        assert_eq!(
            SweepParameter::from(CliSweepParameter::Launch),
            SweepParameter::LaunchEmissions
        );
        assert_eq!(
            SweepParameter::from(CliSweepParameter::Rectenna),
            SweepParameter::RectennaEmissions
        );
    }

    #[test]
    fn sweep_subcommand_parses_kebab_case_parameters() {
        let cli = Cli::try_parse_from(["sbsp-lca", "sweep", "--parameter", "capacity-factor"])
            .unwrap();
        match cli.command {
            Command::Sweep { parameter, json } => {
                assert_eq!(parameter, CliSweepParameter::CapacityFactor);
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn sweep_chart_covers_all_scenarios_and_hits_the_calibration_mean() {
        let chart = build_sweep_chart(SweepParameter::LaunchEmissions).unwrap();
        assert_eq!(chart.axis_label, "Launch Emissions Change (%)");
        assert_eq!(chart.series.len(), 4);
        for series in &chart.series {
            let zero = series
                .points
                .iter()
                .find(|p| p.percent == 0)
                .unwrap()
                .intensity;
            assert!((zero - series.calibration_mean).abs() < 1e-9 * series.calibration_mean);
        }
    }

    #[test]
    fn sweep_payload_serializes_camel_case_for_the_renderer() {
        let chart = build_sweep_chart(SweepParameter::SatelliteEmissions).unwrap();
        let value = serde_json::to_value(&chart).unwrap();
        assert!(value.get("axisLabel").is_some());
        let series = value["series"].as_array().unwrap();
        assert!(series[0].get("calibrationMean").is_some());
        assert!(series[0]["points"][0].get("percent").is_some());
        assert!(series[0]["points"][0].get("intensity").is_some());
    }

    #[test]
    fn distribution_chart_omits_samples_unless_requested() {
        let without = build_distribution_chart(&small_cfg(), false).unwrap();
        assert!(without.scenarios.iter().all(|s| s.samples.is_none()));
        let value = serde_json::to_value(&without).unwrap();
        assert!(value["scenarios"][0].get("samples").is_none());

        let with = build_distribution_chart(&small_cfg(), true).unwrap();
        assert!(
            with.scenarios
                .iter()
                .all(|s| s.samples.as_ref().map(Vec::len) == Some(1_000))
        );
    }

    #[test]
    fn distribution_console_prints_one_block_per_scenario() {
        let chart = build_distribution_chart(&small_cfg(), false).unwrap();
        let text = render_distribution_console(&chart);
        assert_eq!(text.matches("Monte Carlo: Emissions per kWh").count(), 4);
        assert!(text.contains("Starship (Si)"));
        assert!(text.contains("Falcon 9 (GaAs)"));
        assert_eq!(text.matches("Median:").count(), 4);
    }

    #[test]
    fn comparison_console_lists_all_ten_sources_in_order() {
        let chart = build_comparison_chart(&small_cfg()).unwrap();
        assert_eq!(chart.ranking.len(), 10);
        let text = render_comparison_console(&chart);
        assert!(text.contains("Coal"));
        assert!(text.contains("Starship (Si)"));
        let coal_pos = text.find("Coal").unwrap();
        let wind_pos = text.find("Wind").unwrap();
        assert!(wind_pos < coal_pos);
    }
}
