use std::f64::consts::PI;

use super::error::{ModelError, ModelResult};
use super::scenarios::terrestrial_benchmarks;
use super::types::{
    Benchmark, EnergyBasis, McConfig, Scenario, SensitivitySweep, SummaryStats, SweepParameter,
    SweepPoint,
};

/// The fixed percent-change grid shared by every sensitivity sweep.
pub const PERCENT_CHANGES: [i32; 11] = [-60, -50, -40, -30, -20, 0, 20, 30, 40, 50, 60];

/// Baseline physical inputs for one sensitivity sweep. A sweep varies
/// exactly one of these while the rest stay fixed.
#[derive(Clone, Debug)]
pub struct BaselineInputs {
    pub launch_emissions_kg: f64,
    pub satellite_emissions_kg: f64,
    pub rectenna_emissions_kg: f64,
    pub energy: EnergyBasis,
}

impl BaselineInputs {
    pub fn total_emissions_kg(&self) -> f64 {
        self.launch_emissions_kg + self.satellite_emissions_kg + self.rectenna_emissions_kg
    }
}

/// Recomputes emissions intensity across `percent_changes` with `parameter`
/// varied and everything else held at baseline.
///
/// The whole sweep is rescaled by `calibration_target / baseline_intensity`
/// so the 0% point reproduces the calibration target exactly; the target is
/// typically the scenario's Monte Carlo mean.
pub fn compute_sensitivity(
    baseline: &BaselineInputs,
    parameter: SweepParameter,
    calibration_target: f64,
    percent_changes: &[i32],
) -> ModelResult<Vec<SweepPoint>> {
    if !calibration_target.is_finite() || calibration_target <= 0.0 {
        return Err(ModelError::CalibrationOutOfRange {
            target: calibration_target,
        });
    }
    for &pct in percent_changes {
        if pct == -100 && parameter.varies_denominator() {
            return Err(ModelError::DenominatorVanishes { parameter });
        }
        // Below -100% the varied term goes negative, whichever side of the
        // ratio it sits on.
        if pct < -100 {
            return Err(ModelError::InvalidPercentChange {
                parameter,
                percent: pct,
            });
        }
    }

    let baseline_energy = baseline.energy.output_kwh();
    let baseline_intensity = baseline.total_emissions_kg() * 1000.0 / baseline_energy;
    let scale = calibration_target / baseline_intensity;

    let mut points = Vec::with_capacity(percent_changes.len());
    for &pct in percent_changes {
        let factor = 1.0 + pct as f64 / 100.0;
        let intensity = if parameter.varies_denominator() {
            baseline.total_emissions_kg() * scale * 1000.0 / (baseline_energy * factor)
        } else {
            varied_emissions_kg(baseline, parameter, factor) * scale * 1000.0 / baseline_energy
        };
        points.push(SweepPoint {
            percent: pct,
            intensity,
        });
    }
    Ok(points)
}

fn varied_emissions_kg(baseline: &BaselineInputs, parameter: SweepParameter, factor: f64) -> f64 {
    let mut launch = baseline.launch_emissions_kg;
    let mut satellite = baseline.satellite_emissions_kg;
    let mut rectenna = baseline.rectenna_emissions_kg;
    match parameter {
        SweepParameter::LaunchEmissions => launch *= factor,
        SweepParameter::SatelliteEmissions => satellite *= factor,
        SweepParameter::RectennaEmissions => rectenna *= factor,
        _ => {}
    }
    launch + satellite + rectenna
}

/// Sweeps one scenario along one axis, calibrated to the scenario's Monte
/// Carlo mean.
pub fn sweep_scenario(
    scenario: &Scenario,
    baseline: &BaselineInputs,
    parameter: SweepParameter,
) -> ModelResult<SensitivitySweep> {
    let points = compute_sensitivity(
        baseline,
        parameter,
        scenario.calibration_mean,
        &PERCENT_CHANGES,
    )?;
    Ok(SensitivitySweep {
        scenario: scenario.label(),
        calibration_mean: scenario.calibration_mean,
        points,
    })
}

/// Draws `cfg.samples` independent values from a normal distribution with
/// the given mean and std = mean * `cfg.std_frac`, truncated below at
/// `cfg.lower_bound` by rejection.
///
/// Acceptance is at least one half whenever the mean exceeds the floor, so
/// the rejection loop terminates quickly for every physical input.
pub fn sample_truncated_normal(
    input: &'static str,
    mean: f64,
    cfg: &McConfig,
    rng: &mut Rng,
) -> ModelResult<Vec<f64>> {
    if mean <= cfg.lower_bound {
        return Err(ModelError::BaselineBelowTruncation {
            input,
            value: mean,
            lower: cfg.lower_bound,
        });
    }

    let std_dev = mean * cfg.std_frac;
    let mut samples = Vec::with_capacity(cfg.samples as usize);
    for _ in 0..cfg.samples {
        let value = loop {
            let draw = mean + std_dev * rng.standard_normal();
            if draw >= cfg.lower_bound {
                break draw;
            }
        };
        samples.push(value);
    }
    Ok(samples)
}

const INPUT_ENERGY: u32 = 0;
const INPUT_LAUNCH: u32 = 1;
const INPUT_SATELLITE: u32 = 2;
const INPUT_RECTENNA: u32 = 3;

/// Propagates independent truncated-normal uncertainty on the four physical
/// inputs through the intensity formula, returning one g CO2e/kWh sample
/// per draw.
///
/// Each (scenario, input) pair gets its own seeded sampler so streams stay
/// statistically independent and reproducible regardless of evaluation
/// order.
pub fn run_monte_carlo(scenario: &Scenario, cfg: &McConfig) -> ModelResult<Vec<f64>> {
    let ordinal = scenario.ordinal();
    let sample = |input: u32, name: &'static str, mean: f64| {
        let mut rng = Rng::new(derive_seed(cfg.seed, ordinal, input));
        sample_truncated_normal(name, mean, cfg, &mut rng)
    };

    let energy = sample(INPUT_ENERGY, "energy output", scenario.energy.output_kwh())?;
    let launch = sample(INPUT_LAUNCH, "launch emissions", scenario.launch_emissions_kg)?;
    let satellite = sample(
        INPUT_SATELLITE,
        "satellite emissions",
        scenario.satellite_emissions_kg,
    )?;
    let rectenna = sample(
        INPUT_RECTENNA,
        "rectenna emissions",
        scenario.rectenna_emissions_kg,
    )?;

    // Combine by index; sample i of each stream belongs to the same draw.
    let intensities = energy
        .iter()
        .zip(&launch)
        .zip(&satellite)
        .zip(&rectenna)
        .map(|(((e, l), s), r)| (l + s + r) / e * 1000.0)
        .collect();
    Ok(intensities)
}

/// Pure reduction of an intensity distribution to its summary statistics.
/// Std is the population standard deviation.
pub fn summarize(samples: &[f64]) -> ModelResult<SummaryStats> {
    if samples.is_empty() {
        return Err(ModelError::EmptyInput);
    }

    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    let mut sorted = samples.to_vec();
    Ok(SummaryStats {
        mean,
        median: percentile(&mut sorted, 50.0),
        p5: percentile(&mut sorted, 5.0),
        p95: percentile(&mut sorted, 95.0),
        std: variance.sqrt(),
    })
}

/// Ranks the SBSP configurations against the terrestrial benchmark table,
/// ascending by median intensity. SBSP error bars are the distribution
/// standard deviations.
pub fn comparison_ranking(sbsp_summaries: &[(String, SummaryStats)]) -> Vec<Benchmark> {
    let mut ranking: Vec<Benchmark> = sbsp_summaries
        .iter()
        .map(|(label, summary)| Benchmark {
            source: label.clone(),
            median: summary.median,
            error: summary.std,
        })
        .collect();
    ranking.extend(terrestrial_benchmarks());
    ranking.sort_by(|a, b| a.median.total_cmp(&b.median));
    ranking
}

fn derive_seed(base_seed: u64, scenario_ordinal: u32, input_ordinal: u32) -> u64 {
    let mixed = base_seed ^ ((scenario_ordinal as u64) << 32) ^ input_ordinal as u64;
    splitmix64(mixed)
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// xorshift64* generator with a cached Box-Muller normal. Deterministic for
/// a given seed, which is what makes fixed-seed runs bit-reproducible.
pub struct Rng {
    state: u64,
    cached_normal: Option<f64>,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 {
            0xA5A5_A5A5_A5A5_A5A5
        } else {
            seed
        };
        Self {
            state,
            cached_normal: None,
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    fn next_f64(&mut self) -> f64 {
        const DENOM: f64 = (1_u64 << 53) as f64;
        let v = self.next_u64() >> 11;
        ((v as f64) + 0.5) / DENOM
    }

    pub fn standard_normal(&mut self) -> f64 {
        if let Some(z) = self.cached_normal.take() {
            return z;
        }

        let u1 = self.next_f64().max(1e-12);
        let u2 = self.next_f64();
        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * PI * u2;

        let z0 = r * theta.cos();
        let z1 = r * theta.sin();
        self.cached_normal = Some(z1);
        z0
    }
}

fn percentile(values: &mut [f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    values.sort_by(|a, b| a.total_cmp(b));

    let n = values.len();
    if n == 1 {
        return values[0];
    }

    let rank = (p / 100.0) * (n as f64 - 1.0);
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    if lower == upper {
        values[lower]
    } else {
        let w = rank - lower as f64;
        values[lower] * (1.0 - w) + values[upper] * w
    }
}
