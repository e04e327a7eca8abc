mod engine;
mod error;
mod scenarios;
mod types;

pub use engine::{
    BaselineInputs, PERCENT_CHANGES, Rng, comparison_ranking, compute_sensitivity,
    run_monte_carlo, sample_truncated_normal, summarize, sweep_scenario,
};
pub use error::{ModelError, ModelResult};
pub use scenarios::{
    BASELINE_CAPACITY_FACTOR, HOURS_PER_YEAR, MEASURED_ENERGY_OUTPUT_KWH, RECTENNA_EMISSIONS_KG,
    SYSTEM_CAPACITY_MW, SYSTEM_LIFETIME_YEARS, derived_energy_basis, reference_scenarios,
    sweep_baseline, terrestrial_benchmarks,
};
pub use types::{
    Benchmark, EnergyBasis, Material, McConfig, Scenario, SensitivitySweep, SummaryStats,
    SweepParameter, SweepPoint, Vehicle,
};
