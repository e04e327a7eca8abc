use std::fmt;

use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Vehicle {
    Starship,
    Falcon9,
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vehicle::Starship => write!(f, "Starship"),
            Vehicle::Falcon9 => write!(f, "Falcon 9"),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Material {
    Silicon,
    GalliumArsenide,
}

impl Material {
    pub fn short_label(self) -> &'static str {
        match self {
            Material::Silicon => "Si",
            Material::GalliumArsenide => "GaAs",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_label())
    }
}

/// Lifetime energy delivered to the grid, either taken directly from the
/// system model or derived from plant parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EnergyBasis {
    Measured {
        kwh: f64,
    },
    Derived {
        capacity_mw: f64,
        hours_per_year: f64,
        lifetime_years: f64,
        capacity_factor: f64,
    },
}

impl EnergyBasis {
    /// Total energy delivered over the system lifetime in kWh.
    pub fn output_kwh(self) -> f64 {
        match self {
            EnergyBasis::Measured { kwh } => kwh,
            EnergyBasis::Derived {
                capacity_mw,
                hours_per_year,
                lifetime_years,
                capacity_factor,
            } => capacity_mw * 1e3 * hours_per_year * lifetime_years * capacity_factor,
        }
    }
}

/// One (launch vehicle, photovoltaic material) configuration with its
/// life-cycle emission inventory. Immutable reference data.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub vehicle: Vehicle,
    pub material: Material,
    /// Launch campaign emissions in kg CO2e.
    pub launch_emissions_kg: f64,
    /// Satellite manufacturing emissions in kg CO2e.
    pub satellite_emissions_kg: f64,
    /// Ground rectenna emissions in kg CO2e.
    pub rectenna_emissions_kg: f64,
    pub energy: EnergyBasis,
    /// Monte Carlo mean intensity in g CO2e/kWh; deterministic sweeps are
    /// rescaled so their 0% point reproduces this value.
    pub calibration_mean: f64,
}

impl Scenario {
    pub fn label(&self) -> String {
        format!("{} ({})", self.vehicle, self.material)
    }

    pub fn total_emissions_kg(&self) -> f64 {
        self.launch_emissions_kg + self.satellite_emissions_kg + self.rectenna_emissions_kg
    }

    /// Stable index used to derive per-scenario sampler seeds.
    pub fn ordinal(&self) -> u32 {
        let vehicle = match self.vehicle {
            Vehicle::Starship => 0,
            Vehicle::Falcon9 => 1,
        };
        let material = match self.material {
            Material::Silicon => 0,
            Material::GalliumArsenide => 1,
        };
        vehicle * 2 + material
    }
}

/// The single physical input a sensitivity sweep varies.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SweepParameter {
    CapacityFactor,
    EnergyOutput,
    SystemDelivery,
    LaunchEmissions,
    SatelliteEmissions,
    RectennaEmissions,
}

impl SweepParameter {
    /// True when the parameter scales the energy denominator of the
    /// intensity formula rather than one of the emission addends.
    pub fn varies_denominator(self) -> bool {
        matches!(
            self,
            SweepParameter::CapacityFactor
                | SweepParameter::EnergyOutput
                | SweepParameter::SystemDelivery
        )
    }

    pub fn axis_label(self) -> &'static str {
        match self {
            SweepParameter::CapacityFactor => "Capacity Factor Change (%)",
            SweepParameter::EnergyOutput => "Energy Output Change (%)",
            SweepParameter::SystemDelivery => "System Delivery Change (%)",
            SweepParameter::LaunchEmissions => "Launch Emissions Change (%)",
            SweepParameter::SatelliteEmissions => "Satellite Emissions Change (%)",
            SweepParameter::RectennaEmissions => "Rectenna Emissions Change (%)",
        }
    }
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SweepParameter::CapacityFactor => "capacity factor",
            SweepParameter::EnergyOutput => "energy output",
            SweepParameter::SystemDelivery => "system delivery",
            SweepParameter::LaunchEmissions => "launch emissions",
            SweepParameter::SatelliteEmissions => "satellite emissions",
            SweepParameter::RectennaEmissions => "rectenna emissions",
        };
        f.write_str(name)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepPoint {
    pub percent: i32,
    pub intensity: f64,
}

/// Ordered (percent change, g CO2e/kWh) pairs for one scenario and one
/// varied parameter.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivitySweep {
    pub scenario: String,
    pub calibration_mean: f64,
    pub points: Vec<SweepPoint>,
}

/// Monte Carlo configuration shared by all four input samplers.
#[derive(Clone, Debug)]
pub struct McConfig {
    pub samples: u32,
    /// Standard deviation of each input as a fraction of its mean.
    pub std_frac: f64,
    pub seed: u64,
    /// Truncation floor excluding non-physical non-positive draws.
    pub lower_bound: f64,
}

impl Default for McConfig {
    fn default() -> Self {
        Self {
            samples: 10_000,
            std_frac: 0.25,
            seed: 42,
            lower_bound: 1.0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub mean: f64,
    pub median: f64,
    pub p5: f64,
    pub p95: f64,
    pub std: f64,
}

/// One bar in the cross-source comparison: a generation source with its
/// median intensity and error bar, both in g CO2e/kWh.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Benchmark {
    pub source: String,
    pub median: f64,
    pub error: f64,
}
