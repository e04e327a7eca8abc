use thiserror::Error;

use super::types::SweepParameter;

pub type ModelResult<T> = Result<T, ModelError>;

/// Failures detected by the analytical core. All core functions are pure
/// and fail at the point of detection; a failed scenario never contaminates
/// another scenario's computation.
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    /// A -100% change zeroes the energy denominator of the intensity
    /// formula.
    #[error("{parameter} change of -100% drives the energy denominator to zero")]
    DenominatorVanishes { parameter: SweepParameter },

    /// A change below -100% makes the varied term negative.
    #[error("{parameter} change of {percent}% drives the varied term negative")]
    InvalidPercentChange {
        parameter: SweepParameter,
        percent: i32,
    },

    /// A non-positive or non-finite calibration target makes the sweep
    /// scale factor meaningless.
    #[error("calibration target {target} g CO2e/kWh is not a positive finite intensity")]
    CalibrationOutOfRange { target: f64 },

    /// Summary statistics were requested over zero samples.
    #[error("summary statistics require at least one sample")]
    EmptyInput,

    /// A sampler mean at or below the truncation floor cannot produce a
    /// physically meaningful distribution.
    #[error("{input} baseline {value} does not exceed the truncation floor {lower}")]
    BaselineBelowTruncation {
        input: &'static str,
        value: f64,
        lower: f64,
    },
}
