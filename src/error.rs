use thiserror::Error;

/// Rejected motion configuration. Raised while building counters, gates and
/// interpolators, never while evaluating them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("interpolator needs at least two breakpoints, got {0}")]
    TooFewBreakpoints(usize),

    #[error("breakpoint offsets must be strictly increasing ({previous} followed by {next})")]
    NonIncreasingOffsets { previous: f32, next: f32 },

    #[error("breakpoint {0} is not a finite number")]
    NonFiniteBreakpoint(usize),

    #[error("input range has {inputs} entries but output range has {outputs}")]
    RangeMismatch { inputs: usize, outputs: usize },

    #[error("animation duration must be a positive number of seconds, got {0}")]
    InvalidDuration(f64),

    #[error("visibility amount must be in (0, 1], got {0}")]
    InvalidAmount(f32),
}

pub type Result<T> = std::result::Result<T, ConfigurationError>;
