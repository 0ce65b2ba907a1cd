use serde::{Deserialize, Serialize};

use super::anim::lerp;
use crate::error::{ConfigurationError, Result};

/// One `(scroll offset, output value)` pair of an interpolation table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub offset: f32,
    pub value: f32,
}

impl Breakpoint {
    pub const fn new(offset: f32, value: f32) -> Self {
        Self { offset, value }
    }
}

/// Piecewise-linear map from a scroll offset to a style value, clamped to the
/// first and last breakpoint outside the table.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollInterpolator {
    breakpoints: Vec<Breakpoint>,
}

impl ScrollInterpolator {
    pub fn new(breakpoints: Vec<Breakpoint>) -> Result<Self> {
        if breakpoints.len() < 2 {
            return Err(ConfigurationError::TooFewBreakpoints(breakpoints.len()));
        }
        for (index, point) in breakpoints.iter().enumerate() {
            if !point.offset.is_finite() || !point.value.is_finite() {
                return Err(ConfigurationError::NonFiniteBreakpoint(index));
            }
        }
        for pair in breakpoints.windows(2) {
            if pair[1].offset <= pair[0].offset {
                return Err(ConfigurationError::NonIncreasingOffsets {
                    previous: pair[0].offset,
                    next: pair[1].offset,
                });
            }
        }
        Ok(Self { breakpoints })
    }

    /// Builds a table from parallel input and output ranges, the shape the page
    /// markup uses (`[250, 550] -> [1, 0]`).
    pub fn from_ranges(inputs: &[f32], outputs: &[f32]) -> Result<Self> {
        if inputs.len() != outputs.len() {
            return Err(ConfigurationError::RangeMismatch {
                inputs: inputs.len(),
                outputs: outputs.len(),
            });
        }
        Self::new(
            inputs
                .iter()
                .zip(outputs)
                .map(|(&offset, &value)| Breakpoint::new(offset, value))
                .collect(),
        )
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    pub fn value_at(&self, offset: f32) -> f32 {
        let first = self.breakpoints[0];
        let last = self.breakpoints[self.breakpoints.len() - 1];

        if offset.is_nan() || offset <= first.offset {
            return first.value;
        }
        if offset >= last.offset {
            return last.value;
        }

        // first.offset < offset < last.offset, so 1 <= upper < len
        let upper = self.breakpoints.partition_point(|point| point.offset <= offset);
        let a = self.breakpoints[upper - 1];
        let b = self.breakpoints[upper];
        let t = (offset - a.offset) / (b.offset - a.offset);
        lerp(a.value, b.value, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(points: &[(f32, f32)]) -> Result<ScrollInterpolator> {
        ScrollInterpolator::new(
            points
                .iter()
                .map(|&(offset, value)| Breakpoint::new(offset, value))
                .collect(),
        )
    }

    #[test]
    fn test_two_point_table() {
        let interp = table(&[(0.0, 0.0), (100.0, 1.0)]).unwrap();
        assert_eq!(interp.value_at(-50.0), 0.0);
        assert_eq!(interp.value_at(0.0), 0.0);
        assert_eq!(interp.value_at(50.0), 0.5);
        assert_eq!(interp.value_at(100.0), 1.0);
        assert_eq!(interp.value_at(200.0), 1.0);
    }

    #[test]
    fn test_opacity_fade_table() {
        let interp = table(&[(0.0, 1.0), (300.0, 1.0), (550.0, 0.0)]).unwrap();
        assert_eq!(interp.value_at(150.0), 1.0);
        assert_eq!(interp.value_at(300.0), 1.0);
        assert_eq!(interp.value_at(425.0), 0.5);
        assert_eq!(interp.value_at(550.0), 0.0);
    }

    #[test]
    fn test_continuous_at_breakpoints() {
        let interp = table(&[(0.0, 0.0), (10.0, 5.0), (20.0, -5.0)]).unwrap();
        let below = interp.value_at(10.0 - 1e-3);
        let above = interp.value_at(10.0 + 1e-3);
        assert!((below - 5.0).abs() < 1e-2);
        assert!((above - 5.0).abs() < 1e-2);
    }

    #[test]
    fn test_rejects_single_point() {
        assert_eq!(
            table(&[(5.0, 0.0)]).unwrap_err(),
            ConfigurationError::TooFewBreakpoints(1)
        );
    }

    #[test]
    fn test_rejects_non_increasing_offsets() {
        assert_eq!(
            table(&[(10.0, 0.0), (5.0, 1.0)]).unwrap_err(),
            ConfigurationError::NonIncreasingOffsets {
                previous: 10.0,
                next: 5.0
            }
        );
        assert!(table(&[(0.0, 0.0), (0.0, 1.0)]).is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        assert_eq!(
            table(&[(0.0, 0.0), (f32::INFINITY, 1.0)]).unwrap_err(),
            ConfigurationError::NonFiniteBreakpoint(1)
        );
    }

    #[test]
    fn test_from_ranges() {
        let scale = ScrollInterpolator::from_ranges(&[250.0, 550.0], &[1.0, 0.95]).unwrap();
        assert_eq!(scale.value_at(0.0), 1.0);
        assert_eq!(scale.value_at(1000.0), 0.95);

        assert_eq!(
            ScrollInterpolator::from_ranges(&[0.0, 1.0], &[1.0]).unwrap_err(),
            ConfigurationError::RangeMismatch {
                inputs: 2,
                outputs: 1
            }
        );
    }
}
