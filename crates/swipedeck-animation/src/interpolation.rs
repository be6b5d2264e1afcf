//! Piecewise-linear mapping from one range to another.

use std::fmt;

use smallvec::SmallVec;

#[derive(Debug, Clone, PartialEq)]
pub enum InterpolationError {
    LengthMismatch { input: usize, output: usize },
    TooFewStops(usize),
    NotIncreasing { index: usize },
}

impl fmt::Display for InterpolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpolationError::LengthMismatch { input, output } => {
                write!(f, "input range has {input} stops but output range has {output}")
            }
            InterpolationError::TooFewStops(count) => {
                write!(f, "interpolation needs at least two stops, got {count}")
            }
            InterpolationError::NotIncreasing { index } => {
                write!(f, "input range must be strictly increasing (stop {index})")
            }
        }
    }
}

impl std::error::Error for InterpolationError {}

/// Maps an input value through `(input, output)` stops.
///
/// Values outside the input range clamp to the nearest end stop.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolation {
    stops: SmallVec<[(f32, f32); 4]>,
}

impl Interpolation {
    pub fn new(input_range: &[f32], output_range: &[f32]) -> Result<Self, InterpolationError> {
        if input_range.len() != output_range.len() {
            return Err(InterpolationError::LengthMismatch {
                input: input_range.len(),
                output: output_range.len(),
            });
        }
        if input_range.len() < 2 {
            return Err(InterpolationError::TooFewStops(input_range.len()));
        }
        if let Some(index) = input_range
            .windows(2)
            .position(|pair| !(pair[0] < pair[1]))
        {
            return Err(InterpolationError::NotIncreasing { index: index + 1 });
        }
        Ok(Self {
            stops: input_range
                .iter()
                .copied()
                .zip(output_range.iter().copied())
                .collect(),
        })
    }

    /// Three-stop mapping symmetric around zero: `[-extent, 0, extent]` to
    /// `[-output, 0, output]`.
    pub fn symmetric(extent: f32, output: f32) -> Result<Self, InterpolationError> {
        Self::new(&[-extent, 0.0, extent], &[-output, 0.0, output])
    }

    pub fn value_at(&self, input: f32) -> f32 {
        let (first_in, first_out) = self.stops[0];
        let (last_in, last_out) = self.stops[self.stops.len() - 1];
        if input <= first_in {
            return first_out;
        }
        if input >= last_in {
            return last_out;
        }
        for pair in self.stops.windows(2) {
            let ((in0, out0), (in1, out1)) = (pair[0], pair[1]);
            if input <= in1 {
                let fraction = (input - in0) / (in1 - in0);
                return out0 + (out1 - out0) * fraction;
            }
        }
        // NaN falls through every comparison.
        input
    }
}

#[cfg(test)]
#[path = "tests/interpolation_tests.rs"]
mod tests;
