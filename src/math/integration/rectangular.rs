use crate::math::matherror::MathError;

// ─────────────────────────────────────────────
// RectangularIntegral
// ─────────────────────────────────────────────

/// The two complementary estimates produced by a rectangular-rule pass:
/// one taking the first point of each interval as reference, one taking
/// the second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangularIntegral {
    first_point: f64,
    second_point: f64,
}

impl RectangularIntegral {
    /// Estimate using the left endpoint of every interval; every sample
    /// except the last contributes.
    pub fn first_point(&self) -> f64 {
        self.first_point
    }

    /// Estimate using the right endpoint of every interval; every sample
    /// except the first contributes.
    pub fn second_point(&self) -> f64 {
        self.second_point
    }
}

// ─────────────────────────────────────────────
// Rectangular rule
// ─────────────────────────────────────────────

/// Integrates `values`, sampled at equally spaced abscissas `stepsize`
/// apart, with the rectangular rule. Both endpoint variants are
/// accumulated in a single pass over the interior samples.
///
/// A single sample is a degenerate range: both estimates collapse to
/// `stepsize * values[0]`. An empty sequence is rejected with
/// `MathError::EmptySamples`.
pub fn rectangular(values: &[f64], stepsize: f64) -> Result<RectangularIntegral, MathError> {
    if values.is_empty() {
        return Err(MathError::EmptySamples);
    }

    let n = values.len();
    let mut first_point = stepsize * values[0];
    let mut second_point = 0.0;

    // interior samples contribute to both estimates
    for i in 1..n - 1 {
        first_point += stepsize * values[i];
        second_point += stepsize * values[i];
    }
    second_point += stepsize * values[n - 1];

    Ok(RectangularIntegral { first_point, second_point })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ramp_samples_unit_step() {
        let integ = rectangular(&[1.0, 2.0, 3.0, 4.0], 1.0).unwrap();
        assert_eq!(integ.first_point(), 6.0);
        assert_eq!(integ.second_point(), 9.0);
    }

    #[test]
    fn constant_samples_agree_on_both_endpoints() {
        let values = [2.5; 7];
        let stepsize = 0.25;
        let integ = rectangular(&values, stepsize).unwrap();
        let exact = stepsize * 6.0 * 2.5;
        assert_eq!(integ.first_point(), integ.second_point());
        assert_relative_eq!(integ.first_point(), exact, max_relative = 1e-15);
    }

    #[test]
    fn estimates_differ_by_endpoint_gap() {
        let values = [0.3, -1.2, 4.0, 4.0, 0.9];
        let stepsize = 0.5;
        let integ = rectangular(&values, stepsize).unwrap();
        let gap = stepsize * (values[values.len() - 1] - values[0]);
        assert_relative_eq!(
            integ.second_point() - integ.first_point(),
            gap,
            max_relative = 1e-12
        );
    }

    #[test]
    fn single_sample_collapses_both_estimates() {
        let integ = rectangular(&[3.0], 0.5).unwrap();
        assert_eq!(integ.first_point(), 1.5);
        assert_eq!(integ.second_point(), 1.5);
    }

    #[test]
    fn two_samples_use_one_endpoint_each() {
        let integ = rectangular(&[1.0, 5.0], 2.0).unwrap();
        assert_eq!(integ.first_point(), 2.0);
        assert_eq!(integ.second_point(), 10.0);
    }

    #[test]
    fn empty_samples_are_rejected() {
        assert_eq!(rectangular(&[], 1.0), Err(MathError::EmptySamples));
    }
}
