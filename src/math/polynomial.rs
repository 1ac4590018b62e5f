use crate::math::matherror::MathError;

/// Evaluates the polynomial `coeff[0] + coeff[1]·x + coeff[2]·x² + ...` at
/// `input`, where `coeff[i]` is the coefficient of `x^i`.
///
/// Powers of `input` are built by repeated multiplication of a running
/// power, never by `powi`, so the rounding error grows with the number of
/// coefficients rather than per-term.
///
/// Returns `MathError::EmptyCoefficients` when `coeff` has no constant term.
pub fn polynomial(coeff: &[f64], input: f64) -> Result<f64, MathError> {
    let (&constant, higher) = coeff
        .split_first()
        .ok_or(MathError::EmptyCoefficients)?;

    let mut out = constant;
    let mut x = input;
    for &beta in higher {
        out += beta * x;
        x *= input; // x^i
    }

    Ok(out)
}
