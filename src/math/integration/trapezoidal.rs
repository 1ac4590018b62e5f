/// Integrates `values`, sampled at equally spaced abscissas `stepsize`
/// apart, with the composite trapezoidal rule: each interval contributes
/// the average of its two endpoint samples times the interval width.
///
/// The halving is factored out of the loop (`h = stepsize / 2`), so each
/// interval costs one addition and one multiplication.
///
/// Fewer than two samples describe no interval at all; the integral over
/// that degenerate range is `0.0`.
pub fn trapezoidal(values: &[f64], stepsize: f64) -> f64 {
    let h = stepsize / 2.0;

    let mut integ = 0.0;
    for pair in values.windows(2) {
        integ += h * (pair[1] + pair[0]);
    }

    integ
}
