use thiserror::Error;

/// Precondition violations of the math routines.
///
/// Every variant corresponds to an input on which the underlying formula
/// would have to read an element that does not exist; the routines report
/// these instead of panicking.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MathError {
    #[error("coefficient sequence is empty, the constant term is required")]
    EmptyCoefficients,

    #[error("sample sequence is empty, at least one sample is required")]
    EmptySamples,
}
