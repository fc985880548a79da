use crate::error::CalcError;

/// Signature shared by every arithmetic operation.
///
/// Only `divide` can fail, but a common signature lets an operator resolve to
/// a plain function pointer.
pub type Operation = fn(f64, f64) -> Result<f64, CalcError>;

/// Returns `a + b`.
pub fn add(a: f64, b: f64) -> Result<f64, CalcError> {
    Ok(a + b)
}

/// Returns `a - b`.
pub fn subtract(a: f64, b: f64) -> Result<f64, CalcError> {
    Ok(a - b)
}

/// Returns `a * b`.
pub fn multiply(a: f64, b: f64) -> Result<f64, CalcError> {
    Ok(a * b)
}

/// Divides `a` by `b`.
///
/// # Errors
/// Returns `CalcError::DivisionByZero` if `b` is zero of either sign.
///
/// # Example
/// ```
/// use quickcalc::{calculator::arithmetic::divide, error::CalcError};
///
/// assert_eq!(divide(7.0, 2.0), Ok(3.5));
/// assert_eq!(divide(7.0, -0.0), Err(CalcError::DivisionByZero));
/// ```
pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}
