/// Numeric text helpers.
///
/// This module converts between the text a user types or reads and `f64`
/// values: it parses operands with the accepted literal syntax and formats
/// results in their shortest faithful form.
///
/// Parsing returns a `Result`, which is `Ok` only for finite numbers and
/// otherwise carries the offending input for error reporting.
pub mod num;
