/// Calculation errors.
///
/// Defines the errors that can occur while turning operand text into numbers
/// and applying an arithmetic operation to them, such as malformed numeric
/// literals and division by zero.
pub mod calc_error;
/// Input errors.
///
/// Contains the conditions reported by a prompt instead of a line of text:
/// a user interrupt, the end of the input stream, or a terminal failure.
pub mod input_error;
/// Session errors.
///
/// Wraps calculation, input and output failures into the single error type
/// that the session loop dispatches on.
pub mod session_error;

pub use calc_error::CalcError;
pub use input_error::InputError;
pub use session_error::SessionError;
