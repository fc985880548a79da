/// The four arithmetic operations.
///
/// Pure functions over `f64` that share a single signature, so that an
/// operator can resolve to a plain function pointer. Division reports a zero
/// divisor as an error instead of producing an infinity.
pub mod arithmetic;
/// The lexer module classifies a single line of user input.
///
/// Built with `logos`, it recognizes the operator symbols and the exit
/// keyword. It is used both to resolve operators and to detect `quit` at the
/// first prompt.
pub mod lexer;
/// The numeric input reader.
///
/// Prompts repeatedly until the user enters a valid number. Invalid entries
/// are answered with a short message and never reach the caller as errors.
pub mod reader;
/// The operator resolver.
///
/// Prompts repeatedly until the user enters one of the operator symbols and
/// returns the matching operator.
pub mod resolver;
/// The interactive session loop.
///
/// Ties the reader, resolver and arithmetic together into the read, calculate
/// and print cycle, and decides which failures end the session and which are
/// reported before starting over.
///
/// # Responsibilities
/// - Detects the exit keyword, interrupts and the end of input.
/// - Reports invalid first operands and division by zero, then continues.
/// - Reports any other failure generically, then continues.
pub mod session;
