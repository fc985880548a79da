//! # quickcalc
//!
//! quickcalc is an interactive calculator for the terminal written in Rust.
//! It repeatedly reads two numbers and an operator, prints the result, and
//! guards against invalid numeric input and division by zero.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    calculator::session::{Session, SessionConfig, SessionEnd},
    prompt::Prompt,
};

/// The calculator itself.
///
/// This module hosts the arithmetic operations, the lexer that classifies
/// user entries, the retrying number reader and operator resolver, and the
/// session loop that drives them.
///
/// # Responsibilities
/// - Computes results and reports division by zero.
/// - Re-prompts on invalid operators and second operands.
/// - Ends the session on `quit`, interrupt or end of input.
pub mod calculator;
/// Provides unified error types for calculation and input handling.
///
/// This module defines the errors that can be raised while parsing operands,
/// applying operations, or reading from the terminal, together with the
/// session level error that the loop dispatches on.
///
/// # Responsibilities
/// - Defines error enums for every failure mode.
/// - Carries the offending input for user facing messages.
/// - Integrates with standard error handling traits.
pub mod error;
/// Interrupt signal handling.
///
/// Turns `SIGINT` into `InputError::Interrupted` for prompts that cannot see
/// Ctrl-C as a key press, such as piped standard input.
pub mod interrupt;
/// The closed set of binary operators.
///
/// Maps each operator symbol to its arithmetic function.
pub mod operator;
/// Line oriented user input.
///
/// Declares the `Prompt` trait, implements it for the `rustyline` editor used
/// on terminals and for a threaded line stream used on pipes, and provides a
/// scripted prompt for driving sessions without a terminal.
pub mod prompt;
/// General utilities for numeric text.
///
/// Parses operands and formats results.
pub mod util;

/// Runs a complete session and returns how it ended.
///
/// This creates a [`Session`] over `prompt` and `out` and runs it until the
/// user quits, interrupts, or closes the input.
///
/// # Errors
/// Returns an error if writing to `out` fails.
///
/// # Examples
/// ```
/// use quickcalc::{
///     calculator::session::{SessionConfig, SessionEnd},
///     prompt::ScriptedPrompt,
///     run_session,
/// };
///
/// let prompt = ScriptedPrompt::new(["10", "/", "0", "quit"]);
/// let mut out = Vec::new();
///
/// let end = run_session(prompt, &mut out, SessionConfig::default()).unwrap();
/// assert_eq!(end, SessionEnd::Quit);
/// assert!(String::from_utf8(out).unwrap().contains("Error: Cannot divide by zero!"));
/// ```
pub fn run_session<P: Prompt, W: Write>(prompt: P,
                                        out: W,
                                        config: SessionConfig)
                                        -> std::io::Result<SessionEnd> {
    Session::new(prompt, out, config).run()
}
