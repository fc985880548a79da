use std::io::Write;

use tracing::debug;

use crate::{
    error::SessionError,
    operator::BinaryOperator,
    prompt::{Prompt, ask},
};

/// Prompt asking for an operator.
pub const OPERATOR_PROMPT: &str = "Enter operation (+, -, *, /): ";
/// Message shown when an entry is not one of the operator symbols.
pub const INVALID_OPERATOR_MESSAGE: &str = "Please enter a valid operation (+, -, *, /)";

/// Prompts until the user enters an operator symbol, and returns the operator.
///
/// The entry is trimmed and must then be exactly one of `+`, `-`, `*` or `/`.
/// Anything else is answered with [`INVALID_OPERATOR_MESSAGE`] and the prompt
/// is shown again. The operator's arithmetic function is available through
/// [`BinaryOperator::function`] and [`BinaryOperator::apply`].
///
/// # Errors
/// Never fails because of what the user typed. Returns
/// `SessionError::Input` if the prompt could not be read and
/// `SessionError::Output` if the retry message could not be written.
///
/// # Example
/// ```
/// use quickcalc::{calculator::resolver::resolve_operator, operator::BinaryOperator,
///                 prompt::ScriptedPrompt};
///
/// let mut prompt = ScriptedPrompt::new(["%", " / "]);
/// let mut out = Vec::new();
///
/// let op = resolve_operator(&mut prompt, &mut out).unwrap();
/// assert_eq!(op, BinaryOperator::Div);
/// assert_eq!(op.apply(9.0, 3.0), Ok(3.0));
/// ```
pub fn resolve_operator<P: Prompt, W: Write>(prompt: &mut P,
                                             out: &mut W)
                                             -> Result<BinaryOperator, SessionError> {
    loop {
        let entry = ask(prompt, out, OPERATOR_PROMPT)?;
        if let Some(op) = BinaryOperator::from_symbol(entry.trim()) {
            debug!(%op, "resolved operator");
            return Ok(op);
        }
        debug!(entry = entry.as_str(), "rejected operator");
        writeln!(out, "{INVALID_OPERATOR_MESSAGE}")?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::InputError, prompt::ScriptedPrompt};

    #[test]
    fn resolves_each_symbol_to_its_function() {
        let cases = [("+", 5.0), ("-", -1.0), ("*", 6.0), ("/", 2.0 / 3.0)];

        for (symbol, expected) in cases {
            let mut prompt = ScriptedPrompt::new([symbol]);
            let mut out = Vec::new();

            let op = resolve_operator(&mut prompt, &mut out).unwrap();
            assert_eq!(op.symbol(), symbol);
            assert_eq!((op.function())(2.0, 3.0), Ok(expected));
            assert!(out.is_empty());
        }
    }

    #[test]
    fn reprompts_on_anything_else() {
        let mut prompt = ScriptedPrompt::new(["x", "", "**", "plus", "  -  "]);
        let mut out = Vec::new();

        let op = resolve_operator(&mut prompt, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert_eq!(op, BinaryOperator::Sub);
        assert_eq!(output.matches(INVALID_OPERATOR_MESSAGE).count(), 4);
        assert!(prompt.prompts().iter().all(|p| p == OPERATOR_PROMPT));
        assert_eq!(prompt.prompts().len(), 5);
    }

    #[test]
    fn end_of_input_is_passed_on() {
        let mut prompt = ScriptedPrompt::new(["?"]);
        let mut out = Vec::new();

        let err = resolve_operator(&mut prompt, &mut out).unwrap_err();
        assert!(matches!(err, SessionError::Input(InputError::EndOfInput)));
    }
}
