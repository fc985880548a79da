use std::io::Write;

use tracing::debug;

use crate::{
    error::SessionError,
    prompt::{Prompt, ask},
    util::num::parse_operand,
};

/// Message shown when an entry is not a valid number.
pub const INVALID_NUMBER_MESSAGE: &str = "Please enter a valid number.";

/// Prompts until the user enters a valid number, and returns it.
///
/// Invalid entries are answered with [`INVALID_NUMBER_MESSAGE`] and the prompt
/// is shown again, for as long as it takes.
///
/// # Errors
/// Never fails because of what the user typed. Returns
/// `SessionError::Input` if the prompt could not be read (interrupt, end of
/// input, terminal failure) and `SessionError::Output` if the retry message
/// could not be written.
///
/// # Example
/// ```
/// use quickcalc::{calculator::reader::read_number, prompt::ScriptedPrompt};
///
/// let mut prompt = ScriptedPrompt::new(["abc", "-2"]);
/// let mut out = Vec::new();
///
/// let value = read_number(&mut prompt, &mut out, "Number: ").unwrap();
/// assert_eq!(value, -2.0);
/// assert_eq!(String::from_utf8(out).unwrap(), "Please enter a valid number.\n");
/// ```
pub fn read_number<P: Prompt, W: Write>(prompt: &mut P,
                                        out: &mut W,
                                        text: &str)
                                        -> Result<f64, SessionError> {
    loop {
        let entry = ask(prompt, out, text)?;
        match parse_operand(&entry) {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!(error = %e, "rejected operand");
                writeln!(out, "{INVALID_NUMBER_MESSAGE}")?;
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::InputError, prompt::ScriptedPrompt};

    fn read(lines: &[&str]) -> (Result<f64, SessionError>, String, usize) {
        let mut prompt = ScriptedPrompt::new(lines.iter().copied());
        let mut out = Vec::new();
        let result = read_number(&mut prompt, &mut out, "n: ");
        (result, String::from_utf8(out).unwrap(), prompt.prompts().len())
    }

    #[test]
    fn accepts_valid_numbers_first_time() {
        for (text, expected) in [("3.5", 3.5), ("-2", -2.0), ("0", 0.0)] {
            let (result, output, prompts) = read(&[text]);
            assert_eq!(result.unwrap(), expected);
            assert!(output.is_empty());
            assert_eq!(prompts, 1);
        }
    }

    #[test]
    fn keeps_asking_until_valid() {
        let (result, output, prompts) = read(&["abc", "", "1.2.3", "inf", "7"]);

        assert_eq!(result.unwrap(), 7.0);
        assert_eq!(output.matches(INVALID_NUMBER_MESSAGE).count(), 4);
        assert_eq!(prompts, 5);
    }

    #[test]
    fn input_failures_are_passed_on() {
        let mut prompt = ScriptedPrompt::new(["x"]).then_error(InputError::Interrupted);
        let mut out = Vec::new();

        let err = read_number(&mut prompt, &mut out, "n: ").unwrap_err();
        assert!(matches!(err, SessionError::Input(InputError::Interrupted)));
    }
}
