use std::io::{self, Write};

use tracing::{debug, info, warn};

use crate::{
    calculator::{lexer::is_quit, reader::read_number, resolver::resolve_operator},
    error::{InputError, SessionError},
    prompt::{Prompt, ask},
    util::num::{format_number, parse_operand},
};

/// Prompt asking for the first operand, or the exit keyword.
pub const FIRST_OPERAND_PROMPT: &str = "Enter first number (or 'quit'): ";
/// Prompt asking for the second operand.
pub const SECOND_OPERAND_PROMPT: &str = "Enter second number: ";
/// Message printed when the session ends normally.
pub const FAREWELL: &str = "Goodbye!";

/// User facing settings for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Whether to greet the user and explain how to exit.
    pub show_banner: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { show_banner: true }
    }
}

/// How a session came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed the exit keyword.
    Quit,
    /// The user pressed the interrupt key.
    Interrupted,
    /// The input stream was closed.
    EndOfInput,
}

/// Outcome of one successful iteration.
enum Step {
    Continue,
    Quit,
}

/// An interactive calculator session.
///
/// Each iteration reads a first operand, an operator and a second operand,
/// then prints the result. Entering `quit` at the first prompt, interrupting,
/// or closing the input ends the session; every other failure is reported and
/// the next iteration starts.
///
/// # Example
/// ```
/// use quickcalc::{calculator::session::{Session, SessionConfig, SessionEnd},
///                 prompt::ScriptedPrompt};
///
/// let prompt = ScriptedPrompt::new(["5", "+", "3", "quit"]);
/// let mut session = Session::new(prompt, Vec::new(), SessionConfig::default());
///
/// assert_eq!(session.run().unwrap(), SessionEnd::Quit);
/// let output = String::from_utf8(session.into_parts().1).unwrap();
/// assert!(output.contains("Result: 8.0"));
/// ```
pub struct Session<P, W> {
    prompt: P,
    out:    W,
    config: SessionConfig,
}

impl<P: Prompt, W: Write> Session<P, W> {
    /// Creates a session reading from `prompt` and writing to `out`.
    pub const fn new(prompt: P, out: W, config: SessionConfig) -> Self {
        Self { prompt, out, config }
    }

    /// Consumes the session and returns its prompt and output.
    pub fn into_parts(self) -> (P, W) {
        (self.prompt, self.out)
    }

    /// Runs the session until it ends.
    ///
    /// # Errors
    /// Returns an error only if writing to the output fails. Bad input,
    /// division by zero and terminal read failures are reported to the user
    /// and the session continues.
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        if self.config.show_banner {
            writeln!(self.out, "Welcome to the quickcalc calculator!")?;
            writeln!(self.out, "Type 'quit' to exit")?;
        }

        let mut iterations = 0_u64;
        loop {
            iterations += 1;
            match self.step() {
                Ok(Step::Continue) => {},
                Ok(Step::Quit) => {
                    writeln!(self.out, "{FAREWELL}")?;
                    return self.finish(SessionEnd::Quit, iterations);
                },
                Err(SessionError::Calc(e)) => writeln!(self.out, "Error: {e}")?,
                Err(SessionError::Input(e)) if e.ends_session() => {
                    writeln!(self.out, "\n{FAREWELL}")?;
                    let end = if e == InputError::Interrupted {
                        SessionEnd::Interrupted
                    } else {
                        SessionEnd::EndOfInput
                    };
                    return self.finish(end, iterations);
                },
                Err(SessionError::Output(e)) => return Err(e),
                Err(e) => {
                    warn!(error = %e, "unexpected error during calculation");
                    writeln!(self.out, "An unexpected error occurred: {e}")?;
                },
            }
        }
    }

    fn finish(&mut self, end: SessionEnd, iterations: u64) -> io::Result<SessionEnd> {
        info!(?end, iterations, "session ended");
        self.out.flush()?;
        Ok(end)
    }

    /// Performs one iteration: read, calculate and print.
    fn step(&mut self) -> Result<Step, SessionError> {
        writeln!(self.out)?;
        let entry = ask(&mut self.prompt, &mut self.out, FIRST_OPERAND_PROMPT)?;
        let entry = entry.trim();
        if is_quit(entry) {
            return Ok(Step::Quit);
        }

        let first = parse_operand(entry)?;
        let op = resolve_operator(&mut self.prompt, &mut self.out)?;
        let second = read_number(&mut self.prompt, &mut self.out, SECOND_OPERAND_PROMPT)?;

        let result = match op.apply(first, second) {
            Ok(result) => result,
            Err(e) => {
                debug!(first, %op, second, error = %e, "calculation failed");
                return Err(e.into());
            },
        };
        debug!(first, %op, second, result, "calculated");

        writeln!(self.out, "Result: {}", format_number(result))?;
        Ok(Step::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompt;

    fn run(prompt: ScriptedPrompt) -> (SessionEnd, String, ScriptedPrompt) {
        let config = SessionConfig { show_banner: false };
        let mut session = Session::new(prompt, Vec::new(), config);
        let end = session.run().unwrap();
        let (prompt, out) = session.into_parts();
        (end, String::from_utf8(out).unwrap(), prompt)
    }

    #[test]
    fn banner_is_optional() {
        let mut session = Session::new(ScriptedPrompt::new(["quit"]), Vec::new(), SessionConfig::default());
        session.run().unwrap();
        let output = String::from_utf8(session.into_parts().1).unwrap();
        assert!(output.starts_with("Welcome to the quickcalc calculator!\nType 'quit' to exit\n"));

        let (_, output, _) = run(ScriptedPrompt::new(["quit"]));
        assert!(!output.contains("Welcome"));
    }

    #[test]
    fn quit_ends_without_calculating() {
        let (end, output, prompt) = run(ScriptedPrompt::new(["  QUIT "]));

        assert_eq!(end, SessionEnd::Quit);
        assert_eq!(output, "\nGoodbye!\n");
        assert_eq!(prompt.prompts(), [FIRST_OPERAND_PROMPT]);
    }

    #[test]
    fn bad_first_operand_restarts_the_iteration() {
        let (end, output, prompt) = run(ScriptedPrompt::new(["12x", "1", "-", "3", "quit"]));

        assert_eq!(end, SessionEnd::Quit);
        assert!(output.contains("Error: could not convert string to float: '12x'\n"));
        assert!(output.contains("Result: -2.0\n"));
        assert_eq!(prompt.prompts()[1], FIRST_OPERAND_PROMPT);
    }

    #[test]
    fn terminal_failures_are_reported_and_the_loop_continues() {
        let failure = InputError::Terminal { message: "device not ready".to_string() };
        let prompt = ScriptedPrompt::new(["2", "*"]).then_error(failure)
                                                    .then_line("quit");

        let (end, output, _) = run(prompt);

        assert_eq!(end, SessionEnd::Quit);
        assert!(output.contains("An unexpected error occurred: device not ready\n"));
    }

    #[test]
    fn interrupt_at_a_nested_prompt_ends_the_session() {
        let prompt = ScriptedPrompt::new(["2", "?"]).then_error(InputError::Interrupted)
                                                    .then_line("never read");

        let (end, output, prompt) = run(prompt);

        assert_eq!(end, SessionEnd::Interrupted);
        assert!(output.ends_with("\nGoodbye!\n"));
        assert_eq!(prompt.remaining(), 1);
    }

    #[test]
    fn end_of_input_ends_the_session() {
        let (end, output, _) = run(ScriptedPrompt::new(["4", "/", "2"]));

        assert_eq!(end, SessionEnd::EndOfInput);
        assert!(output.contains("Result: 2.0\n"));
        assert!(output.ends_with("\nGoodbye!\n"));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn output_failure_is_returned() {
        let mut session = Session::new(ScriptedPrompt::new(["1"]), BrokenPipe, SessionConfig::default());
        let err = session.run().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
