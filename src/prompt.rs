use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use rustyline::DefaultEditor;

use crate::error::{InputError, SessionError};

/// A source of user input that shows a prompt and returns one line.
///
/// The returned line has no trailing newline. Interrupts, the end of input and
/// terminal failures are reported as [`InputError`]s rather than as text.
pub trait Prompt {
    /// Displays `prompt` and blocks until the user enters a line.
    ///
    /// # Errors
    /// Returns an `InputError` if no line could be read.
    fn read_line(&mut self, prompt: &str) -> Result<String, InputError>;
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        (**self).read_line(prompt)
    }
}

impl Prompt for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        Ok(self.readline(prompt)?)
    }
}

type Entry = Result<String, InputError>;

/// A prompt over a plain line stream, such as piped standard input.
///
/// Lines are read on a background thread and handed over through a channel,
/// so a blocked read can be cut short by [`StreamPrompt::waker`]. Prompts are
/// written to `out` as they are shown.
pub struct StreamPrompt<W> {
    entries:  Receiver<Entry>,
    sender:   Sender<Entry>,
    out:      W,
    finished: bool,
}

impl StreamPrompt<io::Stdout> {
    /// Reads lines from standard input and writes prompts to standard output.
    #[must_use]
    pub fn stdin() -> Self {
        Self::from_reader(io::BufReader::new(io::stdin()), io::stdout())
    }
}

impl<W: Write> StreamPrompt<W> {
    /// Reads lines from `reader` and writes prompts to `out`.
    pub fn from_reader<R: BufRead + Send + 'static>(reader: R, out: W) -> Self {
        let (sender, entries) = mpsc::channel();
        let lines = sender.clone();
        thread::spawn(move || {
            for line in reader.lines() {
                let entry = line.map_err(|e| InputError::Terminal { message: e.to_string() });
                if lines.send(entry).is_err() {
                    return;
                }
            }
            let _ = lines.send(Err(InputError::EndOfInput));
        });

        Self { entries,
               sender,
               out,
               finished: false }
    }

    /// Returns a callback that makes the pending or next read report an
    /// interrupt.
    pub fn waker(&self) -> impl Fn() + Send + 'static {
        let sender = self.sender.clone();
        move || {
            let _ = sender.send(Err(InputError::Interrupted));
        }
    }
}

impl<W: Write> Prompt for StreamPrompt<W> {
    fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        if self.finished {
            return Err(InputError::EndOfInput);
        }

        let shown = write!(self.out, "{prompt}").and_then(|()| self.out.flush());
        shown.map_err(|e| InputError::Terminal { message: e.to_string() })?;

        let entry = self.entries.recv().unwrap_or(Err(InputError::EndOfInput));
        if entry == Err(InputError::EndOfInput) {
            self.finished = true;
        }
        entry
    }
}

/// Flushes pending output, then reads one line through `prompt`.
///
/// Messages written to `out` must reach the terminal before the prompt is
/// drawn, otherwise they would appear after it.
pub fn ask<P: Prompt, W: Write>(prompt: &mut P, out: &mut W, text: &str) -> Result<String, SessionError> {
    out.flush()?;
    Ok(prompt.read_line(text)?)
}

/// A prompt that replays a fixed script of entries.
///
/// Every prompt shown is recorded so callers can check what the user would
/// have seen. Once the script is exhausted, reading reports the end of input.
///
/// # Example
/// ```
/// use quickcalc::{error::InputError, prompt::{Prompt, ScriptedPrompt}};
///
/// let mut prompt = ScriptedPrompt::new(["5"]);
/// assert_eq!(prompt.read_line("> "), Ok("5".to_string()));
/// assert_eq!(prompt.read_line("> "), Err(InputError::EndOfInput));
/// assert_eq!(prompt.prompts(), ["> ", "> "]);
/// ```
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    entries: VecDeque<Result<String, InputError>>,
    prompts: Vec<String>,
}

impl ScriptedPrompt {
    /// Creates a script that answers each prompt with the next line.
    #[must_use]
    pub fn new<I, S>(lines: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { entries: lines.into_iter().map(|line| Ok(line.into())).collect(),
               prompts: Vec::new(), }
    }

    /// Appends a line to the script.
    #[must_use]
    pub fn then_line(mut self, line: impl Into<String>) -> Self {
        self.entries.push_back(Ok(line.into()));
        self
    }

    /// Appends an input failure to the script.
    #[must_use]
    pub fn then_error(mut self, error: InputError) -> Self {
        self.entries.push_back(Err(error));
        self
    }

    /// Returns every prompt shown so far, oldest first.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Returns the number of scripted entries not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.entries.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        self.prompts.push(prompt.to_string());
        self.entries.pop_front().unwrap_or(Err(InputError::EndOfInput))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_lines_then_errors_in_order() {
        let mut prompt = ScriptedPrompt::new(["1"]).then_error(InputError::Interrupted)
                                                   .then_line("2");

        assert_eq!(prompt.read_line("a"), Ok("1".to_string()));
        assert_eq!(prompt.read_line("b"), Err(InputError::Interrupted));
        assert_eq!(prompt.remaining(), 1);
        assert_eq!(prompt.read_line("c"), Ok("2".to_string()));
        assert_eq!(prompt.read_line("d"), Err(InputError::EndOfInput));
        assert_eq!(prompt.prompts(), ["a", "b", "c", "d"]);
    }

    #[test]
    fn stream_prompt_shows_prompts_and_reads_lines() {
        let input = io::Cursor::new("5\r\n  +\n");
        let mut prompt = StreamPrompt::from_reader(input, Vec::new());

        assert_eq!(prompt.read_line("a: ").map(|l| l.trim().to_string()), Ok("5".to_string()));
        assert_eq!(prompt.read_line("b: "), Ok("  +".to_string()));
        assert_eq!(prompt.read_line("c: "), Err(InputError::EndOfInput));
        assert_eq!(prompt.read_line("d: "), Err(InputError::EndOfInput));
        assert_eq!(prompt.out.as_slice(), b"a: b: c: ");
    }

    /// A reader that blocks until its sender is dropped.
    struct Stalled(Receiver<()>);

    impl io::Read for Stalled {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            let _ = self.0.recv();
            Ok(0)
        }
    }

    #[test]
    fn waker_interrupts_a_blocked_read() {
        let (hold, stalled) = mpsc::channel();
        let mut prompt = StreamPrompt::from_reader(io::BufReader::new(Stalled(stalled)), Vec::new());

        (prompt.waker())();

        assert_eq!(prompt.read_line("> "), Err(InputError::Interrupted));
        drop(hold);
    }

    #[test]
    fn ask_flushes_before_reading() {
        let mut prompt = ScriptedPrompt::new(["x"]);
        let mut out = std::io::BufWriter::new(Vec::new());
        write!(out, "pending").unwrap();

        let line = ask(&mut prompt, &mut out, "> ").unwrap();

        assert_eq!(line, "x");
        assert_eq!(out.get_ref().as_slice(), b"pending");
    }
}
