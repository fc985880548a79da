use rustyline::error::ReadlineError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents every way reading a line from the user can fail.
pub enum InputError {
    /// The user pressed the interrupt key (Ctrl-C).
    Interrupted,
    /// The input stream was closed (Ctrl-D or end of piped input).
    EndOfInput,
    /// The terminal could not be read for some other reason.
    Terminal {
        /// Details reported by the terminal layer.
        message: String,
    },
}

impl InputError {
    /// Returns `true` if this condition should end the session.
    #[must_use]
    pub const fn ends_session(&self) -> bool {
        matches!(self, Self::Interrupted | Self::EndOfInput)
    }
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Interrupted => write!(f, "Input interrupted."),
            Self::EndOfInput => write!(f, "End of input."),
            Self::Terminal { message } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for InputError {}

impl From<ReadlineError> for InputError {
    fn from(err: ReadlineError) -> Self {
        match err {
            ReadlineError::Interrupted => Self::Interrupted,
            ReadlineError::Eof => Self::EndOfInput,
            other => Self::Terminal { message: other.to_string() },
        }
    }
}
