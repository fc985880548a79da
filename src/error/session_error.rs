use crate::error::{CalcError, InputError};

#[derive(Debug)]
/// Represents everything that can abort one iteration of a session.
pub enum SessionError {
    /// A calculation failed; the user is told and the session goes on.
    Calc(CalcError),
    /// Reading from the user failed.
    Input(InputError),
    /// Writing to the output failed. Nothing more can be shown to the user.
    Output(std::io::Error),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Calc(e) => write!(f, "{e}"),
            Self::Input(e) => write!(f, "{e}"),
            Self::Output(e) => write!(f, "Failed to write output: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Calc(e) => Some(e),
            Self::Input(e) => Some(e),
            Self::Output(e) => Some(e),
        }
    }
}

impl From<CalcError> for SessionError {
    fn from(err: CalcError) -> Self {
        Self::Calc(err)
    }
}

impl From<InputError> for SessionError {
    fn from(err: InputError) -> Self {
        Self::Input(err)
    }
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        Self::Output(err)
    }
}
