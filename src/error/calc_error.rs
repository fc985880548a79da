#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a calculation.
pub enum CalcError {
    /// The entered text is not a valid finite number.
    InvalidNumber {
        /// The text exactly as it was entered, after trimming.
        input: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumber { input } => {
                write!(f, "could not convert string to float: '{input}'")
            },
            Self::DivisionByZero => write!(f, "Cannot divide by zero!"),
        }
    }
}

impl std::error::Error for CalcError {}
