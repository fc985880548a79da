use crate::{
    calculator::{
        arithmetic::{Operation, add, divide, multiply, subtract},
        lexer::{Token, single_token},
    },
    error::CalcError,
};

/// Represents one of the four supported binary operators.
///
/// The set is closed: a value of this type is always a valid operator, so
/// anything holding one can apply it without further checks.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Every operator, in the order they are offered to the user.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Looks up the operator spelled by `symbol`.
    ///
    /// The text must consist of exactly one operator symbol; surrounding
    /// whitespace is ignored. Anything else, including several symbols in a
    /// row, yields `None`.
    ///
    /// # Example
    /// ```
    /// use quickcalc::operator::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol("*"), Some(BinaryOperator::Mul));
    /// assert_eq!(BinaryOperator::from_symbol("**"), None);
    /// assert_eq!(BinaryOperator::from_symbol("x"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match single_token(symbol)? {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Sub),
            Token::Star => Some(Self::Mul),
            Token::Slash => Some(Self::Div),
            Token::Quit => None,
        }
    }

    /// Returns the symbol the user types for this operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Returns the arithmetic function this operator stands for.
    #[must_use]
    pub fn function(self) -> Operation {
        match self {
            Self::Add => add,
            Self::Sub => subtract,
            Self::Mul => multiply,
            Self::Div => divide,
        }
    }

    /// Applies the operator to `left` and `right`.
    ///
    /// # Errors
    /// Returns `CalcError::DivisionByZero` for a division whose right operand
    /// is zero.
    ///
    /// # Example
    /// ```
    /// use quickcalc::{error::CalcError, operator::BinaryOperator};
    ///
    /// assert_eq!(BinaryOperator::Sub.apply(5.0, 3.0), Ok(2.0));
    /// assert_eq!(BinaryOperator::Div.apply(1.0, 0.0), Err(CalcError::DivisionByZero));
    /// ```
    pub fn apply(self, left: f64, right: f64) -> Result<f64, CalcError> {
        (self.function())(left, right)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
