use thiserror::Error;

pub type PolygonResult<T> = Result<T, PolygonError>;

/// Why user-supplied polygon input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInputReason {
    NotANumber,
    TooFewSides,
    NonPositiveLength,
}

impl InvalidInputReason {
    /// Short machine-facing reason, used by `Display`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotANumber => "not a number",
            Self::TooFewSides => "too few sides",
            Self::NonPositiveLength => "non-positive length",
        }
    }

    /// Message shown to the user in the error notification.
    #[must_use]
    pub const fn user_message(self) -> &'static str {
        match self {
            Self::NotANumber => "Please enter valid numbers!",
            Self::TooFewSides => "Number of sides must be 3 or more!",
            Self::NonPositiveLength => "Side length must be positive!",
        }
    }
}

impl std::fmt::Display for InvalidInputReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum PolygonError {
    #[error("invalid input: {0}")]
    InvalidInput(InvalidInputReason),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl PolygonError {
    /// Returns the input rejection reason, if this is an input error.
    #[must_use]
    pub fn input_reason(&self) -> Option<InvalidInputReason> {
        match self {
            Self::InvalidInput(reason) => Some(*reason),
            _ => None,
        }
    }
}
