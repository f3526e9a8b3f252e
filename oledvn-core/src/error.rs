//! Error taxonomy for the sequencing engines

use core::fmt;

use oledvn_display::DisplayError;

use crate::traits::InputError;

/// Which capability failed mid-sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Interruption {
    /// Canvas drawing or commit failed
    Display(DisplayError),
    /// Input polling or draining failed
    Input(InputError),
}

/// Engine errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A parameter would make the sequence degenerate (zero step, zero cycles)
    InvalidParameter,
    /// Bitmap buffer length inconsistent with its dimensions
    MalformedBitmap,
    /// An underlying capability call failed; the sequence stopped there
    Interrupted(Interruption),
}

impl From<DisplayError> for Error {
    fn from(err: DisplayError) -> Self {
        match err {
            DisplayError::MalformedBitmap => Error::MalformedBitmap,
            other => Error::Interrupted(Interruption::Display(other)),
        }
    }
}

impl From<InputError> for Error {
    fn from(err: InputError) -> Self {
        Error::Interrupted(Interruption::Input(err))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter => f.write_str("invalid parameter"),
            Error::MalformedBitmap => f.write_str("malformed bitmap"),
            Error::Interrupted(Interruption::Display(err)) => write!(f, "interrupted: {}", err),
            Error::Interrupted(Interruption::Input(err)) => write!(f, "interrupted: {}", err),
        }
    }
}
