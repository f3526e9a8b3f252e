//! Acknowledgement input trait

use core::fmt;

/// Input errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// Serial read failed
    Read,
    /// Digital pin read failed
    Pin,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Read => f.write_str("input read failed"),
            InputError::Pin => f.write_str("input pin read failed"),
        }
    }
}

/// Source of click-to-continue acknowledgements
///
/// A serial port reports pending bytes; a push button reports whether it
/// is currently pressed. Both must be non-blocking in
/// [`InputSource::has_pending`].
pub trait InputSource {
    /// Check whether an acknowledgement is waiting
    fn has_pending(&mut self) -> Result<bool, InputError>;

    /// Discard pending input so it cannot satisfy the next wait
    fn drain(&mut self) -> Result<(), InputError>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn has_pending(&mut self) -> Result<bool, InputError> {
        (**self).has_pending()
    }

    fn drain(&mut self) -> Result<(), InputError> {
        (**self).drain()
    }
}
