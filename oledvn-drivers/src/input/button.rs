//! Push-button input
//!
//! A gate is acknowledged while the button is held. Draining waits for
//! the button to be released, so a single press cannot satisfy two gates.

use embedded_hal::digital::InputPin;
use oledvn_core::traits::{InputError, InputSource};

/// Push-button acknowledgement input
///
/// [`InputSource::drain`] blocks until the button reads released, with no
/// bound. A stuck button holds a gate before its timeout race starts,
/// including in the timed variant.
pub struct ButtonInput<P> {
    pin: P,
    /// If true, pressed = pin LOW
    active_low: bool,
}

impl<P: InputPin> ButtonInput<P> {
    /// Create a button input
    ///
    /// # Arguments
    /// - `pin`: The button's input pin
    /// - `active_low`: If true, the button pulls the pin LOW when pressed
    pub fn new(pin: P, active_low: bool) -> Self {
        Self { pin, active_low }
    }

    /// Button that drives the pin HIGH when pressed
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Button that pulls the pin LOW when pressed (pull-up wiring)
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Check whether the button is currently held
    pub fn is_pressed(&mut self) -> Result<bool, InputError> {
        let high = self.pin.is_high().map_err(|_| InputError::Pin)?;
        Ok(high != self.active_low)
    }

    /// Release the pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: InputPin> InputSource for ButtonInput<P> {
    fn has_pending(&mut self) -> Result<bool, InputError> {
        self.is_pressed()
    }

    fn drain(&mut self) -> Result<(), InputError> {
        while self.is_pressed()? {
            core::hint::spin_loop();
        }
        Ok(())
    }
}
