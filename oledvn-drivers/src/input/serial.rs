//! Serial port input
//!
//! Any received byte acknowledges a gate. Draining discards everything
//! currently buffered without blocking.

use embedded_io::{Read, ReadReady};
use oledvn_core::traits::{InputError, InputSource};

/// Scratch size for discarding buffered bytes
const DRAIN_CHUNK: usize = 16;

/// Serial acknowledgement input
pub struct SerialInput<R> {
    port: R,
}

impl<R: Read + ReadReady> SerialInput<R> {
    /// Wrap a serial receiver
    pub fn new(port: R) -> Self {
        Self { port }
    }

    /// Release the receiver
    pub fn release(self) -> R {
        self.port
    }
}

impl<R: Read + ReadReady> InputSource for SerialInput<R> {
    fn has_pending(&mut self) -> Result<bool, InputError> {
        self.port.read_ready().map_err(|_| InputError::Read)
    }

    fn drain(&mut self) -> Result<(), InputError> {
        let mut scratch = [0u8; DRAIN_CHUNK];
        while self.has_pending()? {
            let n = self.port.read(&mut scratch).map_err(|_| InputError::Read)?;
            #[cfg(feature = "defmt")]
            defmt::trace!("serial drained {} bytes", n);
            if n == 0 {
                break;
            }
        }
        Ok(())
    }
}
