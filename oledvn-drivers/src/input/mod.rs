//! Acknowledgement input sources
//!
//! Either source can back a click-to-continue gate, with or without a
//! timeout.

mod button;
mod serial;

pub use button::ButtonInput;
pub use serial::SerialInput;
