//! Capability traits
//!
//! These traits define the interface between the sequencing engines and
//! the board: where time comes from and where acknowledgements come from.
//! The drawing capability lives in `oledvn_display::Canvas`.

pub mod clock;
pub mod input;

pub use clock::Clock;
pub use input::{InputError, InputSource};
