//! Board adapters for the sequencing engines
//!
//! This crate implements the capability traits from `oledvn-core` on top
//! of the embedded ecosystem:
//!
//! - Serial acknowledgement input over `embedded-io`
//! - Push-button acknowledgement input over `embedded-hal` digital pins
//! - A blocking clock over `embedded-hal` `DelayNs`
//! - An `embassy-time` clock (with the `embassy` feature)

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod input;

pub use clock::DelayClock;
#[cfg(feature = "embassy")]
pub use clock::EmbassyClock;
pub use input::{ButtonInput, SerialInput};
