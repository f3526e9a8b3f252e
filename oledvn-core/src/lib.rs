//! Board-agnostic frame sequencing for 128x64 monochrome displays
//!
//! This crate contains the sequencing logic that does not depend on a
//! specific panel, bus or input device:
//!
//! - Full-screen fade and wipe transitions
//! - Vertical scrolling of bitmaps taller than the panel
//! - Visual-novel dialog boxes with typewriter reveal
//! - Click-to-continue gating with a blinking indicator
//! - Capability traits (clock, input) and default timing tables
//!
//! Every operation runs to completion on the calling thread. The canvas,
//! input source and clock are passed in explicitly; callers on a
//! multi-threaded executor must serialise access themselves.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod ctc;
pub mod dialog;
pub mod error;
mod pacing;
pub mod scroll;
pub mod traits;
pub mod transition;

pub use error::{Error, Interruption};
