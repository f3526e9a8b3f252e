//! Display abstraction for 128x64 monochrome panels
//!
//! This crate provides:
//! - `Canvas` trait: the drawing, text cursor and commit operations the
//!   sequencing engines rely on
//! - `Bitmap`: a borrowed 1-bit image with size validation
//! - `FrameBuffer`: a double-buffered in-memory canvas built on
//!   `embedded-graphics`
//!
//! # Architecture
//!
//! Panel drivers (SSD1306, SH1106, ...) implement `Canvas` directly or wrap a
//! `FrameBuffer` and push its front buffer over I2C/SPI on commit. The engines
//! in `oledvn-core` never see the bus.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod bitmap;
pub mod framebuffer;

// Re-export key types
pub use backend::{Canvas, DisplayError};
pub use bitmap::Bitmap;
pub use embedded_graphics::pixelcolor::BinaryColor;
pub use framebuffer::{FrameBuffer, GLYPH_ADVANCE, HEIGHT, LINE_HEIGHT, WIDTH};
