//! In-memory 128x64 canvas
//!
//! Double-buffered: drawing goes to the back buffer and [`Canvas::commit`]
//! copies it to the front buffer, which is what a panel driver would push
//! over the bus. Primitives and glyphs are rasterised by `embedded-graphics`,
//! so the buffer is also usable as a plain [`DrawTarget`].

use core::convert::Infallible;

use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::backend::{Canvas, DisplayError};
use crate::bitmap::Bitmap;

/// Display width in pixels
pub const WIDTH: u16 = 128;

/// Display height in pixels
pub const HEIGHT: u16 = 64;

/// Horizontal cursor advance per glyph (5 pixel glyph + 1 pixel gap)
pub const GLYPH_ADVANCE: i16 = 6;

/// Vertical cursor advance per text line
pub const LINE_HEIGHT: i16 = 8;

const ROW_BYTES: usize = WIDTH as usize / 8;
const BUFFER_LEN: usize = ROW_BYTES * HEIGHT as usize;

/// Frame buffer canvas
#[derive(Clone)]
pub struct FrameBuffer {
    /// Working buffer, row-major, MSB first
    back: [u8; BUFFER_LEN],
    /// Last committed frame
    front: [u8; BUFFER_LEN],
    cursor: (i16, i16),
    text_color: BinaryColor,
    commits: u32,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a blank frame buffer with the cursor at the origin
    pub const fn new() -> Self {
        Self {
            back: [0; BUFFER_LEN],
            front: [0; BUFFER_LEN],
            cursor: (0, 0),
            text_color: BinaryColor::On,
            commits: 0,
        }
    }

    /// Read a pixel from the working buffer
    pub fn pixel(&self, x: i16, y: i16) -> bool {
        Self::index(x.into(), y.into())
            .map(|(byte, mask)| self.back[byte] & mask != 0)
            .unwrap_or(false)
    }

    /// Read a pixel from the last committed frame
    pub fn committed_pixel(&self, x: i16, y: i16) -> bool {
        Self::index(x.into(), y.into())
            .map(|(byte, mask)| self.front[byte] & mask != 0)
            .unwrap_or(false)
    }

    /// Last committed frame, in the same layout as [`Bitmap`] data
    pub fn front_buffer(&self) -> &[u8] {
        &self.front
    }

    /// Working buffer
    pub fn back_buffer(&self) -> &[u8] {
        &self.back
    }

    /// Number of commits so far
    pub fn commits(&self) -> u32 {
        self.commits
    }

    /// Current glyph polarity
    pub fn text_color(&self) -> BinaryColor {
        self.text_color
    }

    /// Number of lit pixels in the working buffer
    pub fn lit_count(&self) -> u32 {
        self.back.iter().map(|b| b.count_ones()).sum()
    }

    /// Check if every pixel of the working buffer is off
    pub fn is_blank(&self) -> bool {
        self.back.iter().all(|&b| b == 0)
    }

    /// Check if every pixel of the working buffer is on
    pub fn is_filled(&self) -> bool {
        self.back.iter().all(|&b| b == 0xFF)
    }

    fn index(x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some((y * ROW_BYTES + x / 8, 0x80 >> (x % 8)))
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: BinaryColor) {
        if let Some((byte, mask)) = Self::index(x, y) {
            match color {
                BinaryColor::On => self.back[byte] |= mask,
                BinaryColor::Off => self.back[byte] &= !mask,
            }
        }
    }
}

fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }
}

impl Canvas for FrameBuffer {
    fn pixel_dimensions(&self) -> (u16, u16) {
        (WIDTH, HEIGHT)
    }

    fn fill_rect(
        &mut self,
        x: i16,
        y: i16,
        width: u16,
        height: u16,
        color: BinaryColor,
    ) -> Result<(), DisplayError> {
        let rect = Rectangle::new(
            Point::new(x.into(), y.into()),
            Size::new(width.into(), height.into()),
        );
        infallible(rect.into_styled(PrimitiveStyle::with_fill(color)).draw(self));
        Ok(())
    }

    fn draw_line(
        &mut self,
        x0: i16,
        y0: i16,
        x1: i16,
        y1: i16,
        color: BinaryColor,
    ) -> Result<(), DisplayError> {
        let line = Line::new(
            Point::new(x0.into(), y0.into()),
            Point::new(x1.into(), y1.into()),
        );
        infallible(line.into_styled(PrimitiveStyle::with_stroke(color, 1)).draw(self));
        Ok(())
    }

    fn blit(
        &mut self,
        x: i16,
        y: i16,
        bitmap: &Bitmap<'_>,
        color: BinaryColor,
    ) -> Result<(), DisplayError> {
        let (x, y) = (i32::from(x), i32::from(y));
        for (bx, by) in bitmap.set_pixels() {
            self.set_pixel(x + i32::from(bx), y + i32::from(by), color);
        }
        Ok(())
    }

    fn write_char(&mut self, ch: char) -> Result<(), DisplayError> {
        match ch {
            '\n' => self.cursor = (0, self.cursor.1 + LINE_HEIGHT),
            '\r' => {}
            _ => {
                // Wrap before a glyph that would run off the right edge
                if self.cursor.0 + GLYPH_ADVANCE > WIDTH as i16 {
                    self.cursor = (0, self.cursor.1 + LINE_HEIGHT);
                }
                let mut utf8 = [0u8; 4];
                let style = MonoTextStyle::new(&FONT_5X8, self.text_color);
                let origin = Point::new(self.cursor.0.into(), self.cursor.1.into());
                let text = Text::with_baseline(ch.encode_utf8(&mut utf8), origin, style, Baseline::Top);
                infallible(text.draw(self));
                self.cursor.0 += GLYPH_ADVANCE;
            }
        }
        Ok(())
    }

    fn set_cursor(&mut self, x: i16, y: i16) {
        self.cursor = (x, y);
    }

    fn cursor(&self) -> (i16, i16) {
        self.cursor
    }

    fn set_text_color(&mut self, color: BinaryColor) {
        self.text_color = color;
    }

    fn commit(&mut self) -> Result<(), DisplayError> {
        self.front = self.back;
        self.commits = self.commits.wrapping_add(1);
        Ok(())
    }
}
