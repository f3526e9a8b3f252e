//! Canvas capability trait
//!
//! Defines the drawing interface the sequencing engines issue commands
//! through. Implementations own the pixel buffer and the device it is
//! committed to.

use core::fmt;

use embedded_graphics::pixelcolor::BinaryColor;

use crate::bitmap::Bitmap;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
    /// Buffer overflow
    BufferOverflow,
    /// Bitmap buffer length does not match its declared dimensions
    MalformedBitmap,
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Communication => f.write_str("display communication failed"),
            Self::InvalidCoordinates => f.write_str("invalid coordinates"),
            Self::NotInitialized => f.write_str("display not initialized"),
            Self::BufferOverflow => f.write_str("display buffer overflow"),
            Self::MalformedBitmap => f.write_str("bitmap length does not match dimensions"),
        }
    }
}

/// Pixel canvas with a text cursor and an explicit commit step
///
/// Drawing calls only touch the working buffer; nothing reaches the panel
/// until [`Canvas::commit`]. Coordinates are signed so bitmaps can be drawn
/// partially off-screen; out-of-range pixels are clipped.
pub trait Canvas {
    /// Get pixel dimensions as (width, height)
    fn pixel_dimensions(&self) -> (u16, u16);

    /// Fill a rectangle with the given polarity
    fn fill_rect(
        &mut self,
        x: i16,
        y: i16,
        width: u16,
        height: u16,
        color: BinaryColor,
    ) -> Result<(), DisplayError>;

    /// Draw a one pixel wide line between two points (inclusive)
    fn draw_line(
        &mut self,
        x0: i16,
        y0: i16,
        x1: i16,
        y1: i16,
        color: BinaryColor,
    ) -> Result<(), DisplayError>;

    /// Draw a horizontal line
    fn draw_hline(
        &mut self,
        x: i16,
        y: i16,
        length: u16,
        color: BinaryColor,
    ) -> Result<(), DisplayError> {
        self.fill_rect(x, y, length, 1, color)
    }

    /// Draw a vertical line
    fn draw_vline(
        &mut self,
        x: i16,
        y: i16,
        length: u16,
        color: BinaryColor,
    ) -> Result<(), DisplayError> {
        self.fill_rect(x, y, 1, length, color)
    }

    /// Draw the set bits of a bitmap with the given polarity
    ///
    /// Clear bits are transparent: the pixels under them are left alone.
    fn blit(
        &mut self,
        x: i16,
        y: i16,
        bitmap: &Bitmap<'_>,
        color: BinaryColor,
    ) -> Result<(), DisplayError>;

    /// Write one glyph at the cursor and advance it
    fn write_char(&mut self, ch: char) -> Result<(), DisplayError>;

    /// Write a string glyph by glyph
    fn write_str(&mut self, text: &str) -> Result<(), DisplayError> {
        for ch in text.chars() {
            self.write_char(ch)?;
        }
        Ok(())
    }

    /// Move the text cursor
    fn set_cursor(&mut self, x: i16, y: i16);

    /// Get the text cursor as (x, y)
    fn cursor(&self) -> (i16, i16);

    /// Set the polarity used for subsequent glyphs
    fn set_text_color(&mut self, color: BinaryColor);

    /// Clear the working buffer without committing
    fn clear_display(&mut self) -> Result<(), DisplayError> {
        let (width, height) = self.pixel_dimensions();
        self.fill_rect(0, 0, width, height, BinaryColor::Off)
    }

    /// Push the working buffer to the device
    fn commit(&mut self) -> Result<(), DisplayError>;
}

impl<T: Canvas + ?Sized> Canvas for &mut T {
    fn pixel_dimensions(&self) -> (u16, u16) {
        (**self).pixel_dimensions()
    }

    fn fill_rect(
        &mut self,
        x: i16,
        y: i16,
        width: u16,
        height: u16,
        color: BinaryColor,
    ) -> Result<(), DisplayError> {
        (**self).fill_rect(x, y, width, height, color)
    }

    fn draw_line(
        &mut self,
        x0: i16,
        y0: i16,
        x1: i16,
        y1: i16,
        color: BinaryColor,
    ) -> Result<(), DisplayError> {
        (**self).draw_line(x0, y0, x1, y1, color)
    }

    fn draw_hline(
        &mut self,
        x: i16,
        y: i16,
        length: u16,
        color: BinaryColor,
    ) -> Result<(), DisplayError> {
        (**self).draw_hline(x, y, length, color)
    }

    fn draw_vline(
        &mut self,
        x: i16,
        y: i16,
        length: u16,
        color: BinaryColor,
    ) -> Result<(), DisplayError> {
        (**self).draw_vline(x, y, length, color)
    }

    fn blit(
        &mut self,
        x: i16,
        y: i16,
        bitmap: &Bitmap<'_>,
        color: BinaryColor,
    ) -> Result<(), DisplayError> {
        (**self).blit(x, y, bitmap, color)
    }

    fn write_char(&mut self, ch: char) -> Result<(), DisplayError> {
        (**self).write_char(ch)
    }

    fn write_str(&mut self, text: &str) -> Result<(), DisplayError> {
        (**self).write_str(text)
    }

    fn set_cursor(&mut self, x: i16, y: i16) {
        (**self).set_cursor(x, y)
    }

    fn cursor(&self) -> (i16, i16) {
        (**self).cursor()
    }

    fn set_text_color(&mut self, color: BinaryColor) {
        (**self).set_text_color(color)
    }

    fn clear_display(&mut self) -> Result<(), DisplayError> {
        (**self).clear_display()
    }

    fn commit(&mut self) -> Result<(), DisplayError> {
        (**self).commit()
    }
}
