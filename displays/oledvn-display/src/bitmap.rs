//! 1-bit bitmap value type
//!
//! Row-major, most significant bit first, each row padded to a whole byte.
//! This matches the layout produced by the usual image-to-C-array tools.

use crate::backend::DisplayError;

/// Borrowed 1-bit image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bitmap<'a> {
    data: &'a [u8],
    width: u16,
    height: u16,
}

impl<'a> Bitmap<'a> {
    /// Create a bitmap, checking the buffer against the dimensions
    ///
    /// Fails with [`DisplayError::MalformedBitmap`] unless
    /// `data.len() == ceil(width / 8) * height`.
    pub fn new(data: &'a [u8], width: u16, height: u16) -> Result<Self, DisplayError> {
        if data.len() != Self::buffer_len(width, height) {
            return Err(DisplayError::MalformedBitmap);
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Bytes per row for a given pixel width
    pub const fn row_bytes(width: u16) -> usize {
        (width as usize).div_ceil(8)
    }

    /// Required buffer length for the given dimensions
    pub const fn buffer_len(width: u16, height: u16) -> usize {
        Self::row_bytes(width) * height as usize
    }

    /// Width in pixels
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Raw bit buffer
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Check whether the bit at (x, y) is set
    ///
    /// Out-of-range coordinates read as clear.
    pub fn pixel(&self, x: u16, y: u16) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y as usize * Self::row_bytes(self.width) + x as usize / 8;
        self.data[index] & (0x80 >> (x % 8)) != 0
    }

    /// Iterate the coordinates of every set bit, row by row
    pub fn set_pixels(&self) -> impl Iterator<Item = (u16, u16)> + 'a {
        let bitmap = *self;
        (0..bitmap.height).flat_map(move |y| {
            (0..bitmap.width).filter_map(move |x| bitmap.pixel(x, y).then_some((x, y)))
        })
    }
}
