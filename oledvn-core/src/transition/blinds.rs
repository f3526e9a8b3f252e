//! Stroke kinds and step grouping

use oledvn_display::{BinaryColor, Canvas, DisplayError};

/// Full-length line used as the masking unit of a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stroke {
    /// Vertical line at x = j
    Column,
    /// Horizontal line at y = j
    Row,
    /// Line from (0, j) to (j, 0)
    Diagonal,
}

impl Stroke {
    /// Number of strokes needed to cover a canvas of the given size
    pub const fn extent(self, (width, height): (u16, u16)) -> u16 {
        match self {
            Stroke::Column => width,
            Stroke::Row => height,
            Stroke::Diagonal => width + height,
        }
    }

    /// Draw stroke `j` spanning the whole canvas
    pub fn draw<C: Canvas>(self, canvas: &mut C, j: i16, color: BinaryColor) -> Result<(), DisplayError> {
        let (width, height) = canvas.pixel_dimensions();
        match self {
            Stroke::Column => canvas.draw_vline(j, 0, height, color),
            Stroke::Row => canvas.draw_hline(0, j, width, color),
            Stroke::Diagonal => canvas.draw_line(0, j, j, 0, color),
        }
    }
}

/// Stroke indices drawn in step `step` of a `cycles`-step fade
///
/// Yields `step, step + cycles, step + 2*cycles, ...` below `extent`.
/// `cycles` must be non-zero.
pub fn blind_group(extent: u16, cycles: u16, step: u16) -> impl Iterator<Item = i16> {
    (step..extent)
        .step_by(usize::from(cycles.max(1)))
        .map(|j| j as i16)
}
