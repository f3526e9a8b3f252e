//! Scroll offset planning
//!
//! Offsets are the y coordinate the bitmap is drawn at. Scrolling down
//! moves it towards negative y; scrolling up moves it back towards zero.

use crate::config::ScrollParams;
use crate::error::Error;

/// Scroll direction, from the sign of the step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollDirection {
    /// Reveal rows further down the bitmap
    Down,
    /// Reveal rows further up the bitmap
    Up,
}

/// Sequence of intermediate draw offsets for one scroll
///
/// Iterating yields each offset to draw after the starting frame. The
/// final frame is always drawn at [`ScrollPlan::target`], which the
/// iterator may stop short of when snapping.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScrollPlan {
    direction: ScrollDirection,
    position: i16,
    target: i16,
    step: i16,
    snap_to_end: bool,
    viewport: u16,
}

impl ScrollPlan {
    /// Resolve the stop row and build the plan
    ///
    /// Down (`step > 0`): the viewport bottom stops at the bitmap bottom
    /// when `end_y <= 0`, or when `end_y + viewport` would pass it and
    /// overflow is disallowed; otherwise at `end_y + viewport`.
    ///
    /// Up (`step < 0`): the viewport top stops at `end_y`, clamped to
    /// `[0, bitmap_height - viewport]` unless overflow is allowed.
    ///
    /// A zero step is rejected.
    pub fn new(params: &ScrollParams, bitmap_height: u16, viewport: u16) -> Result<Self, Error> {
        if params.step == 0 {
            return Err(Error::InvalidParameter);
        }

        let height = i32::from(bitmap_height);
        let view = i32::from(viewport);
        let end_y = i32::from(params.end_y);
        let overflow = params.allow_overflow;

        let (direction, target) = if params.step > 0 {
            let bottom = if end_y <= 0 || (end_y + view > height && !overflow) {
                height
            } else {
                end_y + view
            };
            (ScrollDirection::Down, view - bottom)
        } else {
            let top = if end_y + view > height && !overflow {
                height - view
            } else if end_y < 0 && !overflow {
                0
            } else {
                end_y
            };
            (ScrollDirection::Up, -top)
        };

        // Bitmaps shorter than the viewport have nowhere to scroll to
        let target = if overflow {
            target
        } else {
            target.clamp((view - height).min(0), 0)
        };
        let target = i16::try_from(target).map_err(|_| Error::InvalidParameter)?;

        Ok(Self {
            direction,
            position: params.offset_y,
            target,
            step: params.step.saturating_abs(),
            snap_to_end: params.snap_to_end,
            viewport,
        })
    }

    /// Scroll direction
    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    /// Offset of the final frame
    pub fn target(&self) -> i16 {
        self.target
    }

    /// Bitmap row shown at the top of the viewport in the final frame
    pub fn target_row(&self) -> i32 {
        -i32::from(self.target)
    }

    /// Bitmap row just below the viewport in the final frame
    pub fn viewport_end(&self) -> i32 {
        self.target_row() + i32::from(self.viewport)
    }

    /// Offset most recently yielded (or the start offset)
    pub fn position(&self) -> i16 {
        self.position
    }

    /// Pixels left between the current position and the target
    pub fn remaining(&self) -> i32 {
        let distance = i32::from(self.position) - i32::from(self.target);
        match self.direction {
            ScrollDirection::Down => distance.max(0),
            ScrollDirection::Up => (-distance).max(0),
        }
    }
}

impl Iterator for ScrollPlan {
    type Item = i16;

    fn next(&mut self) -> Option<i16> {
        let remaining = self.remaining();
        if remaining == 0 {
            return None;
        }

        let advance = if remaining >= i32::from(self.step) {
            self.step
        } else if !self.snap_to_end {
            1
        } else {
            // Leave the last partial step to the final frame
            self.position = self.target;
            return None;
        };

        self.position = match self.direction {
            ScrollDirection::Down => self.position - advance,
            ScrollDirection::Up => self.position + advance,
        };
        Some(self.position)
    }
}
