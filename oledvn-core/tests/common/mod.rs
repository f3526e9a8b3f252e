//! Test doubles shared by the integration tests

#![allow(dead_code)]

use oledvn_core::traits::{Clock, InputError, InputSource};
use oledvn_display::{BinaryColor, Bitmap, Canvas, DisplayError, FrameBuffer};

/// Canvas call as seen by the recorder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Fill { x: i16, y: i16, width: u16, height: u16, color: BinaryColor },
    Line { x0: i16, y0: i16, x1: i16, y1: i16, color: BinaryColor },
    Blit { x: i16, y: i16, color: BinaryColor },
    Glyph { ch: char, color: BinaryColor },
    SetCursor(i16, i16),
    Commit,
}

/// Frame buffer that records every call and snapshots every commit
pub struct RecordingCanvas {
    pub fb: FrameBuffer,
    pub ops: Vec<Op>,
    pub frames: Vec<Vec<u8>>,
    pub fail_commits_after: Option<usize>,
    text_color: BinaryColor,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self {
            fb: FrameBuffer::new(),
            ops: Vec::new(),
            frames: Vec::new(),
            fail_commits_after: None,
            text_color: BinaryColor::On,
        }
    }

    pub fn commits(&self) -> usize {
        self.frames.len()
    }

    /// Glyphs written in the "on" polarity, in order
    pub fn lit_glyphs(&self) -> String {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Glyph { ch, color: BinaryColor::On } => Some(*ch),
                _ => None,
            })
            .collect()
    }

    /// Indices into `ops` where the cursor jumped to (x, y)
    pub fn cursor_jumps(&self, x: i16, y: i16) -> Vec<usize> {
        self.ops
            .iter()
            .enumerate()
            .filter(|(_, op)| **op == Op::SetCursor(x, y))
            .map(|(i, _)| i)
            .collect()
    }

    /// Blits in the given polarity, in order
    pub fn blits(&self, color: BinaryColor) -> Vec<(i16, i16)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Blit { x, y, color: c } if *c == color => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn pixel_dimensions(&self) -> (u16, u16) {
        self.fb.pixel_dimensions()
    }

    fn fill_rect(
        &mut self,
        x: i16,
        y: i16,
        width: u16,
        height: u16,
        color: BinaryColor,
    ) -> Result<(), DisplayError> {
        self.ops.push(Op::Fill { x, y, width, height, color });
        self.fb.fill_rect(x, y, width, height, color)
    }

    fn draw_line(
        &mut self,
        x0: i16,
        y0: i16,
        x1: i16,
        y1: i16,
        color: BinaryColor,
    ) -> Result<(), DisplayError> {
        self.ops.push(Op::Line { x0, y0, x1, y1, color });
        self.fb.draw_line(x0, y0, x1, y1, color)
    }

    fn blit(
        &mut self,
        x: i16,
        y: i16,
        bitmap: &Bitmap<'_>,
        color: BinaryColor,
    ) -> Result<(), DisplayError> {
        self.ops.push(Op::Blit { x, y, color });
        self.fb.blit(x, y, bitmap, color)
    }

    fn write_char(&mut self, ch: char) -> Result<(), DisplayError> {
        self.ops.push(Op::Glyph { ch, color: self.text_color });
        self.fb.write_char(ch)
    }

    fn set_cursor(&mut self, x: i16, y: i16) {
        self.ops.push(Op::SetCursor(x, y));
        self.fb.set_cursor(x, y)
    }

    fn cursor(&self) -> (i16, i16) {
        self.fb.cursor()
    }

    fn set_text_color(&mut self, color: BinaryColor) {
        self.text_color = color;
        self.fb.set_text_color(color)
    }

    fn commit(&mut self) -> Result<(), DisplayError> {
        if let Some(limit) = self.fail_commits_after {
            if self.frames.len() >= limit {
                return Err(DisplayError::Communication);
            }
        }
        self.ops.push(Op::Commit);
        self.fb.commit()?;
        self.frames.push(self.fb.front_buffer().to_vec());
        Ok(())
    }
}

/// Clock that only advances when asked to delay
#[derive(Default)]
pub struct SimClock {
    pub now: u64,
    pub delays: Vec<u32>,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays other than gate poll sleeps
    pub fn frame_delays(&self, poll_ms: u32) -> Vec<u32> {
        self.delays.iter().copied().filter(|&d| d != poll_ms).collect()
    }
}

impl Clock for SimClock {
    fn now_ms(&self) -> u64 {
        self.now
    }

    fn delay_ms(&mut self, ms: u32) {
        self.now += u64::from(ms);
        self.delays.push(ms);
    }
}

/// Input that reports a press after a fixed number of polls per gate
pub struct ScriptedInput {
    /// Polls answered "nothing pending" before a press; `None` never presses
    pub press_after: Option<u32>,
    pub polls_since_drain: u32,
    pub drains: u32,
    pub fail: bool,
    /// Polls answered before every further poll fails
    pub fail_after_polls: Option<u32>,
    pub polls: u32,
}

impl ScriptedInput {
    pub fn immediate() -> Self {
        Self::after(0)
    }

    pub fn after(polls: u32) -> Self {
        Self {
            press_after: Some(polls),
            polls_since_drain: 0,
            drains: 0,
            fail: false,
            fail_after_polls: None,
            polls: 0,
        }
    }

    pub fn never() -> Self {
        Self {
            press_after: None,
            ..Self::immediate()
        }
    }
}

impl InputSource for ScriptedInput {
    fn has_pending(&mut self) -> Result<bool, InputError> {
        let failing = matches!(self.fail_after_polls, Some(limit) if self.polls >= limit);
        if self.fail || failing {
            return Err(InputError::Read);
        }
        self.polls += 1;
        let polls = self.polls_since_drain;
        self.polls_since_drain += 1;
        Ok(matches!(self.press_after, Some(after) if polls >= after))
    }

    fn drain(&mut self) -> Result<(), InputError> {
        self.polls_since_drain = 0;
        self.drains += 1;
        Ok(())
    }
}

/// Row-major test image: every byte of row `y` is `y as u8`
pub fn row_pattern(width: u16, height: u16) -> Vec<u8> {
    let row_bytes = Bitmap::row_bytes(width);
    (0..height)
        .flat_map(|y| std::iter::repeat(y as u8).take(row_bytes))
        .collect()
}
