//! Configuration type definitions
//!
//! Each struct resolves its optional fields through accessor methods so
//! the engines never see an unresolved value.

use heapless::String;

use super::defaults::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum indicator length in bytes
pub const MAX_INDICATOR_LEN: usize = 8;

/// How a click-to-continue wait may end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WaitMode {
    /// Only an input event ends the wait
    #[default]
    Input,
    /// An input event or the configured timeout ends the wait
    InputOrTimeout,
}

/// How the dialog body is revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RevealMode {
    /// Whole body in one frame
    Instant,
    /// `text_speed` characters per frame
    #[default]
    Typewriter,
}

/// Vertical scroll parameters
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollParams {
    /// Hold after the first frame before scrolling
    pub initial_delay_ms: Option<u32>,
    /// Hold on the final frame
    pub end_delay_ms: Option<u32>,
    /// Delay per scroll step
    pub step_delay_ms: Option<u32>,
    /// Pixels per step; positive scrolls down, negative scrolls up
    pub step: i16,
    /// Stop stepping once less than a full step remains and land on the
    /// target with the final frame, instead of decaying to 1-pixel steps
    pub snap_to_end: bool,
    /// Allow the target to run past the bitmap bounds
    pub allow_overflow: bool,
    /// Bitmap x position
    pub offset_x: i16,
    /// Bitmap y position at the start of the scroll
    pub offset_y: i16,
    /// Requested stop row; `<= 0` scrolls down to the bitmap bottom
    pub end_y: i16,
}

impl Default for ScrollParams {
    fn default() -> Self {
        Self {
            initial_delay_ms: None,
            end_delay_ms: None,
            step_delay_ms: None,
            step: 1,
            snap_to_end: false,
            allow_overflow: false,
            offset_x: 0,
            offset_y: 0,
            end_y: 0,
        }
    }
}

impl ScrollParams {
    /// Resolved hold before scrolling
    pub fn initial_delay_ms(&self) -> u32 {
        self.initial_delay_ms
            .unwrap_or(DEFAULT_SCROLL_INITIAL_DELAY_MS)
    }

    /// Resolved hold on the final frame
    pub fn end_delay_ms(&self) -> u32 {
        self.end_delay_ms.unwrap_or(DEFAULT_SCROLL_END_DELAY_MS)
    }

    /// Resolved delay per step
    pub fn step_delay_ms(&self) -> u32 {
        self.step_delay_ms.unwrap_or(DEFAULT_SCROLL_STEP_DELAY_MS)
    }
}

/// Dialog box configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DialogConfig {
    /// Characters per reveal step (0 or `None` uses the default)
    pub text_speed: Option<u8>,
    /// Delay per reveal step
    pub char_delay_ms: Option<u32>,
    /// Hold after drawing the header
    pub header_delay_ms: Option<u32>,
    /// Timeout for gates in `InputOrTimeout` mode
    pub timeout_ms: Option<u32>,
    /// Instant or typewriter reveal
    pub reveal: RevealMode,
    /// Gate used at pause markers
    pub mid_wait: WaitMode,
    /// Gate used after the last character
    pub end_wait: WaitMode,
    /// Pause marker character
    pub marker: char,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            text_speed: None,
            char_delay_ms: None,
            header_delay_ms: None,
            timeout_ms: None,
            reveal: RevealMode::Typewriter,
            mid_wait: WaitMode::Input,
            end_wait: WaitMode::Input,
            marker: DEFAULT_PAUSE_MARKER,
        }
    }
}

impl DialogConfig {
    /// Resolved characters per step, never zero
    pub fn text_speed(&self) -> u8 {
        match self.text_speed {
            Some(0) | None => DEFAULT_TEXT_SPEED,
            Some(speed) => speed,
        }
    }

    /// Resolved delay per reveal step
    pub fn char_delay_ms(&self) -> u32 {
        self.char_delay_ms.unwrap_or(DEFAULT_CHAR_DELAY_MS)
    }

    /// Resolved hold after the header
    pub fn header_delay_ms(&self) -> u32 {
        self.header_delay_ms.unwrap_or(DEFAULT_HEADER_DELAY_MS)
    }

    /// Timeout to race against input for the given mode
    pub fn gate_timeout(&self, mode: WaitMode) -> Option<u32> {
        match mode {
            WaitMode::Input => None,
            WaitMode::InputOrTimeout => Some(self.timeout_ms.unwrap_or(DEFAULT_GATE_TIMEOUT_MS)),
        }
    }
}

/// Click-to-continue indicator and polling configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CtcConfig {
    /// Indicator glyphs
    pub indicator: String<MAX_INDICATOR_LEN>,
    /// Indicator x position
    pub indicator_x: i16,
    /// Indicator y position
    pub indicator_y: i16,
    /// Time between indicator toggles
    pub blink_ms: u32,
    /// Sleep between input polls; 0 is treated as 1
    pub poll_ms: u32,
}

impl Default for CtcConfig {
    fn default() -> Self {
        let mut indicator = String::new();
        let _ = indicator.push_str(DEFAULT_INDICATOR);
        Self {
            indicator,
            indicator_x: DEFAULT_INDICATOR_X,
            indicator_y: DEFAULT_INDICATOR_Y,
            blink_ms: DEFAULT_BLINK_MS,
            poll_ms: DEFAULT_POLL_MS,
        }
    }
}

impl CtcConfig {
    /// Sleep between input polls, at least 1 ms
    pub fn poll_interval_ms(&self) -> u32 {
        self.poll_ms.max(1)
    }
}
