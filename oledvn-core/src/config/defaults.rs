//! Default timing table
//!
//! | operation                  | parameter          | default          |
//! |----------------------------|--------------------|------------------|
//! | grid / cross fade          | step delay         | 50 ms            |
//! | vertical blinds            | cycles, total      | 4, 10 ms × cycles|
//! | horizontal blinds          | cycles, total      | 3, 10 ms × cycles|
//! | diagonal blinds            | cycles, total      | 4, 25 ms × cycles|
//! | bitmap grid fade-in        | initial delay      | 500 ms           |
//! | interlaced fill            | pass pause         | 5 ms             |
//! | vertical scroll            | initial, end, step | 500, 500, 5 ms   |
//! | dialog                     | speed, char, header| 1, 10 ms, 200 ms |
//! | dialog gate                | timeout            | 10 000 ms        |
//! | band clears                | settle             | 1 ms             |
//! | click-to-continue          | blink, poll        | 500 ms, 5 ms     |

/// Grid and cross fade delay per step (ms)
pub const DEFAULT_FADE_DELAY_MS: u32 = 50;

/// Vertical blind fade step count
pub const DEFAULT_VERTICAL_CYCLES: u16 = 4;

/// Horizontal blind fade step count
pub const DEFAULT_HORIZONTAL_CYCLES: u16 = 3;

/// Diagonal blind fade step count
pub const DEFAULT_DIAGONAL_CYCLES: u16 = 4;

/// Vertical/horizontal blind total duration per cycle (ms)
pub const BLIND_MS_PER_CYCLE: u32 = 10;

/// Diagonal blind total duration per cycle (ms)
pub const DIAGONAL_MS_PER_CYCLE: u32 = 25;

/// Pause between bitmap fade-in's initial fill and the reveal (ms)
pub const DEFAULT_BITMAP_INIT_DELAY_MS: u32 = 500;

/// Pause after each interlaced fill pass (ms)
pub const INTERLACE_PASS_DELAY_MS: u32 = 5;

/// Scroll: hold before the first step (ms)
pub const DEFAULT_SCROLL_INITIAL_DELAY_MS: u32 = 500;

/// Scroll: hold on the final frame (ms)
pub const DEFAULT_SCROLL_END_DELAY_MS: u32 = 500;

/// Scroll: delay per step (ms)
pub const DEFAULT_SCROLL_STEP_DELAY_MS: u32 = 5;

/// Dialog: characters revealed per step
pub const DEFAULT_TEXT_SPEED: u8 = 1;

/// Dialog: delay per reveal step (ms)
pub const DEFAULT_CHAR_DELAY_MS: u32 = 10;

/// Dialog: hold after the header label (ms)
pub const DEFAULT_HEADER_DELAY_MS: u32 = 200;

/// Dialog: timeout for timed gates (ms)
pub const DEFAULT_GATE_TIMEOUT_MS: u32 = 10_000;

/// Dialog: settle delay after an instant body write (ms)
pub const INSTANT_SETTLE_MS: u32 = 1;

/// Settle delay after clearing the header or body band (ms)
pub const CLEAR_SETTLE_MS: u32 = 1;

/// Click-to-continue: indicator blink half-period (ms)
pub const DEFAULT_BLINK_MS: u32 = 500;

/// Click-to-continue: sleep between input polls (ms)
pub const DEFAULT_POLL_MS: u32 = 5;

/// Click-to-continue: indicator glyphs
pub const DEFAULT_INDICATOR: &str = ">>";

/// Click-to-continue: indicator position, bottom-right corner
pub const DEFAULT_INDICATOR_X: i16 = 116;
pub const DEFAULT_INDICATOR_Y: i16 = 56;

/// Character that pauses a dialog for click-to-continue
pub const DEFAULT_PAUSE_MARKER: char = '`';

/// Header band: rows 0..16
pub const HEADER_TOP: i16 = 0;
pub const HEADER_HEIGHT: u16 = 16;

/// Body band: rows 16..64
pub const BODY_TOP: i16 = 16;
pub const BODY_HEIGHT: u16 = 48;
