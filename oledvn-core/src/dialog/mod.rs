//! Visual-novel dialog box
//!
//! The panel is split into a header band (rows 0-15) holding the speaker
//! label and a body band (rows 16-63) holding the text. A dialog draws the
//! header, reveals the body, and always ends on a click-to-continue gate so
//! the caller can clear and advance once the player acknowledges.

mod script;

pub use script::{DialogScript, RevealChunks};

use oledvn_display::{BinaryColor, Canvas};

use crate::config::{
    CtcConfig, DialogConfig, RevealMode, WaitMode, BODY_HEIGHT, BODY_TOP, CLEAR_SETTLE_MS,
    HEADER_HEIGHT, HEADER_TOP, INSTANT_SETTLE_MS,
};
use crate::ctc;
use crate::error::Error;
use crate::pacing::present;
use crate::traits::{Clock, InputSource};

/// Phase of one dialog invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DialogPhase {
    /// Draw the header label and hold
    ShowHeader,
    /// Reveal the body and run the terminal gate
    RevealBody,
    /// Finished
    Done,
}

impl DialogPhase {
    /// Phase that follows this one
    pub fn next(self) -> Self {
        match self {
            DialogPhase::ShowHeader => DialogPhase::RevealBody,
            DialogPhase::RevealBody | DialogPhase::Done => DialogPhase::Done,
        }
    }
}

/// Dialog engine
#[derive(Debug, Clone, Default)]
pub struct Dialog {
    config: DialogConfig,
    gate: CtcConfig,
}

impl Dialog {
    /// Create a dialog engine with the given reveal and gate settings
    pub fn new(config: DialogConfig, gate: CtcConfig) -> Self {
        Self { config, gate }
    }

    /// Reveal settings
    pub fn config(&self) -> &DialogConfig {
        &self.config
    }

    /// Gate settings
    pub fn gate(&self) -> &CtcConfig {
        &self.gate
    }

    /// Show `header` and reveal `body`, pausing at each marker
    ///
    /// Returns once the terminal gate has been satisfied or timed out.
    pub fn show<C, I, K>(
        &self,
        canvas: &mut C,
        input: &mut I,
        clock: &mut K,
        header: &str,
        body: &str,
    ) -> Result<(), Error>
    where
        C: Canvas,
        I: InputSource,
        K: Clock,
    {
        let script = DialogScript::new(body, self.config.marker);
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "dialog: {} glyphs, {} pauses",
            script.glyph_count(),
            script.pause_count()
        );
        let mut phase = DialogPhase::ShowHeader;
        while phase != DialogPhase::Done {
            #[cfg(feature = "defmt")]
            defmt::trace!("dialog phase {}", phase);
            match phase {
                DialogPhase::ShowHeader => self.show_header(canvas, clock, header)?,
                DialogPhase::RevealBody => self.reveal_body(canvas, input, clock, &script)?,
                DialogPhase::Done => {}
            }
            phase = phase.next();
        }
        Ok(())
    }

    fn show_header<C, K>(&self, canvas: &mut C, clock: &mut K, header: &str) -> Result<(), Error>
    where
        C: Canvas,
        K: Clock,
    {
        canvas.set_cursor(0, HEADER_TOP);
        canvas.write_str(header)?;
        present(canvas, clock, self.config.header_delay_ms())
    }

    fn reveal_body<C, I, K>(
        &self,
        canvas: &mut C,
        input: &mut I,
        clock: &mut K,
        script: &DialogScript<'_>,
    ) -> Result<(), Error>
    where
        C: Canvas,
        I: InputSource,
        K: Clock,
    {
        canvas.set_cursor(0, BODY_TOP);
        match self.config.reveal {
            RevealMode::Instant => {
                for segment in script.segments() {
                    canvas.write_str(segment)?;
                }
                present(canvas, clock, INSTANT_SETTLE_MS)?;
            }
            RevealMode::Typewriter => self.typewrite(canvas, input, clock, script)?,
        }
        self.pause(canvas, input, clock, self.config.end_wait)
    }

    fn typewrite<C, I, K>(
        &self,
        canvas: &mut C,
        input: &mut I,
        clock: &mut K,
        script: &DialogScript<'_>,
    ) -> Result<(), Error>
    where
        C: Canvas,
        I: InputSource,
        K: Clock,
    {
        let char_delay_ms = self.config.char_delay_ms();
        for chunk in script.chunks(self.config.text_speed()) {
            let mut unflushed = false;
            for ch in chunk.chars() {
                if script.is_marker(ch) {
                    present(canvas, clock, char_delay_ms)?;
                    self.pause(canvas, input, clock, self.config.mid_wait)?;
                    unflushed = false;
                } else {
                    canvas.write_char(ch)?;
                    unflushed = true;
                }
            }
            if unflushed {
                present(canvas, clock, char_delay_ms)?;
            }
        }
        Ok(())
    }

    fn pause<C, I, K>(
        &self,
        canvas: &mut C,
        input: &mut I,
        clock: &mut K,
        mode: WaitMode,
    ) -> Result<(), Error>
    where
        C: Canvas,
        I: InputSource,
        K: Clock,
    {
        let timeout_ms = self.config.gate_timeout(mode);
        ctc::wait(canvas, input, clock, &self.gate, timeout_ms)?;
        Ok(())
    }
}

/// Erase the header band (rows 0-15)
pub fn clear_header<C, K>(canvas: &mut C, clock: &mut K) -> Result<(), Error>
where
    C: Canvas,
    K: Clock,
{
    let (width, _) = canvas.pixel_dimensions();
    canvas.fill_rect(0, HEADER_TOP, width, HEADER_HEIGHT, BinaryColor::Off)?;
    present(canvas, clock, CLEAR_SETTLE_MS)
}

/// Erase the body band (rows 16-63)
pub fn clear_body<C, K>(canvas: &mut C, clock: &mut K) -> Result<(), Error>
where
    C: Canvas,
    K: Clock,
{
    let (width, _) = canvas.pixel_dimensions();
    canvas.fill_rect(0, BODY_TOP, width, BODY_HEIGHT, BinaryColor::Off)?;
    present(canvas, clock, CLEAR_SETTLE_MS)
}
