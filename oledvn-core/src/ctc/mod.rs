//! Click-to-continue gate
//!
//! Blocks until an acknowledgement arrives (or, in the timed variant, the
//! timeout elapses) while blinking an indicator in the corner. On exit the
//! indicator is erased and the caller's text cursor and color are restored.

mod gate;

pub use gate::{GateOutcome, GateState};

use oledvn_display::{BinaryColor, Canvas};

use crate::config::CtcConfig;
use crate::error::Error;
use crate::traits::{Clock, InputSource};

/// Wait for input only
pub fn wait_for_input<C, I, K>(
    canvas: &mut C,
    input: &mut I,
    clock: &mut K,
    config: &CtcConfig,
) -> Result<GateOutcome, Error>
where
    C: Canvas,
    I: InputSource,
    K: Clock,
{
    wait(canvas, input, clock, config, None)
}

/// Wait for input or `timeout_ms`, whichever comes first
pub fn wait_for_input_or_timeout<C, I, K>(
    canvas: &mut C,
    input: &mut I,
    clock: &mut K,
    config: &CtcConfig,
    timeout_ms: u32,
) -> Result<GateOutcome, Error>
where
    C: Canvas,
    I: InputSource,
    K: Clock,
{
    wait(canvas, input, clock, config, Some(timeout_ms))
}

/// Run one gate to completion
///
/// Stale input is drained before waiting so an earlier keypress cannot
/// satisfy the gate, and drained again afterwards for the next gate. The
/// indicator is erased and the cursor and text color restored even when
/// the wait fails; the first error is returned.
pub fn wait<C, I, K>(
    canvas: &mut C,
    input: &mut I,
    clock: &mut K,
    config: &CtcConfig,
    timeout_ms: Option<u32>,
) -> Result<GateOutcome, Error>
where
    C: Canvas,
    I: InputSource,
    K: Clock,
{
    let cursor = canvas.cursor();
    let waited = poll_until_done(canvas, input, clock, config, timeout_ms);
    let released = release(canvas, input, config, cursor);

    let outcome = waited?;
    released?;
    #[cfg(feature = "defmt")]
    defmt::debug!("ctc gate finished: {}", outcome);
    Ok(outcome)
}

fn poll_until_done<C, I, K>(
    canvas: &mut C,
    input: &mut I,
    clock: &mut K,
    config: &CtcConfig,
    timeout_ms: Option<u32>,
) -> Result<GateOutcome, Error>
where
    C: Canvas,
    I: InputSource,
    K: Clock,
{
    input.drain()?;

    let poll_ms = config.poll_interval_ms();
    let mut state = GateState::start(clock.now_ms());
    loop {
        let pending = input.has_pending()?;
        let (next, blink) = state.poll(pending, clock.now_ms(), timeout_ms, config.blink_ms);
        state = next;
        if let Some(color) = blink {
            draw_indicator(canvas, config, color)?;
        }
        if let Some(outcome) = state.outcome() {
            return Ok(outcome);
        }
        clock.delay_ms(poll_ms);
    }
}

/// Erase the indicator, drain input and restore the caller's text state
fn release<C, I>(
    canvas: &mut C,
    input: &mut I,
    config: &CtcConfig,
    (cursor_x, cursor_y): (i16, i16),
) -> Result<(), Error>
where
    C: Canvas,
    I: InputSource,
{
    let erased = draw_indicator(canvas, config, BinaryColor::Off);
    let drained = input.drain().map_err(Error::from);
    canvas.set_cursor(cursor_x, cursor_y);
    canvas.set_text_color(BinaryColor::On);
    erased.and(drained)
}

fn draw_indicator<C: Canvas>(canvas: &mut C, config: &CtcConfig, color: BinaryColor) -> Result<(), Error> {
    canvas.set_cursor(config.indicator_x, config.indicator_y);
    canvas.set_text_color(color);
    canvas.write_str(&config.indicator)?;
    canvas.commit()?;
    Ok(())
}
