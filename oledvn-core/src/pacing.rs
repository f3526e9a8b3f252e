//! Commit-then-delay frame pacing shared by the engines

use oledvn_display::Canvas;

use crate::error::Error;
use crate::traits::Clock;

/// Commit the working buffer and hold the frame for `delay_ms`
pub(crate) fn present<C, K>(canvas: &mut C, clock: &mut K, delay_ms: u32) -> Result<(), Error>
where
    C: Canvas,
    K: Clock,
{
    canvas.commit()?;
    clock.delay_ms(delay_ms);
    Ok(())
}
