//! Vertical bitmap scrolling
//!
//! Scrolls a bitmap taller than the panel through the viewport: erase at
//! the old offset, draw at the new one, commit, hold. The last frame is
//! always drawn exactly at the resolved target.

mod plan;

pub use plan::{ScrollDirection, ScrollPlan};

use oledvn_display::{BinaryColor, Bitmap, Canvas};

use crate::config::ScrollParams;
use crate::error::Error;
use crate::pacing::present;
use crate::traits::Clock;

/// Draw a bitmap, then scroll it vertically to the requested row
///
/// Returns the plan as consumed, so callers can chain a scroll in the
/// opposite direction from [`ScrollPlan::target`].
pub fn scroll_vertical<C, K>(
    canvas: &mut C,
    clock: &mut K,
    params: &ScrollParams,
    bitmap: &Bitmap<'_>,
) -> Result<ScrollPlan, Error>
where
    C: Canvas,
    K: Clock,
{
    let (_, viewport) = canvas.pixel_dimensions();
    let mut plan = ScrollPlan::new(params, bitmap.height(), viewport)?;
    #[cfg(feature = "defmt")]
    defmt::debug!(
        "scroll {} from y={} to y={} step={}",
        plan.direction(),
        params.offset_y,
        plan.target(),
        params.step
    );

    let x = params.offset_x;
    let mut current = params.offset_y;
    canvas.blit(x, current, bitmap, BinaryColor::On)?;
    present(canvas, clock, params.initial_delay_ms())?;

    let step_delay_ms = params.step_delay_ms();
    for next in plan.by_ref() {
        canvas.blit(x, current, bitmap, BinaryColor::Off)?;
        canvas.blit(x, next, bitmap, BinaryColor::On)?;
        present(canvas, clock, step_delay_ms)?;
        current = next;
    }

    if current != plan.target() {
        canvas.blit(x, current, bitmap, BinaryColor::Off)?;
    }
    canvas.blit(x, plan.target(), bitmap, BinaryColor::On)?;
    present(canvas, clock, params.end_delay_ms())?;

    Ok(plan)
}
