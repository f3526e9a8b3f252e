//! Full-screen transitions
//!
//! Fades are built from one primitive: stroke a set of columns, rows or
//! anti-diagonals in the target polarity, then commit and hold. Fading out
//! appends a final clear step.

mod blinds;

pub use blinds::{blind_group, Stroke};

use oledvn_display::{BinaryColor, Bitmap, Canvas};

use crate::config::{
    BLIND_MS_PER_CYCLE, DEFAULT_BITMAP_INIT_DELAY_MS, DEFAULT_DIAGONAL_CYCLES,
    DEFAULT_FADE_DELAY_MS, DEFAULT_HORIZONTAL_CYCLES, DEFAULT_VERTICAL_CYCLES,
    DIAGONAL_MS_PER_CYCLE, INTERLACE_PASS_DELAY_MS,
};
use crate::error::Error;
use crate::pacing::present;
use crate::traits::Clock;

/// Fade direction, named by the state the screen ends in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FadeState {
    /// Off to on: strokes are drawn lit
    On,
    /// On to off: strokes are drawn dark, then the canvas is cleared
    Off,
}

impl FadeState {
    /// Stroke polarity
    pub const fn color(self) -> BinaryColor {
        match self {
            FadeState::On => BinaryColor::On,
            FadeState::Off => BinaryColor::Off,
        }
    }
}

/// Light every pixel and commit once
pub fn fill_instant<C: Canvas>(canvas: &mut C) -> Result<(), Error> {
    let (width, height) = canvas.pixel_dimensions();
    canvas.fill_rect(0, 0, width, height, BinaryColor::On)?;
    canvas.commit()?;
    Ok(())
}

/// Fill in three interlaced passes for dead-pixel checks
///
/// Even rows, then even columns, then odd rows; each pass is committed
/// and held for 5 ms.
pub fn fill_interlaced<C, K>(canvas: &mut C, clock: &mut K) -> Result<(), Error>
where
    C: Canvas,
    K: Clock,
{
    canvas.clear_display()?;
    let passes = [(Stroke::Row, 0), (Stroke::Column, 0), (Stroke::Row, 1)];
    for (stroke, first) in passes {
        stroke_group(canvas, stroke, 2, first, BinaryColor::On)?;
        present(canvas, clock, INTERLACE_PASS_DELAY_MS)?;
    }
    Ok(())
}

/// Checkerboard fade in three steps
///
/// Even columns, even rows, odd columns. `delay_ms` defaults to 50.
pub fn fade_grid<C, K>(
    canvas: &mut C,
    clock: &mut K,
    delay_ms: Option<u32>,
    state: FadeState,
) -> Result<(), Error>
where
    C: Canvas,
    K: Clock,
{
    let delay_ms = delay_ms.unwrap_or(DEFAULT_FADE_DELAY_MS);
    #[cfg(feature = "defmt")]
    defmt::trace!("fade_grid {} delay={}ms", state, delay_ms);

    let passes = [(Stroke::Column, 0), (Stroke::Row, 0), (Stroke::Column, 1)];
    for (stroke, first) in passes {
        stroke_group(canvas, stroke, 2, first, state.color())?;
        present(canvas, clock, delay_ms)?;
    }
    finish(canvas, clock, state, delay_ms)
}

/// Anti-diagonal fade in two steps
///
/// Lines from the left edge to the top edge at even offsets, then odd
/// offsets, over `[0, width + height)`. `delay_ms` defaults to 50.
pub fn fade_cross<C, K>(
    canvas: &mut C,
    clock: &mut K,
    delay_ms: Option<u32>,
    state: FadeState,
) -> Result<(), Error>
where
    C: Canvas,
    K: Clock,
{
    let delay_ms = delay_ms.unwrap_or(DEFAULT_FADE_DELAY_MS);
    #[cfg(feature = "defmt")]
    defmt::trace!("fade_cross {} delay={}ms", state, delay_ms);

    for first in 0..2 {
        stroke_group(canvas, Stroke::Diagonal, 2, first, state.color())?;
        present(canvas, clock, delay_ms)?;
    }
    finish(canvas, clock, state, delay_ms)
}

/// Vertical blinds: column `j` is drawn in step `j % cycles`
///
/// Defaults: 4 cycles, `10 * cycles` ms in total.
pub fn fade_vertical<C, K>(
    canvas: &mut C,
    clock: &mut K,
    cycles: Option<u16>,
    total_delay_ms: Option<u32>,
    state: FadeState,
) -> Result<(), Error>
where
    C: Canvas,
    K: Clock,
{
    let cycles = cycles.unwrap_or(DEFAULT_VERTICAL_CYCLES);
    blinds(canvas, clock, Stroke::Column, cycles, total_delay_ms, BLIND_MS_PER_CYCLE, state)
}

/// Horizontal blinds: row `j` is drawn in step `j % cycles`
///
/// Defaults: 3 cycles, `10 * cycles` ms in total.
pub fn fade_horizontal<C, K>(
    canvas: &mut C,
    clock: &mut K,
    cycles: Option<u16>,
    total_delay_ms: Option<u32>,
    state: FadeState,
) -> Result<(), Error>
where
    C: Canvas,
    K: Clock,
{
    let cycles = cycles.unwrap_or(DEFAULT_HORIZONTAL_CYCLES);
    blinds(canvas, clock, Stroke::Row, cycles, total_delay_ms, BLIND_MS_PER_CYCLE, state)
}

/// Diagonal blinds: anti-diagonal `j` is drawn in step `j % cycles`
///
/// Defaults: 4 cycles, `25 * cycles` ms in total.
pub fn fade_diagonal<C, K>(
    canvas: &mut C,
    clock: &mut K,
    cycles: Option<u16>,
    total_delay_ms: Option<u32>,
    state: FadeState,
) -> Result<(), Error>
where
    C: Canvas,
    K: Clock,
{
    let cycles = cycles.unwrap_or(DEFAULT_DIAGONAL_CYCLES);
    blinds(
        canvas,
        clock,
        Stroke::Diagonal,
        cycles,
        total_delay_ms,
        DIAGONAL_MS_PER_CYCLE,
        state,
    )
}

/// Grid-fade to white, then unmask a bitmap in three passes
///
/// After the last pass every mask pixel has been cleared and only the
/// bitmap's set bits remain lit. Defaults: 50 ms per step, 500 ms before
/// the reveal.
pub fn fade_in_grid_bitmap<C, K>(
    canvas: &mut C,
    clock: &mut K,
    delay_ms: Option<u32>,
    init_delay_ms: Option<u32>,
    x: i16,
    y: i16,
    bitmap: &Bitmap<'_>,
) -> Result<(), Error>
where
    C: Canvas,
    K: Clock,
{
    let delay_ms = delay_ms.unwrap_or(DEFAULT_FADE_DELAY_MS);
    let init_delay_ms = init_delay_ms.unwrap_or(DEFAULT_BITMAP_INIT_DELAY_MS);

    fade_grid(canvas, clock, Some(delay_ms), FadeState::On)?;
    clock.delay_ms(init_delay_ms);

    let passes = [(Stroke::Column, 0), (Stroke::Row, 0), (Stroke::Row, 1)];
    for (stroke, first) in passes {
        stroke_group(canvas, stroke, 2, first, BinaryColor::Off)?;
        canvas.blit(x, y, bitmap, BinaryColor::On)?;
        present(canvas, clock, delay_ms)?;
    }
    Ok(())
}

fn blinds<C, K>(
    canvas: &mut C,
    clock: &mut K,
    stroke: Stroke,
    cycles: u16,
    total_delay_ms: Option<u32>,
    ms_per_cycle: u32,
    state: FadeState,
) -> Result<(), Error>
where
    C: Canvas,
    K: Clock,
{
    if cycles == 0 {
        return Err(Error::InvalidParameter);
    }
    let total_delay_ms = total_delay_ms.unwrap_or(ms_per_cycle * u32::from(cycles));
    let step_delay_ms = total_delay_ms / u32::from(cycles);
    #[cfg(feature = "defmt")]
    defmt::trace!(
        "blinds {} cycles={} step={}ms {}",
        stroke,
        cycles,
        step_delay_ms,
        state
    );

    for step in 0..cycles {
        stroke_group(canvas, stroke, cycles, step, state.color())?;
        present(canvas, clock, step_delay_ms)?;
    }
    finish(canvas, clock, state, step_delay_ms)
}

/// Draw every stroke index congruent to `first` modulo `stride`
fn stroke_group<C: Canvas>(
    canvas: &mut C,
    stroke: Stroke,
    stride: u16,
    first: u16,
    color: BinaryColor,
) -> Result<(), Error> {
    let dimensions = canvas.pixel_dimensions();
    for j in blind_group(stroke.extent(dimensions), stride, first) {
        stroke.draw(canvas, j, color)?;
    }
    Ok(())
}

/// Trailing clear step for fade-outs
fn finish<C, K>(canvas: &mut C, clock: &mut K, state: FadeState, delay_ms: u32) -> Result<(), Error>
where
    C: Canvas,
    K: Clock,
{
    if state == FadeState::Off {
        canvas.clear_display()?;
        present(canvas, clock, delay_ms)?;
    }
    Ok(())
}
