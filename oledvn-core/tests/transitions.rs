mod common;

use common::{Op, RecordingCanvas, SimClock};
use oledvn_core::transition::{
    fade_cross, fade_diagonal, fade_grid, fade_horizontal, fade_in_grid_bitmap, fade_vertical,
    fill_instant, fill_interlaced, FadeState,
};
use oledvn_core::{Error, Interruption};
use oledvn_display::{BinaryColor, Bitmap, DisplayError};

fn filled() -> RecordingCanvas {
    let mut canvas = RecordingCanvas::new();
    fill_instant(&mut canvas).unwrap();
    canvas.ops.clear();
    canvas.frames.clear();
    canvas
}

#[test]
fn test_fill_instant() {
    let mut canvas = RecordingCanvas::new();
    fill_instant(&mut canvas).unwrap();
    assert!(canvas.fb.is_filled());
    assert_eq!(canvas.commits(), 1);
}

#[test]
fn test_fill_interlaced_passes() {
    let mut canvas = RecordingCanvas::new();
    let mut clock = SimClock::new();
    fill_interlaced(&mut canvas, &mut clock).unwrap();

    assert!(canvas.fb.is_filled());
    assert_eq!(canvas.commits(), 3);
    assert_eq!(clock.delays, vec![5, 5, 5]);

    // First pass lights even rows only
    let first = &canvas.frames[0];
    assert!(first[0..16].iter().all(|&b| b == 0xFF));
    assert!(first[16..32].iter().all(|&b| b == 0x00));
}

#[test]
fn test_fade_grid_in_and_out() {
    let mut canvas = RecordingCanvas::new();
    let mut clock = SimClock::new();
    fade_grid(&mut canvas, &mut clock, None, FadeState::On).unwrap();
    assert!(canvas.fb.is_filled());
    assert_eq!(canvas.commits(), 3);
    assert_eq!(clock.delays, vec![50, 50, 50]);

    let mut canvas = filled();
    let mut clock = SimClock::new();
    fade_grid(&mut canvas, &mut clock, Some(20), FadeState::Off).unwrap();
    assert!(canvas.fb.is_blank());
    assert_eq!(canvas.commits(), 4);
    assert_eq!(clock.delays, vec![20, 20, 20, 20]);
}

#[test]
fn test_fade_grid_middle_frame_is_checkerboard_complement() {
    let mut canvas = RecordingCanvas::new();
    let mut clock = SimClock::new();
    fade_grid(&mut canvas, &mut clock, Some(0), FadeState::On).unwrap();

    // After even columns and even rows, only (odd x, odd y) is still dark
    let frame = &canvas.frames[1];
    for y in 0..64i16 {
        for x in 0..128i16 {
            let byte = frame[y as usize * 16 + x as usize / 8];
            let lit = byte & (0x80 >> (x % 8)) != 0;
            assert_eq!(lit, x % 2 == 0 || y % 2 == 0, "pixel ({}, {})", x, y);
        }
    }
}

#[test]
fn test_fade_cross_in_and_out() {
    let mut canvas = RecordingCanvas::new();
    let mut clock = SimClock::new();
    fade_cross(&mut canvas, &mut clock, None, FadeState::On).unwrap();
    assert!(canvas.fb.is_filled());
    assert_eq!(canvas.commits(), 2);

    let lines = canvas
        .ops
        .iter()
        .filter(|op| matches!(op, Op::Line { .. }))
        .count();
    assert_eq!(lines, 192);

    let mut canvas = filled();
    let mut clock = SimClock::new();
    fade_cross(&mut canvas, &mut clock, None, FadeState::Off).unwrap();
    assert!(canvas.fb.is_blank());
    assert_eq!(canvas.commits(), 3);
}

#[test]
fn test_fade_vertical_defaults() {
    let mut canvas = RecordingCanvas::new();
    let mut clock = SimClock::new();
    fade_vertical(&mut canvas, &mut clock, None, None, FadeState::On).unwrap();
    assert!(canvas.fb.is_filled());
    assert_eq!(canvas.commits(), 4);
    assert_eq!(clock.delays, vec![10, 10, 10, 10]);
}

#[test]
fn test_fade_vertical_steps_are_column_classes() {
    let mut canvas = RecordingCanvas::new();
    let mut clock = SimClock::new();
    fade_vertical(&mut canvas, &mut clock, Some(5), Some(100), FadeState::On).unwrap();
    assert_eq!(clock.delays, vec![20; 5]);

    for (step, frame) in canvas.frames.iter().enumerate() {
        for x in 0..128usize {
            let lit = frame[x / 8] & (0x80 >> (x % 8)) != 0;
            assert_eq!(lit, x % 5 <= step, "step {} column {}", step, x);
        }
    }
}

#[test]
fn test_fade_horizontal_defaults_and_fade_out() {
    let mut canvas = filled();
    let mut clock = SimClock::new();
    fade_horizontal(&mut canvas, &mut clock, None, None, FadeState::Off).unwrap();
    assert!(canvas.fb.is_blank());
    // 3 row groups plus the trailing clear
    assert_eq!(canvas.commits(), 4);
    assert_eq!(clock.delays, vec![10, 10, 10, 10]);
}

#[test]
fn test_fade_diagonal() {
    let mut canvas = RecordingCanvas::new();
    let mut clock = SimClock::new();
    fade_diagonal(&mut canvas, &mut clock, None, None, FadeState::On).unwrap();
    assert!(canvas.fb.is_filled());
    assert_eq!(clock.delays, vec![25, 25, 25, 25]);

    let mut canvas = filled();
    let mut clock = SimClock::new();
    fade_diagonal(&mut canvas, &mut clock, Some(2), Some(9), FadeState::Off).unwrap();
    assert!(canvas.fb.is_blank());
    assert_eq!(clock.delays, vec![4, 4, 4]);
}

#[test]
fn test_zero_cycles_rejected() {
    let mut canvas = RecordingCanvas::new();
    let mut clock = SimClock::new();
    let result = fade_vertical(&mut canvas, &mut clock, Some(0), None, FadeState::On);
    assert_eq!(result, Err(Error::InvalidParameter));
    assert!(canvas.ops.is_empty());
}

#[test]
fn test_fade_in_grid_bitmap_leaves_only_bitmap() {
    let data: Vec<u8> = (0..16u8).map(|i| i.wrapping_mul(37) | 0x81).collect();
    let bitmap = Bitmap::new(&data, 16, 8).unwrap();

    let mut canvas = RecordingCanvas::new();
    let mut clock = SimClock::new();
    fade_in_grid_bitmap(&mut canvas, &mut clock, None, None, 10, 20, &bitmap).unwrap();

    assert_eq!(clock.delays, vec![50, 50, 50, 500, 50, 50, 50]);
    assert_eq!(canvas.commits(), 6);
    for y in 0..64i16 {
        for x in 0..128i16 {
            let expected = (10..26).contains(&x)
                && (20..28).contains(&y)
                && bitmap.pixel((x - 10) as u16, (y - 20) as u16);
            assert_eq!(canvas.fb.committed_pixel(x, y), expected, "pixel ({}, {})", x, y);
        }
    }
    assert_eq!(canvas.blits(BinaryColor::On).len(), 3);
}

#[test]
fn test_commit_failure_interrupts() {
    let mut canvas = RecordingCanvas::new();
    canvas.fail_commits_after = Some(1);
    let mut clock = SimClock::new();
    let result = fade_grid(&mut canvas, &mut clock, None, FadeState::On);
    assert_eq!(
        result,
        Err(Error::Interrupted(Interruption::Display(DisplayError::Communication)))
    );
    assert_eq!(canvas.commits(), 1);
    assert_eq!(clock.delays, vec![50]);
}
