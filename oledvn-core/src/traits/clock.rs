//! Millisecond clock trait

/// Monotonic millisecond clock with a blocking delay
///
/// The engines pace frames with [`Clock::delay_ms`] and measure gate
/// timeouts and blink periods with [`Clock::now_ms`].
pub trait Clock {
    /// Milliseconds since an arbitrary fixed epoch
    fn now_ms(&self) -> u64;

    /// Block the calling thread for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);

    /// Milliseconds elapsed since `since_ms`
    fn elapsed_since(&self, since_ms: u64) -> u64 {
        self.now_ms().saturating_sub(since_ms)
    }
}

impl<T: Clock + ?Sized> Clock for &mut T {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }

    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }
}
