//! Clock adapters

use embedded_hal::delay::DelayNs;
use oledvn_core::traits::Clock;

/// Clock driven purely by a blocking delay provider
///
/// Time only advances through [`Clock::delay_ms`], which is enough for the
/// engines: every wait they perform goes through the delay.
pub struct DelayClock<D> {
    delay: D,
    elapsed_ms: u64,
}

impl<D: DelayNs> DelayClock<D> {
    /// Wrap a delay provider, starting at t = 0
    pub fn new(delay: D) -> Self {
        Self {
            delay,
            elapsed_ms: 0,
        }
    }

    /// Release the delay provider
    pub fn release(self) -> D {
        self.delay
    }
}

impl<D: DelayNs> Clock for DelayClock<D> {
    fn now_ms(&self) -> u64 {
        self.elapsed_ms
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
        self.elapsed_ms += u64::from(ms);
    }
}

/// Clock backed by the embassy time driver
#[cfg(feature = "embassy")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

#[cfg(feature = "embassy")]
impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        embassy_time::Instant::now().as_millis()
    }

    fn delay_ms(&mut self, ms: u32) {
        embassy_time::block_for(embassy_time::Duration::from_millis(u64::from(ms)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock delay that totals requested nanoseconds
    struct MockDelay {
        total_ns: u64,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += u64::from(ns);
        }
    }

    #[test]
    fn test_delay_advances_clock() {
        let mut clock = DelayClock::new(MockDelay { total_ns: 0 });
        assert_eq!(clock.now_ms(), 0);

        clock.delay_ms(5);
        clock.delay_ms(500);
        assert_eq!(clock.now_ms(), 505);
        assert_eq!(clock.elapsed_since(5), 500);
        assert_eq!(clock.release().total_ns, 505_000_000);
    }
}
