//! Click-to-continue wait state machine
//!
//! Pure state: the caller feeds it input availability and the clock, and
//! draws whatever indicator color it asks for.

use oledvn_display::BinaryColor;

/// How a wait ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GateOutcome {
    /// Input arrived
    Satisfied,
    /// The timeout elapsed first
    TimedOut,
}

/// Gate state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GateState {
    /// Still waiting; the indicator was last toggled at `last_toggle_ms`
    Waiting {
        started_ms: u64,
        last_toggle_ms: u64,
        indicator: BinaryColor,
    },
    /// Input arrived
    Satisfied,
    /// Timeout elapsed
    TimedOut,
}

impl GateState {
    /// Start waiting with the indicator hidden
    pub const fn start(now_ms: u64) -> Self {
        GateState::Waiting {
            started_ms: now_ms,
            last_toggle_ms: now_ms,
            indicator: BinaryColor::Off,
        }
    }

    /// Outcome, once the wait is over
    pub fn outcome(&self) -> Option<GateOutcome> {
        match self {
            GateState::Waiting { .. } => None,
            GateState::Satisfied => Some(GateOutcome::Satisfied),
            GateState::TimedOut => Some(GateOutcome::TimedOut),
        }
    }

    /// Advance the state with one poll
    ///
    /// Input wins over a timeout that elapses in the same poll. Returns the
    /// new indicator color when a blink is due.
    pub fn poll(
        self,
        pending: bool,
        now_ms: u64,
        timeout_ms: Option<u32>,
        blink_ms: u32,
    ) -> (Self, Option<BinaryColor>) {
        let GateState::Waiting {
            started_ms,
            last_toggle_ms,
            indicator,
        } = self
        else {
            return (self, None);
        };

        if pending {
            return (GateState::Satisfied, None);
        }
        if let Some(timeout_ms) = timeout_ms {
            if now_ms.saturating_sub(started_ms) >= u64::from(timeout_ms) {
                return (GateState::TimedOut, None);
            }
        }
        if now_ms.saturating_sub(last_toggle_ms) >= u64::from(blink_ms) {
            let indicator = indicator.invert();
            let next = GateState::Waiting {
                started_ms,
                last_toggle_ms: now_ms,
                indicator,
            };
            return (next, Some(indicator));
        }
        (self, None)
    }
}
