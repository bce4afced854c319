use core::time::Duration;

use crate::Pacer;

/// Applies one family's step delay through the configured pacer.
#[derive(Clone)]
pub struct Pace {
    pub delay: Duration,
    pacer: Option<Pacer>,
    ticks: usize,
}

impl Pace {
    pub fn new(delay: Duration, pacer: Option<Pacer>) -> Self {
        Self {
            delay,
            pacer,
            ticks: 0,
        }
    }

    /// A pace that never waits.
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO, None)
    }

    /// Number of frames paced so far.
    pub fn ticks(&self) -> usize {
        self.ticks
    }

    /// Call after delivering a frame.
    pub fn tick(&mut self) {
        self.ticks += 1;
        if self.delay.is_zero() {
            return;
        }
        if let Some(pacer) = &self.pacer {
            pacer(self.delay);
        }
    }
}

impl core::fmt::Debug for Pace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pace")
            .field("delay", &self.delay)
            .field("has_pacer", &self.pacer.is_some())
            .field("ticks", &self.ticks)
            .finish()
    }
}
