// SPDX-License-Identifier: JOSSL-1.0
// Copyright (C) 2025 The Jotunheim Project
//! Busy-wait pacing. Counts loop iterations; knows nothing about real time.

use crate::config::SPINS_PER_SECOND;

pub trait Delay {
    fn delay_seconds(&mut self, seconds: u32);
}

#[derive(Debug, Copy, Clone)]
pub struct BusyWaitClock {
    spins_per_second: u64,
}

impl BusyWaitClock {
    pub const fn new() -> Self {
        Self::with_rate(SPINS_PER_SECOND)
    }

    pub const fn with_rate(spins_per_second: u64) -> Self {
        Self { spins_per_second }
    }

    pub const fn spins_for(&self, seconds: u32) -> u64 {
        (seconds as u64).saturating_mul(self.spins_per_second)
    }

    /// Counts `spins_for(seconds)` iterations, calling `step` once in each.
    /// The body is a bare counter increment: `SPINS_PER_SECOND` was measured
    /// on such a loop, without a `PAUSE` hint.
    fn spin_with(&self, seconds: u32, mut step: impl FnMut()) {
        let spins = self.spins_for(seconds);
        let mut i = 0u64;
        while i < spins {
            step();
            i = core::hint::black_box(i) + 1;
        }
    }
}

impl Default for BusyWaitClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Delay for BusyWaitClock {
    fn delay_seconds(&mut self, seconds: u32) {
        self.spin_with(seconds, || {});
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spin_count_scales_with_seconds() {
        let clock = BusyWaitClock::new();
        assert_eq!(clock.spins_for(0), 0);
        assert_eq!(clock.spins_for(1), SPINS_PER_SECOND);
        assert_eq!(clock.spins_for(3), 3 * SPINS_PER_SECOND);
    }

    #[test]
    fn spin_count_saturates() {
        let clock = BusyWaitClock::with_rate(u64::MAX);
        assert_eq!(clock.spins_for(2), u64::MAX);
    }

    #[test]
    fn one_iteration_per_counted_spin() {
        let clock = BusyWaitClock::with_rate(1_000);
        let mut steps = 0u64;
        clock.spin_with(3, || steps += 1);
        assert_eq!(steps, clock.spins_for(3));

        steps = 0;
        clock.spin_with(0, || steps += 1);
        assert_eq!(steps, 0);
    }

    #[test]
    fn small_delays_return() {
        let mut clock = BusyWaitClock::with_rate(1_000);
        clock.delay_seconds(0);
        clock.delay_seconds(2);
    }
}
