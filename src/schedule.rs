// Copyright 2026 the Tangent Walk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pacing between animation ticks.

use std::time::Duration;

/// Decides how long to wait between two ticks of a walk.
///
/// The walk calls [`Scheduler::wait`] after every tick that leaves it
/// running, and never after the final one.
pub trait Scheduler {
    /// Block until the next tick is due.
    fn wait(&mut self, delay: Duration);
}

/// Waits in real time with [`std::thread::sleep`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SleepScheduler;

impl Scheduler for SleepScheduler {
    fn wait(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

/// Never waits; counts how often and how long it was asked to.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay {
    waits: usize,
    requested: Duration,
}

impl NoDelay {
    /// A fresh scheduler with nothing counted yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of calls to [`Scheduler::wait`].
    pub fn waits(&self) -> usize {
        self.waits
    }

    /// Sum of every requested delay.
    pub fn requested(&self) -> Duration {
        self.requested
    }
}

impl Scheduler for NoDelay {
    fn wait(&mut self, delay: Duration) {
        self.waits += 1;
        self.requested = self.requested.saturating_add(delay);
    }
}
