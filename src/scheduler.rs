//! Periodic tick scheduler.
//!
//! A cooperative fixed-period timer that is independent of any UI timer
//! primitive.  The scheduler notifies a [`SchedulerDelegate`] on every
//! tick; the delegate decides what a tick means (the sampling task polls
//! the providers and posts the reading to the coordinator channel).
//!
//! ```text
//!  async_io_mini::Timer ──▶ Scheduler::run ──▶ SchedulerDelegate::on_tick
//!                               │
//!                               └── missed deadlines are skipped, not replayed
//! ```
//!
//! Deadlines advance by whole periods from the start instant, so a slow
//! tick does not shift the phase of later ones.  If a delegate overruns by
//! more than a period, the ticks that fell inside the overrun are counted
//! as missed and the next tick fires at the next future deadline.

use core::time::Duration;
use std::time::Instant;

use log::{info, warn};

use crate::app::ports::SchedulerDelegate;

/// Details passed to the delegate for each fired tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInfo {
    /// 1-based count of fired ticks.
    pub index: u64,
    /// Deadlines skipped immediately before this tick.
    pub missed: u64,
}

/// Fixed-period scheduler.
pub struct Scheduler {
    period: Duration,
    next_due: Instant,
    fired: u64,
    missed_total: u64,
}

impl Scheduler {
    /// First tick is due one `period` after `start`.
    ///
    /// A zero `period` is raised to one millisecond.
    pub fn new(period: Duration, start: Instant) -> Self {
        let period = period.max(Duration::from_millis(1));
        Self {
            period,
            next_due: start + period,
            fired: 0,
            missed_total: 0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left until the next deadline (zero if already due).
    pub fn until_next(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    /// Fire if a deadline has passed.  Advances the deadline past `now`.
    pub fn poll(&mut self, now: Instant) -> Option<TickInfo> {
        if now < self.next_due {
            return None;
        }
        let late = now.duration_since(self.next_due);
        let missed = (late.as_nanos() / self.period.as_nanos()) as u64;
        self.next_due += self.period * (missed as u32 + 1);
        self.fired += 1;
        if missed > 0 {
            self.missed_total += missed;
            warn!("Scheduler: skipped {} tick(s), {} total", missed, self.missed_total);
        }
        Some(TickInfo {
            index: self.fired,
            missed,
        })
    }

    /// Total ticks fired so far.
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Total deadlines skipped so far.
    pub fn missed_total(&self) -> u64 {
        self.missed_total
    }

    /// Drive the delegate until it breaks.
    pub async fn run(&mut self, delegate: &mut dyn SchedulerDelegate) {
        info!("Scheduler: running every {:?}", self.period);
        loop {
            let wait = self.until_next(Instant::now());
            if !wait.is_zero() {
                async_io_mini::Timer::after(wait).await;
            }
            if let Some(tick) = self.poll(Instant::now()) {
                if delegate.on_tick(tick).is_break() {
                    info!("Scheduler: stopped after {} tick(s)", self.fired);
                    return;
                }
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
