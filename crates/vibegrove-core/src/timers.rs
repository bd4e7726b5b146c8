//! Screen-owned timers: tokio sleep tasks that post a token back to the UI loop.
//!
//! A [`Timers`] set belongs to exactly one mounted screen. Dropping it (or
//! calling [`Timers::cancel_all`]) aborts every outstanding task. Tokens are
//! stamped with the owner's epoch and a per-schedule sequence number so a
//! token already sitting in the channel when its timer was replaced or torn
//! down is recognised as stale by [`Timers::accept`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

static NEXT_EPOCH: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerKind {
    BreathingStart,
    BreathPhase,
    MessageRotation,
    WaterEffect,
    RecentlyWatered,
    BookingConfirmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFired {
    pub epoch: u64,
    pub seq: u64,
    pub kind: TimerKind,
}

pub type TimerSender = mpsc::UnboundedSender<TimerFired>;
pub type TimerReceiver = mpsc::UnboundedReceiver<TimerFired>;

pub fn channel() -> (TimerSender, TimerReceiver) {
    mpsc::unbounded_channel()
}

struct Pending {
    seq: u64,
    periodic: bool,
    handle: JoinHandle<()>,
}

pub struct Timers {
    epoch: u64,
    next_seq: u64,
    tx: TimerSender,
    pending: HashMap<TimerKind, Pending>,
}

impl Timers {
    pub fn new(tx: TimerSender) -> Self {
        Self {
            epoch: NEXT_EPOCH.fetch_add(1, Ordering::Relaxed),
            next_seq: 0,
            tx,
            pending: HashMap::new(),
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Fire `kind` once after `delay`. Replaces a pending timer of that kind.
    pub fn once(&mut self, kind: TimerKind, delay: Duration) {
        let fired = self.stamp(kind);
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(fired);
        });
        self.insert(kind, fired.seq, false, handle);
    }

    /// Fire `kind` every `period`, first tick one period from now.
    pub fn every(&mut self, kind: TimerKind, period: Duration) {
        let fired = self.stamp(kind);
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut ticker = tokio::time::interval_at(start, period);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(fired).is_err() {
                    break;
                }
            }
        });
        self.insert(kind, fired.seq, true, handle);
    }

    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        match self.pending.remove(&kind) {
            Some(p) => {
                p.handle.abort();
                debug!("Cancelled {:?} timer", kind);
                true
            }
            None => false,
        }
    }

    pub fn cancel_all(&mut self) {
        let count = self.pending.len();
        for (_, p) in self.pending.drain() {
            p.handle.abort();
        }
        if count > 0 {
            debug!("Cancelled {} timer(s) for epoch {}", count, self.epoch);
        }
    }

    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.pending.contains_key(&kind)
    }

    /// Check that `fired` belongs to a live timer of this set. One-shot
    /// timers stop counting as pending once accepted.
    pub fn accept(&mut self, fired: &TimerFired) -> bool {
        if fired.epoch != self.epoch {
            return false;
        }
        let Some(p) = self.pending.get(&fired.kind) else {
            return false;
        };
        if p.seq != fired.seq {
            return false;
        }
        if !p.periodic {
            self.pending.remove(&fired.kind);
        }
        true
    }

    fn stamp(&mut self, kind: TimerKind) -> TimerFired {
        self.next_seq += 1;
        TimerFired {
            epoch: self.epoch,
            seq: self.next_seq,
            kind,
        }
    }

    fn insert(&mut self, kind: TimerKind, seq: u64, periodic: bool, handle: JoinHandle<()>) {
        let replaced = self.pending.insert(
            kind,
            Pending {
                seq,
                periodic,
                handle,
            },
        );
        if let Some(old) = replaced {
            old.handle.abort();
            debug!("Restarted {:?} timer", kind);
        }
    }
}

impl Drop for Timers {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

impl std::fmt::Debug for Timers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timers")
            .field("epoch", &self.epoch)
            .field("pending", &self.pending.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_once_fires_after_delay() {
        let (tx, mut rx) = channel();
        let mut timers = Timers::new(tx);
        let start = Instant::now();
        timers.once(TimerKind::WaterEffect, Duration::from_millis(1500));
        assert!(timers.is_pending(TimerKind::WaterEffect));

        let fired = rx.recv().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(1500));
        assert_eq!(fired.kind, TimerKind::WaterEffect);
        assert!(timers.accept(&fired));
        assert!(!timers.is_pending(TimerKind::WaterEffect));
        // Accepting twice is refused.
        assert!(!timers.accept(&fired));
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_keeps_firing() {
        let (tx, mut rx) = channel();
        let mut timers = Timers::new(tx);
        let start = Instant::now();
        timers.every(TimerKind::BreathPhase, Duration::from_secs(4));
        for _ in 0..3 {
            let fired = rx.recv().await.unwrap();
            assert!(timers.accept(&fired));
        }
        assert!(start.elapsed() >= Duration::from_secs(12));
        assert!(timers.is_pending(TimerKind::BreathPhase));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_stops_everything() {
        let (tx, mut rx) = channel();
        let mut timers = Timers::new(tx);
        timers.once(TimerKind::BookingConfirmed, Duration::from_secs(2));
        timers.every(TimerKind::MessageRotation, Duration::from_secs(8));
        timers.cancel_all();

        tokio::time::sleep(Duration::from_secs(20)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_tasks() {
        let (tx, mut rx) = channel();
        {
            let mut timers = Timers::new(tx);
            timers.once(TimerKind::RecentlyWatered, Duration::from_secs(5));
        }
        tokio::time::sleep(Duration::from_secs(6)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rescheduling_restarts_the_window() {
        let (tx, mut rx) = channel();
        let mut timers = Timers::new(tx);
        let start = Instant::now();
        timers.once(TimerKind::WaterEffect, Duration::from_millis(1500));
        tokio::time::sleep(Duration::from_millis(1000)).await;
        timers.once(TimerKind::WaterEffect, Duration::from_millis(1500));

        let fired = rx.recv().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(2500));
        assert!(timers.accept(&fired));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokens_from_other_owners_are_rejected() {
        let (tx, mut rx) = channel();
        let mut old = Timers::new(tx.clone());
        old.once(TimerKind::BreathingStart, Duration::from_millis(500));
        let fired = rx.recv().await.unwrap();

        let mut fresh = Timers::new(tx);
        fresh.once(TimerKind::BreathingStart, Duration::from_millis(500));
        assert_ne!(old.epoch(), fresh.epoch());
        assert!(!fresh.accept(&fired));
        assert!(old.accept(&fired));
    }
}
