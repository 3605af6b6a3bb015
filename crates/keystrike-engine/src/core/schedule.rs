//! Timer-deferred continuations guarded by an epoch token.
//!
//! A continuation is stamped with the epoch current at scheduling time.
//! `invalidate()` bumps the epoch; anything stamped earlier is dropped
//! when it comes due instead of mutating state it no longer applies to.

/// Monotonic generation counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Epoch(pub u64);

#[derive(Debug, Clone)]
struct Pending<T> {
    remaining: f32,
    epoch: Epoch,
    action: T,
}

/// Pending deferred actions, advanced by the frame clock.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    pending: Vec<Pending<T>>,
    epoch: Epoch,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            epoch: Epoch::default(),
        }
    }

    /// Run `action` after `delay` seconds unless invalidated first.
    pub fn schedule(&mut self, delay: f32, action: T) -> Epoch {
        self.pending.push(Pending {
            remaining: delay.max(0.0),
            epoch: self.epoch,
            action,
        });
        self.epoch
    }

    /// Make every currently pending action stale.
    pub fn invalidate(&mut self) -> Epoch {
        self.epoch = Epoch(self.epoch.0 + 1);
        self.epoch
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Advance timers. Returns due actions in scheduling order; stale ones
    /// are discarded here.
    pub fn tick(&mut self, dt: f32) -> Vec<T> {
        let mut due = Vec::new();
        let current = self.epoch;
        let mut kept = Vec::with_capacity(self.pending.len());
        for mut p in self.pending.drain(..) {
            p.remaining -= dt;
            if p.remaining > 0.0 {
                kept.push(p);
            } else if p.epoch == current {
                due.push(p.action);
            } else {
                log::debug!("dropping stale continuation from epoch {}", p.epoch.0);
            }
        }
        self.pending = kept;
        due
    }

    /// Pending actions that would still fire.
    pub fn live_count(&self) -> usize {
        self.pending.iter().filter(|p| p.epoch == self.epoch).count()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_after_delay() {
        let mut s = Scheduler::new();
        s.schedule(0.5, "advance");
        assert!(s.tick(0.25).is_empty());
        assert_eq!(s.tick(0.25), vec!["advance"]);
        assert!(s.is_empty());
    }

    #[test]
    fn invalidated_action_never_fires() {
        let mut s = Scheduler::new();
        s.schedule(0.5, 1);
        s.invalidate();
        assert_eq!(s.live_count(), 0);
        assert!(s.tick(1.0).is_empty());
        assert!(s.is_empty());
    }

    #[test]
    fn actions_scheduled_after_invalidate_survive() {
        let mut s = Scheduler::new();
        s.schedule(0.5, 1);
        s.invalidate();
        s.schedule(0.5, 2);
        assert_eq!(s.tick(0.5), vec![2]);
    }

    #[test]
    fn due_order_is_scheduling_order() {
        let mut s = Scheduler::new();
        s.schedule(0.1, 'a');
        s.schedule(0.2, 'b');
        s.schedule(0.0, 'c');
        assert_eq!(s.tick(1.0), vec!['a', 'b', 'c']);
    }
}
