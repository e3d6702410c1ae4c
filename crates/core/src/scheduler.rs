//! Host-driven timers.
//!
//! Nothing here reads a clock. The host moves time forward with
//! [`Scheduler::pop_due`] / [`Scheduler::set_now`] and runs animation
//! frames with [`Scheduler::begin_frame`]. Every timer is addressed by a
//! [`TimerId`] owned by whoever armed it; owners cancel their ids on
//! unmount, so an empty scheduler after teardown means nothing leaked.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// What the page components arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTimer {
    TraceTick,
    TraceReset,
    SectionFrame,
    ScrollFrame,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TimerKind {
    Timeout,
    Interval { period_ms: f64 },
    Frame,
}

#[derive(Debug, Clone)]
struct Timer<E> {
    due_ms: f64,
    kind: TimerKind,
    event: E,
}

#[derive(Debug, Clone)]
pub struct Scheduler<E> {
    now_ms: f64,
    next_id: u64,
    // Keyed by id, so iteration order is creation order.
    timers: BTreeMap<TimerId, Timer<E>>,
}

impl<E: Clone> Scheduler<E> {
    pub fn new(now_ms: f64) -> Self {
        Self {
            now_ms,
            next_id: 0,
            timers: BTreeMap::new(),
        }
    }

    pub fn now(&self) -> f64 {
        self.now_ms
    }

    /// Move the clock forward. Time never goes backwards.
    pub fn set_now(&mut self, now_ms: f64) {
        if now_ms > self.now_ms {
            self.now_ms = now_ms;
        }
    }

    /// Fire `event` once, `delay_ms` from now.
    pub fn set_timeout(&mut self, delay_ms: f64, event: E) -> TimerId {
        self.insert(self.now_ms + delay_ms.max(0.0), TimerKind::Timeout, event)
    }

    /// Fire `event` every `period_ms`, first at `now + period_ms`.
    pub fn set_interval(&mut self, period_ms: f64, event: E) -> TimerId {
        let period_ms = period_ms.max(1.0);
        self.insert(
            self.now_ms + period_ms,
            TimerKind::Interval { period_ms },
            event,
        )
    }

    /// Fire `event` on the next [`Scheduler::begin_frame`].
    pub fn request_frame(&mut self, event: E) -> TimerId {
        self.insert(self.now_ms, TimerKind::Frame, event)
    }

    /// Returns `false` if the timer already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.remove(&id).is_some()
    }

    pub fn is_live(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Number of armed timers and frame requests.
    pub fn live(&self) -> usize {
        self.timers.len()
    }

    /// Earliest deadline among timeouts and intervals.
    pub fn next_deadline(&self) -> Option<f64> {
        self.timers
            .values()
            .filter(|t| t.kind != TimerKind::Frame)
            .map(|t| t.due_ms)
            .min_by(f64::total_cmp)
    }

    pub fn has_frame_request(&self) -> bool {
        self.timers.values().any(|t| t.kind == TimerKind::Frame)
    }

    /// Pop the earliest timer due at or before `until_ms`, advancing the
    /// clock to its deadline. Ties fire in creation order. Intervals
    /// re-arm from their own deadline, so a late host does not drift them.
    pub fn pop_due(&mut self, until_ms: f64) -> Option<(TimerId, E)> {
        let (id, due_ms) = self
            .timers
            .iter()
            .filter(|(_, t)| t.kind != TimerKind::Frame && t.due_ms <= until_ms)
            .map(|(id, t)| (*id, t.due_ms))
            .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))?;

        self.set_now(due_ms);
        let timer = self.timers.get_mut(&id)?;
        if let TimerKind::Interval { period_ms } = timer.kind {
            timer.due_ms += period_ms;
            return Some((id, timer.event.clone()));
        }
        self.timers.remove(&id).map(|t| (id, t.event))
    }

    /// Take every pending frame request, in request order. Requests made
    /// while the returned events are being handled wait for the next frame.
    pub fn begin_frame(&mut self, now_ms: f64) -> Vec<E> {
        self.set_now(now_ms);
        let ids: Vec<TimerId> = self
            .timers
            .iter()
            .filter(|(_, t)| t.kind == TimerKind::Frame)
            .map(|(id, _)| *id)
            .collect();
        ids.into_iter()
            .filter_map(|id| self.timers.remove(&id))
            .map(|t| t.event)
            .collect()
    }

    fn insert(&mut self, due_ms: f64, kind: TimerKind, event: E) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.timers.insert(id, Timer { due_ms, kind, event });
        id
    }
}
