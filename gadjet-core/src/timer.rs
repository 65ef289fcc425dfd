//! A deterministic timer queue on a virtual clock.
//!
//! Widgets that need `setTimeout`/`setInterval` semantics own a [`Timers`] and pop due tasks from it as
//! the caller advances time. Nothing here sleeps or spawns threads: time only moves when the owner says so.
//!
//! Due timers are returned one at a time in `(due time, scheduling order)` order, so a task may schedule
//! or clear other timers before the next one is popped.

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Handle to a scheduled timer.
    pub struct TimerId;
}

#[derive(Debug)]
struct Timer<T> {
    due: u64,
    seq: u64,
    period: Option<u64>,
    task: T,
}

/// Pending timers carrying a task of type `T`. Times are in milliseconds.
#[derive(Debug)]
pub struct Timers<T> {
    now: u64,
    seq: u64,
    pending: SlotMap<TimerId, Timer<T>>,
}

impl<T> Default for Timers<T> {
    fn default() -> Self {
        Self {
            now: 0,
            seq: 0,
            pending: SlotMap::with_key(),
        }
    }
}

impl<T: Clone> Timers<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current virtual time.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Runs `task` once, `delay` milliseconds from now.
    pub fn set_timeout(&mut self, delay: u64, task: T) -> TimerId {
        self.schedule(delay, None, task)
    }

    /// Runs `task` every `period` milliseconds until cleared. A zero period is treated as one millisecond.
    pub fn set_interval(&mut self, period: u64, task: T) -> TimerId {
        let period = period.max(1);
        self.schedule(period, Some(period), task)
    }

    fn schedule(&mut self, delay: u64, period: Option<u64>, task: T) -> TimerId {
        self.seq += 1;
        self.pending.insert(Timer {
            due: self.now + delay,
            seq: self.seq,
            period,
            task,
        })
    }

    /// Cancels a timer. Returns `false` if it already fired (for timeouts) or was cleared.
    pub fn clear(&mut self, id: TimerId) -> bool {
        self.pending.remove(id).is_some()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// When the next timer is due, if any.
    pub fn next_due(&self) -> Option<u64> {
        self.pending.values().map(|t| t.due).min()
    }

    /// Pops the next timer due at or before `until`, moving the clock to its due time.
    ///
    /// Once nothing else is due, the clock moves to `until` and `None` is returned.
    /// Intervals are rescheduled before they're returned.
    pub fn pop_due(&mut self, until: u64) -> Option<(TimerId, T)> {
        let next = self
            .pending
            .iter()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(id, _)| id);

        let Some(id) = next else {
            self.now = self.now.max(until);
            return None;
        };

        let timer = self.pending.get(id)?;
        self.now = self.now.max(timer.due);

        match timer.period {
            Some(period) => {
                let task = timer.task.clone();
                self.seq += 1;
                let seq = self.seq;
                if let Some(timer) = self.pending.get_mut(id) {
                    timer.due += period;
                    timer.seq = seq;
                }
                Some((id, task))
            }
            None => self.pending.remove(id).map(|timer| (id, timer.task)),
        }
    }
}
