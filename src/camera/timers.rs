use std::time::Duration;

/// Token for one started timer. Goes stale once the timer is cancelled or its slot reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    slot: usize,
    generation: u64,
}

#[derive(Debug)]
struct Slot {
    generation: u64,
    /// `Some` while the timer is running.
    interval: Option<Duration>,
}

/// Slot arena of recurring timers.
#[derive(Debug, Default)]
pub struct TimerArena {
    slots: Vec<Slot>,
    free: Vec<usize>,
}

impl TimerArena {
    pub fn start(&mut self, interval: Duration) -> TimerHandle {
        let slot = match self.free.pop() {
            Some(slot) => slot,
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    interval: None,
                });
                self.slots.len() - 1
            }
        };
        let entry = &mut self.slots[slot];
        entry.generation += 1;
        entry.interval = Some(interval);
        TimerHandle {
            slot,
            generation: entry.generation,
        }
    }

    /// Returns `false` if the handle was already stale.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        if !self.is_active(handle) {
            return false;
        }
        self.slots[handle.slot].interval = None;
        self.free.push(handle.slot);
        true
    }

    pub fn is_active(&self, handle: TimerHandle) -> bool {
        self.interval(handle).is_some()
    }

    pub fn interval(&self, handle: TimerHandle) -> Option<Duration> {
        self.slots
            .get(handle.slot)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.interval)
    }

    #[cfg(test)]
    pub fn active_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.interval.is_some())
            .count()
    }
}
