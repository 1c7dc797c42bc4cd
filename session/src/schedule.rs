use std::{collections::BTreeMap, time::Duration};

/// Deferred tasks ordered on a virtual clock.
///
/// Time only moves when the owner advances it, which makes every
/// delayed action reproducible in tests. Tasks due at the same
/// instant fire in the order they were scheduled. There is no way
/// to cancel a task once it is scheduled.
#[derive(Debug)]
pub struct Scheduler<T> {
  now: Duration,
  sequence: u64,
  queue: BTreeMap<(Duration, u64), T>,
}

impl<T> Default for Scheduler<T> {
  fn default() -> Self {
    Self {
      now: Duration::ZERO,
      sequence: 0,
      queue: BTreeMap::new(),
    }
  }
}

impl<T> Scheduler<T> {
  /// Time elapsed on the virtual clock since the scheduler was created.
  pub fn now(&self) -> Duration {
    self.now
  }

  /// Queues a task to fire `delay` after the current virtual time.
  /// Due times saturate at [`Duration::MAX`].
  pub fn schedule(&mut self, delay: Duration, task: T) {
    let due = self.now.saturating_add(delay);
    self.queue.insert((due, self.sequence), task);
    self.sequence += 1;
  }

  /// Virtual time at which the earliest pending task is due.
  pub fn next_due(&self) -> Option<Duration> {
    self.queue.keys().next().map(|(due, _)| *due)
  }

  pub fn pending(&self) -> usize {
    self.queue.len()
  }

  /// Removes and returns the earliest task that is due at or
  /// before `deadline`, moving the clock to the task's due time.
  ///
  /// Returns None when no task is due within the deadline, in
  /// which case the clock is left untouched.
  pub fn pop_due(&mut self, deadline: Duration) -> Option<T> {
    let key = *self.queue.keys().next()?;
    if key.0 > deadline {
      return None;
    }
    self.now = self.now.max(key.0);
    self.queue.remove(&key)
  }

  /// Moves the clock forward to `deadline`. The clock never goes back.
  pub fn advance_to(&mut self, deadline: Duration) {
    self.now = self.now.max(deadline);
  }
}

#[cfg(test)]
mod tests {
  use {super::Scheduler, std::time::Duration};

  #[test]
  fn fires_in_due_order() {
    let mut scheduler = Scheduler::default();
    scheduler.schedule(Duration::from_millis(300), "c");
    scheduler.schedule(Duration::from_millis(100), "a");
    scheduler.schedule(Duration::from_millis(200), "b");
    assert_eq!(scheduler.next_due(), Some(Duration::from_millis(100)));

    let deadline = Duration::from_millis(1000);
    assert_eq!(scheduler.pop_due(deadline), Some("a"));
    assert_eq!(scheduler.now(), Duration::from_millis(100));
    assert_eq!(scheduler.pop_due(deadline), Some("b"));
    assert_eq!(scheduler.pop_due(deadline), Some("c"));
    assert_eq!(scheduler.now(), Duration::from_millis(300));
    assert_eq!(scheduler.pop_due(deadline), None);

    scheduler.advance_to(deadline);
    assert_eq!(scheduler.now(), deadline);
  }

  #[test]
  fn same_instant_keeps_insertion_order() {
    let mut scheduler = Scheduler::default();
    for i in 0..5 {
      scheduler.schedule(Duration::from_millis(50), i);
    }

    let fired: Vec<_> =
      std::iter::from_fn(|| scheduler.pop_due(Duration::from_millis(50)))
        .collect();
    assert_eq!(fired, vec![0, 1, 2, 3, 4]);
  }

  #[test]
  fn nothing_fires_before_due() {
    let mut scheduler = Scheduler::default();
    scheduler.schedule(Duration::from_millis(3000), ());

    assert_eq!(scheduler.pop_due(Duration::from_millis(2999)), None);
    assert_eq!(scheduler.now(), Duration::ZERO);
    assert_eq!(scheduler.pending(), 1);

    assert_eq!(scheduler.pop_due(Duration::from_millis(3000)), Some(()));
    assert_eq!(scheduler.pending(), 0);
  }

  #[test]
  fn delays_are_relative_to_current_time() {
    let mut scheduler = Scheduler::default();
    scheduler.advance_to(Duration::from_secs(10));
    scheduler.schedule(Duration::from_secs(2), ());
    assert_eq!(scheduler.next_due(), Some(Duration::from_secs(12)));

    // the clock is monotonic
    scheduler.advance_to(Duration::from_secs(5));
    assert_eq!(scheduler.now(), Duration::from_secs(10));
  }

  #[test]
  fn due_times_saturate() {
    let mut scheduler = Scheduler::default();
    scheduler.advance_to(Duration::from_secs(1));
    scheduler.schedule(Duration::MAX, "first");
    scheduler.schedule(Duration::MAX, "second");
    assert_eq!(scheduler.next_due(), Some(Duration::MAX));

    assert_eq!(scheduler.pop_due(Duration::MAX), Some("first"));
    assert_eq!(scheduler.pop_due(Duration::MAX), Some("second"));
    assert_eq!(scheduler.now(), Duration::MAX);
  }
}
