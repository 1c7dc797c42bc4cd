use {
  crate::{schedule::Scheduler, session::Task},
  reliefchain_primitives::{Notification, NotificationId, NotificationKind},
  std::time::Duration,
  tracing::debug,
};

/// Keeps the set of currently visible notifications.
///
/// Notifications are kept in insertion order, oldest first. Every
/// notification schedules its own expiry when created and is
/// removed once its visibility window elapses.
#[derive(Debug)]
pub struct NotificationManager {
  ttl: Duration,
  epoch_millis: u64,
  last_id: Option<NotificationId>,
  active: Vec<Notification>,
}

impl NotificationManager {
  /// `epoch_millis` is the wall-clock time, in milliseconds since the
  /// UNIX epoch, that corresponds to zero on the scheduler's clock.
  pub fn new(ttl: Duration, epoch_millis: u64) -> Self {
    Self {
      ttl,
      epoch_millis,
      last_id: None,
      active: Vec::new(),
    }
  }

  /// Appends a new notification and schedules its removal.
  ///
  /// Ids come from the creation timestamp. When two notifications
  /// are created within the same millisecond the later one gets the
  /// next free id, so ids stay unique and strictly increasing.
  pub fn notify(
    &mut self,
    scheduler: &mut Scheduler<Task>,
    message: impl Into<String>,
    kind: NotificationKind,
  ) -> NotificationId {
    let elapsed = u64::try_from(scheduler.now().as_millis()).unwrap_or(u64::MAX);
    let timestamp = self.epoch_millis.saturating_add(elapsed);
    let id = match self.last_id {
      Some(last) if timestamp <= last.value() => {
        NotificationId::new(last.value().saturating_add(1))
      }
      _ => NotificationId::new(timestamp),
    };
    self.last_id = Some(id);

    let message = message.into();
    debug!("{kind} notification {id}: {message}");

    scheduler.schedule(self.ttl, Task::ExpireNotification(id));
    self.active.push(Notification { id, message, kind });
    id
  }

  /// Removes a notification, returns false if it was already gone.
  pub fn expire(&mut self, id: NotificationId) -> bool {
    let before = self.active.len();
    self.active.retain(|n| n.id != id);
    before != self.active.len()
  }

  pub fn active(&self) -> &[Notification] {
    &self.active
  }

  pub fn get(&self, id: NotificationId) -> Option<&Notification> {
    self.active.iter().find(|n| n.id == id)
  }

  pub fn ttl(&self) -> Duration {
    self.ttl
  }
}
