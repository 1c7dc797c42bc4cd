use {
  serde::{Deserialize, Serialize},
  std::fmt::{Debug, Display, Formatter},
};

/// Identifies a notification within a session.
///
/// Derived from the time the notification was created, in
/// milliseconds since the UNIX epoch, and strictly increasing
/// within a session.
#[derive(
  Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NotificationId(u64);

impl NotificationId {
  pub fn new(value: u64) -> Self {
    Self(value)
  }

  pub fn value(&self) -> u64 {
    self.0
  }
}

impl Display for NotificationId {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl Debug for NotificationId {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "notification({})", self.0)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
  Info,
  Success,
  Error,
}

impl Display for NotificationKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(match self {
      NotificationKind::Info => "info",
      NotificationKind::Success => "success",
      NotificationKind::Error => "error",
    })
  }
}

/// A transient user-facing message.
///
/// Notifications are never dismissed manually, they disappear on
/// their own once their visibility window elapses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
  pub id: NotificationId,
  pub message: String,
  pub kind: NotificationKind,
}
