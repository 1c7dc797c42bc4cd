#![allow(dead_code)]

use {
  reliefchain_primitives::{Notification, NotificationKind},
  reliefchain_session::{Config, Session, WalletState},
  std::time::Duration,
};

pub const EPOCH: u64 = 1_700_000_000_000;

pub const TTL: Duration = Duration::from_millis(3000);
pub const CONNECT_DELAY: Duration = Duration::from_millis(1000);
pub const SETTLEMENT_DELAY: Duration = Duration::from_millis(2000);

/// A session with default timings, 100 APT and a fixed epoch so
/// notification ids are predictable.
pub fn session() -> Session {
  Session::new(Config {
    epoch_millis: Some(EPOCH),
    ..Default::default()
  })
}

/// Same as [`session`] but with the wallet already connected and
/// the connection notifications expired.
pub fn connected_session() -> Session {
  let mut session = session();
  session.toggle_wallet();
  session.advance(CONNECT_DELAY + TTL);
  assert_eq!(session.wallet(), WalletState::Connected);
  assert!(session.notifications().is_empty());
  session.take_events();
  session
}

pub fn messages(session: &Session) -> Vec<(NotificationKind, &str)> {
  session
    .notifications()
    .iter()
    .map(|n| (n.kind, n.message.as_str()))
    .collect()
}

pub fn errors(session: &Session) -> Vec<&Notification> {
  session
    .notifications()
    .iter()
    .filter(|n| n.kind == NotificationKind::Error)
    .collect()
}
