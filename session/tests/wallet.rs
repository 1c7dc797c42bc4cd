use {
  common::{messages, session, CONNECT_DELAY, TTL},
  reliefchain_primitives::NotificationKind,
  reliefchain_session::{Event, WalletState},
  std::time::Duration,
};

mod common;

#[test]
fn connect_takes_a_while() {
  let mut session = session();
  assert_eq!(session.wallet(), WalletState::Disconnected);

  session.toggle_wallet();
  assert_eq!(session.wallet(), WalletState::Connecting);
  assert_eq!(messages(&session), vec![(
    NotificationKind::Info,
    "Connecting wallet..."
  )]);

  session.advance(CONNECT_DELAY - Duration::from_millis(1));
  assert_eq!(session.wallet(), WalletState::Connecting);

  session.advance(Duration::from_millis(1));
  assert_eq!(session.wallet(), WalletState::Connected);
  assert_eq!(messages(&session), vec![
    (NotificationKind::Info, "Connecting wallet..."),
    (NotificationKind::Success, "Wallet connected successfully!"),
  ]);
}

#[test]
fn disconnect_is_immediate() {
  let mut session = session();
  session.toggle_wallet();
  session.advance(CONNECT_DELAY + TTL);
  session.take_events();

  session.toggle_wallet();
  assert_eq!(session.wallet(), WalletState::Disconnected);
  assert_eq!(messages(&session), vec![(
    NotificationKind::Info,
    "Wallet disconnected"
  )]);
  assert!(matches!(
    session.take_events().as_slice(),
    [
      Event::WalletChanged(WalletState::Disconnected),
      Event::NotificationShown(_)
    ]
  ));
}

#[test]
fn toggle_while_connecting_is_ignored() {
  let mut session = session();
  session.toggle_wallet();
  session.advance(Duration::from_millis(300));
  session.toggle_wallet();

  assert_eq!(session.wallet(), WalletState::Connecting);
  assert_eq!(session.notifications().len(), 1);

  // still completes on the original schedule
  session.advance(CONNECT_DELAY - Duration::from_millis(300));
  assert_eq!(session.wallet(), WalletState::Connected);
}

#[test]
fn reconnect_after_disconnect() {
  let mut session = session();
  for _ in 0..2 {
    session.toggle_wallet();
    session.advance(CONNECT_DELAY);
    assert_eq!(session.wallet(), WalletState::Connected);
    session.toggle_wallet();
    assert_eq!(session.wallet(), WalletState::Disconnected);
  }
  assert_eq!(session.notifications().len(), 6);
}
