use {
  common::{connected_session, EPOCH},
  reliefchain_primitives::{Balance, Campaign},
  reliefchain_session::{Config, Session, WalletState},
  std::time::Duration,
};

mod common;

#[test]
fn advancing_to_the_end_of_time() {
  let mut session = connected_session();
  session.advance(Duration::from_secs(1));
  session.advance(Duration::MAX);
  assert_eq!(session.now(), Duration::MAX);

  // the session keeps working once the clock is saturated
  session.toggle_wallet();
  assert_eq!(session.wallet(), WalletState::Disconnected);
  assert_eq!(session.notifications().len(), 1);
}

#[test]
fn huge_delays_saturate() -> anyhow::Result<()> {
  let mut session = Session::new(Config {
    epoch_millis: Some(EPOCH),
    notification_ttl: Duration::MAX,
    settlement_delay: Duration::MAX,
    ..Default::default()
  });

  session.toggle_wallet();
  session.advance(Duration::from_secs(1));
  assert_eq!(session.wallet(), WalletState::Connected);
  assert_eq!(session.notifications().len(), 2);

  session.set_campaign(Some(Campaign::Medical));
  session.set_amount("10");
  session.submit()?;
  session.advance(Duration::from_secs(3600));
  assert_eq!(session.balance(), Balance::whole(100));

  // every task due at the saturated end of the clock fires
  session.advance(Duration::MAX);
  assert_eq!(session.balance(), Balance::whole(90));
  assert!(session.notifications().is_empty());
  Ok(())
}
