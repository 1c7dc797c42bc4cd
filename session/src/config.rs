use {reliefchain_primitives::Balance, std::time::Duration};

/// Session wide timing and account configuration.
#[derive(Debug, Clone)]
pub struct Config {
  /// Account balance in APT when the session starts.
  pub initial_balance: Balance,

  /// How long a notification stays visible before it
  /// is removed.
  pub notification_ttl: Duration,

  /// Simulated time it takes a wallet to connect.
  pub wallet_connect_delay: Duration,

  /// Simulated time it takes an accepted donation to settle
  /// and be deducted from the balance.
  pub settlement_delay: Duration,

  /// Wall-clock time, in milliseconds since the UNIX epoch, that
  /// notification ids are derived from. When not set, the system
  /// time at session creation is used.
  pub epoch_millis: Option<u64>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      initial_balance: Balance::whole(100),
      notification_ttl: Duration::from_millis(3000),
      wallet_connect_delay: Duration::from_millis(1000),
      settlement_delay: Duration::from_millis(2000),
      epoch_millis: None,
    }
  }
}
