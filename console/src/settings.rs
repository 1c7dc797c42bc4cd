use {
  clap::Parser,
  humantime::Duration,
  reliefchain_primitives::Balance,
  reliefchain_session::Config,
  std::str::FromStr,
};

fn parse_tick(s: &str) -> Result<Duration, String> {
  let tick = Duration::from_str(s).map_err(|e| e.to_string())?;
  if std::time::Duration::from(tick).is_zero() {
    return Err("tick must be longer than zero".into());
  }
  Ok(tick)
}

/// ReliefChain Dashboard
///
/// Terminal front end for a simulated donation session. Commands
/// are read from stdin one per line, wallet connection and donation
/// settlement are simulated with fixed delays.
#[derive(Debug, Parser)]
pub struct SystemSettings {
  /// Account balance in APT at the start of the session
  #[clap(long, short,
    default_value = "100",
    value_name = "APT",
    value_parser = Balance::from_str)]
  balance: Balance,

  /// How long a notification stays visible
  #[clap(long, short,
    default_value = "3s",
    value_name = "DURATION")]
  notification_ttl: Duration,

  /// Simulated wallet connection time
  #[clap(long, short,
    default_value = "1s",
    value_name = "DURATION")]
  connect_delay: Duration,

  /// Simulated donation settlement time
  #[clap(long, short,
    default_value = "2s",
    value_name = "DURATION")]
  settlement_delay: Duration,

  /// How often the session clock catches up with real time
  #[clap(long, short = 't',
    default_value = "100ms",
    value_name = "DURATION",
    value_parser = parse_tick)]
  tick: Duration,
}

impl SystemSettings {
  pub fn session_config(&self) -> Config {
    Config {
      initial_balance: self.balance,
      notification_ttl: self.notification_ttl.into(),
      wallet_connect_delay: self.connect_delay.into(),
      settlement_delay: self.settlement_delay.into(),
      epoch_millis: None,
    }
  }

  pub fn tick(&self) -> std::time::Duration {
    self.tick.into()
  }
}
