use {
  serde::{Deserialize, Serialize},
  std::fmt::{Display, Formatter},
};

/// Simulated wallet connection.
///
/// Connecting takes a while, disconnecting is immediate. Only a
/// fully connected wallet may be used to donate.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum WalletState {
  #[default]
  Disconnected,
  Connecting,
  Connected,
}

impl WalletState {
  pub fn is_connected(&self) -> bool {
    matches!(self, WalletState::Connected)
  }
}

impl Display for WalletState {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(match self {
      WalletState::Disconnected => "disconnected",
      WalletState::Connecting => "connecting",
      WalletState::Connected => "connected",
    })
  }
}
