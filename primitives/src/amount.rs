use {
  serde::{Deserialize, Serialize},
  std::{
    fmt::{Display, Formatter},
    str::FromStr,
  },
  thiserror::Error,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("'{0}' is not a number")]
  Malformed(String),

  #[error("value must be a finite number")]
  NotFinite,

  #[error("amount must be greater than zero")]
  NotPositive,

  #[error("balance must not be negative")]
  Negative,
}

/// A donation amount in APT.
///
/// Always positive and finite. Amounts are entered by users as
/// free text and only become an [`Amount`] once parsed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
  pub fn new(value: f64) -> Result<Self, Error> {
    if !value.is_finite() {
      return Err(Error::NotFinite);
    }
    if value <= 0.0 {
      return Err(Error::NotPositive);
    }
    Ok(Self(value))
  }

  pub fn value(&self) -> f64 {
    self.0
  }
}

impl FromStr for Amount {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let text = s.trim();
    let value: f64 = text
      .parse()
      .map_err(|_| Error::Malformed(text.to_owned()))?;
    Self::new(value)
  }
}

impl<'de> Deserialize<'de> for Amount {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: serde::Deserializer<'de>,
  {
    let value = f64::deserialize(deserializer)?;
    Amount::new(value).map_err(serde::de::Error::custom)
  }
}

impl Display for Amount {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Spendable account balance in APT.
///
/// Always finite and never negative. Lives only for the duration
/// of a session and is only ever decreased by settled donations.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Balance(f64);

impl Balance {
  pub fn new(value: f64) -> Result<Self, Error> {
    if !value.is_finite() {
      return Err(Error::NotFinite);
    }
    if value < 0.0 {
      return Err(Error::Negative);
    }
    // -0.0 is accepted as zero
    Ok(Self(value.abs()))
  }

  /// A balance of a whole number of APT.
  pub fn whole(value: u32) -> Self {
    Self(f64::from(value))
  }

  pub fn value(&self) -> f64 {
    self.0
  }

  /// True if the balance is large enough to pay the given amount.
  pub fn covers(&self, amount: Amount) -> bool {
    amount.value() <= self.0
  }

  /// Returns the balance after paying `amount`, or None if
  /// the balance does not cover it.
  pub fn checked_debit(&self, amount: Amount) -> Option<Balance> {
    self.covers(amount).then(|| Balance(self.0 - amount.value()))
  }
}

impl FromStr for Balance {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let text = s.trim();
    let value: f64 = text
      .parse()
      .map_err(|_| Error::Malformed(text.to_owned()))?;
    Self::new(value)
  }
}

impl<'de> Deserialize<'de> for Balance {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: serde::Deserializer<'de>,
  {
    let value = f64::deserialize(deserializer)?;
    Balance::new(value).map_err(serde::de::Error::custom)
  }
}

impl Display for Balance {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}
