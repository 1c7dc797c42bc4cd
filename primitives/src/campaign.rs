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
  #[error("Unknown campaign '{0}'")]
  Unknown(String),
}

/// A fixed donation target category.
///
/// The set of campaigns is closed, a donation draft either
/// points at one of those or has no campaign selected yet.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Campaign {
  Medical,
  Education,
  Disaster,
  Environment,
}

impl Campaign {
  /// All campaigns in the order they are offered to donors.
  pub const ALL: [Campaign; 4] = [
    Campaign::Medical,
    Campaign::Education,
    Campaign::Disaster,
    Campaign::Environment,
  ];

  /// Short identifier used in input forms and commands.
  pub fn slug(&self) -> &'static str {
    match self {
      Campaign::Medical => "medical",
      Campaign::Education => "education",
      Campaign::Disaster => "disaster",
      Campaign::Environment => "environment",
    }
  }

  pub fn title(&self) -> &'static str {
    match self {
      Campaign::Medical => "Emergency Medical Fund",
      Campaign::Education => "Education Initiative",
      Campaign::Disaster => "Disaster Relief Fund",
      Campaign::Environment => "Environmental Protection",
    }
  }

  pub fn description(&self) -> &'static str {
    match self {
      Campaign::Medical => {
        "Supporting critical medical care for underprivileged families"
      }
      Campaign::Education => {
        "Providing educational resources to rural schools"
      }
      Campaign::Disaster => "Emergency aid for flood-affected communities",
      Campaign::Environment => {
        "Restoring ecosystems damaged by pollution and deforestation"
      }
    }
  }
}

impl Display for Campaign {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.slug())
  }
}

impl FromStr for Campaign {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let needle = s.trim();
    Campaign::ALL
      .into_iter()
      .find(|c| c.slug().eq_ignore_ascii_case(needle))
      .ok_or_else(|| Error::Unknown(needle.to_owned()))
  }
}
