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
  #[error("Unknown tab '{0}'")]
  Unknown(String),
}

/// Dashboard sections.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
  #[default]
  Home,
  Donations,
  Analytics,
}

impl Tab {
  pub const ALL: [Tab; 3] = [Tab::Home, Tab::Donations, Tab::Analytics];

  pub fn label(&self) -> &'static str {
    match self {
      Tab::Home => "Home",
      Tab::Donations => "Donations",
      Tab::Analytics => "Analytics",
    }
  }
}

impl Display for Tab {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.label())
  }
}

impl FromStr for Tab {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let needle = s.trim();
    Tab::ALL
      .into_iter()
      .find(|t| t.label().eq_ignore_ascii_case(needle))
      .ok_or_else(|| Error::Unknown(needle.to_owned()))
  }
}

#[cfg(test)]
mod tests {
  use super::{Error, Tab};

  #[test]
  fn parse_tabs() -> anyhow::Result<()> {
    assert_eq!("home".parse::<Tab>()?, Tab::Home);
    assert_eq!("Donations".parse::<Tab>()?, Tab::Donations);
    assert_eq!("ANALYTICS".parse::<Tab>()?, Tab::Analytics);
    assert_eq!("wallet".parse::<Tab>(), Err(Error::Unknown("wallet".into())));
    Ok(())
  }

  #[test]
  fn starts_on_home() {
    assert_eq!(Tab::default(), Tab::Home);
  }
}
