use {
  reliefchain_primitives::{Campaign, CampaignError, Tab, TabError},
  std::str::FromStr,
  thiserror::Error,
};

pub const HELP: &str = "\
commands:
  wallet                  connect or disconnect the wallet
  donate                  open the donation form
  tab <name>              switch to home, donations or analytics
  campaign <slug|none>    medical, education, disaster or environment
  amount <text>           donation amount in APT
  message <text>          optional message of support
  submit                  process the donation
  status                  show balance, wallet, draft and notifications
  help                    show this help
  quit                    exit";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("Unknown command '{0}'")]
  Unknown(String),

  #[error("'{0}' expects an argument")]
  MissingArgument(&'static str),

  #[error(transparent)]
  Campaign(#[from] CampaignError),

  #[error(transparent)]
  Tab(#[from] TabError),
}

/// One line of user input, already parsed into a session operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  Wallet,
  Donate,
  Tab(Tab),
  Campaign(Option<Campaign>),
  Amount(String),
  Message(String),
  Submit,
  Status,
  Help,
  Quit,
}

impl FromStr for Command {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let line = s.trim();
    let (name, arg) = match line.split_once(char::is_whitespace) {
      Some((name, arg)) => (name, arg.trim()),
      None => (line, ""),
    };

    Ok(match name.to_ascii_lowercase().as_str() {
      "wallet" | "connect" | "disconnect" => Command::Wallet,
      "donate" => Command::Donate,
      "tab" => match arg {
        "" => return Err(Error::MissingArgument("tab")),
        arg => Command::Tab(arg.parse()?),
      },
      "campaign" => match arg {
        "" => return Err(Error::MissingArgument("campaign")),
        "none" => Command::Campaign(None),
        arg => Command::Campaign(Some(arg.parse()?)),
      },
      // amount and message may be set to empty text
      "amount" => Command::Amount(arg.to_owned()),
      "message" => Command::Message(arg.to_owned()),
      "submit" => Command::Submit,
      "status" => Command::Status,
      "help" | "?" => Command::Help,
      "quit" | "exit" => Command::Quit,
      _ => return Err(Error::Unknown(name.to_owned())),
    })
  }
}
