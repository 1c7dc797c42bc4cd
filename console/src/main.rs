use {
  crate::{command::Command, settings::SystemSettings},
  clap::Parser,
  reliefchain_session::Session,
  std::io,
  tokio::{
    io::{stdin, AsyncBufReadExt, BufReader},
    time::{interval, Instant, MissedTickBehavior},
  },
  tracing::{debug, info, subscriber::set_global_default, warn},
  tracing_subscriber::{EnvFilter, FmtSubscriber},
};

mod command;
mod render;
mod settings;

fn execute(session: &mut Session, command: Command) {
  match command {
    Command::Wallet => session.toggle_wallet(),
    Command::Donate => {
      // rejections are shown to the user as notifications
      if let Err(e) = session.request_donate() {
        debug!("donate request rejected: {e}");
      }
    }
    Command::Tab(tab) => session.select_tab(tab),
    Command::Campaign(campaign) => session.set_campaign(campaign),
    Command::Amount(amount) => session.set_amount(amount),
    Command::Message(message) => session.set_message(message),
    Command::Submit => {
      if let Err(e) = session.submit() {
        debug!("submission rejected: {e}");
      }
    }
    Command::Status => render::status(session),
    Command::Help => println!("{}", command::HELP),
    Command::Quit => {}
  }
}

/// What the input loop does after a line of input was handled.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
  Continue,
  Quit,
  Closed,
}

/// Turns one raw line of input into text. Bytes that are not valid
/// UTF-8 are replaced so that a garbled line is reported as an
/// unknown command instead of ending the session.
fn decode_line(raw: &[u8]) -> String {
  String::from_utf8_lossy(raw)
    .trim_end_matches(|c| c == '\r' || c == '\n')
    .to_owned()
}

/// Applies one read from stdin to the session.
fn handle_line(session: &mut Session, read: io::Result<Option<String>>) -> Flow {
  match read {
    Ok(Some(line)) if line.trim().is_empty() => Flow::Continue,
    Ok(Some(line)) => match line.parse::<Command>() {
      Ok(Command::Quit) => Flow::Quit,
      Ok(command) => {
        execute(session, command);
        Flow::Continue
      }
      Err(e) => {
        println!("{e}, type 'help' for a list of commands");
        Flow::Continue
      }
    },
    Ok(None) => {
      info!("stdin closed");
      Flow::Closed
    }
    Err(e) if e.kind() == io::ErrorKind::InvalidData => {
      warn!("unreadable input line: {e}");
      println!("could not read that line, type 'help' for a list of commands");
      Flow::Continue
    }
    Err(e) => {
      // the session keeps running until its scheduled work is done.
      warn!("failed reading stdin: {e}");
      Flow::Closed
    }
  }
}

/// Moves the session clock forward by the real time that
/// passed since it was last synced.
fn catch_up(session: &mut Session, synced_at: &mut Instant) {
  let now = Instant::now();
  session.advance(now - *synced_at);
  *synced_at = now;
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // configure logging, stdout is reserved for the dashboard.
  set_global_default(
    FmtSubscriber::builder()
      .with_env_filter(
        EnvFilter::try_from_default_env()
          .unwrap_or_else(|_| EnvFilter::new("warn")),
      )
      .with_writer(std::io::stderr)
      .finish(),
  )?;

  // gather CLI parameters
  let settings = SystemSettings::parse();
  info!("startup settings: {settings:#?}");

  let mut session = Session::new(settings.session_config());
  render::tab(&session);

  let mut input = BufReader::new(stdin());
  let mut raw = Vec::new();
  let mut stdin_open = true;

  let mut ticker = interval(settings.tick());
  ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
  let mut synced_at = Instant::now();

  let mut running = true;
  while running {
    tokio::select! {
      read = input.read_until(b'\n', &mut raw), if stdin_open => {
        catch_up(&mut session, &mut synced_at);
        let line = read.map(|n| (n > 0).then(|| decode_line(&raw)));
        raw.clear();
        match handle_line(&mut session, line) {
          Flow::Continue => {}
          Flow::Quit => running = false,
          // input is exhausted, let scheduled work finish
          // before exiting.
          Flow::Closed => stdin_open = false,
        }
      }
      _ = ticker.tick() => {
        catch_up(&mut session, &mut synced_at);
        if !stdin_open && session.next_due().is_none() {
          running = false;
        }
      }
    }

    for event in session.take_events() {
      render::event(&session, &event);
    }
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use {
    super::{decode_line, handle_line, Flow},
    reliefchain_session::{Config, Session, WalletState},
    std::io,
  };

  fn session() -> Session {
    Session::new(Config {
      epoch_millis: Some(0),
      ..Default::default()
    })
  }

  #[test]
  fn garbled_bytes_become_unknown_command() {
    assert_eq!(decode_line(b"wallet\r\n"), "wallet");
    assert_eq!(decode_line(b"\xff\n"), "\u{fffd}");

    let mut session = session();
    let line = Some(decode_line(b"\xff\n"));
    assert_eq!(handle_line(&mut session, Ok(line)), Flow::Continue);
    assert_eq!(
      handle_line(&mut session, Ok(Some("wallet".into()))),
      Flow::Continue
    );
    assert_eq!(session.wallet(), WalletState::Connecting);
  }

  #[test]
  fn invalid_utf8_error_keeps_session_running() {
    let mut session = session();
    let error = io::Error::new(
      io::ErrorKind::InvalidData,
      "stream did not contain valid UTF-8",
    );
    assert_eq!(handle_line(&mut session, Err(error)), Flow::Continue);

    assert_eq!(
      handle_line(&mut session, Ok(Some("wallet".into()))),
      Flow::Continue
    );
    assert_eq!(session.wallet(), WalletState::Connecting);
  }

  #[test]
  fn quit_and_end_of_input() {
    let mut session = session();
    assert_eq!(handle_line(&mut session, Ok(Some("  ".into()))), Flow::Continue);
    assert_eq!(handle_line(&mut session, Ok(Some("quit".into()))), Flow::Quit);
    assert_eq!(handle_line(&mut session, Ok(None)), Flow::Closed);

    let broken = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
    assert_eq!(handle_line(&mut session, Err(broken)), Flow::Closed);
  }
}
