use {
  reliefchain_primitives::{Campaign, Notification, NotificationKind, Tab},
  reliefchain_session::{Event, Session, Stat, ANALYTICS_STATS, HOME_STATS},
};

pub fn event(session: &Session, event: &Event) {
  match event {
    Event::NotificationShown(notification) => toast(notification),
    Event::NotificationExpired(id) => println!("  ~ notification {id} expired"),
    Event::WalletChanged(state) => println!("wallet: {state}"),
    Event::TabChanged(_) => tab(session),
    Event::DonationSettled { balance, .. } => {
      println!("account balance: {balance} APT")
    }
  }
}

pub fn toast(notification: &Notification) {
  let marker = match notification.kind {
    NotificationKind::Info => "..",
    NotificationKind::Success => "ok",
    NotificationKind::Error => "!!",
  };
  println!("[{marker}] {}", notification.message);
}

/// Prints the content of the currently selected dashboard tab.
pub fn tab(session: &Session) {
  println!("== {} ==", session.tab());
  match session.tab() {
    Tab::Home => {
      stats(&HOME_STATS);
      println!("Recent Donations");
      for donation in session.dashboard().recent() {
        println!(
          "  {:<28} {:>8} APT",
          donation.campaign.title(),
          donation.amount
        );
        println!("    {}", donation.campaign.description());
      }
    }
    Tab::Donations => {
      let draft = session.draft();
      println!("Make a Donation");
      for campaign in Campaign::ALL {
        let selected = if draft.campaign == Some(campaign) {
          "*"
        } else {
          " "
        };
        println!("  [{selected}] {:<12} {}", campaign.slug(), campaign.title());
      }
      println!("  amount:  {}", draft.amount);
      println!("  message: {}", draft.message);
    }
    Tab::Analytics => {
      stats(&ANALYTICS_STATS);
      println!(
        "All transactions are recorded for complete transparency. Track \
         the impact of your donations in real time."
      );
    }
  }
}

pub fn status(session: &Session) {
  let draft = session.draft();
  println!("account balance: {} APT", session.balance());
  println!("wallet:          {}", session.wallet());
  println!("tab:             {}", session.tab());
  println!(
    "campaign:        {}",
    draft.campaign.map(|c| c.title()).unwrap_or("-")
  );
  println!("amount:          {}", draft.amount);
  println!("message:         {}", draft.message);
  if let Some(donation) = session.settling() {
    println!(
      "settling:        {} APT to {}",
      donation.amount,
      donation.campaign.title()
    );
  }
  for notification in session.notifications() {
    toast(notification);
  }
}

fn stats(stats: &[Stat]) {
  for stat in stats {
    println!("  {:>8}  {}", stat.value, stat.label);
  }
}
