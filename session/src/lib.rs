mod config;
mod dashboard;
mod donation;
mod notify;
mod schedule;
mod session;
mod wallet;

pub use {
  config::Config,
  dashboard::{Dashboard, Stat, ANALYTICS_STATS, FEED_CAPACITY, HOME_STATS},
  donation::{validate, DonationError},
  notify::NotificationManager,
  schedule::Scheduler,
  session::{Event, Session, Task},
  wallet::WalletState,
};
