mod amount;
mod campaign;
mod donation;
mod draft;
mod notification;
mod tab;

pub use {
  amount::{Amount, Balance, Error as AmountError},
  campaign::{Campaign, Error as CampaignError},
  donation::Donation,
  draft::Draft,
  notification::{Notification, NotificationId, NotificationKind},
  tab::{Error as TabError, Tab},
};
