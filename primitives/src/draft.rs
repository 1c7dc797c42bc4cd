use {
  crate::Campaign,
  serde::{Deserialize, Serialize},
};

/// Uncommitted donation form data.
///
/// Fields are stored exactly as the user entered them and are
/// only validated when the draft is submitted. A draft survives
/// failed submissions so that the user can correct it, and is
/// cleared once a donation settles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Draft {
  pub campaign: Option<Campaign>,

  /// Raw amount text, parsed into an [`crate::Amount`] on submit.
  pub amount: String,

  /// Optional message of support, never validated.
  pub message: String,
}

impl Draft {
  pub fn is_empty(&self) -> bool {
    self.campaign.is_none() && self.amount.is_empty() && self.message.is_empty()
  }

  pub fn clear(&mut self) {
    *self = Self::default();
  }
}
