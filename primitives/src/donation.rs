use {
  crate::{Amount, Campaign},
  serde::{Deserialize, Serialize},
};

/// A donation that passed validation and settled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
  pub campaign: Campaign,
  pub amount: Amount,
  pub message: String,
}
