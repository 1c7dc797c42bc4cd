use {
  crate::WalletState,
  reliefchain_primitives::{Amount, AmountError, Balance, Donation, Draft},
  thiserror::Error,
};

/// Reasons a donation submission is turned down.
///
/// The display text of each variant is what the user sees in
/// the error notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DonationError {
  #[error("Please connect your wallet first!")]
  WalletNotConnected,

  #[error("A donation is already being processed!")]
  SubmissionPending,

  #[error("Please select a campaign!")]
  CampaignRequired,

  #[error("Please enter a valid donation amount!")]
  InvalidAmount(#[source] AmountError),

  #[error("Insufficient balance!")]
  InsufficientBalance,
}

/// Checks every precondition of a donation before anything is
/// mutated.
///
/// Checks run in a fixed order and the first violated one is
/// reported: wallet, in-flight submission, campaign, amount
/// format, balance. On success returns the donation that will be
/// settled, carrying a snapshot of the draft's message.
pub fn validate(
  draft: &Draft,
  wallet: WalletState,
  balance: Balance,
  in_flight: bool,
) -> Result<Donation, DonationError> {
  if !wallet.is_connected() {
    return Err(DonationError::WalletNotConnected);
  }

  if in_flight {
    return Err(DonationError::SubmissionPending);
  }

  let campaign = draft.campaign.ok_or(DonationError::CampaignRequired)?;

  let amount: Amount = draft
    .amount
    .parse()
    .map_err(DonationError::InvalidAmount)?;

  if !balance.covers(amount) {
    return Err(DonationError::InsufficientBalance);
  }

  Ok(Donation {
    campaign,
    amount,
    message: draft.message.clone(),
  })
}
