use {
  crate::{
    donation::{self, DonationError},
    notify::NotificationManager,
    schedule::Scheduler,
    Config,
    Dashboard,
    WalletState,
  },
  reliefchain_primitives::{
    Balance,
    Campaign,
    Donation,
    Draft,
    Notification,
    NotificationId,
    NotificationKind,
    Tab,
  },
  std::time::{Duration, SystemTime, UNIX_EPOCH},
  tracing::{debug, info, warn},
};

/// Deferred work fired by the session scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
  /// Removes a notification once its visibility window elapsed.
  ExpireNotification(NotificationId),

  /// Finishes a wallet connection that was started by a toggle.
  CompleteWalletConnection,

  /// Deducts the in-flight donation from the balance and clears
  /// the draft.
  SettleDonation,
}

/// Observable state changes, in the order they happened.
///
/// A presentation layer drains them with [`Session::take_events`]
/// instead of diffing the session state.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
  NotificationShown(Notification),
  NotificationExpired(NotificationId),
  WalletChanged(WalletState),
  TabChanged(Tab),
  DonationSettled { donation: Donation, balance: Balance },
}

/// One user's dashboard session.
///
/// Owns all mutable state: balance, wallet connection, donation
/// draft, active tab and notifications. Every operation runs to
/// completion synchronously; anything that takes time is scheduled
/// on the session's virtual clock and happens when the clock is
/// advanced past its due time.
///
/// At most one donation may be settling at a time, further
/// submissions are rejected until it settles.
#[derive(Debug)]
pub struct Session {
  config: Config,
  scheduler: Scheduler<Task>,
  notifications: NotificationManager,
  wallet: WalletState,
  draft: Draft,
  balance: Balance,
  tab: Tab,
  settling: Option<Donation>,
  dashboard: Dashboard,
  events: Vec<Event>,
}

impl Session {
  pub fn new(config: Config) -> Self {
    let epoch_millis = config.epoch_millis.unwrap_or_else(|| {
      SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
    });

    Self {
      notifications: NotificationManager::new(
        config.notification_ttl,
        epoch_millis,
      ),
      scheduler: Scheduler::default(),
      wallet: WalletState::default(),
      draft: Draft::default(),
      balance: config.initial_balance,
      tab: Tab::default(),
      settling: None,
      dashboard: Dashboard::default(),
      events: Vec::new(),
      config,
    }
  }

  /// Connects a disconnected wallet or disconnects a connected one.
  ///
  /// Connecting completes after the configured delay. A toggle while
  /// a connection is still being established is ignored.
  pub fn toggle_wallet(&mut self) {
    match self.wallet {
      WalletState::Disconnected => {
        info!("connecting wallet");
        self.set_wallet(WalletState::Connecting);
        self.notify("Connecting wallet...", NotificationKind::Info);
        self.scheduler.schedule(
          self.config.wallet_connect_delay,
          Task::CompleteWalletConnection,
        );
      }
      WalletState::Connecting => {
        debug!("wallet connection already in progress, ignoring toggle");
      }
      WalletState::Connected => {
        info!("wallet disconnected");
        self.set_wallet(WalletState::Disconnected);
        self.notify("Wallet disconnected", NotificationKind::Info);
      }
    }
  }

  /// Opens the donation form, only allowed with a connected wallet.
  pub fn request_donate(&mut self) -> Result<(), DonationError> {
    if !self.wallet.is_connected() {
      return Err(self.reject(DonationError::WalletNotConnected));
    }
    self.select_tab(Tab::Donations);
    Ok(())
  }

  pub fn select_tab(&mut self, tab: Tab) {
    if self.tab != tab {
      self.tab = tab;
      self.events.push(Event::TabChanged(tab));
    }
  }

  pub fn set_campaign(&mut self, campaign: Option<Campaign>) {
    self.draft.campaign = campaign;
  }

  pub fn set_amount(&mut self, amount: impl Into<String>) {
    self.draft.amount = amount.into();
  }

  pub fn set_message(&mut self, message: impl Into<String>) {
    self.draft.message = message.into();
  }

  /// Validates the current draft and, if every check passes, starts
  /// settling the donation.
  ///
  /// Nothing is mutated on rejection, the draft is kept so the user
  /// can correct it. Every outcome is also reported through exactly
  /// one notification.
  pub fn submit(&mut self) -> Result<(), DonationError> {
    let donation = donation::validate(
      &self.draft,
      self.wallet,
      self.balance,
      self.settling.is_some(),
    )
    .map_err(|e| self.reject(e))?;

    info!(
      "accepted donation of {} APT to {}",
      donation.amount, donation.campaign
    );
    self.settling = Some(donation);
    self.notify("Processing donation...", NotificationKind::Info);
    self
      .scheduler
      .schedule(self.config.settlement_delay, Task::SettleDonation);
    Ok(())
  }

  /// Moves the session clock forward, firing every task that falls
  /// due on the way in due order. Tasks scheduled by fired tasks
  /// also run if they are due before the end of the window.
  pub fn advance(&mut self, by: Duration) {
    let deadline = self.scheduler.now().saturating_add(by);
    while let Some(task) = self.scheduler.pop_due(deadline) {
      self.fire(task);
    }
    self.scheduler.advance_to(deadline);
  }

  /// Drains observable changes accumulated since the last call.
  pub fn take_events(&mut self) -> Vec<Event> {
    std::mem::take(&mut self.events)
  }

  pub fn now(&self) -> Duration {
    self.scheduler.now()
  }

  /// Virtual time of the next scheduled task, if any.
  pub fn next_due(&self) -> Option<Duration> {
    self.scheduler.next_due()
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn balance(&self) -> Balance {
    self.balance
  }

  pub fn wallet(&self) -> WalletState {
    self.wallet
  }

  pub fn draft(&self) -> &Draft {
    &self.draft
  }

  pub fn tab(&self) -> Tab {
    self.tab
  }

  pub fn notifications(&self) -> &[Notification] {
    self.notifications.active()
  }

  /// The donation that was accepted and is waiting to settle.
  pub fn settling(&self) -> Option<&Donation> {
    self.settling.as_ref()
  }

  pub fn dashboard(&self) -> &Dashboard {
    &self.dashboard
  }

  fn fire(&mut self, task: Task) {
    match task {
      Task::ExpireNotification(id) => {
        if self.notifications.expire(id) {
          debug!("notification {id} expired");
          self.events.push(Event::NotificationExpired(id));
        }
      }
      Task::CompleteWalletConnection => {
        if self.wallet == WalletState::Connecting {
          info!("wallet connected");
          self.set_wallet(WalletState::Connected);
          self.notify(
            "Wallet connected successfully!",
            NotificationKind::Success,
          );
        }
      }
      Task::SettleDonation => self.settle(),
    }
  }

  fn settle(&mut self) {
    let Some(donation) = self.settling.take() else {
      warn!("settlement fired with no donation in flight");
      return;
    };

    // submissions are serialized, so the balance cannot have
    // dropped below the accepted amount since validation.
    let Some(balance) = self.balance.checked_debit(donation.amount) else {
      warn!(
        "balance {} no longer covers {} APT, dropping donation",
        self.balance, donation.amount
      );
      self.reject(DonationError::InsufficientBalance);
      return;
    };

    self.balance = balance;
    self.draft.clear();
    info!(
      "settled donation of {} APT to {}, balance is now {}",
      donation.amount, donation.campaign, balance
    );

    self.notify(
      format!("Successfully donated {} APT!", donation.amount),
      NotificationKind::Success,
    );
    self.dashboard.record(donation.clone());
    self.events.push(Event::DonationSettled { donation, balance });
  }

  fn reject(&mut self, error: DonationError) -> DonationError {
    debug!("donation rejected: {error:?}");
    self.notify(error.to_string(), NotificationKind::Error);
    error
  }

  fn set_wallet(&mut self, state: WalletState) {
    self.wallet = state;
    self.events.push(Event::WalletChanged(state));
  }

  fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
    let id = self.notifications.notify(&mut self.scheduler, message, kind);
    if let Some(notification) = self.notifications.get(id) {
      self.events.push(Event::NotificationShown(notification.clone()));
    }
  }
}
