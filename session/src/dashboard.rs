use {
  reliefchain_primitives::{Amount, Campaign, Donation},
  std::collections::VecDeque,
};

/// A headline figure shown on one of the dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
  pub value: &'static str,
  pub label: &'static str,
}

pub const HOME_STATS: [Stat; 3] = [
  Stat {
    value: "1,247",
    label: "Total Donations",
  },
  Stat {
    value: "₹2.4M",
    label: "Funds Raised",
  },
  Stat {
    value: "89",
    label: "Active Campaigns",
  },
];

pub const ANALYTICS_STATS: [Stat; 3] = [
  Stat {
    value: "94.2%",
    label: "Transparency Score",
  },
  Stat {
    value: "2.3s",
    label: "Avg. Transaction Time",
  },
  Stat {
    value: "0.01%",
    label: "Platform Fee",
  },
];

/// Upper bound on the number of entries in the recent donations feed.
pub const FEED_CAPACITY: usize = 10;

/// Recent donations, newest first.
#[derive(Debug, Clone)]
pub struct Dashboard {
  recent: VecDeque<Donation>,
}

impl Default for Dashboard {
  fn default() -> Self {
    // oldest first, each one is pushed to the front of the feed.
    let seed = [
      (Campaign::Disaster, 75.0),
      (Campaign::Education, 50.0),
      (Campaign::Medical, 25.0),
    ];

    let mut dashboard = Self {
      recent: VecDeque::with_capacity(FEED_CAPACITY),
    };

    for (campaign, value) in seed {
      if let Ok(amount) = Amount::new(value) {
        dashboard.record(Donation {
          campaign,
          amount,
          message: String::new(),
        });
      }
    }
    dashboard
  }
}

impl Dashboard {
  /// Puts a settled donation at the top of the feed, dropping the
  /// oldest entry once the feed is full.
  pub fn record(&mut self, donation: Donation) {
    self.recent.push_front(donation);
    self.recent.truncate(FEED_CAPACITY);
  }

  pub fn recent(&self) -> impl Iterator<Item = &Donation> {
    self.recent.iter()
  }
}
