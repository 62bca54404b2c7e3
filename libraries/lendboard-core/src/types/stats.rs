use super::record::{UserRecord, UserStatus};
use serde::{Deserialize, Serialize};

// Placeholder shares with no backing loan/savings data.
const LOANS_PERCENT: usize = 12;
const SAVINGS_PERCENT: usize = 42;

/// Summary cards over the whole loaded list, regardless of filters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total: usize,
    pub active: usize,
    pub with_loans: usize,
    pub with_savings: usize,
}

impl Stats {
    pub fn from_records(records: &[UserRecord]) -> Self {
        let total = records.len();
        let active = records
            .iter()
            .filter(|r| r.status == UserStatus::Active)
            .count();

        Self {
            total,
            active,
            with_loans: percent_of(total, LOANS_PERCENT),
            with_savings: percent_of(total, SAVINGS_PERCENT),
        }
    }
}

/// `round(total * percent / 100)`, halves rounded up
fn percent_of(total: usize, percent: usize) -> usize {
    (total * percent + 50) / 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_shares_round_half_up() {
        assert_eq!(percent_of(500, LOANS_PERCENT), 60);
        assert_eq!(percent_of(500, SAVINGS_PERCENT), 210);
        // 25 * 0.42 = 10.5
        assert_eq!(percent_of(25, SAVINGS_PERCENT), 11);
        // 4 * 0.12 = 0.48
        assert_eq!(percent_of(4, LOANS_PERCENT), 0);
    }

    #[test]
    fn empty_list_has_zero_stats() {
        assert_eq!(Stats::from_records(&[]), Stats::default());
    }
}
