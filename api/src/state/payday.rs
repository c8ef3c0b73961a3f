use serde::{Deserialize, Serialize};
use steel::*;

use crate::consts::{NUM_POOLS, YEAR_PERCENTAGES};
use crate::state::payday_pda;

use super::PaydayAccount;

/// Payday is a singleton account collecting penalty deposits from the swap
/// and auction programs and bucketing them into five yearly amounts. Each
/// bucket is drained exactly once, into the ledger, when its year pool mints.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Payday {
    /// The token amount accumulated for each year.
    pub year_amounts: [u64; NUM_POOLS],

    /// Whether each bucket has been drained to the ledger (0/1).
    pub transferred: [u64; NUM_POOLS],
}

impl Payday {
    pub fn pda() -> (Pubkey, u8) {
        payday_pda()
    }

    /// Splits a penalty deposit across the year buckets: 10/15/20/25 percent
    /// for years one through four, the remainder (>= 30%) for year five. A
    /// cut owed to an already-drained bucket rolls forward to the first
    /// undrained one so late penalties stay claimable.
    pub fn deposit(&mut self, amount: u64) {
        let unit = amount / 100;
        let mut cuts = [0u64; NUM_POOLS];
        let mut allocated = 0u64;
        for (i, pct) in YEAR_PERCENTAGES.iter().enumerate() {
            cuts[i] = unit * pct;
            allocated += cuts[i];
        }
        cuts[NUM_POOLS - 1] = amount - allocated;

        for (i, cut) in cuts.into_iter().enumerate() {
            let target = self.roll_forward(i);
            self.year_amounts[target] += cut;
        }
    }

    /// The first undrained bucket at or after `index`. Falls back to the last
    /// bucket once everything has been drained.
    fn roll_forward(&self, index: usize) -> usize {
        (index..NUM_POOLS)
            .find(|&i| self.transferred[i] == 0)
            .unwrap_or(NUM_POOLS - 1)
    }

    /// The index of the next bucket to be drained, if any remain.
    pub fn closest_index(&self) -> Option<usize> {
        (0..NUM_POOLS).find(|&i| self.transferred[i] == 0)
    }

    /// The amount in the next not-yet-drained bucket.
    pub fn closest_pool_amount(&self) -> u64 {
        self.closest_index().map_or(0, |i| self.year_amounts[i])
    }

    /// Drains the closest bucket, returning its index and amount. The sole
    /// mutator of bucket balances besides deposits.
    pub fn drain_closest(&mut self) -> Option<(usize, u64)> {
        let index = self.closest_index()?;
        let amount = self.year_amounts[index];
        self.year_amounts[index] = 0;
        self.transferred[index] = 1;
        Some((index, amount))
    }
}

account!(PaydayAccount, Payday);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposit_follows_the_percentage_schedule() {
        let mut payday = Payday {
            year_amounts: [0; NUM_POOLS],
            transferred: [0; NUM_POOLS],
        };
        let deposit = 10_000_000;
        payday.deposit(deposit);

        let unit = deposit / 100;
        assert_eq!(payday.year_amounts[0], 10 * unit);
        assert_eq!(payday.year_amounts[1], 15 * unit);
        assert_eq!(payday.year_amounts[2], 20 * unit);
        assert_eq!(payday.year_amounts[3], 25 * unit);
        assert!(payday.year_amounts[4] >= 30 * unit);
        assert_eq!(payday.year_amounts.iter().sum::<u64>(), deposit);
    }

    #[test]
    fn remainder_bucket_absorbs_rounding() {
        let mut payday = Payday {
            year_amounts: [0; NUM_POOLS],
            transferred: [0; NUM_POOLS],
        };
        // Not divisible by 100; nothing may be lost to truncation.
        payday.deposit(999);
        assert_eq!(payday.year_amounts.iter().sum::<u64>(), 999);
    }

    #[test]
    fn buckets_drain_in_year_order() {
        let mut payday = Payday {
            year_amounts: [0; NUM_POOLS],
            transferred: [0; NUM_POOLS],
        };
        payday.deposit(10_000);
        assert_eq!(payday.closest_pool_amount(), payday.year_amounts[0]);

        let (index, amount) = payday.drain_closest().unwrap();
        assert_eq!(index, 0);
        assert_eq!(amount, 1_000);
        assert_eq!(payday.year_amounts[0], 0);

        let (index, _) = payday.drain_closest().unwrap();
        assert_eq!(index, 1);
    }

    #[test]
    fn late_deposits_roll_into_the_first_undrained_bucket() {
        let mut payday = Payday {
            year_amounts: [0; NUM_POOLS],
            transferred: [0; NUM_POOLS],
        };
        payday.drain_closest();
        payday.drain_closest();
        payday.deposit(10_000);

        // Year-one and year-two cuts land in the year-three bucket.
        assert_eq!(payday.year_amounts[0], 0);
        assert_eq!(payday.year_amounts[1], 0);
        assert_eq!(payday.year_amounts[2], 1_000 + 1_500 + 2_000);
        assert_eq!(payday.year_amounts[3], 2_500);
        assert_eq!(payday.year_amounts[4], 3_000);
    }

    #[test]
    fn drain_exhausts_after_five_buckets() {
        let mut payday = Payday {
            year_amounts: [0; NUM_POOLS],
            transferred: [0; NUM_POOLS],
        };
        for _ in 0..NUM_POOLS {
            assert!(payday.drain_closest().is_some());
        }
        assert!(payday.drain_closest().is_none());
        assert_eq!(payday.closest_pool_amount(), 0);
    }
}
