use serde::{Deserialize, Serialize};
use steel::*;

use crate::consts::NUM_POOLS;
use crate::state::ledger_pda;

use super::{PaydayAccount, Session};

/// One of the five yearly reward windows.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct YearPool {
    /// The sum of shares credited to this window by open sessions. Frozen at
    /// mint time and used as the payout denominator from then on.
    pub total_shares: u64,

    /// The maturation boundary. The pool may mint strictly after this instant.
    pub start_time: i64,

    /// Whether the pool has been finalized and funded (0/1).
    pub minted: u64,

    /// The token amount frozen into this pool at mint time.
    pub minted_amount: u64,
}

/// Ledger is a singleton account holding the five yearly reward pools and the
/// share bookkeeping for every staking session routed through the triggers.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Ledger {
    /// The five reward windows, in maturation order.
    pub pools: [YearPool; NUM_POOLS],

    /// The sum of shares of open sessions holding at least one eligibility.
    pub shares_total_supply: u64,

    /// The sum of minted-but-unwithdrawn pool amounts. Subtracted from the
    /// ledger token balance when the next pool mints so earlier mints are not
    /// counted twice.
    pub reserved: u64,
}

impl Ledger {
    pub fn pda() -> (Pubkey, u8) {
        ledger_pda()
    }

    /// Derives the five window boundaries from genesis and the period length.
    /// Called once at initialization; the boundaries never change afterwards.
    pub fn init_schedule(&mut self, genesis: i64, period: i64) {
        for (i, pool) in self.pools.iter_mut().enumerate() {
            pool.total_shares = 0;
            pool.start_time = genesis + (i as i64 + 1) * period;
            pool.minted = 0;
            pool.minted_amount = 0;
        }
        self.shares_total_supply = 0;
        self.reserved = 0;
    }

    /// The eligibility set for a session scheduled to end at `end_time`,
    /// judged against the boundaries as they stand right now. A session
    /// qualifies for every window its duration extends strictly past.
    pub fn eligibility_for(&self, end_time: i64) -> [u64; NUM_POOLS] {
        let mut eligibility = [0u64; NUM_POOLS];
        for (i, pool) in self.pools.iter().enumerate() {
            if end_time > pool.start_time {
                eligibility[i] = 1;
            }
        }
        eligibility
    }

    /// Credits `shares` to every eligible pool that has not yet minted.
    /// Minted pools keep their frozen totals.
    pub fn record_income(&mut self, eligibility: &[u64; NUM_POOLS], shares: u64) {
        for (i, pool) in self.pools.iter_mut().enumerate() {
            if eligibility[i] == 1 && pool.minted == 0 {
                pool.total_shares += shares;
            }
        }
        if eligibility.iter().any(|&e| e == 1) {
            self.shares_total_supply += shares;
        }
    }

    /// Debits `shares` from every pool in the session's stored eligibility
    /// set that is still open. The stored set is authoritative: eligibility
    /// is never re-judged here, so closing one session cannot touch pools
    /// only a longer-lived session entered. A pool whose boundary has passed
    /// is frozen even before its lazy mint; the session served that window in
    /// full and stays in the denominator the mint will freeze.
    pub fn record_outcome(&mut self, eligibility: &[u64; NUM_POOLS], shares: u64, now: i64) {
        for (i, pool) in self.pools.iter_mut().enumerate() {
            if eligibility[i] == 1 && pool.minted == 0 && now <= pool.start_time {
                pool.total_shares = pool.total_shares.saturating_sub(shares);
            }
        }
        if eligibility.iter().any(|&e| e == 1) {
            self.shares_total_supply = self.shares_total_supply.saturating_sub(shares);
        }
    }

    /// The earliest pool ready to mint at `now`, if any. Pools mint strictly
    /// in index order, one per call.
    pub fn next_mintable(&self, now: i64) -> Option<usize> {
        let index = self.pools.iter().position(|p| p.minted == 0)?;
        if now > self.pools[index].start_time {
            Some(index)
        } else {
            None
        }
    }

    /// Freezes the pool with the given funding amount. The share total and
    /// minted amount are immutable from here on.
    pub fn mint_pool(&mut self, index: usize, amount: u64) {
        let pool = &mut self.pools[index];
        pool.minted = 1;
        pool.minted_amount = amount;
        self.reserved += amount;
    }

    /// The ledger's token balance not yet promised to a minted pool.
    pub fn free_balance(&self, token_balance: u64) -> u64 {
        token_balance.saturating_sub(self.reserved)
    }

    /// The session's accrued payout and early-exit penalty. Only matured
    /// pools contribute; eligible pools that have not minted release nothing.
    pub fn session_payout(&self, session: &Session) -> (u64, u64) {
        let mut payout = 0u64;
        for (i, pool) in self.pools.iter().enumerate() {
            if session.is_eligible(i) && pool.minted == 1 && pool.total_shares > 0 {
                let share = (session.shares as u128 * pool.minted_amount as u128)
                    / pool.total_shares as u128;
                payout += share as u64;
            }
        }
        let penalty = session.penalty_on(payout);
        (payout, penalty)
    }

    pub fn start_times(&self) -> [i64; NUM_POOLS] {
        core::array::from_fn(|i| self.pools[i].start_time)
    }

    pub fn pools_minted(&self) -> [bool; NUM_POOLS] {
        core::array::from_fn(|i| self.pools[i].minted == 1)
    }

    pub fn pools_minted_amounts(&self) -> [u64; NUM_POOLS] {
        core::array::from_fn(|i| self.pools[i].minted_amount)
    }

    /// The share total of the next pool to mature, zero once all have minted.
    pub fn closest_year_shares(&self) -> u64 {
        self.pools
            .iter()
            .find(|p| p.minted == 0)
            .map_or(0, |p| p.total_shares)
    }
}

account!(PaydayAccount, Ledger);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{DEFAULT_PERIOD, ONE_DAY};

    const GENESIS: i64 = 1_600_000_000;

    fn ledger() -> Ledger {
        let mut ledger = Ledger {
            pools: [YearPool::default(); NUM_POOLS],
            shares_total_supply: 0,
            reserved: 0,
        };
        ledger.init_schedule(GENESIS, DEFAULT_PERIOD);
        ledger
    }

    fn session(id: u64, shares: u64, end_time: i64, ledger: &Ledger) -> Session {
        Session {
            authority: Pubkey::default(),
            id,
            start_time: GENESIS,
            end_time,
            shares,
            eligibility: ledger.eligibility_for(end_time),
            closed: 0,
            closed_at: 0,
            withdrawn: 0,
        }
    }

    #[test]
    fn schedule_is_strictly_increasing() {
        let ledger = ledger();
        let times = ledger.start_times();
        for i in 0..NUM_POOLS {
            assert_eq!(times[i], GENESIS + (i as i64 + 1) * DEFAULT_PERIOD);
            if i > 0 {
                assert!(times[i - 1] < times[i]);
            }
        }
    }

    #[test]
    fn stake_ending_exactly_at_first_boundary_gets_nothing() {
        let ledger = ledger();
        let eligibility = ledger.eligibility_for(GENESIS + DEFAULT_PERIOD);
        assert_eq!(eligibility, [0, 0, 0, 0, 0]);
    }

    #[test]
    fn stake_ending_one_day_past_first_boundary_enters_first_pool() {
        let mut ledger = ledger();
        let s = session(1, 1_000_000, GENESIS + DEFAULT_PERIOD + ONE_DAY, &ledger);
        assert_eq!(s.eligibility, [1, 0, 0, 0, 0]);
        ledger.record_income(&s.eligibility, s.shares);
        assert_eq!(ledger.pools[0].total_shares, 1_000_000);
        assert_eq!(ledger.pools[1].total_shares, 0);
        assert_eq!(ledger.shares_total_supply, 1_000_000);
    }

    #[test]
    fn eligibility_is_a_prefix_of_the_window_order() {
        let ledger = ledger();
        for k in 0..=NUM_POOLS as i64 {
            let eligibility = ledger.eligibility_for(GENESIS + k * DEFAULT_PERIOD + ONE_DAY);
            for (i, &e) in eligibility.iter().enumerate() {
                assert_eq!(e, ((i as i64) < k) as u64);
            }
        }
    }

    #[test]
    fn closing_a_short_session_leaves_longer_pools_untouched() {
        // Session 1: 1M shares across pools 0-1. Session 2: 5M shares across
        // all five pools. Closing session 1 must leave pools 2-4 at 5M.
        let mut ledger = ledger();
        let short = session(1, 1_000_000, GENESIS + 2 * DEFAULT_PERIOD + ONE_DAY, &ledger);
        let long = session(2, 5_000_000, GENESIS + 5 * DEFAULT_PERIOD + ONE_DAY, &ledger);
        ledger.record_income(&short.eligibility, short.shares);
        ledger.record_income(&long.eligibility, long.shares);
        assert_eq!(ledger.pools[0].total_shares, 6_000_000);
        assert_eq!(ledger.pools[1].total_shares, 6_000_000);
        assert_eq!(ledger.pools[2].total_shares, 5_000_000);
        assert_eq!(ledger.pools[3].total_shares, 5_000_000);
        assert_eq!(ledger.pools[4].total_shares, 5_000_000);

        ledger.record_outcome(&short.eligibility, short.shares, GENESIS + ONE_DAY);
        assert_eq!(ledger.pools[0].total_shares, 5_000_000);
        assert_eq!(ledger.pools[1].total_shares, 5_000_000);
        assert_eq!(ledger.pools[2].total_shares, 5_000_000);
        assert_eq!(ledger.pools[3].total_shares, 5_000_000);
        assert_eq!(ledger.pools[4].total_shares, 5_000_000);
        assert_eq!(ledger.shares_total_supply, 5_000_000);
    }

    #[test]
    fn shares_are_conserved_pool_by_pool() {
        let mut ledger = ledger();
        let sessions: Vec<Session> = (0..4)
            .map(|k| {
                session(
                    k,
                    (k + 1) * 250_000,
                    GENESIS + (k as i64 + 1) * DEFAULT_PERIOD + ONE_DAY,
                    &ledger,
                )
            })
            .collect();
        for s in &sessions {
            ledger.record_income(&s.eligibility, s.shares);
        }
        for (i, pool) in ledger.pools.iter().enumerate() {
            let expected: u64 = sessions
                .iter()
                .filter(|s| s.is_eligible(i))
                .map(|s| s.shares)
                .sum();
            assert_eq!(pool.total_shares, expected);
        }
        for s in &sessions {
            ledger.record_outcome(&s.eligibility, s.shares, GENESIS + ONE_DAY);
        }
        assert!(ledger.pools.iter().all(|p| p.total_shares == 0));
        assert_eq!(ledger.shares_total_supply, 0);
    }

    #[test]
    fn minted_pool_rejects_income_and_outcome_mutations() {
        let mut ledger = ledger();
        let s = session(1, 2_000_000, GENESIS + 2 * DEFAULT_PERIOD + ONE_DAY, &ledger);
        ledger.record_income(&s.eligibility, s.shares);
        ledger.mint_pool(0, 10_000_000);

        // A later session is recorded eligible but adds no shares to pool 0.
        let late = session(2, 3_000_000, GENESIS + 2 * DEFAULT_PERIOD + ONE_DAY, &ledger);
        ledger.record_income(&late.eligibility, late.shares);
        assert_eq!(ledger.pools[0].total_shares, 2_000_000);
        assert_eq!(ledger.pools[1].total_shares, 5_000_000);

        // Closing either session leaves the frozen denominator alone.
        ledger.record_outcome(&s.eligibility, s.shares, GENESIS + ONE_DAY);
        ledger.record_outcome(&late.eligibility, late.shares, GENESIS + ONE_DAY);
        assert_eq!(ledger.pools[0].total_shares, 2_000_000);
        assert_eq!(ledger.pools[1].total_shares, 0);
    }

    #[test]
    fn pools_mint_one_at_a_time_in_index_order() {
        let mut ledger = ledger();
        assert_eq!(ledger.next_mintable(GENESIS + DEFAULT_PERIOD), None);
        assert_eq!(ledger.next_mintable(GENESIS + DEFAULT_PERIOD + 1), Some(0));

        ledger.mint_pool(0, 1_000);
        // Pool 1 must wait for its own boundary even though pool 0 is done.
        assert_eq!(ledger.next_mintable(GENESIS + DEFAULT_PERIOD + 1), None);
        assert_eq!(
            ledger.next_mintable(GENESIS + 2 * DEFAULT_PERIOD + 1),
            Some(1)
        );
    }

    #[test]
    fn reserved_balance_excludes_prior_mints() {
        let mut ledger = ledger();
        ledger.mint_pool(0, 7_000);
        assert_eq!(ledger.reserved, 7_000);
        assert_eq!(ledger.free_balance(10_000), 3_000);
        assert_eq!(ledger.free_balance(5_000), 0);
    }

    #[test]
    fn payout_skips_unminted_pools() {
        let mut ledger = ledger();
        let mut s = session(1, 1_000_000, GENESIS + 2 * DEFAULT_PERIOD + ONE_DAY, &ledger);
        ledger.record_income(&s.eligibility, s.shares);
        s.closed = 1;
        s.closed_at = s.end_time;

        // Nothing matured yet.
        assert_eq!(ledger.session_payout(&s), (0, 0));

        ledger.mint_pool(0, 9_000_000);
        assert_eq!(ledger.session_payout(&s), (9_000_000, 0));

        ledger.mint_pool(1, 3_000_000);
        assert_eq!(ledger.session_payout(&s), (12_000_000, 0));
    }

    #[test]
    fn payout_is_proportional_to_frozen_share_totals() {
        let mut ledger = ledger();
        let mut a = session(1, 1_000_000, GENESIS + 2 * DEFAULT_PERIOD + ONE_DAY, &ledger);
        let b = session(2, 3_000_000, GENESIS + 5 * DEFAULT_PERIOD + ONE_DAY, &ledger);
        ledger.record_income(&a.eligibility, a.shares);
        ledger.record_income(&b.eligibility, b.shares);
        ledger.mint_pool(0, 8_000_000);
        ledger.mint_pool(1, 4_000_000);

        a.closed = 1;
        a.closed_at = a.end_time;
        let (payout, penalty) = ledger.session_payout(&a);
        assert_eq!(payout, 8_000_000 / 4 + 4_000_000 / 4);
        assert_eq!(penalty, 0);

        // A third session closing later must not change a's entitlement.
        let c = session(3, 2_000_000, GENESIS + 5 * DEFAULT_PERIOD + ONE_DAY, &ledger);
        ledger.record_income(&c.eligibility, c.shares);
        ledger.record_outcome(&c.eligibility, c.shares, GENESIS + ONE_DAY);
        assert_eq!(ledger.session_payout(&a), (payout, 0));
    }

    #[test]
    fn early_close_forfeits_a_prorated_slice() {
        let mut ledger = ledger();
        let mut s = session(1, 1_000_000, GENESIS + 2 * DEFAULT_PERIOD, &ledger);
        // End exactly at boundary 1 qualifies for pool 0 only.
        assert_eq!(s.eligibility, [1, 0, 0, 0, 0]);
        ledger.record_income(&s.eligibility, s.shares);
        ledger.mint_pool(0, 6_000_000);

        s.closed = 1;
        s.closed_at = GENESIS + DEFAULT_PERIOD; // halfway through
        let (payout, penalty) = ledger.session_payout(&s);
        assert_eq!(payout, 6_000_000);
        assert_eq!(penalty, 3_000_000);
    }

    #[test]
    fn close_after_boundary_keeps_shares_for_the_pending_mint() {
        // Windows mint lazily, so a session's last window often matures
        // before anyone calls generate pool. Closing in that gap must leave
        // the matured window's denominator intact for the coming freeze.
        let mut ledger = ledger();
        let mut s = session(1, 1_000_000, GENESIS + DEFAULT_PERIOD + ONE_DAY, &ledger);
        ledger.record_income(&s.eligibility, s.shares);

        let now = GENESIS + DEFAULT_PERIOD + ONE_DAY;
        ledger.record_outcome(&s.eligibility, s.shares, now);
        assert_eq!(ledger.pools[0].total_shares, 1_000_000);
        assert_eq!(ledger.shares_total_supply, 0);

        ledger.mint_pool(0, 9_000_000);
        s.closed = 1;
        s.closed_at = now;
        assert_eq!(ledger.session_payout(&s), (9_000_000, 0));
    }

    #[test]
    fn close_in_the_gap_debits_only_still_open_windows() {
        // Boundary 0 has passed, boundaries 1+ have not. Closing strips the
        // session from the open windows but not from the matured one.
        let mut ledger = ledger();
        let s = session(1, 1_000_000, GENESIS + 3 * DEFAULT_PERIOD + ONE_DAY, &ledger);
        ledger.record_income(&s.eligibility, s.shares);

        ledger.record_outcome(&s.eligibility, s.shares, GENESIS + DEFAULT_PERIOD + ONE_DAY);
        assert_eq!(ledger.pools[0].total_shares, 1_000_000);
        assert_eq!(ledger.pools[1].total_shares, 0);
        assert_eq!(ledger.pools[2].total_shares, 0);
    }

    #[test]
    fn closest_year_shares_tracks_the_next_unminted_pool() {
        let mut ledger = ledger();
        let s = session(1, 4_000_000, GENESIS + 3 * DEFAULT_PERIOD + ONE_DAY, &ledger);
        ledger.record_income(&s.eligibility, s.shares);
        assert_eq!(ledger.closest_year_shares(), 4_000_000);
        ledger.mint_pool(0, 0);
        assert_eq!(ledger.closest_year_shares(), 4_000_000);
        ledger.mint_pool(1, 0);
        ledger.mint_pool(2, 0);
        assert_eq!(ledger.closest_year_shares(), 0);
        ledger.mint_pool(3, 0);
        ledger.mint_pool(4, 0);
        assert_eq!(ledger.closest_year_shares(), 0);
    }
}
