use serde::{Deserialize, Serialize};
use steel::*;

use crate::consts::NUM_POOLS;
use crate::state::session_pda;

use super::PaydayAccount;

/// Session tracks the reward-pool eligibility of one staking session. It is
/// created by the income staker trigger and lives until its payout is
/// withdrawn.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Session {
    /// The staking account that owns this session.
    pub authority: Pubkey,

    /// The session id, assigned by the staking ledger.
    pub id: u64,

    /// The scheduled start of the session.
    pub start_time: i64,

    /// The scheduled end of the session.
    pub end_time: i64,

    /// The stake weight of the session, fixed for its lifetime.
    pub shares: u64,

    /// Per-pool eligibility flags (0/1), decided once at income time from the
    /// pool boundaries as they existed then. Never recomputed afterwards.
    pub eligibility: [u64; NUM_POOLS],

    /// Whether the outcome trigger has fired (0/1).
    pub closed: u64,

    /// The timestamp the outcome trigger fired.
    pub closed_at: i64,

    /// Whether the payout has been claimed (0/1). At most once.
    pub withdrawn: u64,
}

impl Session {
    pub fn pda(&self) -> (Pubkey, u8) {
        session_pda(self.id)
    }

    pub fn is_eligible(&self, pool_index: usize) -> bool {
        self.eligibility[pool_index] == 1
    }

    /// The slice of `payout` forfeited for closing before the scheduled end.
    ///
    /// Pro-rated linearly on the unserved portion of the session's duration:
    /// zero at or past the scheduled end, the full payout at immediate exit.
    pub fn penalty_on(&self, payout: u64) -> u64 {
        if self.closed == 0 || self.closed_at >= self.end_time {
            return 0;
        }
        let duration = self.end_time.saturating_sub(self.start_time);
        if duration <= 0 {
            return 0;
        }
        let remaining = self.end_time.saturating_sub(self.closed_at).min(duration);
        ((payout as u128 * remaining as u128) / duration as u128) as u64
    }
}

account!(PaydayAccount, Session);

#[cfg(test)]
mod tests {
    use super::*;

    fn session(start: i64, end: i64, closed_at: i64) -> Session {
        Session {
            authority: Pubkey::default(),
            id: 1,
            start_time: start,
            end_time: end,
            shares: 1_000_000,
            eligibility: [1, 1, 0, 0, 0],
            closed: 1,
            closed_at,
            withdrawn: 0,
        }
    }

    #[test]
    fn no_penalty_at_or_after_scheduled_end() {
        assert_eq!(session(0, 1000, 1000).penalty_on(500), 0);
        assert_eq!(session(0, 1000, 1500).penalty_on(500), 0);
    }

    #[test]
    fn half_penalty_at_midpoint() {
        assert_eq!(session(0, 1000, 500).penalty_on(500), 250);
    }

    #[test]
    fn full_penalty_at_immediate_exit() {
        assert_eq!(session(0, 1000, 0).penalty_on(500), 500);
    }

    #[test]
    fn penalty_is_monotonic_in_close_time() {
        let payout = 1_000_000;
        let mut last = u64::MAX;
        for closed_at in (0..=1000).step_by(100) {
            let p = session(0, 1000, closed_at).penalty_on(payout);
            assert!(p <= last);
            last = p;
        }
        assert_eq!(last, 0);
    }

    #[test]
    fn open_session_carries_no_penalty() {
        let mut s = session(0, 1000, 200);
        s.closed = 0;
        assert_eq!(s.penalty_on(500), 0);
    }
}
