use serde::{Deserialize, Serialize};
use steel::*;

pub enum PaydayEvent {
    PoolMinted = 0,
    Payout = 1,
    PenaltyDeposit = 2,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct PoolMintedEvent {
    /// The event discriminator.
    pub disc: u64,

    /// The index of the pool that matured.
    pub pool_index: u64,

    /// The token amount frozen into the pool.
    pub minted_amount: u64,

    /// The share total frozen as the payout denominator.
    pub total_shares: u64,

    /// The timestamp of the event.
    pub ts: i64,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct PayoutEvent {
    /// The event discriminator.
    pub disc: u64,

    /// The owner of the session.
    pub authority: Pubkey,

    /// The session id.
    pub session_id: u64,

    /// The gross payout accrued from matured pools.
    pub payout: u64,

    /// The slice forfeited for closing early.
    pub penalty: u64,

    /// The timestamp of the event.
    pub ts: i64,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct PenaltyDepositEvent {
    /// The event discriminator.
    pub disc: u64,

    /// The program that deposited the penalty.
    pub source: Pubkey,

    /// The amount split across the year buckets.
    pub amount: u64,

    /// The timestamp of the event.
    pub ts: i64,
}

event!(PoolMintedEvent);
event!(PayoutEvent);
event!(PenaltyDepositEvent);
