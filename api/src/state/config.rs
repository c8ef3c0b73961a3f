use serde::{Deserialize, Serialize};
use steel::*;

use crate::state::config_pda;

use super::PaydayAccount;

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Config {
    /// The address that can update the config.
    pub admin: Pubkey,

    /// The only address allowed to fire income/outcome staker triggers.
    pub staking_program: Pubkey,

    /// The swap program, an authorized source of penalty deposits.
    pub swap_program: Pubkey,

    /// The auction program, an authorized source of penalty deposits.
    pub auction_program: Pubkey,

    /// The mint of the reward token.
    pub mint: Pubkey,

    /// The timestamp the pool schedule is anchored to.
    pub genesis: i64,

    /// The length of one reward window, in seconds.
    pub period: i64,
}

impl Config {
    pub fn pda() -> (Pubkey, u8) {
        config_pda()
    }

    /// Whether the given address may deposit penalties into the payday pool.
    pub fn is_penalty_source(&self, address: &Pubkey) -> bool {
        *address == self.swap_program || *address == self.auction_program
    }
}

account!(PaydayAccount, Config);
