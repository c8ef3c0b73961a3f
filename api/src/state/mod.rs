mod config;
mod ledger;
mod payday;
mod session;

pub use config::*;
pub use ledger::*;
pub use payday::*;
pub use session::*;

use crate::consts::*;

use steel::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
pub enum PaydayAccount {
    Config = 100,
    Ledger = 101,
    Payday = 102,
    Session = 103,
}

pub fn config_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG], &crate::ID)
}

pub fn ledger_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[LEDGER], &crate::ID)
}

pub fn payday_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PAYDAY], &crate::ID)
}

pub fn session_pda(id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SESSION, &id.to_le_bytes()], &crate::ID)
}

pub fn ledger_tokens_address() -> Pubkey {
    spl_associated_token_account::get_associated_token_address(&LEDGER_ADDRESS, &MINT_ADDRESS)
}

pub fn payday_tokens_address() -> Pubkey {
    spl_associated_token_account::get_associated_token_address(&PAYDAY_ADDRESS, &MINT_ADDRESS)
}
