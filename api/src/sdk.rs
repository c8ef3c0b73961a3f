use solana_program::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address;
use steel::*;

use crate::{consts::MINT_ADDRESS, instruction::*, state::*};

pub fn initialize(
    signer: Pubkey,
    staking_program: Pubkey,
    swap_program: Pubkey,
    auction_program: Pubkey,
    genesis: i64,
    period: i64,
) -> Instruction {
    let config_address = config_pda().0;
    let ledger_address = ledger_pda().0;
    let payday_address = payday_pda().0;
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(config_address, false),
            AccountMeta::new(ledger_address, false),
            AccountMeta::new(ledger_tokens_address(), false),
            AccountMeta::new(payday_address, false),
            AccountMeta::new(payday_tokens_address(), false),
            AccountMeta::new(MINT_ADDRESS, false),
            AccountMeta::new_readonly(system_program::ID, false),
            AccountMeta::new_readonly(spl_token::ID, false),
            AccountMeta::new_readonly(spl_associated_token_account::ID, false),
        ],
        data: Initialize {
            staking_program: staking_program.to_bytes(),
            swap_program: swap_program.to_bytes(),
            auction_program: auction_program.to_bytes(),
            genesis: genesis.to_le_bytes(),
            period: period.to_le_bytes(),
        }
        .to_bytes(),
    }
}

pub fn income_staker_trigger(
    signer: Pubkey,
    owner: Pubkey,
    session_id: u64,
    start_time: i64,
    end_time: i64,
    shares: u64,
) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new_readonly(config_pda().0, false),
            AccountMeta::new(ledger_pda().0, false),
            AccountMeta::new(session_pda(session_id).0, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: IncomeStakerTrigger {
            owner: owner.to_bytes(),
            session_id: session_id.to_le_bytes(),
            start_time: start_time.to_le_bytes(),
            end_time: end_time.to_le_bytes(),
            shares: shares.to_le_bytes(),
        }
        .to_bytes(),
    }
}

pub fn outcome_staker_trigger(
    signer: Pubkey,
    owner: Pubkey,
    session_id: u64,
    start_time: i64,
    end_time: i64,
    shares: u64,
) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new_readonly(config_pda().0, false),
            AccountMeta::new(ledger_pda().0, false),
            AccountMeta::new(session_pda(session_id).0, false),
        ],
        data: OutcomeStakerTrigger {
            owner: owner.to_bytes(),
            session_id: session_id.to_le_bytes(),
            start_time: start_time.to_le_bytes(),
            end_time: end_time.to_le_bytes(),
            shares: shares.to_le_bytes(),
        }
        .to_bytes(),
    }
}

pub fn deposit_penalty(signer: Pubkey, amount: u64) -> Instruction {
    let sender_tokens = get_associated_token_address(&signer, &MINT_ADDRESS);
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new_readonly(config_pda().0, false),
            AccountMeta::new(payday_pda().0, false),
            AccountMeta::new(sender_tokens, false),
            AccountMeta::new(payday_tokens_address(), false),
            AccountMeta::new_readonly(spl_token::ID, false),
        ],
        data: DepositPenalty {
            amount: amount.to_le_bytes(),
        }
        .to_bytes(),
    }
}

pub fn generate_pool(signer: Pubkey) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(ledger_pda().0, false),
            AccountMeta::new(ledger_tokens_address(), false),
            AccountMeta::new(payday_pda().0, false),
            AccountMeta::new(payday_tokens_address(), false),
            AccountMeta::new_readonly(spl_token::ID, false),
        ],
        data: GeneratePool {}.to_bytes(),
    }
}

pub fn withdraw_payout(signer: Pubkey, session_id: u64) -> Instruction {
    let recipient_tokens = get_associated_token_address(&signer, &MINT_ADDRESS);
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(ledger_pda().0, false),
            AccountMeta::new(ledger_tokens_address(), false),
            AccountMeta::new(payday_pda().0, false),
            AccountMeta::new(payday_tokens_address(), false),
            AccountMeta::new(session_pda(session_id).0, false),
            AccountMeta::new(recipient_tokens, false),
            AccountMeta::new_readonly(spl_token::ID, false),
        ],
        data: WithdrawPayout {
            session_id: session_id.to_le_bytes(),
        }
        .to_bytes(),
    }
}
