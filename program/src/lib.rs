mod deposit_penalty;
mod generate_pool;
mod income_staker_trigger;
mod initialize;
mod outcome_staker_trigger;
mod withdraw_payout;

use deposit_penalty::*;
use generate_pool::*;
use income_staker_trigger::*;
use initialize::*;
use outcome_staker_trigger::*;
use withdraw_payout::*;

use payday_api::instruction::*;
use steel::*;

pub fn process_instruction<'a>(
    program_id: &Pubkey,
    accounts: &'a [AccountInfo<'a>],
    data: &[u8],
) -> ProgramResult {
    let (ix, data) = parse_instruction(&payday_api::ID, program_id, data)?;

    match ix {
        // Admin
        PaydayInstruction::Initialize => process_initialize(accounts, data)?,

        // Staking ledger hooks
        PaydayInstruction::IncomeStakerTrigger => process_income_staker_trigger(accounts, data)?,
        PaydayInstruction::OutcomeStakerTrigger => process_outcome_staker_trigger(accounts, data)?,

        // Penalty sources
        PaydayInstruction::DepositPenalty => process_deposit_penalty(accounts, data)?,

        // Permissionless
        PaydayInstruction::GeneratePool => process_generate_pool(accounts, data)?,

        // Staker
        PaydayInstruction::WithdrawPayout => process_withdraw_payout(accounts, data)?,
    }

    Ok(())
}

entrypoint!(process_instruction);
