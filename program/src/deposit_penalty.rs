use payday_api::prelude::*;
use solana_program::log::sol_log_data;
use steel::*;

/// Receives a penalty deposit from the swap or auction program and splits it
/// across the five year buckets by the fixed percentage schedule.
pub fn process_deposit_penalty(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse data.
    let args = DepositPenalty::try_from_bytes(data)?;
    let amount = u64::from_le_bytes(args.amount);

    // Load accounts.
    let clock = Clock::get()?;
    let [signer_info, config_info, payday_info, sender_tokens_info, payday_tokens_info, token_program] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };
    signer_info.is_signer()?;
    let config = config_info.as_account::<Config>(&payday_api::ID)?;
    if !config.is_penalty_source(signer_info.key) {
        return Err(PaydayError::Unauthorized.into());
    }
    let payday = payday_info
        .is_writable()?
        .as_account_mut::<Payday>(&payday_api::ID)?;
    sender_tokens_info
        .is_writable()?
        .as_associated_token_account(signer_info.key, &config.mint)?;
    payday_tokens_info
        .is_writable()?
        .as_associated_token_account(payday_info.key, &config.mint)?;
    token_program.is_program(&spl_token::ID)?;

    // Pull the tokens into payday custody and bucket them.
    transfer(
        signer_info,
        sender_tokens_info,
        payday_tokens_info,
        token_program,
        amount,
    )?;
    payday.deposit(amount);

    // Emit event.
    let event = PenaltyDepositEvent {
        disc: PaydayEvent::PenaltyDeposit as u64,
        source: *signer_info.key,
        amount,
        ts: clock.unix_timestamp,
    };
    sol_log_data(&[bytemuck::bytes_of(&event)]);

    Ok(())
}
