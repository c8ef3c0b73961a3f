use payday_api::prelude::*;
use solana_program::log::{sol_log, sol_log_data};
use steel::*;

/// Matures the earliest pool whose boundary has passed: drains the payday
/// pool's closest year bucket into ledger custody and freezes the pool with
/// the combined funding. Callable by anyone; a call with no pool ready is a
/// no-op, so repeated calls within the same window are harmless.
pub fn process_generate_pool(accounts: &[AccountInfo<'_>], _data: &[u8]) -> ProgramResult {
    // Load accounts.
    let clock = Clock::get()?;
    let [signer_info, ledger_info, ledger_tokens_info, payday_info, payday_tokens_info, token_program] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };
    signer_info.is_signer()?;
    let ledger = ledger_info
        .is_writable()?
        .as_account_mut::<Ledger>(&payday_api::ID)?;
    let payday = payday_info
        .is_writable()?
        .as_account_mut::<Payday>(&payday_api::ID)?;
    let ledger_tokens = ledger_tokens_info
        .is_writable()?
        .as_associated_token_account(ledger_info.key, &MINT_ADDRESS)?;
    payday_tokens_info
        .is_writable()?
        .as_associated_token_account(payday_info.key, &MINT_ADDRESS)?;
    token_program.is_program(&spl_token::ID)?;

    // No boundary passed or all pools minted: no-op, not an error.
    let Some(index) = ledger.next_mintable(clock.unix_timestamp) else {
        sol_log("No pool ready to mint");
        return Ok(());
    };

    // Drain the closest year bucket into ledger custody.
    let bucket_amount = payday.drain_closest().map_or(0, |(_, amount)| amount);
    if bucket_amount > 0 {
        transfer_signed(
            payday_info,
            payday_tokens_info,
            ledger_tokens_info,
            token_program,
            bucket_amount,
            &[PAYDAY],
        )?;
    }

    // Freeze the pool: the year bucket plus whatever unpromised balance the
    // ledger has accumulated since the last mint.
    let minted_amount = bucket_amount + ledger.free_balance(ledger_tokens.amount());
    let total_shares = ledger.pools[index].total_shares;
    ledger.mint_pool(index, minted_amount);

    // Emit event.
    let event = PoolMintedEvent {
        disc: PaydayEvent::PoolMinted as u64,
        pool_index: index as u64,
        minted_amount,
        total_shares,
        ts: clock.unix_timestamp,
    };
    sol_log_data(&[bytemuck::bytes_of(&event)]);

    Ok(())
}
