use payday_api::prelude::*;
use solana_program::log::{sol_log, sol_log_data};
use spl_token::amount_to_ui_amount;
use steel::*;

/// Pays a closed session its share of every matured pool it is eligible for.
/// The early-exit penalty slice is recycled into the payday year buckets; the
/// rest is transferred to the session owner. Succeeds at most once.
pub fn process_withdraw_payout(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse data.
    let args = WithdrawPayout::try_from_bytes(data)?;
    let session_id = u64::from_le_bytes(args.session_id);

    // Load accounts.
    let clock = Clock::get()?;
    let [signer_info, ledger_info, ledger_tokens_info, payday_info, payday_tokens_info, session_info, recipient_tokens_info, token_program] =
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
    if session_info.data_is_empty() {
        return Err(PaydayError::UnknownSession.into());
    }
    let session = session_info
        .is_writable()?
        .as_account_mut::<Session>(&payday_api::ID)?
        .assert_mut(|s| s.id == session_id)?;
    ledger_tokens_info
        .is_writable()?
        .as_associated_token_account(ledger_info.key, &MINT_ADDRESS)?;
    payday_tokens_info
        .is_writable()?
        .as_associated_token_account(payday_info.key, &MINT_ADDRESS)?;
    recipient_tokens_info
        .is_writable()?
        .as_associated_token_account(signer_info.key, &MINT_ADDRESS)?;
    token_program.is_program(&spl_token::ID)?;

    // Only the recorded owner may withdraw, only after the session closed,
    // and only once. A repeat call is rejected, not silently ignored.
    if *signer_info.key != session.authority {
        return Err(PaydayError::Unauthorized.into());
    }
    if session.closed == 0 {
        return Err(PaydayError::SessionStillOpen.into());
    }
    if session.withdrawn == 1 {
        return Err(PaydayError::AlreadyWithdrawn.into());
    }

    let (payout, penalty) = ledger.session_payout(session);
    if payout == 0 && penalty == 0 {
        return Err(PaydayError::NothingToWithdraw.into());
    }
    let user_amount = payout.saturating_sub(penalty);

    // Recycle the forfeited slice into the payday year buckets.
    if penalty > 0 {
        transfer_signed(
            ledger_info,
            ledger_tokens_info,
            payday_tokens_info,
            token_program,
            penalty,
            &[LEDGER],
        )?;
        payday.deposit(penalty);
    }

    // Pay the owner.
    if user_amount > 0 {
        transfer_signed(
            ledger_info,
            ledger_tokens_info,
            recipient_tokens_info,
            token_program,
            user_amount,
            &[LEDGER],
        )?;
    }

    session.withdrawn = 1;
    ledger.reserved = ledger.reserved.saturating_sub(payout);

    sol_log(&format!(
        "Withdrawing {} PAYD",
        amount_to_ui_amount(user_amount, TOKEN_DECIMALS)
    ));

    // Emit event.
    let event = PayoutEvent {
        disc: PaydayEvent::Payout as u64,
        authority: *signer_info.key,
        session_id,
        payout,
        penalty,
        ts: clock.unix_timestamp,
    };
    sol_log_data(&[bytemuck::bytes_of(&event)]);

    Ok(())
}
