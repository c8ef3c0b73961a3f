use payday_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Closes a staking session. Shares are debited only from the pools in the
/// session's stored eligibility set whose window is still open; eligibility
/// is never recomputed here, so closing one session cannot disturb pools a
/// longer-lived session entered, and a matured window keeps the session in
/// the denominator its mint will freeze.
pub fn process_outcome_staker_trigger(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse data.
    let args = OutcomeStakerTrigger::try_from_bytes(data)?;
    let session_id = u64::from_le_bytes(args.session_id);
    let shares = u64::from_le_bytes(args.shares);

    // Load accounts.
    let clock = Clock::get()?;
    let [signer_info, config_info, ledger_info, session_info] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };
    signer_info.is_signer()?;
    let config = config_info.as_account::<Config>(&payday_api::ID)?;
    if *signer_info.key != config.staking_program {
        return Err(PaydayError::Unauthorized.into());
    }
    let ledger = ledger_info
        .is_writable()?
        .as_account_mut::<Ledger>(&payday_api::ID)?;

    // A matching income record must exist.
    if session_info.data_is_empty() {
        return Err(PaydayError::UnknownSession.into());
    }
    let session = session_info
        .is_writable()?
        .as_account_mut::<Session>(&payday_api::ID)?
        .assert_mut(|s| s.id == session_id)?;
    if session.closed == 1 {
        return Err(PaydayError::SessionClosed.into());
    }
    if session.shares != shares {
        return Err(PaydayError::SharesMismatch.into());
    }

    // Debit the stored eligibility set and mark the session closed. Closing
    // does not itself pay out.
    ledger.record_outcome(&session.eligibility, session.shares, clock.unix_timestamp);
    session.closed = 1;
    session.closed_at = clock.unix_timestamp;

    sol_log(&format!("Session {} closed", session_id));

    Ok(())
}
