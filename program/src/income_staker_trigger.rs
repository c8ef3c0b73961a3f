use payday_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Records a newly opened staking session. Eligibility is decided here, once,
/// from the session's scheduled end against the fixed window boundaries, and
/// stored on the session record for every later operation to use.
pub fn process_income_staker_trigger(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse data.
    let args = IncomeStakerTrigger::try_from_bytes(data)?;
    let owner = Pubkey::try_from(&args.owner[..]).map_err(|_| ProgramError::InvalidArgument)?;
    let session_id = u64::from_le_bytes(args.session_id);
    let start_time = i64::from_le_bytes(args.start_time);
    let end_time = i64::from_le_bytes(args.end_time);
    let shares = u64::from_le_bytes(args.shares);

    // Load accounts.
    let [signer_info, config_info, ledger_info, session_info, system_program] = accounts else {
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
    session_info
        .is_writable()?
        .has_seeds(&[SESSION, &session_id.to_le_bytes()], &payday_api::ID)?;
    system_program.is_program(&system_program::ID)?;

    // A session may be opened at most once.
    if !session_info.data_is_empty() {
        return Err(PaydayError::SessionExists.into());
    }

    // Decide eligibility and credit shares to the unminted pools it covers.
    let eligibility = ledger.eligibility_for(end_time);
    ledger.record_income(&eligibility, shares);

    // Persist the session record.
    create_program_account::<Session>(
        session_info,
        system_program,
        signer_info,
        &payday_api::ID,
        &[SESSION, &session_id.to_le_bytes()],
    )?;
    let session = session_info.as_account_mut::<Session>(&payday_api::ID)?;
    session.authority = owner;
    session.id = session_id;
    session.start_time = start_time;
    session.end_time = end_time;
    session.shares = shares;
    session.eligibility = eligibility;
    session.closed = 0;
    session.closed_at = 0;
    session.withdrawn = 0;

    sol_log(&format!("Session {} opened with {} shares", session_id, shares));

    Ok(())
}
