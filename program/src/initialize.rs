use payday_api::prelude::*;
use steel::*;

/// Initializes the program: config, the ledger with its five-window schedule,
/// the payday pool, and the token accounts custodied by each.
pub fn process_initialize(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse data.
    let args = Initialize::try_from_bytes(data)?;
    let staking_program =
        Pubkey::try_from(&args.staking_program[..]).map_err(|_| ProgramError::InvalidArgument)?;
    let swap_program =
        Pubkey::try_from(&args.swap_program[..]).map_err(|_| ProgramError::InvalidArgument)?;
    let auction_program =
        Pubkey::try_from(&args.auction_program[..]).map_err(|_| ProgramError::InvalidArgument)?;
    let genesis = i64::from_le_bytes(args.genesis);
    let period = i64::from_le_bytes(args.period);

    if period <= 0 {
        return Err(PaydayError::InvalidSchedule.into());
    }

    // Load accounts.
    let [signer_info, config_info, ledger_info, ledger_tokens_info, payday_info, payday_tokens_info, mint_info, system_program, token_program, associated_token_program] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };
    signer_info.is_signer()?.has_address(&ADMIN_ADDRESS)?;
    config_info.has_seeds(&[CONFIG], &payday_api::ID)?;
    ledger_info.has_seeds(&[LEDGER], &payday_api::ID)?;
    payday_info.has_seeds(&[PAYDAY], &payday_api::ID)?;
    mint_info.has_address(&MINT_ADDRESS)?.as_mint()?;
    system_program.is_program(&system_program::ID)?;
    token_program.is_program(&spl_token::ID)?;
    associated_token_program.is_program(&spl_associated_token_account::ID)?;

    // Create config account.
    if config_info.data_is_empty() {
        create_program_account::<Config>(
            config_info,
            system_program,
            signer_info,
            &payday_api::ID,
            &[CONFIG],
        )?;
        let config = config_info.as_account_mut::<Config>(&payday_api::ID)?;
        config.admin = *signer_info.key;
        config.staking_program = staking_program;
        config.swap_program = swap_program;
        config.auction_program = auction_program;
        config.mint = *mint_info.key;
        config.genesis = genesis;
        config.period = period;
    } else {
        config_info.as_account::<Config>(&payday_api::ID)?;
    }

    // Create ledger account with the fixed window schedule.
    if ledger_info.data_is_empty() {
        create_program_account::<Ledger>(
            ledger_info,
            system_program,
            signer_info,
            &payday_api::ID,
            &[LEDGER],
        )?;
        let ledger = ledger_info.as_account_mut::<Ledger>(&payday_api::ID)?;
        ledger.init_schedule(genesis, period);
    } else {
        ledger_info.as_account::<Ledger>(&payday_api::ID)?;
    }

    // Create payday account.
    if payday_info.data_is_empty() {
        create_program_account::<Payday>(
            payday_info,
            system_program,
            signer_info,
            &payday_api::ID,
            &[PAYDAY],
        )?;
        let payday = payday_info.as_account_mut::<Payday>(&payday_api::ID)?;
        payday.year_amounts = [0; NUM_POOLS];
        payday.transferred = [0; NUM_POOLS];
    } else {
        payday_info.as_account::<Payday>(&payday_api::ID)?;
    }

    // Create ledger tokens account.
    if ledger_tokens_info.data_is_empty() {
        create_associated_token_account(
            signer_info,
            ledger_info,
            ledger_tokens_info,
            mint_info,
            system_program,
            token_program,
            associated_token_program,
        )?;
    } else {
        ledger_tokens_info.as_associated_token_account(ledger_info.key, mint_info.key)?;
    }

    // Create payday tokens account.
    if payday_tokens_info.data_is_empty() {
        create_associated_token_account(
            signer_info,
            payday_info,
            payday_tokens_info,
            mint_info,
            system_program,
            token_program,
            associated_token_program,
        )?;
    } else {
        payday_tokens_info.as_associated_token_account(payday_info.key, mint_info.key)?;
    }

    Ok(())
}
