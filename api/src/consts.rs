use const_crypto::ed25519;
use solana_program::{pubkey, pubkey::Pubkey};

/// The authority allowed to initialize the program.
pub const ADMIN_ADDRESS: Pubkey = pubkey!("9XjXYmL9TLB3FuszEuXCTkjC6a4vHZ5TPWczyNMLKHRg");

/// The decimal precision of the PAYD token.
pub const TOKEN_DECIMALS: u8 = 9;

/// The duration of one minute, in seconds.
pub const ONE_MINUTE: i64 = 60;

/// The duration of one hour, in seconds.
pub const ONE_HOUR: i64 = 60 * ONE_MINUTE;

/// The duration of one day, in seconds.
pub const ONE_DAY: i64 = 24 * ONE_HOUR;

/// The number of days in one staking year.
pub const STAKE_PERIOD_DAYS: i64 = 350;

/// The default length of one reward window, in seconds.
pub const DEFAULT_PERIOD: i64 = STAKE_PERIOD_DAYS * ONE_DAY;

/// The number of yearly reward pools. Fixed for the lifetime of the program.
pub const NUM_POOLS: usize = 5;

/// The percentage of each penalty deposit allocated to the first four year
/// buckets. The fifth bucket absorbs the remainder (>= 30%).
pub const YEAR_PERCENTAGES: [u64; 4] = [10, 15, 20, 25];

/// The seed of the config account PDA.
pub const CONFIG: &[u8] = b"config";

/// The seed of the ledger account PDA.
pub const LEDGER: &[u8] = b"ledger";

/// The seed of the payday account PDA.
pub const PAYDAY: &[u8] = b"payday";

/// The seed of the session account PDA.
pub const SESSION: &[u8] = b"session";

/// Program id for const pda derivations
const PROGRAM_ID: [u8; 32] = unsafe { *(&crate::id() as *const Pubkey as *const [u8; 32]) };

/// The address of the config account.
pub const CONFIG_ADDRESS: Pubkey =
    Pubkey::new_from_array(ed25519::derive_program_address(&[CONFIG], &PROGRAM_ID).0);

/// The address of the ledger account.
pub const LEDGER_ADDRESS: Pubkey =
    Pubkey::new_from_array(ed25519::derive_program_address(&[LEDGER], &PROGRAM_ID).0);

/// The bump of the ledger account.
pub const LEDGER_BUMP: u8 = ed25519::derive_program_address(&[LEDGER], &PROGRAM_ID).1;

/// The address of the payday account.
pub const PAYDAY_ADDRESS: Pubkey =
    Pubkey::new_from_array(ed25519::derive_program_address(&[PAYDAY], &PROGRAM_ID).0);

/// The bump of the payday account.
pub const PAYDAY_BUMP: u8 = ed25519::derive_program_address(&[PAYDAY], &PROGRAM_ID).1;

/// The address of the mint account.
pub const MINT_ADDRESS: Pubkey = pubkey!("BTWAqWNBmF2TboMh3fxMJfgR16xGHYD7Kgr2dPwbRPBi");
