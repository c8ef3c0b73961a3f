use steel::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, TryFromPrimitive)]
pub enum PaydayInstruction {
    // Admin
    Initialize = 0,

    // Staking ledger hooks
    IncomeStakerTrigger = 1,
    OutcomeStakerTrigger = 2,

    // Penalty sources
    DepositPenalty = 3,

    // Permissionless
    GeneratePool = 4,

    // Staker
    WithdrawPayout = 5,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Initialize {
    /// The staking program authorized to fire the triggers.
    pub staking_program: [u8; 32],
    /// The swap program authorized to deposit penalties.
    pub swap_program: [u8; 32],
    /// The auction program authorized to deposit penalties.
    pub auction_program: [u8; 32],
    /// The timestamp the pool schedule is anchored to.
    pub genesis: [u8; 8],
    /// The length of one reward window, in seconds.
    pub period: [u8; 8],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct IncomeStakerTrigger {
    /// The staking account opening the session.
    pub owner: [u8; 32],
    pub session_id: [u8; 8],
    pub start_time: [u8; 8],
    pub end_time: [u8; 8],
    pub shares: [u8; 8],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct OutcomeStakerTrigger {
    /// The staking account closing the session.
    pub owner: [u8; 32],
    pub session_id: [u8; 8],
    pub start_time: [u8; 8],
    pub end_time: [u8; 8],
    pub shares: [u8; 8],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct DepositPenalty {
    pub amount: [u8; 8],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct GeneratePool {}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct WithdrawPayout {
    pub session_id: [u8; 8],
}

instruction!(PaydayInstruction, Initialize);
instruction!(PaydayInstruction, IncomeStakerTrigger);
instruction!(PaydayInstruction, OutcomeStakerTrigger);
instruction!(PaydayInstruction, DepositPenalty);
instruction!(PaydayInstruction, GeneratePool);
instruction!(PaydayInstruction, WithdrawPayout);
