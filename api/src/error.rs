use num_enum::IntoPrimitive;
use steel::*;
use thiserror::Error;

#[repr(u32)]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, IntoPrimitive)]
pub enum PaydayError {
    #[error("Caller is not authorized for this operation")]
    Unauthorized = 0,
    #[error("An eligibility record already exists for this session")]
    SessionExists = 1,
    #[error("No eligibility record exists for this session")]
    UnknownSession = 2,
    #[error("Session has already been closed")]
    SessionClosed = 3,
    #[error("Outcome shares do not match the recorded income shares")]
    SharesMismatch = 4,
    #[error("Session must be closed before its payout can be withdrawn")]
    SessionStillOpen = 5,
    #[error("Session payout has already been withdrawn")]
    AlreadyWithdrawn = 6,
    #[error("Session has no matured payout and no penalty refund")]
    NothingToWithdraw = 7,
    #[error("Pool schedule parameters are invalid")]
    InvalidSchedule = 8,
}

error!(PaydayError);
