use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    AlreadyInitialized = 1,
    InvalidRewardSchedule = 2,
    InvalidFeeConfig = 3,
    Unauthorized = 4,
    AdminNotSet = 5,
    StakeNotFound = 6,
    StakeClosed = 7,
    LockNotElapsed = 8,
    InsufficientFunding = 9,
    InsufficientReserve = 10,
    MathError = 11,
}
