/// Seconds in one reward-accrual day. Partial days never accrue.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Lock durations (in days) a staker may choose from when staking.
pub const LOCK_OPTIONS_DAYS: [u32; 3] = [7, 14, 30];

/// Default operating fee (fee-token stroops) required to process an
/// accrual-only claim.
pub const CLAIM_FEE: i128 = 5_000_000;

/// Default operating fee required when the claim also returns the staked
/// asset. The return flow costs more than the accrual-only flow.
pub const CLAIM_RETURN_FEE: i128 = 15_000_000;

pub fn is_allowed_lock_option(days: u32) -> bool {
    LOCK_OPTIONS_DAYS.contains(&days)
}
