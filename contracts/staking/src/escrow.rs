use keepsake::{constants::SECONDS_PER_DAY, reward};
use soroban_sdk::{log, panic_with_error, xdr::ToXdr, Address, Bytes, BytesN, Env};

use crate::{
    errors::ErrorCode,
    storage::{Config, EscrowState, StakeRecord},
};

/// Deterministic identity of the escrow slot for `asset` under `master`.
pub fn derive_identity(env: &Env, master: &Address, asset: &Address) -> BytesN<32> {
    let mut preimage = Bytes::new(env);
    preimage.append(&master.clone().to_xdr(env));
    preimage.append(&asset.clone().to_xdr(env));
    env.crypto().sha256(&preimage).to_bytes()
}

/// Opens a fresh escrow for `asset`, staked right now.
pub fn open(
    env: &Env,
    master: Address,
    asset: Address,
    staker: Address,
    lock_days: u32,
    rate: i128,
) -> StakeRecord {
    StakeRecord {
        master,
        asset,
        staker: Some(staker),
        staked_at: env.ledger().timestamp(),
        last_claim_at: 0,
        lock_days,
        rate,
        state: EscrowState::Active,
    }
}

/// Effects of a validated claim, committed by the master.
pub struct ClaimOutcome {
    pub reward: i128,
    pub recipient: Address,
    pub required_fee: i128,
    pub return_asset: bool,
}

/// Compute phase of a claim: validates liveness, caller, timing and funding,
/// then advances the record in memory only. The master commits the token
/// movements and the record write afterwards, so a panic anywhere in the
/// invocation leaves no partial state.
pub fn prepare_claim(
    env: &Env,
    record: &mut StakeRecord,
    sender: &Address,
    attached_fee: i128,
    config: &Config,
    return_asset: bool,
) -> ClaimOutcome {
    if record.state == EscrowState::Closed {
        log!(env, "Staking: Claim: stake already closed");
        panic_with_error!(env, ErrorCode::StakeClosed);
    }

    let staker = record.staker.clone().unwrap_or_else(|| {
        log!(env, "Staking: Claim: stake has no assigned staker");
        panic_with_error!(env, ErrorCode::StakeNotFound)
    });

    if &staker != sender {
        log!(env, "Staking: Claim: only the staker may claim");
        panic_with_error!(env, ErrorCode::Unauthorized);
    }

    let now = env.ledger().timestamp();
    let lock_seconds = (record.lock_days as u64) * SECONDS_PER_DAY;
    if now - record.staked_at < lock_seconds {
        log!(env, "Staking: Claim: lock period has not elapsed");
        panic_with_error!(env, ErrorCode::LockNotElapsed);
    }

    let required_fee = config.required_claim_fee(return_asset);
    if attached_fee < required_fee {
        log!(env, "Staking: Claim: attached value below operating fee");
        panic_with_error!(env, ErrorCode::InsufficientFunding);
    }

    // Accrue from the last claim, or from the stake itself on first claim.
    let reference = if record.last_claim_at != 0 {
        record.last_claim_at
    } else {
        record.staked_at
    };
    let accrued = reward::accrued(record.rate, now - reference).unwrap_or_else(|| {
        log!(env, "Staking: Claim: reward accrual overflow");
        panic_with_error!(env, ErrorCode::MathError)
    });

    record.last_claim_at = now;
    if return_asset {
        record.state = EscrowState::Closed;
    }

    ClaimOutcome {
        reward: accrued,
        recipient: staker,
        required_fee,
        return_asset,
    }
}
