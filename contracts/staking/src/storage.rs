use keepsake::ttl::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};
use soroban_sdk::{contracttype, Address, BytesN, Env, Map};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Schedule,
    ActiveStakes,
    Escrow(BytesN<32>),
    Initialized,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Set by later deployments only; `None` disables reserve withdrawal.
    pub admin: Option<Address>,
    pub reward_token: Address,
    pub fee_token: Address,
    pub claim_fee: i128,
    pub claim_return_fee: i128,
}

impl Config {
    pub fn required_claim_fee(&self, return_asset: bool) -> i128 {
        if return_asset {
            self.claim_return_fee
        } else {
            self.claim_fee
        }
    }
}

/// Life state of an escrow slot. `Closed` is terminal.
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum EscrowState {
    Active = 0,
    Closed = 1,
}

/// Persisted state of one staked asset's escrow, keyed by the derived
/// escrow identity.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StakeRecord {
    pub master: Address,
    pub asset: Address,
    pub staker: Option<Address>,
    pub staked_at: u64,
    /// 0 = never claimed.
    pub last_claim_at: u64,
    pub lock_days: u32,
    /// Reward-token units accrued per whole day; snapshot of the schedule
    /// entry taken at stake time (the schedule is fixed at deployment).
    pub rate: i128,
    pub state: EscrowState,
}

// ################################################################

pub fn save_config(env: &Env, config: Config) {
    env.storage().persistent().set(&DataKey::Config, &config);
    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_config(env: &Env) -> Config {
    let config = env
        .storage()
        .persistent()
        .get(&DataKey::Config)
        .expect("Config not set");

    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    config
}

// ################################################################

pub fn save_schedule(env: &Env, schedule: &Map<Address, i128>) {
    env.storage().persistent().set(&DataKey::Schedule, schedule);
    env.storage().persistent().extend_ttl(
        &DataKey::Schedule,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_schedule(env: &Env) -> Map<Address, i128> {
    let schedule = env
        .storage()
        .persistent()
        .get(&DataKey::Schedule)
        .expect("Reward schedule not set");

    env.storage().persistent().extend_ttl(
        &DataKey::Schedule,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    schedule
}

// ################################################################

pub fn save_active_stakes(env: &Env, index: &Map<Address, Address>) {
    env.storage().persistent().set(&DataKey::ActiveStakes, index);
    env.storage().persistent().extend_ttl(
        &DataKey::ActiveStakes,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_active_stakes(env: &Env) -> Map<Address, Address> {
    let index = env
        .storage()
        .persistent()
        .get(&DataKey::ActiveStakes)
        .expect("Active stake index not set");

    env.storage().persistent().extend_ttl(
        &DataKey::ActiveStakes,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    index
}

// ################################################################

pub fn save_stake_record(env: &Env, identity: &BytesN<32>, record: &StakeRecord) {
    let key = DataKey::Escrow(identity.clone());
    env.storage().persistent().set(&key, record);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_stake_record(env: &Env, identity: &BytesN<32>) -> Option<StakeRecord> {
    let key = DataKey::Escrow(identity.clone());
    let record: Option<StakeRecord> = env.storage().persistent().get(&key);

    if record.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }

    record
}

// ################################################################

pub mod utils {
    use super::*;

    pub fn is_initialized(env: &Env) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::Initialized)
            .unwrap_or(false)
    }

    pub fn set_initialized(env: &Env) {
        env.storage().persistent().set(&DataKey::Initialized, &true);
        env.storage().persistent().extend_ttl(
            &DataKey::Initialized,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }
}
