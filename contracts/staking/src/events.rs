use soroban_sdk::{Address, Env, Symbol};

pub struct StakingEvents {}

impl StakingEvents {
    /// Emitted when the staking master is initialized
    ///
    /// - topics - `["initialize", reward_token: Address]`
    /// - data - ()
    pub fn initialize(env: &Env, reward_token: Address) {
        let topics = (Symbol::new(env, "initialize"), reward_token);
        env.events().publish(topics, ());
    }

    /// Emitted when an asset enters escrow
    ///
    /// - topics - `["stake", staker: Address]`
    /// - data - `[asset: Address, lock_days: u32, staked_at: u64]`
    pub fn stake(env: &Env, staker: Address, asset: Address, lock_days: u32, staked_at: u64) {
        let topics = (Symbol::new(env, "stake"), staker);
        env.events().publish(topics, (asset, lock_days, staked_at));
    }

    /// Emitted when a stake request is declined as a no-op
    ///
    /// - topics - `["stake_rejected", staker: Address]`
    /// - data - `[asset: Address, lock_days: u32]`
    pub fn stake_rejected(env: &Env, staker: Address, asset: Address, lock_days: u32) {
        let topics = (Symbol::new(env, "stake_rejected"), staker);
        env.events().publish(topics, (asset, lock_days));
    }

    /// Emitted on every successful claim
    ///
    /// - topics - `["claim", staker: Address]`
    /// - data - `[asset: Address, reward: i128, returned: bool]`
    pub fn claim(env: &Env, staker: Address, asset: Address, reward: i128, returned: bool) {
        let topics = (Symbol::new(env, "claim"), staker);
        env.events().publish(topics, (asset, reward, returned));
    }

    /// Emitted when the admin withdraws from the reward reserve
    ///
    /// - topics - `["admin_withdrawal", admin: Address]`
    /// - data - `amount: i128`
    pub fn admin_withdrawal(env: &Env, admin: Address, amount: i128) {
        let topics = (Symbol::new(env, "admin_withdrawal"), admin);
        env.events().publish(topics, amount);
    }
}
