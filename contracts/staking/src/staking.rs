use soroban_sdk::{contractclient, Address, BytesN, Env, Map, Vec};

use crate::storage::{Config, StakeRecord};

#[contractclient(name = "StakingClient")]
pub trait StakingTrait {
    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        admin: Option<Address>,
        reward_token: Address,
        fee_token: Address,
        schedule: Map<Address, i128>,
        claim_fee: Option<i128>,
        claim_return_fee: Option<i128>,
    );

    // ################################################################
    //                             Users
    // ################################################################

    fn stake(env: Env, staker: Address, asset: Address, lock_days: u32);

    fn claim(env: Env, sender: Address, asset: Address, attached_fee: i128, return_asset: bool);

    // ################################################################
    //                             Admin
    // ################################################################

    fn withdraw_from_reserve(env: Env, sender: Address, amount: i128);

    // ################################################################
    //                             Queries
    // ################################################################

    fn derive_escrow_identity(env: Env, asset: Address) -> BytesN<32>;

    fn query_active_stakes(env: Env) -> Map<Address, Address>;

    fn query_active_stakes_for(env: Env, staker: Address) -> Vec<Address>;

    fn estimate_reward(env: Env, asset: Address, elapsed_seconds: u64) -> i128;

    fn query_stake(env: Env, asset: Address) -> StakeRecord;

    fn query_config(env: Env) -> Config;

    fn query_admin(env: Env) -> Option<Address>;

    fn query_reserve(env: Env) -> i128;
}
