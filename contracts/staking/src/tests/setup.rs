use soroban_sdk::{testutils::Address as _, token, Address, Env, Map};

use crate::contract::{Staking, StakingClient};

pub const ONE_DAY: u64 = 86_400;
pub const START: u64 = 1_600_000_000;

pub const CLAIM_FEE: i128 = 5_000_000;
pub const CLAIM_RETURN_FEE: i128 = 15_000_000;

pub fn deploy_token_contract<'a>(env: &Env, admin: &Address) -> token::Client<'a> {
    token::Client::new(
        env,
        &env.register_stellar_asset_contract_v2(admin.clone())
            .address(),
    )
}

pub fn mint_tokens(env: &Env, token: &token::Client, to: &Address, amount: i128) {
    token::StellarAssetClient::new(env, &token.address).mint(to, &amount);
}

pub fn deploy_staking_contract<'a>(
    env: &Env,
    admin: impl Into<Option<Address>>,
    reward_token: &Address,
    fee_token: &Address,
    schedule: &Map<Address, i128>,
) -> StakingClient<'a> {
    let staking = StakingClient::new(env, &env.register(Staking, ()));

    staking.initialize(&admin.into(), reward_token, fee_token, schedule, &None, &None);

    staking
}
