extern crate std;

use pretty_assertions::assert_eq;
use soroban_sdk::{testutils::Address as _, Address, Env, Map};

use super::setup::{deploy_staking_contract, deploy_token_contract, mint_tokens};

#[test]
fn admin_withdrawal_moves_reward_tokens_out_of_the_reserve() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let reward_token = deploy_token_contract(&env, &admin);
    let fee_token = deploy_token_contract(&env, &admin);
    let asset = deploy_token_contract(&env, &admin);

    let mut schedule = Map::new(&env);
    schedule.set(asset.address.clone(), 10i128);

    let staking = deploy_staking_contract(
        &env,
        admin.clone(),
        &reward_token.address,
        &fee_token.address,
        &schedule,
    );

    mint_tokens(&env, &reward_token, &staking.address, 1_000);

    staking.withdraw_from_reserve(&admin, &400);

    assert_eq!(reward_token.balance(&admin), 400);
    assert_eq!(staking.query_reserve(), 600);
}

#[test]
#[should_panic(expected = "Staking: Withdraw: amount exceeds the reserve")]
fn withdrawing_more_than_the_reserve_should_fail() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let reward_token = deploy_token_contract(&env, &admin);
    let fee_token = deploy_token_contract(&env, &admin);
    let asset = deploy_token_contract(&env, &admin);

    let mut schedule = Map::new(&env);
    schedule.set(asset.address.clone(), 10i128);

    let staking = deploy_staking_contract(
        &env,
        admin.clone(),
        &reward_token.address,
        &fee_token.address,
        &schedule,
    );

    mint_tokens(&env, &reward_token, &staking.address, 1_000);

    staking.withdraw_from_reserve(&admin, &1_001);
}

#[test]
#[should_panic(expected = "Staking: Withdraw: only the admin may withdraw from the reserve")]
fn non_admin_withdrawal_should_fail() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let stranger = Address::generate(&env);
    let reward_token = deploy_token_contract(&env, &admin);
    let fee_token = deploy_token_contract(&env, &admin);
    let asset = deploy_token_contract(&env, &admin);

    let mut schedule = Map::new(&env);
    schedule.set(asset.address.clone(), 10i128);

    let staking = deploy_staking_contract(
        &env,
        admin.clone(),
        &reward_token.address,
        &fee_token.address,
        &schedule,
    );

    mint_tokens(&env, &reward_token, &staking.address, 1_000);

    staking.withdraw_from_reserve(&stranger, &100);
}

#[test]
#[should_panic(expected = "Staking: Withdraw: no admin configured")]
fn withdrawal_without_a_configured_admin_should_fail() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let reward_token = deploy_token_contract(&env, &admin);
    let fee_token = deploy_token_contract(&env, &admin);
    let asset = deploy_token_contract(&env, &admin);

    let mut schedule = Map::new(&env);
    schedule.set(asset.address.clone(), 10i128);

    // the oldest deployments carry no admin at all
    let staking = deploy_staking_contract(
        &env,
        None::<Address>,
        &reward_token.address,
        &fee_token.address,
        &schedule,
    );

    mint_tokens(&env, &reward_token, &staking.address, 1_000);

    staking.withdraw_from_reserve(&admin, &100);
}

#[test]
fn failed_withdrawal_leaves_the_reserve_unchanged() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let reward_token = deploy_token_contract(&env, &admin);
    let fee_token = deploy_token_contract(&env, &admin);
    let asset = deploy_token_contract(&env, &admin);

    let mut schedule = Map::new(&env);
    schedule.set(asset.address.clone(), 10i128);

    let staking = deploy_staking_contract(
        &env,
        admin.clone(),
        &reward_token.address,
        &fee_token.address,
        &schedule,
    );

    mint_tokens(&env, &reward_token, &staking.address, 1_000);

    assert!(staking.try_withdraw_from_reserve(&admin, &1_001).is_err());

    assert_eq!(staking.query_reserve(), 1_000);
    assert_eq!(reward_token.balance(&admin), 0);
}
