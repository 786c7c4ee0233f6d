use keepsake::{
    constants::{is_allowed_lock_option, CLAIM_FEE, CLAIM_RETURN_FEE},
    reward,
    ttl::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD},
};
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, token, Address, BytesN, Env, Map,
    Vec,
};

use crate::{
    errors::ErrorCode,
    escrow,
    events::StakingEvents,
    staking::StakingTrait,
    storage::{
        get_active_stakes, get_config, get_schedule, get_stake_record, save_active_stakes,
        save_config, save_schedule, save_stake_record,
        utils::{is_initialized, set_initialized},
        Config, StakeRecord,
    },
};

contractmeta!(
    key = "Description",
    val = "Master ledger escrowing collectible assets for timed rewards"
);

#[contract]
pub struct Staking;

#[contractimpl]
impl StakingTrait for Staking {
    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        admin: Option<Address>,
        reward_token: Address,
        fee_token: Address,
        schedule: Map<Address, i128>,
        claim_fee: Option<i128>,
        claim_return_fee: Option<i128>,
    ) {
        if is_initialized(&env) {
            log!(
                &env,
                "Staking: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        set_initialized(&env);

        if schedule.is_empty() {
            log!(&env, "Staking: Initialize: reward schedule must not be empty");
            panic_with_error!(&env, ErrorCode::InvalidRewardSchedule);
        }
        for (_, rate) in schedule.iter() {
            if rate <= 0 {
                log!(&env, "Staking: Initialize: reward rates must be positive");
                panic_with_error!(&env, ErrorCode::InvalidRewardSchedule);
            }
        }

        let claim_fee = claim_fee.unwrap_or(CLAIM_FEE);
        let claim_return_fee = claim_return_fee.unwrap_or(CLAIM_RETURN_FEE);
        if claim_fee < 0 || claim_return_fee <= claim_fee {
            log!(
                &env,
                "Staking: Initialize: return claim fee must exceed the claim fee"
            );
            panic_with_error!(&env, ErrorCode::InvalidFeeConfig);
        }

        save_config(
            &env,
            Config {
                admin,
                reward_token: reward_token.clone(),
                fee_token,
                claim_fee,
                claim_return_fee,
            },
        );
        save_schedule(&env, &schedule);
        save_active_stakes(&env, &Map::new(&env));

        StakingEvents::initialize(&env, reward_token);
    }

    // ################################################################
    //                             Users
    // ################################################################

    fn stake(env: Env, staker: Address, asset: Address, lock_days: u32) {
        staker.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        // Ineligible requests are declined as a no-op: the asset never
        // leaves its owner and no record is created.
        let schedule = get_schedule(&env);
        let rate = match schedule.get(asset.clone()) {
            Some(rate) => rate,
            None => {
                log!(&env, "Staking: Stake: asset is not in the reward schedule");
                StakingEvents::stake_rejected(&env, staker, asset, lock_days);
                return;
            }
        };

        if !is_allowed_lock_option(lock_days) {
            log!(&env, "Staking: Stake: lock option is not allowed");
            StakingEvents::stake_rejected(&env, staker, asset, lock_days);
            return;
        }

        let mut active = get_active_stakes(&env);
        if active.contains_key(asset.clone()) {
            log!(&env, "Staking: Stake: asset is already staked");
            StakingEvents::stake_rejected(&env, staker, asset, lock_days);
            return;
        }

        let master = env.current_contract_address();

        // Take custody of the single collectible unit.
        token::Client::new(&env, &asset).transfer(&staker, &master, &1);

        let identity = escrow::derive_identity(&env, &master, &asset);
        let record = escrow::open(
            &env,
            master,
            asset.clone(),
            staker.clone(),
            lock_days,
            rate,
        );
        save_stake_record(&env, &identity, &record);

        active.set(asset.clone(), staker.clone());
        save_active_stakes(&env, &active);

        StakingEvents::stake(&env, staker, asset, lock_days, record.staked_at);
    }

    fn claim(env: Env, sender: Address, asset: Address, attached_fee: i128, return_asset: bool) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        let master = env.current_contract_address();

        let identity = escrow::derive_identity(&env, &master, &asset);
        let mut record = get_stake_record(&env, &identity).unwrap_or_else(|| {
            log!(&env, "Staking: Claim: no stake found for asset");
            panic_with_error!(&env, ErrorCode::StakeNotFound)
        });

        let outcome =
            escrow::prepare_claim(&env, &mut record, &sender, attached_fee, &config, return_asset);

        // Commit phase. Only the required fee is drawn from the sender;
        // any surplus stays in their wallet as change.
        token::Client::new(&env, &config.fee_token).transfer(
            &sender,
            &master,
            &outcome.required_fee,
        );

        let reward_client = token::Client::new(&env, &config.reward_token);
        if outcome.reward > 0 {
            let reserve = reward_client.balance(&master);
            if outcome.reward > reserve {
                log!(&env, "Staking: Claim: reward exceeds the reserve");
                panic_with_error!(&env, ErrorCode::InsufficientReserve);
            }
            reward_client.transfer(&master, &outcome.recipient, &outcome.reward);
        }

        if outcome.return_asset {
            token::Client::new(&env, &asset).transfer(&master, &outcome.recipient, &1);

            let mut active = get_active_stakes(&env);
            active.remove(asset.clone());
            save_active_stakes(&env, &active);
        }

        save_stake_record(&env, &identity, &record);

        StakingEvents::claim(
            &env,
            outcome.recipient,
            asset,
            outcome.reward,
            outcome.return_asset,
        );
    }

    // ################################################################
    //                             Admin
    // ################################################################

    fn withdraw_from_reserve(env: Env, sender: Address, amount: i128) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        let admin = config.admin.unwrap_or_else(|| {
            log!(&env, "Staking: Withdraw: no admin configured");
            panic_with_error!(&env, ErrorCode::AdminNotSet)
        });
        if sender != admin {
            log!(
                &env,
                "Staking: Withdraw: only the admin may withdraw from the reserve"
            );
            panic_with_error!(&env, ErrorCode::Unauthorized);
        }

        let master = env.current_contract_address();
        let reward_client = token::Client::new(&env, &config.reward_token);
        if amount <= 0 || amount > reward_client.balance(&master) {
            log!(&env, "Staking: Withdraw: amount exceeds the reserve");
            panic_with_error!(&env, ErrorCode::InsufficientReserve);
        }
        reward_client.transfer(&master, &admin, &amount);

        StakingEvents::admin_withdrawal(&env, admin, amount);
    }

    // ################################################################
    //                             Queries
    // ################################################################

    fn derive_escrow_identity(env: Env, asset: Address) -> BytesN<32> {
        escrow::derive_identity(&env, &env.current_contract_address(), &asset)
    }

    fn query_active_stakes(env: Env) -> Map<Address, Address> {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_active_stakes(&env)
    }

    fn query_active_stakes_for(env: Env, staker: Address) -> Vec<Address> {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let mut result = Vec::new(&env);
        for (asset, owner) in get_active_stakes(&env).iter() {
            if owner == staker {
                result.push_back(asset);
            }
        }
        result
    }

    fn estimate_reward(env: Env, asset: Address, elapsed_seconds: u64) -> i128 {
        let rate = get_schedule(&env).get(asset).unwrap_or_else(|| {
            log!(
                &env,
                "Staking: Estimate reward: asset is not in the reward schedule"
            );
            panic_with_error!(&env, ErrorCode::StakeNotFound)
        });

        reward::accrued(rate, elapsed_seconds).unwrap_or_else(|| {
            log!(&env, "Staking: Estimate reward: accrual overflow");
            panic_with_error!(&env, ErrorCode::MathError)
        })
    }

    fn query_stake(env: Env, asset: Address) -> StakeRecord {
        let identity = escrow::derive_identity(&env, &env.current_contract_address(), &asset);
        get_stake_record(&env, &identity).unwrap_or_else(|| {
            log!(&env, "Staking: Query stake: no stake found for asset");
            panic_with_error!(&env, ErrorCode::StakeNotFound)
        })
    }

    fn query_config(env: Env) -> Config {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_config(&env)
    }

    fn query_admin(env: Env) -> Option<Address> {
        get_config(&env).admin
    }

    fn query_reserve(env: Env) -> i128 {
        let config = get_config(&env);
        token::Client::new(&env, &config.reward_token).balance(&env.current_contract_address())
    }
}

#[contractimpl]
impl Staking {
    #[allow(dead_code)]
    pub fn update(env: Env, new_wasm_hash: BytesN<32>) {
        let config = get_config(&env);
        let admin = config.admin.unwrap_or_else(|| {
            log!(&env, "Staking: Update: no admin configured");
            panic_with_error!(&env, ErrorCode::AdminNotSet)
        });
        admin.require_auth();

        env.deployer().update_current_contract_wasm(new_wasm_hash);
    }
}
