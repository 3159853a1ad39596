use schemars::JsonSchema;
use serde::{ Deserialize, Serialize };

use cosmwasm_std::{ Addr, Uint256 };
use cw20::Denom;
use cw_storage_plus::{ Item, Map };

// 1e18 fixed-point scale of reward_per_token
pub const ONE: Uint256 = Uint256::from_u128(1_000_000_000_000_000_000_u128);

pub const DEFAULT_REWARDS_DURATION: u64 = 7 * 24 * 60 * 60;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub staking_token: Denom,
    pub rewards_token: Denom,
}

/// Global accrual state. Loaded once per message, mutated as a working copy and
/// saved only after every check has passed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Pool {
    pub total_staked: Uint256,
    /// Reward units emitted per second across all stakers.
    pub reward_rate: Uint256,
    pub period_finish: u64,
    /// Length of the next period started by `NotifyRewardAmount`.
    pub rewards_duration: u64,
    pub last_update_time: u64,
    /// Cumulative reward per staked unit, scaled by `ONE`.
    pub reward_per_token_stored: Uint256,
}

impl Pool {
    pub fn new(rewards_duration: u64) -> Self {
        Pool {
            total_staked: Uint256::zero(),
            reward_rate: Uint256::zero(),
            period_finish: 0,
            rewards_duration,
            last_update_time: 0,
            reward_per_token_stored: Uint256::zero(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
pub struct StakerInfo {
    pub balance: Uint256,
    pub reward_per_token_paid: Uint256,
    /// Earned up to the last checkpoint and not yet paid out.
    pub rewards: Uint256,
}

pub const CONFIG: Item<Config> = Item::new("config");

pub const POOL: Item<Pool> = Item::new("pool");

pub const OWNER: Item<Addr> = Item::new("owner");

pub const PAUSED: Item<bool> = Item::new("paused");

pub const LOCKED: Item<bool> = Item::new("locked");

pub const STAKERS: Map<&Addr, StakerInfo> = Map::new("stakers");
