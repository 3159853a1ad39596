use cosmwasm_std::{ Addr, Uint256 };
use cosmwasm_schema::{ cw_serde, QueryResponses };
use cw20::Denom;

use crate::state::{ Config, Pool, StakerInfo };

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    pub staking_token: Denom,
    pub rewards_token: Denom,
    /// Seconds per reward period, defaults to 7 days.
    pub rewards_duration: Option<u64>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Native staking tokens must be attached as funds; cw20 staking tokens
    /// need an allowance for the pool.
    Stake {
        amount: Uint256,
    },
    Withdraw {
        amount: Uint256,
    },
    Claim {},
    /// Withdraw the whole balance and claim in one go.
    Exit {},
    NotifyRewardAmount {
        reward: Uint256,
    },
    SetRewardsDuration {
        duration: u64,
    },
    RecoverToken {
        token: Denom,
        amount: Uint256,
    },
    SetPaused {
        paused: bool,
    },
    ChangeOwner {
        address: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)] Config {},
    #[returns(Addr)] Owner {},
    #[returns(bool)] IsPaused {},
    #[returns(Pool)] Pool {},
    #[returns(u64)] PeriodFinish {},
    #[returns(Uint256)] RewardRate {},
    #[returns(u64)] RewardsDuration {},
    #[returns(Uint256)] TotalStaked {},
    #[returns(Uint256)] BalanceOf {
        address: String,
    },
    #[returns(StakerInfo)] Staker {
        address: String,
    },
    #[returns(u64)] LastTimeRewardApplicable {},
    #[returns(Uint256)] RewardPerToken {},
    #[returns(Uint256)] Earned {
        address: String,
    },
    #[returns(Uint256)] RewardForDuration {},
}
