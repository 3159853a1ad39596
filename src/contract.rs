#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary,
    Addr,
    Binary,
    Deps,
    DepsMut,
    Env,
    Event,
    MessageInfo,
    Reply,
    Response,
    StdResult,
    SubMsg,
    Uint256,
};
use cw2::set_contract_version;
use cw20::Denom;

use crate::access::{ assert_not_paused, assert_owner };
use crate::asset::{ denom_label, held_balance, pull, push, validate_denom };
use crate::error::ContractError;
use crate::guard::{ self, ReentrancyGuard, RELEASE_REPLY_ID, TRANSFER_REPLY_ID };
use crate::msg::{ ExecuteMsg, InstantiateMsg, QueryMsg };
use crate::state::{
    Config,
    Pool,
    StakerInfo,
    CONFIG,
    DEFAULT_REWARDS_DURATION,
    OWNER,
    PAUSED,
    POOL,
    STAKERS,
};

// version info for migration info
const CONTRACT_NAME: &str = "staking-rewards";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg
) -> Result<Response, ContractError> {
    let owner = deps.api.addr_validate(&msg.owner)?;
    let staking_token = validate_denom(deps.api, msg.staking_token)?;
    let rewards_token = validate_denom(deps.api, msg.rewards_token)?;

    if staking_token == rewards_token {
        return Err(ContractError::IdenticalAssets {});
    }

    let rewards_duration = msg.rewards_duration.unwrap_or(DEFAULT_REWARDS_DURATION);

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    CONFIG.save(deps.storage, &(Config {
        staking_token: staking_token.clone(),
        rewards_token: rewards_token.clone(),
    }))?;
    POOL.save(deps.storage, &Pool::new(rewards_duration))?;
    OWNER.save(deps.storage, &owner)?;
    PAUSED.save(deps.storage, &false)?;

    Ok(
        Response::new()
            .add_attribute("method", "instantiate")
            .add_attribute("sender", info.sender)
            .add_attribute("owner", owner)
            .add_attribute("staking_token", denom_label(&staking_token))
            .add_attribute("rewards_token", denom_label(&rewards_token))
            .add_attribute("rewards_duration", rewards_duration.to_string())
    )
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Stake { amount } => stake(deps, env, info, amount),
        ExecuteMsg::Withdraw { amount } => withdraw(deps, env, info, amount),
        ExecuteMsg::Claim {} => claim(deps, env, info),
        ExecuteMsg::Exit {} => exit(deps, env, info),
        ExecuteMsg::NotifyRewardAmount { reward } => notify_reward_amount(deps, env, info, reward),
        ExecuteMsg::SetRewardsDuration { duration } =>
            set_rewards_duration(deps, env, info, duration),
        ExecuteMsg::RecoverToken { token, amount } => recover_token(deps, info, token, amount),
        ExecuteMsg::SetPaused { paused } => set_paused(deps, info, paused),
        ExecuteMsg::ChangeOwner { address } => change_owner(deps, info, address),
    }
}

/// Maps failed transfers to `TransferFailed`, which reverts the whole
/// operation, and unlocks the pool once the last guarded transfer succeeded.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    if msg.id != TRANSFER_REPLY_ID && msg.id != RELEASE_REPLY_ID {
        return Err(ContractError::UnknownReply { id: msg.id });
    }

    if let Err(reason) = msg.result.into_result() {
        return Err(ContractError::TransferFailed { reason });
    }

    if msg.id == RELEASE_REPLY_ID {
        guard::release(deps.storage);
    }

    Ok(Response::new().add_attribute("method", "reply").add_attribute("id", msg.id.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    let now = env.block.time.seconds();

    match msg {
        QueryMsg::Config {} => to_json_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::Owner {} => to_json_binary(&OWNER.load(deps.storage)?),
        QueryMsg::IsPaused {} => to_json_binary(&PAUSED.may_load(deps.storage)?.unwrap_or(false)),
        QueryMsg::Pool {} => to_json_binary(&POOL.load(deps.storage)?),
        QueryMsg::PeriodFinish {} => to_json_binary(&POOL.load(deps.storage)?.period_finish),
        QueryMsg::RewardRate {} => to_json_binary(&POOL.load(deps.storage)?.reward_rate),
        QueryMsg::RewardsDuration {} =>
            to_json_binary(&POOL.load(deps.storage)?.rewards_duration),
        QueryMsg::TotalStaked {} => to_json_binary(&POOL.load(deps.storage)?.total_staked),
        QueryMsg::BalanceOf { address } =>
            to_json_binary(&query_staker(deps, address)?.balance),
        QueryMsg::Staker { address } => to_json_binary(&query_staker(deps, address)?),
        QueryMsg::LastTimeRewardApplicable {} =>
            to_json_binary(&POOL.load(deps.storage)?.last_applicable_time(now)),
        QueryMsg::RewardPerToken {} =>
            to_json_binary(&POOL.load(deps.storage)?.reward_per_token(now)?),
        QueryMsg::Earned { address } => to_json_binary(&query_earned(deps, now, address)?),
        QueryMsg::RewardForDuration {} =>
            to_json_binary(&POOL.load(deps.storage)?.reward_for_duration()?),
    }
}

pub fn stake(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint256
) -> Result<Response, ContractError> {
    assert_not_paused(deps.storage)?;
    let guard = ReentrancyGuard::acquire(deps.storage)?;

    let config = CONFIG.load(deps.storage)?;
    let mut pool = POOL.load(deps.storage)?;
    let mut staker = load_staker(deps.as_ref(), &info.sender)?;

    pool.stake(env.block.time.seconds(), &mut staker, amount)?;

    let transfer = pull(
        &config.staking_token,
        &info.sender,
        &env.contract.address,
        amount,
        &info.funds
    )?;

    POOL.save(deps.storage, &pool)?;
    STAKERS.save(deps.storage, &info.sender, &staker)?;
    let submsgs = guard.release_after(deps.storage, transfer.into_iter().collect());

    Ok(
        Response::new()
            .add_submessages(submsgs)
            .add_event(
                Event::new("staked")
                    .add_attribute("user", info.sender.as_str())
                    .add_attribute("amount", amount.to_string())
            )
            .add_attribute("method", "stake")
            .add_attribute("user", info.sender)
            .add_attribute("amount_staked", amount)
    )
}

pub fn withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint256
) -> Result<Response, ContractError> {
    assert_not_paused(deps.storage)?;
    let guard = ReentrancyGuard::acquire(deps.storage)?;

    let config = CONFIG.load(deps.storage)?;
    let mut pool = POOL.load(deps.storage)?;
    let mut staker = load_staker(deps.as_ref(), &info.sender)?;

    pool.withdraw(env.block.time.seconds(), &mut staker, amount)?;

    let transfer = push(&config.staking_token, &info.sender, amount)?;

    POOL.save(deps.storage, &pool)?;
    STAKERS.save(deps.storage, &info.sender, &staker)?;
    let submsgs = guard.release_after(deps.storage, vec![transfer]);

    Ok(
        Response::new()
            .add_submessages(submsgs)
            .add_event(withdrawn_event(&info.sender, amount))
            .add_attribute("method", "withdraw")
            .add_attribute("user", info.sender)
            .add_attribute("amount_withdrawn", amount)
    )
}

pub fn claim(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    assert_not_paused(deps.storage)?;
    let guard = ReentrancyGuard::acquire(deps.storage)?;

    let config = CONFIG.load(deps.storage)?;
    let mut pool = POOL.load(deps.storage)?;
    let mut staker = load_staker(deps.as_ref(), &info.sender)?;

    // rewards are zeroed in the ledger before the payout is dispatched
    let reward = pool.claim(env.block.time.seconds(), &mut staker)?;

    let transfer = push(&config.rewards_token, &info.sender, reward)?;

    POOL.save(deps.storage, &pool)?;
    STAKERS.save(deps.storage, &info.sender, &staker)?;
    let submsgs = guard.release_after(deps.storage, vec![transfer]);

    Ok(
        Response::new()
            .add_submessages(submsgs)
            .add_event(reward_paid_event(&info.sender, reward))
            .add_attribute("method", "claim")
            .add_attribute("user", info.sender)
            .add_attribute("amount_claimed", reward)
    )
}

pub fn exit(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    assert_not_paused(deps.storage)?;
    let guard = ReentrancyGuard::acquire(deps.storage)?;

    let config = CONFIG.load(deps.storage)?;
    let mut pool = POOL.load(deps.storage)?;
    let mut staker = load_staker(deps.as_ref(), &info.sender)?;
    let now = env.block.time.seconds();

    let amount = staker.balance;
    pool.withdraw(now, &mut staker, amount)?;
    let reward = pool.claim(now, &mut staker)?;

    let transfers = vec![
        push(&config.staking_token, &info.sender, amount)?,
        push(&config.rewards_token, &info.sender, reward)?
    ];

    POOL.save(deps.storage, &pool)?;
    STAKERS.save(deps.storage, &info.sender, &staker)?;
    let submsgs = guard.release_after(deps.storage, transfers);

    Ok(
        Response::new()
            .add_submessages(submsgs)
            .add_event(withdrawn_event(&info.sender, amount))
            .add_event(reward_paid_event(&info.sender, reward))
            .add_attribute("method", "exit")
            .add_attribute("user", info.sender)
            .add_attribute("amount_withdrawn", amount)
            .add_attribute("amount_claimed", reward)
    )
}

pub fn notify_reward_amount(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    reward: Uint256
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let config = CONFIG.load(deps.storage)?;
    let mut pool = POOL.load(deps.storage)?;
    // native rewards attached to this message are already part of the balance
    let held = held_balance(&deps.querier, &config.rewards_token, &env.contract.address)?;

    pool.notify_reward_amount(env.block.time.seconds(), reward, held)?;

    POOL.save(deps.storage, &pool)?;

    Ok(
        Response::new()
            .add_event(Event::new("reward_added").add_attribute("amount", reward.to_string()))
            .add_attribute("method", "notify_reward_amount")
            .add_attribute("reward_rate", pool.reward_rate)
            .add_attribute("period_finish", pool.period_finish.to_string())
    )
}

pub fn set_rewards_duration(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    duration: u64
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let mut pool = POOL.load(deps.storage)?;
    pool.set_rewards_duration(env.block.time.seconds(), duration)?;
    POOL.save(deps.storage, &pool)?;

    Ok(
        Response::new()
            .add_event(
                Event::new("rewards_duration_updated").add_attribute(
                    "duration",
                    duration.to_string()
                )
            )
            .add_attribute("method", "set_rewards_duration")
    )
}

pub fn recover_token(
    deps: DepsMut,
    info: MessageInfo,
    token: Denom,
    amount: Uint256
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let config = CONFIG.load(deps.storage)?;
    let token = validate_denom(deps.api, token)?;

    if token == config.staking_token {
        return Err(ContractError::WrongAsset {});
    }

    let transfer = push(&token, &info.sender, amount)?;

    Ok(
        Response::new()
            .add_submessage(SubMsg::reply_on_error(transfer, TRANSFER_REPLY_ID))
            .add_event(
                Event::new("recovered")
                    .add_attribute("token", denom_label(&token))
                    .add_attribute("amount", amount.to_string())
            )
            .add_attribute("method", "recover_token")
    )
}

pub fn set_paused(deps: DepsMut, info: MessageInfo, paused: bool) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    PAUSED.save(deps.storage, &paused)?;

    Ok(
        Response::new()
            .add_event(Event::new("pause_changed").add_attribute("paused", paused.to_string()))
            .add_attribute("method", "set_paused")
    )
}

pub fn change_owner(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let new_owner = deps.api.addr_validate(&new_owner)?;
    OWNER.save(deps.storage, &new_owner)?;

    Ok(
        Response::new()
            .add_event(Event::new("owner_changed").add_attribute("owner", new_owner.as_str()))
            .add_attribute("method", "change_owner")
    )
}

fn load_staker(deps: Deps, user: &Addr) -> StdResult<StakerInfo> {
    Ok(STAKERS.may_load(deps.storage, user)?.unwrap_or_default())
}

fn withdrawn_event(user: &Addr, amount: Uint256) -> Event {
    Event::new("withdrawn")
        .add_attribute("user", user.as_str())
        .add_attribute("amount", amount.to_string())
}

fn reward_paid_event(user: &Addr, reward: Uint256) -> Event {
    Event::new("reward_paid")
        .add_attribute("user", user.as_str())
        .add_attribute("amount", reward.to_string())
}

pub fn query_staker(deps: Deps, address: String) -> StdResult<StakerInfo> {
    let user = deps.api.addr_validate(&address)?;

    load_staker(deps, &user)
}

pub fn query_earned(deps: Deps, now: u64, address: String) -> StdResult<Uint256> {
    let pool = POOL.load(deps.storage)?;
    let staker = query_staker(deps, address)?;

    let reward_per_token = pool.reward_per_token(now)?;

    Ok(pool.earned(&staker, reward_per_token)?)
}
