#[cfg(test)]
pub mod tests {
    use anyhow::Result as AnyResult;
    use cosmwasm_std::{ coins, Addr, Coin, Empty, Uint128, Uint256 };
    use cw20::{ Cw20Coin, Denom };
    use cw_multi_test::{ App, AppResponse, Contract, ContractWrapper, Executor };

    use crate::helpers::StakingRewardsContract;
    use crate::msg::{ ExecuteMsg, InstantiateMsg, QueryMsg };

    pub const OWNER: &str = "owner";
    pub const USER: &str = "alice";
    pub const USER2: &str = "bob";
    pub const STAKE_DENOM: &str = "ustake";
    pub const REWARD_DENOM: &str = "ureward";
    pub const DURATION: u64 = 1_000;
    pub const INITIAL_BALANCE: u128 = 1_000_000;

    pub fn contract_staking() -> Box<dyn Contract<Empty>> {
        let contract = ContractWrapper::new(
            crate::contract::execute,
            crate::contract::instantiate,
            crate::contract::query
        ).with_reply(crate::contract::reply);
        Box::new(contract)
    }

    pub fn contract_cw20() -> Box<dyn Contract<Empty>> {
        let contract = ContractWrapper::new(
            cw20_base::contract::execute,
            cw20_base::contract::instantiate,
            cw20_base::contract::query
        );
        Box::new(contract)
    }

    pub fn contract_hostile_token() -> Box<dyn Contract<Empty>> {
        let contract = ContractWrapper::new(
            hostile_token::execute,
            hostile_token::instantiate,
            hostile_token::query
        ).with_reply(hostile_token::reply);
        Box::new(contract)
    }

    fn mock_app() -> App {
        App::new(|router, _, storage| {
            for user in [USER, USER2] {
                router.bank
                    .init_balance(storage, &Addr::unchecked(user), coins(INITIAL_BALANCE, STAKE_DENOM))
                    .unwrap();
            }
            router.bank
                .init_balance(storage, &Addr::unchecked(OWNER), coins(INITIAL_BALANCE, REWARD_DENOM))
                .unwrap();
        })
    }

    pub fn instantiate_pool(
        app: &mut App,
        staking_token: Denom,
        rewards_token: Denom
    ) -> StakingRewardsContract {
        let code_id = app.store_code(contract_staking());

        let msg = InstantiateMsg {
            owner: OWNER.to_string(),
            staking_token,
            rewards_token,
            rewards_duration: Some(DURATION),
        };
        let addr = app
            .instantiate_contract(code_id, Addr::unchecked(OWNER), &msg, &[], "staking-rewards", None)
            .unwrap();

        StakingRewardsContract(addr)
    }

    /// Native staking and reward denoms.
    pub fn proper_instantiate() -> (App, StakingRewardsContract) {
        let mut app = mock_app();
        let contract = instantiate_pool(
            &mut app,
            Denom::Native(STAKE_DENOM.to_string()),
            Denom::Native(REWARD_DENOM.to_string())
        );

        (app, contract)
    }

    pub fn instantiate_cw20(app: &mut App, symbol: &str, holders: &[(&str, u128)]) -> Addr {
        let code_id = app.store_code(contract_cw20());

        let msg = cw20_base::msg::InstantiateMsg {
            name: format!("{} token", symbol),
            symbol: symbol.to_string(),
            decimals: 6,
            initial_balances: holders
                .iter()
                .map(|(address, amount)| Cw20Coin {
                    address: address.to_string(),
                    amount: Uint128::new(*amount),
                })
                .collect(),
            mint: None,
            marketing: None,
        };

        app.instantiate_contract(code_id, Addr::unchecked(OWNER), &msg, &[], symbol, None).unwrap()
    }

    pub fn instantiate_hostile_token(app: &mut App) -> Addr {
        let code_id = app.store_code(contract_hostile_token());

        app.instantiate_contract(code_id, Addr::unchecked(OWNER), &Empty {}, &[], "hostile", None)
            .unwrap()
    }

    pub fn expect_error(res: AnyResult<AppResponse>, error_message: String) {
        let err = res.unwrap_err();
        assert_eq!(err.root_cause().to_string(), error_message);
    }

    pub fn advance(app: &mut App, seconds: u64) {
        app.update_block(|block| {
            block.time = block.time.plus_seconds(seconds);
            block.height += seconds / 5;
        });
    }

    pub fn now(app: &App) -> u64 {
        app.block_info().time.seconds()
    }

    pub fn stake_native(
        app: &mut App,
        contract: &StakingRewardsContract,
        user: &str,
        amount: u128
    ) -> AnyResult<AppResponse> {
        app.execute_contract(
            Addr::unchecked(user),
            contract.addr(),
            &(ExecuteMsg::Stake { amount: Uint256::from_u128(amount) }),
            &coins(amount, STAKE_DENOM)
        )
    }

    pub fn start_period(
        app: &mut App,
        contract: &StakingRewardsContract,
        reward: u128,
        funds: &[Coin]
    ) -> AnyResult<AppResponse> {
        app.execute_contract(
            Addr::unchecked(OWNER),
            contract.addr(),
            &(ExecuteMsg::NotifyRewardAmount { reward: Uint256::from_u128(reward) }),
            funds
        )
    }

    pub fn query_earned(app: &App, contract: &StakingRewardsContract, user: &str) -> Uint256 {
        app.wrap()
            .query_wasm_smart(contract.addr(), &(QueryMsg::Earned { address: user.to_string() }))
            .unwrap()
    }

    pub fn native_balance(app: &App, address: impl Into<String>, denom: &str) -> u128 {
        app.wrap().query_balance(address, denom).unwrap().amount.u128()
    }

    /// A cw20 look-alike rewards token that tries to call back into the pool
    /// every time the pool pays out through it.
    pub mod hostile_token {
        use cosmwasm_schema::cw_serde;
        use cosmwasm_std::{
            coins,
            to_json_binary,
            Addr,
            Binary,
            Deps,
            DepsMut,
            Empty,
            Env,
            MessageInfo,
            Reply,
            Response,
            StdResult,
            SubMsg,
            Uint128,
            Uint256,
        };
        use cw20::BalanceResponse;
        use cw_storage_plus::Item;

        use crate::helpers::StakingRewardsContract;
        use crate::msg::ExecuteMsg as PoolExecuteMsg;

        use super::STAKE_DENOM;

        pub const REENTRY_ERRORS: Item<Vec<String>> = Item::new("reentry_errors");

        #[cw_serde]
        pub enum ExecuteMsg {
            Transfer {
                recipient: String,
                amount: Uint128,
            },
            StakeInto {
                pool: String,
                amount: Uint128,
            },
        }

        #[cw_serde]
        pub enum QueryMsg {
            Balance {
                address: String,
            },
            ReentryErrors {},
        }

        pub fn instantiate(
            deps: DepsMut,
            _env: Env,
            _info: MessageInfo,
            _msg: Empty
        ) -> StdResult<Response> {
            REENTRY_ERRORS.save(deps.storage, &vec![])?;
            Ok(Response::new())
        }

        pub fn execute(
            _deps: DepsMut,
            env: Env,
            info: MessageInfo,
            msg: ExecuteMsg
        ) -> StdResult<Response> {
            match msg {
                ExecuteMsg::Transfer { recipient, .. } => {
                    if recipient == env.contract.address.as_str() {
                        return Ok(Response::new());
                    }

                    let pool = StakingRewardsContract(info.sender);
                    let claim = pool.call(PoolExecuteMsg::Claim {}, vec![])?;
                    let withdraw = pool.call(
                        PoolExecuteMsg::Withdraw { amount: Uint256::from_u128(1) },
                        vec![]
                    )?;

                    Ok(
                        Response::new()
                            .add_submessage(SubMsg::reply_on_error(claim, 1))
                            .add_submessage(SubMsg::reply_on_error(withdraw, 2))
                    )
                }
                ExecuteMsg::StakeInto { pool, amount } => {
                    let pool = StakingRewardsContract(Addr::unchecked(pool));
                    let stake = pool.call(
                        PoolExecuteMsg::Stake { amount: Uint256::from_uint128(amount) },
                        coins(amount.u128(), STAKE_DENOM)
                    )?;

                    Ok(Response::new().add_message(stake))
                }
            }
        }

        pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> StdResult<Response> {
            if let Err(err) = msg.result.into_result() {
                REENTRY_ERRORS.update(deps.storage, |mut errors| -> StdResult<_> {
                    errors.push(err);
                    Ok(errors)
                })?;
            }
            Ok(Response::new())
        }

        pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
            match msg {
                QueryMsg::Balance { .. } =>
                    to_json_binary(
                        &(BalanceResponse {
                            balance: Uint128::new(1_000_000_000_000),
                        })
                    ),
                QueryMsg::ReentryErrors {} => to_json_binary(&REENTRY_ERRORS.load(deps.storage)?),
            }
        }
    }
}
