use cosmwasm_std::{
    coins,
    to_json_binary,
    Addr,
    Api,
    BankMsg,
    Coin,
    CosmosMsg,
    QuerierWrapper,
    StdResult,
    Uint128,
    Uint256,
    WasmMsg,
};
use cw20::{ BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg, Denom };

use crate::error::ContractError;

pub fn validate_denom(api: &dyn Api, denom: Denom) -> StdResult<Denom> {
    match denom {
        Denom::Native(denom) => Ok(Denom::Native(denom)),
        Denom::Cw20(addr) => Ok(Denom::Cw20(api.addr_validate(addr.as_str())?)),
    }
}

pub fn denom_label(denom: &Denom) -> String {
    match denom {
        Denom::Native(denom) => denom.clone(),
        Denom::Cw20(addr) => addr.to_string(),
    }
}

/// Pulls `amount` of `denom` from `owner` into the pool.
///
/// Native coins arrive attached to the message, so they are only checked and no
/// message is returned. cw20 tokens are pulled with `TransferFrom` against the
/// allowance `owner` granted to the pool.
pub fn pull(
    denom: &Denom,
    owner: &Addr,
    pool: &Addr,
    amount: Uint256,
    funds: &[Coin]
) -> Result<Option<CosmosMsg>, ContractError> {
    let amount = Uint128::try_from(amount)?;

    match denom {
        Denom::Native(expected) => {
            match funds {
                [coin] if coin.denom == *expected && coin.amount == amount => Ok(None),
                _ =>
                    Err(ContractError::TransferFailed {
                        reason: format!("expected exactly {}{} in funds", amount, expected),
                    }),
            }
        }
        Denom::Cw20(token) => {
            if !funds.is_empty() {
                return Err(ContractError::TransferFailed {
                    reason: "native funds sent with a cw20 stake".to_string(),
                });
            }

            let msg = WasmMsg::Execute {
                contract_addr: token.to_string(),
                msg: to_json_binary(
                    &(Cw20ExecuteMsg::TransferFrom {
                        owner: owner.to_string(),
                        recipient: pool.to_string(),
                        amount,
                    })
                )?,
                funds: vec![],
            };

            Ok(Some(msg.into()))
        }
    }
}

/// Pushes `amount` of `denom` from pool custody to `recipient`.
pub fn push(denom: &Denom, recipient: &Addr, amount: Uint256) -> Result<CosmosMsg, ContractError> {
    let amount = Uint128::try_from(amount)?;

    let msg: CosmosMsg = match denom {
        Denom::Native(denom) =>
            (BankMsg::Send {
                to_address: recipient.to_string(),
                amount: coins(amount.u128(), denom),
            }).into(),
        Denom::Cw20(token) =>
            (WasmMsg::Execute {
                contract_addr: token.to_string(),
                msg: to_json_binary(
                    &(Cw20ExecuteMsg::Transfer {
                        recipient: recipient.to_string(),
                        amount,
                    })
                )?,
                funds: vec![],
            }).into(),
    };

    Ok(msg)
}

/// Balance of `denom` currently held by `holder`.
pub fn held_balance(querier: &QuerierWrapper, denom: &Denom, holder: &Addr) -> StdResult<Uint256> {
    let balance = match denom {
        Denom::Native(denom) => querier.query_balance(holder, denom)?.amount,
        Denom::Cw20(token) => {
            let res: BalanceResponse = querier.query_wasm_smart(token, &(Cw20QueryMsg::Balance {
                address: holder.to_string(),
            }))?;
            res.balance
        }
    };

    Ok(Uint256::from_uint128(balance))
}
