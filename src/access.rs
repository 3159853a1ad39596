use cosmwasm_std::{ Addr, Storage };

use crate::error::ContractError;
use crate::state::{ OWNER, PAUSED };

pub fn assert_owner(storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
    let owner = OWNER.load(storage)?;

    if owner != *sender {
        return Err(ContractError::Unauthorized {});
    }

    Ok(())
}

pub fn assert_not_paused(storage: &dyn Storage) -> Result<(), ContractError> {
    if PAUSED.may_load(storage)?.unwrap_or(false) {
        return Err(ContractError::Paused {});
    }

    Ok(())
}
