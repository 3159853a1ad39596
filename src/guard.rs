//! Reentrancy lock for user-facing operations.
//!
//! Outbound transfers run after `execute` has returned, so the lock cannot be
//! released at the end of `execute`. It is held until the reply of the last
//! transfer arrives. If anything fails the host discards the whole
//! transaction, lock included, so every exit path leaves the pool unlocked.

use cosmwasm_std::{ CosmosMsg, StdResult, Storage, SubMsg };

use crate::error::ContractError;
use crate::state::LOCKED;

/// Reply of a transfer that only needs its failure mapped.
pub const TRANSFER_REPLY_ID: u64 = 1;
/// Reply of the last transfer dispatched under the lock.
pub const RELEASE_REPLY_ID: u64 = 2;

#[must_use]
pub struct ReentrancyGuard(());

impl ReentrancyGuard {
    pub fn acquire(storage: &mut dyn Storage) -> Result<Self, ContractError> {
        if LOCKED.may_load(storage)?.unwrap_or(false) {
            return Err(ContractError::Reentrant {});
        }
        LOCKED.save(storage, &true)?;

        Ok(ReentrancyGuard(()))
    }

    /// Hands the lock over to `transfers`: it is released by the reply of the
    /// last one, or right away when there is nothing to dispatch.
    pub fn release_after(
        self,
        storage: &mut dyn Storage,
        transfers: Vec<CosmosMsg>
    ) -> Vec<SubMsg> {
        if transfers.is_empty() {
            release(storage);
            return vec![];
        }

        let last = transfers.len() - 1;
        transfers
            .into_iter()
            .enumerate()
            .map(|(i, msg)| {
                if i == last {
                    SubMsg::reply_always(msg, RELEASE_REPLY_ID)
                } else {
                    SubMsg::reply_on_error(msg, TRANSFER_REPLY_ID)
                }
            })
            .collect()
    }
}

pub fn release(storage: &mut dyn Storage) {
    LOCKED.remove(storage);
}

pub fn is_locked(storage: &dyn Storage) -> StdResult<bool> {
    Ok(LOCKED.may_load(storage)?.unwrap_or(false))
}
