//! Reward-per-token accounting.
//!
//! A single cumulative accumulator (`reward_per_token_stored`) grows with
//! `reward_rate * elapsed / total_staked`. Each staker keeps the accumulator
//! value observed at its last checkpoint, so pending reward is
//! `balance * (current - paid)` and nothing ever iterates over stakers.

use cosmwasm_std::{ OverflowError, OverflowOperation, Uint256 };

use crate::error::ContractError;
use crate::state::{ Pool, StakerInfo, ONE };

impl Pool {
    /// Accrual never counts time past the end of the funded period.
    pub fn last_applicable_time(&self, now: u64) -> u64 {
        now.min(self.period_finish)
    }

    pub fn reward_per_token(&self, now: u64) -> Result<Uint256, ContractError> {
        if self.total_staked.is_zero() {
            return Ok(self.reward_per_token_stored);
        }

        let elapsed = self.last_applicable_time(now).saturating_sub(self.last_update_time);
        let accrued = self.reward_rate
            .checked_mul(Uint256::from(elapsed))?
            .checked_multiply_ratio(ONE, self.total_staked)?;

        Ok(self.reward_per_token_stored.checked_add(accrued)?)
    }

    /// Reward earned by `staker` against the given accumulator value.
    pub fn earned(
        &self,
        staker: &StakerInfo,
        reward_per_token: Uint256
    ) -> Result<Uint256, ContractError> {
        let delta = reward_per_token.checked_sub(staker.reward_per_token_paid)?;
        let pending = staker.balance.checked_multiply_ratio(delta, ONE)?;

        Ok(pending.checked_add(staker.rewards)?)
    }

    /// Freezes global accrual at `now`, then settles `staker` against the frozen
    /// value. Without a staker only the global state moves.
    pub fn checkpoint(
        &mut self,
        now: u64,
        staker: Option<&mut StakerInfo>
    ) -> Result<(), ContractError> {
        self.reward_per_token_stored = self.reward_per_token(now)?;
        self.last_update_time = self.last_applicable_time(now);

        if let Some(staker) = staker {
            staker.rewards = self.earned(staker, self.reward_per_token_stored)?;
            staker.reward_per_token_paid = self.reward_per_token_stored;
        }

        Ok(())
    }

    /// Starts a new emission period of `rewards_duration` seconds at `now`.
    /// Emission still owed by an unfinished period is folded into the new rate.
    ///
    /// `held_rewards` is the pool's current balance of the rewards token; the
    /// new rate must be payable from it over the whole period.
    pub fn notify_reward_amount(
        &mut self,
        now: u64,
        reward: Uint256,
        held_rewards: Uint256
    ) -> Result<(), ContractError> {
        self.checkpoint(now, None)?;

        let duration = Uint256::from(self.rewards_duration);
        self.reward_rate = if now > self.period_finish {
            reward.checked_div(duration)?
        } else {
            let remaining = Uint256::from(self.period_finish - now);
            let leftover = self.reward_rate.checked_mul(remaining)?;
            reward.checked_add(leftover)?.checked_div(duration)?
        };

        if self.reward_rate > held_rewards.checked_div(duration)? {
            return Err(ContractError::RewardTooHigh {});
        }

        self.last_update_time = now;
        self.period_finish = now
            .checked_add(self.rewards_duration)
            .ok_or_else(|| OverflowError::new(OverflowOperation::Add, now, self.rewards_duration))?;

        Ok(())
    }

    pub fn set_rewards_duration(&mut self, now: u64, duration: u64) -> Result<(), ContractError> {
        if now <= self.period_finish {
            return Err(ContractError::PeriodNotOver {});
        }

        self.rewards_duration = duration;

        Ok(())
    }

    pub fn reward_for_duration(&self) -> Result<Uint256, ContractError> {
        Ok(self.reward_rate.checked_mul(Uint256::from(self.rewards_duration))?)
    }

    pub fn stake(
        &mut self,
        now: u64,
        staker: &mut StakerInfo,
        amount: Uint256
    ) -> Result<(), ContractError> {
        if amount.is_zero() {
            return Err(ContractError::AmountZero {});
        }

        self.checkpoint(now, Some(staker))?;

        self.total_staked = self.total_staked.checked_add(amount)?;
        staker.balance = staker.balance.checked_add(amount)?;

        Ok(())
    }

    pub fn withdraw(
        &mut self,
        now: u64,
        staker: &mut StakerInfo,
        amount: Uint256
    ) -> Result<(), ContractError> {
        if amount.is_zero() {
            return Err(ContractError::AmountZero {});
        }

        self.checkpoint(now, Some(staker))?;

        staker.balance = staker.balance
            .checked_sub(amount)
            .map_err(|_| ContractError::InsufficientBalance {})?;
        self.total_staked = self.total_staked
            .checked_sub(amount)
            .map_err(|_| ContractError::InsufficientBalance {})?;

        Ok(())
    }

    /// Settles `staker` and takes its whole accrued reward out of the ledger.
    /// The caller pays out the returned amount.
    pub fn claim(&mut self, now: u64, staker: &mut StakerInfo) -> Result<Uint256, ContractError> {
        self.checkpoint(now, Some(staker))?;

        let reward = staker.rewards;
        if reward.is_zero() {
            return Err(ContractError::NoRewards {});
        }
        staker.rewards = Uint256::zero();

        Ok(reward)
    }
}
