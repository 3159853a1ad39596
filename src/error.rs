use cosmwasm_std::{
    CheckedMultiplyRatioError,
    ConversionOverflowError,
    DivideByZeroError,
    OverflowError,
    StdError,
};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")] Std(#[from] StdError),

    #[error("{0}")] Overflow(#[from] OverflowError),

    #[error("{0}")] DivideByZero(#[from] DivideByZeroError),

    #[error("{0}")] MultiplyRatio(#[from] CheckedMultiplyRatioError),

    #[error("{0}")] Conversion(#[from] ConversionOverflowError),

    #[error("Unauthorized")] Unauthorized {},

    #[error("Contract is paused")] Paused {},

    #[error("Reentrant call")] Reentrant {},

    #[error("Amount must be greater than zero")] AmountZero {},

    #[error("Insufficient balance")] InsufficientBalance {},

    #[error("Token transfer failed: {reason}")] TransferFailed {
        reason: String,
    },

    #[error("No rewards")] NoRewards {},

    #[error("Previous rewards period must be complete")] PeriodNotOver {},

    #[error("Provided reward too high")] RewardTooHigh {},

    #[error("Cannot withdraw the staking token")] WrongAsset {},

    #[error("Staking and rewards tokens must differ")] IdenticalAssets {},

    #[error("Unknown reply id: {id}")] UnknownReply {
        id: u64,
    },
}

impl From<ContractError> for StdError {
    fn from(err: ContractError) -> Self {
        match err {
            ContractError::Std(err) => err,
            err => StdError::generic_err(err.to_string()),
        }
    }
}
