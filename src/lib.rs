pub mod access;
pub mod asset;
pub mod contract;
mod error;
pub mod guard;
pub mod helpers;
pub mod integration_tests;
pub mod msg;
pub mod rewards;
pub mod state;

pub use crate::error::ContractError;
