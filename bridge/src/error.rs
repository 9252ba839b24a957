//! Error types for the custody bridge contract

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only the validator can perform this action")]
    Unauthorized,

    // ========================================================================
    // Transfer Errors
    // ========================================================================

    #[error("Transfer failed: {reason}")]
    TransferFailed { reason: String },

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("Chain not supported: {chain_id}")]
    ChainNotSupported { chain_id: u64 },

    #[error("Invalid funds: only the native denom is accepted, got {denom}")]
    InvalidFunds { denom: String },

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },
}
