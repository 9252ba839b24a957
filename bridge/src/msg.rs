//! Message types for the custody bridge contract
//!
//! This module defines all messages for instantiation, execution, and queries.

use common::AssetInfo;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Address designated to receive bridging fees
    pub fee_receiver: String,
    /// Bank denomination treated as the native currency (e.g. "uluna")
    pub native_denom: String,
    /// Initial validator (defaults to the instantiating account)
    pub validator: Option<String>,
    /// Initial fee (defaults to zero)
    pub fee: Option<Uint128>,
    /// Native currency decimal precision (defaults to 6)
    pub native_decimal: Option<u8>,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Reference to the remote-chain deposit that justifies a withdrawal.
///
/// Attestations are recorded, not verified: the only check is that the
/// source chain is active in the allowlist.
#[cw_serde]
pub struct Attestation {
    /// Remote chain the deposit was observed on
    pub src_chain_id: u64,
    /// Opaque reference to the deposit (e.g. remote transaction hash)
    pub deposit_ref: String,
}

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Native Receipt
    // ========================================================================
    /// Deposit native currency into the contract
    ///
    /// Authorization: Anyone
    ///
    /// Only the native denomination may be attached; any other coin fails
    /// with `InvalidFunds`. The amount is reported in `asset_received`.
    ReceiveNative {},

    // ========================================================================
    // Chain Allowlist
    // ========================================================================
    /// Enable or disable a remote chain
    ///
    /// Authorization: Validator only
    SetChainSupported { chain_id: u64, supported: bool },

    // ========================================================================
    // Token Registry
    // ========================================================================
    /// Register (or overwrite) the token contract for a symbol
    ///
    /// Authorization: Validator only
    IncludeToken {
        symbol: String,
        token_address: String,
    },

    /// Remove a symbol from the registry (no-op if not registered)
    ///
    /// Authorization: Validator only
    ExcludeToken { symbol: String },

    // ========================================================================
    // Fee & Authority
    // ========================================================================
    /// Authorization: Validator only
    SetFee { fee: Uint128 },

    /// Authorization: Validator only
    SetFeeReceiver { fee_receiver: String },

    /// Hand privileged capability to a new account
    ///
    /// Authorization: Validator only
    ///
    /// Single step: the current validator loses all privileges as soon as
    /// this executes.
    SetValidator { validator: String },

    /// Authorization: Validator only
    SetNativeDecimal { native_decimal: u8 },

    // ========================================================================
    // Sweep Withdrawals
    // ========================================================================
    /// Send the entire native balance held by the contract to `to`
    ///
    /// Authorization: Validator only
    WithdrawNative {
        to: String,
        attestation: Option<Attestation>,
    },

    /// Send the entire balance of a CW20 token held by the contract to `to`
    ///
    /// Authorization: Validator only
    WithdrawToken {
        token_address: String,
        to: String,
        attestation: Option<Attestation>,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the full contract configuration
    #[returns(ConfigResponse)]
    Config {},

    #[returns(ValidatorResponse)]
    Validator {},

    #[returns(FeeResponse)]
    Fee {},

    #[returns(FeeReceiverResponse)]
    FeeReceiver {},

    #[returns(NativeDecimalResponse)]
    NativeDecimal {},

    /// Whether a remote chain is active (false for never-set ids)
    #[returns(ChainResponse)]
    ChainActive { chain_id: u64 },

    /// Returns every chain id that has been configured, active or not
    #[returns(ChainsResponse)]
    Chains {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// Token contract registered for a symbol (None if not registered)
    #[returns(TokenAddressResponse)]
    TokenAddress { symbol: String },

    /// Returns registered tokens ordered by symbol
    #[returns(TokensResponse)]
    Tokens {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Native balance currently held (what `WithdrawNative` would move)
    #[returns(HoldingResponse)]
    NativeBalance {},

    /// CW20 balance currently held (what `WithdrawToken` would move)
    #[returns(HoldingResponse)]
    TokenBalance { token_address: String },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub validator: Addr,
    pub fee_receiver: Addr,
    pub fee: Uint128,
    pub native_decimal: u8,
    pub native_denom: String,
}

#[cw_serde]
pub struct ValidatorResponse {
    pub validator: Addr,
}

#[cw_serde]
pub struct FeeResponse {
    pub fee: Uint128,
}

#[cw_serde]
pub struct FeeReceiverResponse {
    pub fee_receiver: Addr,
}

#[cw_serde]
pub struct NativeDecimalResponse {
    pub native_decimal: u8,
}

#[cw_serde]
pub struct ChainResponse {
    pub chain_id: u64,
    pub active: bool,
}

#[cw_serde]
pub struct ChainsResponse {
    pub chains: Vec<ChainResponse>,
}

#[cw_serde]
pub struct TokenAddressResponse {
    pub symbol: String,
    pub token_address: Option<Addr>,
}

#[cw_serde]
pub struct RegisteredToken {
    pub symbol: String,
    pub token_address: Addr,
}

#[cw_serde]
pub struct TokensResponse {
    pub tokens: Vec<RegisteredToken>,
}

#[cw_serde]
pub struct HoldingResponse {
    pub asset: AssetInfo,
    pub amount: Uint128,
}
