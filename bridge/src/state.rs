//! State definitions for the custody bridge contract
//!
//! The whole durable state is one config item and two maps: the chain
//! allowlist and the symbol to token registry.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdResult, Storage, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// The single account allowed to perform privileged operations
    pub validator: Addr,
    /// Address designated to receive bridging fees
    pub fee_receiver: Addr,
    /// Bridging fee (raw units, no bound enforced)
    pub fee: Uint128,
    /// Decimal precision of the native currency
    pub native_decimal: u8,
    /// Bank denomination treated as the native currency
    pub native_denom: String,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:custody-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Native decimal used when instantiation does not provide one
pub const DEFAULT_NATIVE_DECIMAL: u8 = 6;

/// Reply id for the bank send dispatched by a native sweep
pub const NATIVE_SWEEP_REPLY_ID: u64 = 1;

/// Reply id for the CW20 transfer dispatched by a token sweep
pub const TOKEN_SWEEP_REPLY_ID: u64 = 2;

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

/// Remote chains eligible for bridging
/// Key: chain id, Value: whether the chain is currently active
pub const ACTIVE_CHAIN_IDS: Map<u64, bool> = Map::new("active_chain_ids");

/// Registered tokens
/// Key: symbol, Value: CW20 contract address. A missing key means the
/// symbol is not registered.
pub const TICKER_TO_TOKEN: Map<&str, Addr> = Map::new("ticker_to_token");

/// Whether `chain_id` is currently active. Never-set ids are inactive.
pub fn is_chain_active(storage: &dyn Storage, chain_id: u64) -> StdResult<bool> {
    Ok(ACTIVE_CHAIN_IDS
        .may_load(storage, chain_id)?
        .unwrap_or(false))
}
