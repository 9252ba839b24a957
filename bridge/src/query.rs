//! Query handlers for the custody bridge contract.
//!
//! This module contains all query message handlers for retrieving contract state.

use cosmwasm_std::{Deps, Env, Order, StdResult};
use cw_storage_plus::Bound;

use common::AssetInfo;

use crate::msg::{
    ChainResponse, ChainsResponse, ConfigResponse, FeeReceiverResponse, FeeResponse,
    HoldingResponse, NativeDecimalResponse, RegisteredToken, TokenAddressResponse,
    TokensResponse, ValidatorResponse,
};
use crate::state::{is_chain_active, ACTIVE_CHAIN_IDS, CONFIG, TICKER_TO_TOKEN};
use crate::transfer::AssetTransferPort;

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

// ============================================================================
// Config Queries
// ============================================================================

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        validator: config.validator,
        fee_receiver: config.fee_receiver,
        fee: config.fee,
        native_decimal: config.native_decimal,
        native_denom: config.native_denom,
    })
}

pub fn query_validator(deps: Deps) -> StdResult<ValidatorResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ValidatorResponse {
        validator: config.validator,
    })
}

pub fn query_fee(deps: Deps) -> StdResult<FeeResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(FeeResponse { fee: config.fee })
}

pub fn query_fee_receiver(deps: Deps) -> StdResult<FeeReceiverResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(FeeReceiverResponse {
        fee_receiver: config.fee_receiver,
    })
}

pub fn query_native_decimal(deps: Deps) -> StdResult<NativeDecimalResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(NativeDecimalResponse {
        native_decimal: config.native_decimal,
    })
}

// ============================================================================
// Chain Queries
// ============================================================================

/// Query whether a chain is active.
pub fn query_chain_active(deps: Deps, chain_id: u64) -> StdResult<ChainResponse> {
    Ok(ChainResponse {
        chain_id,
        active: is_chain_active(deps.storage, chain_id)?,
    })
}

/// Query paginated list of configured chains.
pub fn query_chains(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<ChainsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let chains = ACTIVE_CHAIN_IDS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (chain_id, active) = item?;
            Ok(ChainResponse { chain_id, active })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(ChainsResponse { chains })
}

// ============================================================================
// Token Queries
// ============================================================================

/// Query the token registered for a symbol.
pub fn query_token_address(deps: Deps, symbol: String) -> StdResult<TokenAddressResponse> {
    let token_address = TICKER_TO_TOKEN.may_load(deps.storage, &symbol)?;
    Ok(TokenAddressResponse {
        symbol,
        token_address,
    })
}

/// Query paginated list of registered tokens.
pub fn query_tokens(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<TokensResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.as_deref().map(Bound::exclusive);

    let tokens = TICKER_TO_TOKEN
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (symbol, token_address) = item?;
            Ok(RegisteredToken {
                symbol,
                token_address,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(TokensResponse { tokens })
}

// ============================================================================
// Holdings Queries
// ============================================================================

/// Query the native balance a sweep would move.
pub fn query_native_balance(deps: Deps, env: Env) -> StdResult<HoldingResponse> {
    let config = CONFIG.load(deps.storage)?;
    let port = AssetTransferPort::new(deps, &env, &config.native_denom);
    Ok(HoldingResponse {
        asset: port.native_asset(),
        amount: port.native_balance()?,
    })
}

/// Query the token balance a sweep would move.
pub fn query_token_balance(
    deps: Deps,
    env: Env,
    token_address: String,
) -> StdResult<HoldingResponse> {
    let config = CONFIG.load(deps.storage)?;
    let token_address = deps.api.addr_validate(&token_address)?;
    let port = AssetTransferPort::new(deps, &env, &config.native_denom);
    Ok(HoldingResponse {
        amount: port.receive_token(&token_address)?,
        asset: AssetInfo::cw20(token_address),
    })
}
