//! Chain allowlist and token registry handlers.
//!
//! Both registries are plain overwrites: enabling an enabled chain,
//! disabling a never-enabled chain, re-registering a symbol and excluding an
//! unknown symbol all succeed and still emit their event.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::authority::ensure_validator;
use crate::error::ContractError;
use crate::events::BridgeEvent;
use crate::state::{ACTIVE_CHAIN_IDS, TICKER_TO_TOKEN};

// ============================================================================
// Chain Allowlist
// ============================================================================

/// Enable or disable a remote chain.
pub fn execute_set_chain_supported(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
    supported: bool,
) -> Result<Response, ContractError> {
    ensure_validator(deps.as_ref(), &info)?;

    ACTIVE_CHAIN_IDS.save(deps.storage, chain_id, &supported)?;

    Ok(Response::new()
        .add_attribute("action", "set_chain_supported")
        .add_event(
            BridgeEvent::SupportedChainChanged {
                chain_id,
                supported,
            }
            .into_event(&info.sender),
        ))
}

// ============================================================================
// Token Registry
// ============================================================================

/// Register the token contract for a symbol, replacing any previous entry.
pub fn execute_include_token(
    deps: DepsMut,
    info: MessageInfo,
    symbol: String,
    token_address: String,
) -> Result<Response, ContractError> {
    ensure_validator(deps.as_ref(), &info)?;

    let token_address = deps.api.addr_validate(&token_address)?;
    TICKER_TO_TOKEN.save(deps.storage, &symbol, &token_address)?;

    Ok(Response::new()
        .add_attribute("action", "include_token")
        .add_event(
            BridgeEvent::TokenIncluded {
                symbol,
                token_address,
            }
            .into_event(&info.sender),
        ))
}

/// Remove a symbol from the registry.
pub fn execute_exclude_token(
    deps: DepsMut,
    info: MessageInfo,
    symbol: String,
) -> Result<Response, ContractError> {
    ensure_validator(deps.as_ref(), &info)?;

    TICKER_TO_TOKEN.remove(deps.storage, &symbol);

    Ok(Response::new()
        .add_attribute("action", "exclude_token")
        .add_event(BridgeEvent::TokenExcluded { symbol }.into_event(&info.sender)))
}
