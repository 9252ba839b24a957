//! Native receipt and sweep withdrawal handlers.
//!
//! This module handles:
//! - `ReceiveNative` - anyone deposits native currency
//! - `WithdrawNative` - validator sweeps the whole native balance
//! - `WithdrawToken` - validator sweeps the whole balance of one CW20 token
//!
//! Withdrawals always move everything the contract holds of the asset.
//! There is no partial withdrawal and no per-user accounting; deciding which
//! remote deposit justifies a sweep happens off-chain. An optional
//! attestation records that decision and must name an active chain.

use cosmwasm_std::{Deps, DepsMut, Env, MessageInfo, Response};

use crate::authority::ensure_validator;
use crate::error::ContractError;
use crate::events::BridgeEvent;
use crate::msg::Attestation;
use crate::state::{is_chain_active, CONFIG};
use crate::transfer::AssetTransferPort;

// ============================================================================
// Native Receipt
// ============================================================================

/// Accept native currency from any account.
pub fn execute_receive_native(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let port = AssetTransferPort::new(deps.as_ref(), &env, &config.native_denom);
    let amount = port.receive_native(&info)?;

    Ok(Response::new()
        .add_attribute("action", "receive_native")
        .add_event(
            BridgeEvent::AssetReceived {
                sender: info.sender.clone(),
                denom: config.native_denom,
                amount,
            }
            .into_event(&info.sender),
        ))
}

// ============================================================================
// Sweep Withdrawals
// ============================================================================

/// Send the entire native balance to `to`.
pub fn execute_withdraw_native(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    to: String,
    attestation: Option<Attestation>,
) -> Result<Response, ContractError> {
    ensure_validator(deps.as_ref(), &info)?;
    check_attestation(deps.as_ref(), attestation.as_ref())?;

    let to = deps.api.addr_validate(&to)?;
    let config = CONFIG.load(deps.storage)?;
    let port = AssetTransferPort::new(deps.as_ref(), &env, &config.native_denom);

    let amount = port.native_balance()?;
    let transfer = port.send_native(&to, amount)?;
    if transfer.is_none() {
        deps.api.debug("withdraw_native: no native balance held, nothing sent");
    }

    Ok(Response::new()
        .add_submessages(transfer)
        .add_attribute("action", "withdraw_native")
        .add_event(
            BridgeEvent::NativeWithdrawn {
                to,
                denom: config.native_denom,
                amount,
                attestation,
            }
            .into_event(&info.sender),
        ))
}

/// Send the entire balance of `token_address` held by the contract to `to`.
pub fn execute_withdraw_token(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token_address: String,
    to: String,
    attestation: Option<Attestation>,
) -> Result<Response, ContractError> {
    ensure_validator(deps.as_ref(), &info)?;
    check_attestation(deps.as_ref(), attestation.as_ref())?;

    let token_address = deps.api.addr_validate(&token_address)?;
    let to = deps.api.addr_validate(&to)?;
    let config = CONFIG.load(deps.storage)?;
    let port = AssetTransferPort::new(deps.as_ref(), &env, &config.native_denom);

    let amount = port.receive_token(&token_address)?;
    let transfer = port.send_token(&token_address, &to, amount)?;
    if transfer.is_none() {
        deps.api.debug("withdraw_token: no token balance held, nothing sent");
    }

    Ok(Response::new()
        .add_submessages(transfer)
        .add_attribute("action", "withdraw_token")
        .add_event(
            BridgeEvent::TokenWithdrawn {
                token_address,
                to,
                amount,
                attestation,
            }
            .into_event(&info.sender),
        ))
}

/// An attestation, when given, must come from an active chain.
fn check_attestation(deps: Deps, attestation: Option<&Attestation>) -> Result<(), ContractError> {
    if let Some(attestation) = attestation {
        if !is_chain_active(deps.storage, attestation.src_chain_id)? {
            return Err(ContractError::ChainNotSupported {
                chain_id: attestation.src_chain_id,
            });
        }
    }
    Ok(())
}
