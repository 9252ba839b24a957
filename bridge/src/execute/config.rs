//! Fee and authority configuration handlers.
//!
//! This module handles:
//! - Fee rate
//! - Fee receiver rotation
//! - Validator rotation (single step, no confirmation)
//! - Native currency decimal precision

use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use crate::authority::ensure_validator;
use crate::error::ContractError;
use crate::events::{BridgeEvent, FeeField};
use crate::state::CONFIG;

/// Replace the bridging fee.
pub fn execute_set_fee(
    deps: DepsMut,
    info: MessageInfo,
    fee: Uint128,
) -> Result<Response, ContractError> {
    ensure_validator(deps.as_ref(), &info)?;

    let mut config = CONFIG.load(deps.storage)?;
    config.fee = fee;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_fee")
        .add_event(
            BridgeEvent::FeeChanged {
                field: FeeField::Fee,
                value: fee.to_string(),
            }
            .into_event(&info.sender),
        ))
}

/// Replace the fee receiver.
pub fn execute_set_fee_receiver(
    deps: DepsMut,
    info: MessageInfo,
    fee_receiver: String,
) -> Result<Response, ContractError> {
    ensure_validator(deps.as_ref(), &info)?;

    let fee_receiver = deps.api.addr_validate(&fee_receiver)?;
    let mut config = CONFIG.load(deps.storage)?;
    config.fee_receiver = fee_receiver.clone();
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_fee_receiver")
        .add_event(
            BridgeEvent::FeeChanged {
                field: FeeField::FeeReceiver,
                value: fee_receiver.to_string(),
            }
            .into_event(&info.sender),
        ))
}

/// Hand the validator role to a new account.
///
/// Takes effect immediately: the caller loses every privilege once this
/// commits.
pub fn execute_set_validator(
    deps: DepsMut,
    info: MessageInfo,
    validator: String,
) -> Result<Response, ContractError> {
    ensure_validator(deps.as_ref(), &info)?;

    let validator = deps.api.addr_validate(&validator)?;
    let mut config = CONFIG.load(deps.storage)?;
    config.validator = validator.clone();
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_validator")
        .add_attribute("previous_validator", info.sender.as_str())
        .add_event(
            BridgeEvent::FeeChanged {
                field: FeeField::Validator,
                value: validator.to_string(),
            }
            .into_event(&info.sender),
        ))
}

/// Replace the native currency decimal precision.
pub fn execute_set_native_decimal(
    deps: DepsMut,
    info: MessageInfo,
    native_decimal: u8,
) -> Result<Response, ContractError> {
    ensure_validator(deps.as_ref(), &info)?;

    let mut config = CONFIG.load(deps.storage)?;
    config.native_decimal = native_decimal;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_native_decimal")
        .add_event(BridgeEvent::DecimalChanged { native_decimal }.into_event(&info.sender)))
}
