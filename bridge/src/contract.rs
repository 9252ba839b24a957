//! Custody Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//!
//! `reply` only sees failed sweep transfers and turns them into
//! `TransferFailed`, which aborts the whole withdrawal.

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult, SubMsgResult, Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_exclude_token, execute_include_token, execute_receive_native,
    execute_set_chain_supported, execute_set_fee, execute_set_fee_receiver,
    execute_set_native_decimal, execute_set_validator, execute_withdraw_native,
    execute_withdraw_token,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_chain_active, query_chains, query_config, query_fee, query_fee_receiver,
    query_native_balance, query_native_decimal, query_token_address, query_token_balance,
    query_tokens, query_validator,
};
use crate::state::{
    Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_NATIVE_DECIMAL,
    NATIVE_SWEEP_REPLY_ID, TOKEN_SWEEP_REPLY_ID,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.native_denom.trim().is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: "native_denom must not be empty".to_string(),
        });
    }

    let fee_receiver = deps.api.addr_validate(&msg.fee_receiver)?;
    let validator = match msg.validator {
        Some(validator) => deps.api.addr_validate(&validator)?,
        None => info.sender,
    };

    let config = Config {
        validator,
        fee_receiver,
        fee: msg.fee.unwrap_or_else(Uint128::zero),
        native_decimal: msg.native_decimal.unwrap_or(DEFAULT_NATIVE_DECIMAL),
        native_denom: msg.native_denom,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("validator", config.validator)
        .add_attribute("fee_receiver", config.fee_receiver)
        .add_attribute("fee", config.fee)
        .add_attribute("native_decimal", config.native_decimal.to_string())
        .add_attribute("native_denom", config.native_denom))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Native receipt (anyone)
        ExecuteMsg::ReceiveNative {} => execute_receive_native(deps, env, info),

        // Chain allowlist
        ExecuteMsg::SetChainSupported {
            chain_id,
            supported,
        } => execute_set_chain_supported(deps, info, chain_id, supported),

        // Token registry
        ExecuteMsg::IncludeToken {
            symbol,
            token_address,
        } => execute_include_token(deps, info, symbol, token_address),
        ExecuteMsg::ExcludeToken { symbol } => execute_exclude_token(deps, info, symbol),

        // Fee & authority
        ExecuteMsg::SetFee { fee } => execute_set_fee(deps, info, fee),
        ExecuteMsg::SetFeeReceiver { fee_receiver } => {
            execute_set_fee_receiver(deps, info, fee_receiver)
        }
        ExecuteMsg::SetValidator { validator } => execute_set_validator(deps, info, validator),
        ExecuteMsg::SetNativeDecimal { native_decimal } => {
            execute_set_native_decimal(deps, info, native_decimal)
        }

        // Sweep withdrawals
        ExecuteMsg::WithdrawNative { to, attestation } => {
            execute_withdraw_native(deps, env, info, to, attestation)
        }
        ExecuteMsg::WithdrawToken {
            token_address,
            to,
            attestation,
        } => execute_withdraw_token(deps, env, info, token_address, to, attestation),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Validator {} => to_json_binary(&query_validator(deps)?),
        QueryMsg::Fee {} => to_json_binary(&query_fee(deps)?),
        QueryMsg::FeeReceiver {} => to_json_binary(&query_fee_receiver(deps)?),
        QueryMsg::NativeDecimal {} => to_json_binary(&query_native_decimal(deps)?),
        QueryMsg::ChainActive { chain_id } => to_json_binary(&query_chain_active(deps, chain_id)?),
        QueryMsg::Chains { start_after, limit } => {
            to_json_binary(&query_chains(deps, start_after, limit)?)
        }
        QueryMsg::TokenAddress { symbol } => to_json_binary(&query_token_address(deps, symbol)?),
        QueryMsg::Tokens { start_after, limit } => {
            to_json_binary(&query_tokens(deps, start_after, limit)?)
        }
        QueryMsg::NativeBalance {} => to_json_binary(&query_native_balance(deps, env)?),
        QueryMsg::TokenBalance { token_address } => {
            to_json_binary(&query_token_balance(deps, env, token_address)?)
        }
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    let asset_kind = match msg.id {
        NATIVE_SWEEP_REPLY_ID => "native",
        TOKEN_SWEEP_REPLY_ID => "token",
        id => return Err(ContractError::UnknownReplyId { id }),
    };

    match msg.result {
        SubMsgResult::Err(err) => {
            deps.api
                .debug(&format!("{} sweep transfer rejected: {}", asset_kind, err));
            Err(ContractError::TransferFailed {
                reason: format!("{} transfer rejected: {}", asset_kind, err),
            })
        }
        // Sweeps are dispatched with reply_on_error, success never lands here
        SubMsgResult::Ok(_) => Ok(Response::new()),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
