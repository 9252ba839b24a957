//! Asset transfer port.
//!
//! Moves balances in and out of the contract either as the native bank
//! denomination or as a registered CW20 token:
//!
//! | Operation        | Native                         | CW20                              |
//! |------------------|--------------------------------|-----------------------------------|
//! | receive          | funds attached to the call     | balance held (arrives by transfer) |
//! | send             | `BankMsg::Send`                | `Cw20ExecuteMsg::Transfer`        |
//!
//! Outbound transfers are dispatched as sub-messages with `reply_on_error`,
//! so a rejected transfer reaches `reply` and is reported as
//! `TransferFailed`. Zero amounts produce no message because both the bank
//! module and CW20 contracts reject empty transfers.

use common::{Asset, AssetInfo};
use cosmwasm_std::{Addr, Deps, Env, MessageInfo, QuerierWrapper, StdResult, SubMsg, Uint128};

use crate::error::ContractError;
use crate::state::{NATIVE_SWEEP_REPLY_ID, TOKEN_SWEEP_REPLY_ID};

pub struct AssetTransferPort<'a> {
    querier: QuerierWrapper<'a>,
    contract: Addr,
    native_denom: String,
}

impl<'a> AssetTransferPort<'a> {
    pub fn new(deps: Deps<'a>, env: &Env, native_denom: impl Into<String>) -> Self {
        Self {
            querier: deps.querier,
            contract: env.contract.address.clone(),
            native_denom: native_denom.into(),
        }
    }

    pub fn native_asset(&self) -> AssetInfo {
        AssetInfo::native(self.native_denom.clone())
    }

    /// Amount of native currency attached to this call.
    ///
    /// Any other denomination is rejected: a native sweep only moves
    /// `native_denom`, so foreign coins could never leave the contract.
    pub fn receive_native(&self, info: &MessageInfo) -> Result<Uint128, ContractError> {
        info.funds.iter().try_fold(Uint128::zero(), |acc, coin| {
            if coin.denom != self.native_denom {
                return Err(ContractError::InvalidFunds {
                    denom: coin.denom.clone(),
                });
            }
            Ok(acc + coin.amount)
        })
    }

    /// Native balance currently held by the contract.
    pub fn native_balance(&self) -> StdResult<Uint128> {
        self.native_asset()
            .query_balance(&self.querier, &self.contract)
    }

    /// Balance of `token` currently held by the contract.
    ///
    /// Tokens reach the contract through their own transfer mechanism, so
    /// receipt is only observable as holdings.
    pub fn receive_token(&self, token: &Addr) -> StdResult<Uint128> {
        AssetInfo::cw20(token.clone()).query_balance(&self.querier, &self.contract)
    }

    pub fn send_native(&self, to: &Addr, amount: Uint128) -> StdResult<Option<SubMsg>> {
        Self::send(
            Asset::new(self.native_asset(), amount),
            to,
            NATIVE_SWEEP_REPLY_ID,
        )
    }

    pub fn send_token(&self, token: &Addr, to: &Addr, amount: Uint128) -> StdResult<Option<SubMsg>> {
        Self::send(
            Asset::new(AssetInfo::cw20(token.clone()), amount),
            to,
            TOKEN_SWEEP_REPLY_ID,
        )
    }

    fn send(asset: Asset, to: &Addr, reply_id: u64) -> StdResult<Option<SubMsg>> {
        if asset.amount.is_zero() {
            return Ok(None);
        }
        let msg = asset.transfer_msg(to)?;
        Ok(Some(SubMsg::reply_on_error(msg, reply_id)))
    }
}
