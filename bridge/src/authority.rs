//! Authorization for privileged operations.
//!
//! Handlers never compare addresses themselves; they ask an
//! [`AuthorityPolicy`] whether the sender may act. The deployed policy is
//! [`SingleKeyAuthority`]: exactly one validator address, read from config at
//! call time, so a validator that has just rotated itself out is rejected on
//! its very next call.

use cosmwasm_std::{Addr, Deps, MessageInfo};

use crate::error::ContractError;
use crate::state::CONFIG;

pub trait AuthorityPolicy {
    /// Succeeds iff `sender` may perform privileged operations right now.
    fn authorize(&self, deps: Deps, sender: &Addr) -> Result<(), ContractError>;
}

/// The validator stored in config is the only authority.
#[derive(Clone, Copy, Debug, Default)]
pub struct SingleKeyAuthority;

impl AuthorityPolicy for SingleKeyAuthority {
    fn authorize(&self, deps: Deps, sender: &Addr) -> Result<(), ContractError> {
        let config = CONFIG.load(deps.storage)?;
        if *sender != config.validator {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }
}

/// Policy used by every gated handler.
pub const AUTHORITY: SingleKeyAuthority = SingleKeyAuthority;

pub fn ensure_validator(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    AUTHORITY.authorize(deps, &info.sender)
}
