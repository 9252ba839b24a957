//! Custody Bridge Contract - Single-Validator Cross-Chain Custody
//!
//! This contract escrows native currency and CW20 tokens for cross-chain
//! transfers and lets one privileged validator release them.
//!
//! # Inbound
//! - Anyone deposits native currency with `ReceiveNative`
//! - Tokens arrive by plain CW20 `Transfer` to the contract address
//!
//! # Outbound
//! - The validator sweeps the entire native balance (`WithdrawNative`) or the
//!   entire balance of one token (`WithdrawToken`) to a recipient, after
//!   observing the matching deposit on a remote chain
//!
//! # Administration
//! - Chain allowlist and symbol to token registry
//! - Fee, fee receiver, native decimal and validator rotation
//!
//! Every privileged call is checked by the [`authority::AuthorityPolicy`]
//! in effect; every state change emits an event from [`events`].

pub mod authority;
pub mod contract;
pub mod error;
pub mod events;
mod execute;
pub mod msg;
mod query;
pub mod state;
pub mod transfer;

pub use crate::error::ContractError;
pub use crate::msg::Attestation;
