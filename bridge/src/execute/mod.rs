//! Execute handlers for the custody bridge contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `registry` - Chain allowlist and token registry
//! - `config` - Fee, fee receiver, validator and native decimal
//! - `withdraw` - Native receipt and sweep withdrawals

mod config;
mod registry;
mod withdraw;

pub use config::*;
pub use registry::*;
pub use withdraw::*;
