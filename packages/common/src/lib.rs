//! Common - Shared Types and Utilities for Custody Bridge Contracts
//!
//! This package provides the asset abstraction used by the bridge contract to
//! move native bank denominations and CW20 tokens through one interface.

pub mod asset;

pub use asset::{Asset, AssetInfo};
