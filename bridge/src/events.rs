//! Audit events emitted by the bridge.
//!
//! Every state change produces exactly one [`BridgeEvent`]. Events are never
//! read back by the contract; they exist for relayers and indexers. Each one
//! renders to a wasm event carrying the acting account, and where relevant
//! the asset and amount moved.
//!
//! Fee, fee receiver and validator changes share the `fee_changed` kind; the
//! `field` attribute says which value changed.

use cosmwasm_std::{Addr, Event, Uint128};

use crate::msg::Attestation;

pub const ASSET_RECEIVED: &str = "asset_received";
pub const SUPPORTED_CHAIN_CHANGED: &str = "supported_chain_changed";
pub const FEE_CHANGED: &str = "fee_changed";
pub const DECIMAL_CHANGED: &str = "decimal_changed";
pub const TOKEN_INCLUDED: &str = "token_included";
pub const TOKEN_EXCLUDED: &str = "token_excluded";
pub const NATIVE_WITHDRAWN: &str = "native_withdrawn";
pub const TOKEN_WITHDRAWN: &str = "token_withdrawn";

/// Which config value a `fee_changed` event refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeeField {
    Fee,
    FeeReceiver,
    Validator,
}

impl FeeField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeeField::Fee => "fee",
            FeeField::FeeReceiver => "fee_receiver",
            FeeField::Validator => "validator",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum BridgeEvent {
    AssetReceived {
        sender: Addr,
        denom: String,
        amount: Uint128,
    },
    SupportedChainChanged {
        chain_id: u64,
        supported: bool,
    },
    FeeChanged {
        field: FeeField,
        value: String,
    },
    DecimalChanged {
        native_decimal: u8,
    },
    TokenIncluded {
        symbol: String,
        token_address: Addr,
    },
    TokenExcluded {
        symbol: String,
    },
    NativeWithdrawn {
        to: Addr,
        denom: String,
        amount: Uint128,
        attestation: Option<Attestation>,
    },
    TokenWithdrawn {
        token_address: Addr,
        to: Addr,
        amount: Uint128,
        attestation: Option<Attestation>,
    },
}

impl BridgeEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            BridgeEvent::AssetReceived { .. } => ASSET_RECEIVED,
            BridgeEvent::SupportedChainChanged { .. } => SUPPORTED_CHAIN_CHANGED,
            BridgeEvent::FeeChanged { .. } => FEE_CHANGED,
            BridgeEvent::DecimalChanged { .. } => DECIMAL_CHANGED,
            BridgeEvent::TokenIncluded { .. } => TOKEN_INCLUDED,
            BridgeEvent::TokenExcluded { .. } => TOKEN_EXCLUDED,
            BridgeEvent::NativeWithdrawn { .. } => NATIVE_WITHDRAWN,
            BridgeEvent::TokenWithdrawn { .. } => TOKEN_WITHDRAWN,
        }
    }

    /// Render as a wasm event attributed to `actor`.
    pub fn into_event(self, actor: &Addr) -> Event {
        let event = Event::new(self.kind()).add_attribute("actor", actor.as_str());

        match self {
            BridgeEvent::AssetReceived {
                sender,
                denom,
                amount,
            } => event
                .add_attribute("sender", sender)
                .add_attribute("asset", denom)
                .add_attribute("amount", amount),
            BridgeEvent::SupportedChainChanged {
                chain_id,
                supported,
            } => event
                .add_attribute("chain_id", chain_id.to_string())
                .add_attribute("supported", supported.to_string()),
            BridgeEvent::FeeChanged { field, value } => event
                .add_attribute("field", field.as_str())
                .add_attribute("value", value),
            BridgeEvent::DecimalChanged { native_decimal } => {
                event.add_attribute("native_decimal", native_decimal.to_string())
            }
            BridgeEvent::TokenIncluded {
                symbol,
                token_address,
            } => event
                .add_attribute("symbol", symbol)
                .add_attribute("token_address", token_address),
            BridgeEvent::TokenExcluded { symbol } => event.add_attribute("symbol", symbol),
            BridgeEvent::NativeWithdrawn {
                to,
                denom,
                amount,
                attestation,
            } => with_attestation(
                event
                    .add_attribute("to", to)
                    .add_attribute("asset", denom)
                    .add_attribute("amount", amount),
                attestation,
            ),
            BridgeEvent::TokenWithdrawn {
                token_address,
                to,
                amount,
                attestation,
            } => with_attestation(
                event
                    .add_attribute("token_address", token_address)
                    .add_attribute("to", to)
                    .add_attribute("amount", amount),
                attestation,
            ),
        }
    }
}

fn with_attestation(event: Event, attestation: Option<Attestation>) -> Event {
    match attestation {
        Some(a) => event
            .add_attribute("src_chain_id", a.src_chain_id.to_string())
            .add_attribute("deposit_ref", a.deposit_ref),
        None => event,
    }
}
