//! Integration tests for the chain allowlist.
//!
//! Tests enabling and disabling remote chains, repeated toggles, queries for
//! never-configured ids, and enumeration of configured chains.

use cosmwasm_std::{Addr, Event};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use bridge::msg::{ChainResponse, ChainsResponse, ExecuteMsg, InstantiateMsg, QueryMsg};

// ============================================================================
// Test Setup
// ============================================================================

fn contract_bridge() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        bridge::contract::execute,
        bridge::contract::instantiate,
        bridge::contract::query,
    )
    .with_reply(bridge::contract::reply);
    Box::new(contract)
}

fn setup() -> (App, Addr) {
    let mut app = App::default();
    let validator = Addr::unchecked("terra1validator");

    let code_id = app.store_code(contract_bridge());
    let contract_addr = app
        .instantiate_contract(
            code_id,
            validator.clone(),
            &InstantiateMsg {
                fee_receiver: "terra1feereceiver".to_string(),
                native_denom: "uluna".to_string(),
                validator: None,
                fee: None,
                native_decimal: None,
            },
            &[],
            "custody-bridge",
            None,
        )
        .unwrap();

    (app, contract_addr)
}

fn set_chain(app: &mut App, contract_addr: &Addr, chain_id: u64, supported: bool) -> AppResponse {
    app.execute_contract(
        Addr::unchecked("terra1validator"),
        contract_addr.clone(),
        &ExecuteMsg::SetChainSupported {
            chain_id,
            supported,
        },
        &[],
    )
    .unwrap()
}

fn chain_event(res: &AppResponse) -> Option<&Event> {
    res.events
        .iter()
        .find(|e| e.ty == "wasm-supported_chain_changed")
}

fn event_attr(event: &Event, key: &str) -> Option<String> {
    event
        .attributes
        .iter()
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}

fn is_active(app: &App, contract_addr: &Addr, chain_id: u64) -> bool {
    let res: ChainResponse = app
        .wrap()
        .query_wasm_smart(contract_addr, &QueryMsg::ChainActive { chain_id })
        .unwrap();
    assert_eq!(res.chain_id, chain_id);
    res.active
}

// ============================================================================
// Enable / Disable
// ============================================================================

#[test]
fn test_add_supported_chain() {
    let (mut app, contract_addr) = setup();

    let res = set_chain(&mut app, &contract_addr, 1, true);
    let event = chain_event(&res).expect("supported_chain_changed event");
    assert_eq!(event_attr(event, "chain_id").as_deref(), Some("1"));
    assert_eq!(event_attr(event, "supported").as_deref(), Some("true"));

    assert!(is_active(&app, &contract_addr, 1));
}

#[test]
fn test_remove_supported_chain() {
    let (mut app, contract_addr) = setup();

    set_chain(&mut app, &contract_addr, 1, true);
    let res = set_chain(&mut app, &contract_addr, 1, false);
    let event = chain_event(&res).expect("supported_chain_changed event");
    assert_eq!(event_attr(event, "supported").as_deref(), Some("false"));

    assert!(!is_active(&app, &contract_addr, 1));
}

#[test]
fn test_disable_never_enabled_chain_is_not_an_error() {
    let (mut app, contract_addr) = setup();

    let res = set_chain(&mut app, &contract_addr, 42, false);
    assert!(chain_event(&res).is_some());
    assert!(!is_active(&app, &contract_addr, 42));
}

#[test]
fn test_enable_twice_is_idempotent_and_logged_twice() {
    let (mut app, contract_addr) = setup();

    let first = set_chain(&mut app, &contract_addr, 56, true);
    let second = set_chain(&mut app, &contract_addr, 56, true);

    assert!(chain_event(&first).is_some());
    assert!(chain_event(&second).is_some());
    assert!(is_active(&app, &contract_addr, 56));
}

#[test]
fn test_unknown_chain_is_inactive() {
    let (app, contract_addr) = setup();
    assert!(!is_active(&app, &contract_addr, 0));
    assert!(!is_active(&app, &contract_addr, u64::MAX));
}

#[test]
fn test_chains_are_independent() {
    let (mut app, contract_addr) = setup();

    set_chain(&mut app, &contract_addr, 1, true);
    set_chain(&mut app, &contract_addr, 56, true);
    set_chain(&mut app, &contract_addr, 1, false);

    assert!(!is_active(&app, &contract_addr, 1));
    assert!(is_active(&app, &contract_addr, 56));
}

// ============================================================================
// Enumeration
// ============================================================================

#[test]
fn test_query_chains_paginated() {
    let (mut app, contract_addr) = setup();

    for chain_id in [137u64, 1, 56, 10] {
        set_chain(&mut app, &contract_addr, chain_id, true);
    }
    set_chain(&mut app, &contract_addr, 10, false);

    let res: ChainsResponse = app
        .wrap()
        .query_wasm_smart(
            &contract_addr,
            &QueryMsg::Chains {
                start_after: None,
                limit: None,
            },
        )
        .unwrap();
    let ids: Vec<(u64, bool)> = res.chains.iter().map(|c| (c.chain_id, c.active)).collect();
    assert_eq!(ids, vec![(1, true), (10, false), (56, true), (137, true)]);

    let res: ChainsResponse = app
        .wrap()
        .query_wasm_smart(
            &contract_addr,
            &QueryMsg::Chains {
                start_after: Some(10),
                limit: Some(1),
            },
        )
        .unwrap();
    assert_eq!(res.chains.len(), 1);
    assert_eq!(res.chains[0].chain_id, 56);
}

#[test]
fn test_non_validator_cannot_toggle_chain() {
    let (mut app, contract_addr) = setup();

    let res = app.execute_contract(
        Addr::unchecked("terra1client"),
        contract_addr.clone(),
        &ExecuteMsg::SetChainSupported {
            chain_id: 1,
            supported: true,
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Unauthorized"), "got: {}", err_str);
    assert!(!is_active(&app, &contract_addr, 1));
}
