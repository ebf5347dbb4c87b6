// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Page component tests against fake collaborators.


use std::time::Duration;

use cronos_wallet::currency::WEI_PER_CRO;
use cronos_wallet::gas::TRANSFER_LIMIT;
use cronos_wallet::{
    CallbackState, CallbackView, Error, FormState, HOME_ROUTE, LINK_TEXT,
    LOADING, Router, SEND_LABEL, SUBMITTED_LABEL, TransferView,
};
use mock::*;
use url::Url;

fn callback_url() -> Url {
    Url::parse("http://localhost:3000/callback?magic_credential=WyIweGY")
        .unwrap()
}

#[tokio::test]
async fn callback_navigates_home_after_login() {
    let auth = TestAuth::default();
    let mut view = CallbackView::new(&auth, Router::new("/callback"));

    assert_eq!(view.render(), LOADING);
    view.mount(&callback_url()).await;

    assert_eq!(auth.calls(), 1);
    assert_eq!(view.state(), CallbackState::Done);
    assert_eq!(view.navigator().history(), ["/callback", HOME_ROUTE]);
}

#[tokio::test]
async fn callback_navigates_home_after_failed_login() {
    let auth = TestAuth::failing();
    let mut view = CallbackView::new(&auth, Router::new("/callback"));

    view.mount(&callback_url()).await;

    assert_eq!(auth.calls(), 1);
    let router = view.into_navigator();
    assert_eq!(router.current(), HOME_ROUTE);
    assert_eq!(router.history().len(), 2);
}

#[tokio::test]
async fn callback_mounts_once() {
    let auth = TestAuth::default();
    let mut view = CallbackView::new(&auth, Router::new("/callback"));

    view.mount(&callback_url()).await;
    view.mount(&callback_url()).await;

    assert_eq!(auth.calls(), 1);
    assert_eq!(view.navigator().history().len(), 2);
}

#[tokio::test]
async fn empty_fields_never_reach_the_node() {
    let rpc = TestRpc::default();
    let balance = TestBalance::default();
    let mut view = TransferView::new(sender(), &rpc, &balance);

    assert_eq!(view.submit().await.unwrap(), None);

    view.set_to_address(RECEIVER);
    assert_eq!(view.submit().await.unwrap(), None);

    view.set_to_address("");
    view.set_amount("1");
    assert_eq!(view.submit().await.unwrap(), None);

    assert_eq!(view.form().state(), FormState::Idle);
    assert_eq!(view.form().amount(), "1");
    assert_eq!(rpc.gas_price_calls(), 0);
    assert!(rpc.sent().is_empty());
    assert!(balance.refreshed().is_empty());
}

#[tokio::test]
async fn form_disabled_while_transfer_pending() {
    let rpc = TestRpc::new(SendBehaviour::Hang);
    let balance = TestBalance::default();
    let mut view = TransferView::new(sender(), &rpc, &balance);

    view.set_to_address(RECEIVER);
    view.set_amount("0.5");

    let pending =
        tokio::time::timeout(Duration::from_millis(50), view.submit()).await;
    assert!(pending.is_err(), "transfer should still be pending");

    let render = view.render();
    assert!(render.inputs_disabled);
    assert!(render.button.disabled);
    assert_eq!(render.button.label, SUBMITTED_LABEL);
    assert_eq!(render.link, None);
    assert_eq!(rpc.sent().len(), 1);
    assert!(balance.refreshed().is_empty());
}

#[tokio::test]
async fn successful_transfer() {
    let rpc = TestRpc::default();
    let balance = TestBalance::default();
    let mut view = TransferView::new(sender(), &rpc, &balance);

    view.set_to_address(RECEIVER);
    view.set_amount("1");

    let hash = view.submit().await.unwrap();
    assert_eq!(hash, Some(tx_hash()));

    let render = view.render();
    assert_eq!(view.form().state(), FormState::Idle);
    assert_eq!(render.to_address, "");
    assert_eq!(render.amount, "");
    assert!(!render.inputs_disabled);
    assert_eq!(render.button.label, SEND_LABEL);

    let link = render.link.expect("link to the explorer");
    assert_eq!(link.text, LINK_TEXT);
    assert_eq!(link.href, format!("https://testnet.cronoscan.com/tx/{HASH}"));

    assert_eq!(balance.refreshed(), vec![sender()]);
}

#[tokio::test]
async fn transfer_request_is_scaled_to_wei() {
    let rpc = TestRpc::default();
    let balance = TestBalance::default();
    let mut view = TransferView::new(sender(), &rpc, &balance);

    view.set_to_address(RECEIVER);
    view.set_amount("1");
    view.submit().await.unwrap();

    let sent = rpc.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(rpc.gas_price_calls(), 1);

    let request = &sent[0];
    assert_eq!(request.from, sender());
    assert_eq!(request.to.to_string(), RECEIVER);
    assert_eq!(request.value, WEI_PER_CRO);
    assert_eq!(request.value, 1_000_000_000_000_000_000);
    assert_eq!(request.gas.limit, TRANSFER_LIMIT);
    assert_eq!(request.gas.price, GAS_PRICE);
}

#[tokio::test]
async fn rejected_transfer_leaves_form_submitting() {
    let rpc = TestRpc::new(SendBehaviour::Reject);
    let balance = TestBalance::default();
    let mut view = TransferView::new(sender(), &rpc, &balance);

    view.set_to_address(RECEIVER);
    view.set_amount("2");

    let res = view.submit().await;
    assert!(matches!(res, Err(Error::Rpc { code: -32000, .. })));

    assert!(view.form().is_submitting());
    assert_eq!(view.form().tx_hash(), None);
    assert_eq!(view.render().button.label, SUBMITTED_LABEL);
    assert!(balance.refreshed().is_empty());

    // the button stays disabled
    assert_eq!(view.submit().await.unwrap(), None);
    assert_eq!(rpc.sent().len(), 1);
}

#[tokio::test]
async fn malformed_fields_fail_before_the_node() {
    let rpc = TestRpc::default();
    let balance = TestBalance::default();

    let mut view = TransferView::new(sender(), &rpc, &balance);
    view.set_to_address("not-an-address");
    view.set_amount("1");
    assert!(matches!(view.submit().await, Err(Error::BadAddress)));

    let mut view = TransferView::new(sender(), &rpc, &balance);
    view.set_to_address(RECEIVER);
    view.set_amount("1.2.3");
    assert!(matches!(view.submit().await, Err(Error::InvalidAmount(_))));

    assert_eq!(rpc.gas_price_calls(), 0);
    assert!(rpc.sent().is_empty());
}

#[tokio::test]
async fn custom_explorer() {
    let rpc = TestRpc::default();
    let balance = TestBalance::default();
    let mut view = TransferView::new(sender(), &rpc, &balance)
        .with_explorer("https://explorer.cronos.org/testnet/tx/");

    view.set_to_address(RECEIVER);
    view.set_amount("0.1");
    view.submit().await.unwrap();

    let link = view.render().link.unwrap();
    assert_eq!(
        link.href,
        format!("https://explorer.cronos.org/testnet/tx/{HASH}")
    );
}
