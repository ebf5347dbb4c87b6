// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! # Cronos Wallet Lib
//!
//! The `cronos_wallet` library wires a passwordless login and a simple value
//! transfer form on top of two external collaborators: a hosted
//! authentication provider and an Ethereum compatible JSON-RPC endpoint.
//!
//! Clients build a [`CallbackView`] to complete a pending login and a
//! [`TransferView`] to send CRO from a provider managed account, injecting
//! the collaborators they want to talk to.

#![deny(missing_docs)]

mod address;
mod auth;
mod balance;
mod clients;
mod error;
mod router;
mod rpc;
mod view;

pub mod currency;
pub mod gas;

pub use address::Address;
pub use auth::{AuthHttpClient, Session, credential_from_url};
pub use balance::{BalanceDisplay, BalanceRefresher, BalanceSource};
pub use clients::{AuthClient, RpcClient, TransferRequest};
pub use error::Error;
pub use router::{Navigator, Router};
pub use rpc::{Receipt, RpcHttpClient, TxHash};
pub use view::{
    CallbackState, CallbackView, FormState, LINK_TEXT, LOADING, Link,
    SEND_LABEL, SUBMITTED_LABEL, SubmitButton, Submission, TransferForm,
    TransferRender, TransferView,
};

/// Query parameter carrying the login credential on the callback URL
pub const CREDENTIAL_PARAM: &str = "magic_credential";
/// Route the callback view navigates to once the login settles
pub const HOME_ROUTE: &str = "/";
/// Base URL for transactions on the Cronos testnet explorer
pub const EXPLORER_TX_URL: &str = "https://testnet.cronoscan.com/tx/";

