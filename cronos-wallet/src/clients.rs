// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use url::Url;

use crate::auth::Session;
use crate::currency::Wei;
use crate::gas::Gas;
use crate::rpc::TxHash;
use crate::{Address, Error};

/// The hosted authentication provider.
///
/// Credential verification happens on the provider side, implementors only
/// hand over what the callback page received.
#[async_trait]
pub trait AuthClient: Send + Sync {
    /// Completes a pending login using the credential embedded in the
    /// current page URL
    async fn login_with_credential(
        &self,
        page_url: &Url,
    ) -> Result<Session, Error>;
}

/// The blockchain node, or provider, able to sign for the sender account.
#[async_trait]
pub trait RpcClient: Send + Sync {
    /// Current network gas price in [Wei]
    async fn gas_price(&self) -> Result<Wei, Error>;

    /// Requests a value transfer and resolves with its transaction hash
    async fn send_transaction(
        &self,
        request: &TransferRequest,
    ) -> Result<TxHash, Error>;
}

#[async_trait]
impl<T: AuthClient + ?Sized> AuthClient for &T {
    async fn login_with_credential(
        &self,
        page_url: &Url,
    ) -> Result<Session, Error> {
        (**self).login_with_credential(page_url).await
    }
}

#[async_trait]
impl<T: RpcClient + ?Sized> RpcClient for &T {
    async fn gas_price(&self) -> Result<Wei, Error> {
        (**self).gas_price().await
    }

    async fn send_transaction(
        &self,
        request: &TransferRequest,
    ) -> Result<TxHash, Error> {
        (**self).send_transaction(request).await
    }
}

#[async_trait]
impl<T: RpcClient + ?Sized> RpcClient for Arc<T> {
    async fn gas_price(&self) -> Result<Wei, Error> {
        (**self).gas_price().await
    }

    async fn send_transaction(
        &self,
        request: &TransferRequest,
    ) -> Result<TxHash, Error> {
        (**self).send_transaction(request).await
    }
}

/// A plain value transfer between two accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    /// Sender account, its key is held by the provider
    pub from: Address,
    /// Receiver account
    pub to: Address,
    /// Amount to transfer in [Wei]
    pub value: Wei,
    /// Gas price and limit
    pub gas: Gas,
}

/// JSON-RPC `eth_sendTransaction` call object
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CallObject {
    from: Address,
    to: Address,
    value: String,
    gas: String,
    gas_price: String,
}

impl From<&TransferRequest> for CallObject {
    fn from(request: &TransferRequest) -> Self {
        Self {
            from: request.from,
            to: request.to,
            value: format!("{:#x}", request.value),
            gas: format!("{:#x}", request.gas.limit),
            gas_price: format!("{:#x}", request.gas.price),
        }
    }
}
