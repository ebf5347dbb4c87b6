// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::warn;

use crate::currency::{Cro, Wei};
use crate::{Address, Error, RpcHttpClient};

/// Refreshes the balance shown for an account.
///
/// The transfer view calls it once a submission completed.
#[async_trait]
pub trait BalanceRefresher: Send + Sync {
    /// Fetch the balance of the given address again
    async fn fetch_balance(&self, address: &Address);
}

#[async_trait]
impl<T: BalanceRefresher + ?Sized> BalanceRefresher for &T {
    async fn fetch_balance(&self, address: &Address) {
        (**self).fetch_balance(address).await
    }
}

#[async_trait]
impl<T: BalanceRefresher + ?Sized> BalanceRefresher for Arc<T> {
    async fn fetch_balance(&self, address: &Address) {
        (**self).fetch_balance(address).await
    }
}

/// Where account balances are read from
#[async_trait]
pub trait BalanceSource: Send + Sync {
    /// Latest balance of the account in [Wei]
    async fn balance(&self, address: &Address) -> Result<Wei, Error>;
}

#[async_trait]
impl BalanceSource for RpcHttpClient {
    async fn balance(&self, address: &Address) -> Result<Wei, Error> {
        RpcHttpClient::balance(self, address).await
    }
}

/// Balance shown next to the transfer form.
///
/// Keeps the last value fetched so the page can be rendered at any time.
pub struct BalanceDisplay<S> {
    source: S,
    last: RwLock<Option<Cro>>,
}

impl<S: BalanceSource> BalanceDisplay<S> {
    /// A display with no balance fetched yet
    pub fn new(source: S) -> Self {
        Self {
            source,
            last: RwLock::new(None),
        }
    }

    /// Last known balance, if any
    pub async fn balance(&self) -> Option<Cro> {
        *self.last.read().await
    }

    /// Text to display for the balance
    pub async fn render(&self) -> String {
        match self.balance().await {
            Some(balance) => format!("{balance} CRO"),
            None => String::from("..."),
        }
    }
}

#[async_trait]
impl<S: BalanceSource> BalanceRefresher for BalanceDisplay<S> {
    async fn fetch_balance(&self, address: &Address) {
        match self.source.balance(address).await {
            Ok(wei) => *self.last.write().await = Some(Cro::from(wei)),
            // keep showing the previous value
            Err(err) => warn!(%address, "unable to fetch balance: {err}"),
        }
    }
}
