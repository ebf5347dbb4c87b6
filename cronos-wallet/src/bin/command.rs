// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::fmt;

use clap::Subcommand;
use cronos_wallet::currency::Cro;
use cronos_wallet::{
    Address, AuthHttpClient, BalanceDisplay, CallbackView, Error, LOADING,
    Router, RpcHttpClient, TransferView, TxHash,
};
use url::Url;

use crate::io::status;
use crate::settings::Settings;

/// Commands that can be run against the Cronos wallet
#[derive(PartialEq, Eq, Clone, Subcommand, Debug)]
pub(crate) enum Command {
    /// Complete a passwordless login from the callback URL
    Login {
        /// Callback URL carrying the `magic_credential` query parameter
        url: Url,
    },

    /// Check the CRO balance of an account
    Balance {
        /// Address [default: sender account]
        address: Option<Address>,
    },

    /// Send CRO through the network
    Send {
        /// Address from which to send CRO [default: sender account]
        #[arg(long)]
        from: Option<Address>,

        /// Receiver address
        #[arg(long)]
        to: Option<String>,

        /// Amount of CRO to send
        #[arg(long)]
        amount: Option<String>,

        /// Wait for the transfer to be included in a block, even when the
        /// settings do not
        #[arg(long)]
        wait: bool,
    },

    /// Show the current settings
    Settings,
}

impl Command {
    /// Runs the command with the provided settings
    pub async fn run(self, settings: &Settings) -> anyhow::Result<RunResult> {
        match self {
            Command::Login { url } => {
                println!("{LOADING}");

                let auth = AuthHttpClient::new(settings.auth.clone())?;
                let mut view =
                    CallbackView::new(auth, Router::new(url.path()));
                view.mount(&url).await;

                let router = view.into_navigator();
                Ok(RunResult::Navigated(router.current().to_string()))
            }
            Command::Balance { address } => {
                let rpc = settings.rpc_client(status::headless)?;
                let address = match address {
                    Some(address) => address,
                    None => sender(&rpc, settings.address).await?,
                };

                let balance = rpc.balance(&address).await?;
                Ok(RunResult::Balance(Cro::from(balance)))
            }
            Command::Send {
                from,
                to,
                amount,
                wait,
            } => {
                let rpc = settings
                    .rpc_client(status::headless)?
                    .wait_for_tx(settings.wait_for_tx || wait);
                check_chain(&rpc, settings.chain_id).await?;

                let from = match from.or(settings.address) {
                    Some(from) => from,
                    None => sender(&rpc, None).await?,
                };

                let display = BalanceDisplay::new(rpc.clone());
                let mut view = TransferView::new(from, &rpc, &display)
                    .with_explorer(settings.explorer.as_str());
                view.set_to_address(to.unwrap_or_default());
                view.set_amount(amount.unwrap_or_default());

                match view.submit().await? {
                    Some(hash) => {
                        let url = view.tx_url(&hash);
                        Ok(RunResult::Tx { hash, url })
                    }
                    None => Err(anyhow::anyhow!(
                        "both a receiver address and an amount are required"
                    )),
                }
            }
            Command::Settings => Ok(RunResult::Settings),
        }
    }
}

/// Resolve the account sending the transfers.
///
/// Falls back to the first account the provider can sign for.
pub(crate) async fn sender(
    rpc: &RpcHttpClient,
    configured: Option<Address>,
) -> Result<Address, Error> {
    if let Some(address) = configured {
        return Ok(address);
    }

    rpc.accounts()
        .await?
        .into_iter()
        .next()
        .ok_or(Error::BadAddress)
}

/// Refuse to transfer on a chain other than the configured one
async fn check_chain(
    rpc: &RpcHttpClient,
    expected: Option<u64>,
) -> Result<(), Error> {
    let Some(expected) = expected else {
        return Ok(());
    };

    let found = rpc.chain_id().await?;
    if found != expected {
        return Err(Error::WrongChain { expected, found });
    }
    Ok(())
}

/// Possible results of running a command
#[derive(Debug)]
pub(crate) enum RunResult {
    Navigated(String),
    Balance(Cro),
    Tx { hash: TxHash, url: String },
    Settings,
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use RunResult::*;
        match self {
            Navigated(route) => write!(f, "> Navigated to {route}"),
            Balance(balance) => write!(f, "> Balance: {balance} CRO"),
            Tx { hash, url } => {
                writeln!(f, "> Transaction sent: {hash}")?;
                write!(f, "> {url}")
            }
            Settings => Ok(()),
        }
    }
}
