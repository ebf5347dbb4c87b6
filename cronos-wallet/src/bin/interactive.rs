// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::fmt;

use cronos_wallet::{
    Address, BalanceDisplay, BalanceRefresher, Link, SUBMITTED_LABEL,
    TransferView,
};

use crate::command::sender;
use crate::io::{prompt, status};
use crate::settings::Settings;

/// Operations available from the home page
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum HomeOp {
    Send,
    Refresh,
    Exit,
}

impl fmt::Display for HomeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomeOp::Send => write!(f, "Send Transaction"),
            HomeOp::Refresh => write!(f, "Refresh balance"),
            HomeOp::Exit => write!(f, "Exit"),
        }
    }
}

/// Account lines shown on top of the home page
fn header(from: &Address, balance: &str) -> [String; 2] {
    [
        format!("{0: <20} {from}", "Public Address"),
        format!("{0: <20} {balance}", "Balance"),
    ]
}

/// Line pointing to the explorer page of the last transfer
fn link_line(link: &Link) -> String {
    format!("> {}: {}", link.text, link.href)
}

/// Run the interactive UX loop on the home page
pub(crate) async fn run_loop(settings: &Settings) -> anyhow::Result<()> {
    let rpc = settings.rpc_client(status::interactive)?;

    let from = match sender(&rpc, settings.address).await {
        Ok(from) => from,
        Err(err) => {
            tracing::debug!("no provider account available: {err}");
            prompt::request_sender_addr()?
        }
    };

    let display = BalanceDisplay::new(rpc.clone());
    let mut view = TransferView::new(from, &rpc, &display)
        .with_explorer(settings.explorer.as_str());

    display.fetch_balance(&from).await;

    loop {
        prompt::hide_cursor()?;

        println!();
        for line in header(&from, &display.render().await) {
            println!("{line}");
        }
        println!();

        prompt::show_cursor()?;

        let ops = vec![HomeOp::Send, HomeOp::Refresh, HomeOp::Exit];
        match prompt::select("What would you like to do?", ops)? {
            HomeOp::Send => {
                view.set_to_address(prompt::request_rcvr_addr()?);
                view.set_amount(prompt::request_token_amt()?);

                println!("{SUBMITTED_LABEL}");

                prompt::hide_cursor()?;
                let result = view.submit().await;
                prompt::show_cursor()?;

                let hash = match result? {
                    Some(hash) => hash,
                    None => continue,
                };

                let render = view.render();
                println!("\r> Transaction sent: {hash}");
                if let Some(link) = render.link {
                    println!("{}", link_line(&link));
                    prompt::launch_explorer(link.href)?;
                }
            }
            HomeOp::Refresh => display.fetch_balance(&from).await,
            HomeOp::Exit => return Ok(()),
        }
    }
}
