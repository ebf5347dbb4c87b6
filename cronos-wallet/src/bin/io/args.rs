// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::path::PathBuf;

use clap::Parser;
use cronos_wallet::Address;

use crate::Command;
use crate::settings::{LogFormat, LogLevel};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Log in with a passwordless wallet and send CRO on the Cronos testnet."
)]
pub(crate) struct WalletArgs {
    /// Directory to store user data [default: `$HOME/.cronos/cronos-wallet`]
    #[arg(short, long)]
    pub profile: Option<PathBuf>,

    /// Network to connect to
    #[arg(short, long)]
    pub network: Option<String>,

    /// The JSON-RPC endpoint fully qualified URL
    #[arg(long)]
    pub rpc: Option<String>,

    /// The authentication provider login endpoint
    #[arg(long)]
    pub auth: Option<String>,

    /// Account sending the transfers [default: first provider account]
    #[arg(long, env = "CRONOS_WALLET_ADDRESS")]
    pub address: Option<Address>,

    /// Wait for transfers to be included in a block [default: from config]
    #[arg(long, value_name = "BOOL")]
    pub wait_for_tx: Option<bool>,

    /// Output log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Logging output type
    #[arg(long, value_enum, default_value_t = LogFormat::Coloured)]
    pub log_type: LogFormat,

    /// Command
    #[command(subcommand)]
    pub command: Option<Command>,
}
