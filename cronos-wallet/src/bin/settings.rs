// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::fmt;
use std::path::PathBuf;

use cronos_wallet::{Address, EXPLORER_TX_URL, Error, RpcHttpClient};
use tracing::Level;
use url::Url;

use crate::config::Network;
use crate::io::WalletArgs;

#[derive(clap::ValueEnum, Debug, Clone)]
pub(crate) enum LogFormat {
    Json,
    Plain,
    Coloured,
}

#[derive(clap::ValueEnum, Debug, Clone)]
pub(crate) enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,
    /// Designates lower priority information.
    Debug,
    /// Designates useful information.
    Info,
    /// Designates hazardous situations.
    Warn,
    /// Designates very serious errors.
    Error,
}

#[derive(Debug)]
pub(crate) struct Logging {
    /// Max log level
    pub level: LogLevel,
    /// Log format
    pub format: LogFormat,
}

#[derive(Debug)]
pub(crate) struct Settings {
    pub(crate) rpc: Url,
    pub(crate) auth: Url,
    pub(crate) explorer: Url,
    pub(crate) wait_for_tx: bool,
    pub(crate) chain_id: Option<u64>,
    pub(crate) address: Option<Address>,

    pub(crate) logging: Logging,

    pub(crate) profile: PathBuf,
}

pub(crate) struct SettingsBuilder {
    profile: PathBuf,
    pub(crate) args: WalletArgs,
}

impl SettingsBuilder {
    pub fn profile(&self) -> &PathBuf {
        &self.profile
    }

    pub fn network(self, network: Network) -> Result<Settings, Error> {
        let args = self.args;

        let network = match (args.network, network.clone().network) {
            (Some(label), Some(mut networks)) => {
                // err if specified network is not in the list
                let r = networks.remove(&label);
                if r.is_none() {
                    return Err(Error::NetworkNotFound);
                }

                r
            }
            // err if no networks are specified but argument is
            (Some(_), None) => {
                return Err(Error::NetworkNotFound);
            }
            (_, _) => None,
        }
        .unwrap_or(network);

        // endpoints given as arguments must be valid, never fall back
        let rpc = match args.rpc.as_deref() {
            Some(value) => Url::parse(value)?,
            None => network.rpc,
        };

        let auth = match args.auth.as_deref() {
            Some(value) => Url::parse(value)?,
            None => network.auth,
        };

        let explorer = match network.explorer {
            Some(explorer) => explorer,
            None => Url::parse(EXPLORER_TX_URL)?,
        };

        let wait_for_tx =
            args.wait_for_tx.or(network.wait_for_tx).unwrap_or(false);

        let logging = Logging {
            level: args.log_level,
            format: args.log_type,
        };

        Ok(Settings {
            rpc,
            auth,
            explorer,
            wait_for_tx,
            chain_id: network.chain_id,
            address: args.address,
            logging,
            profile: self.profile,
        })
    }
}

impl Settings {
    pub fn args(args: WalletArgs) -> Result<SettingsBuilder, Error> {
        let profile = if let Some(path) = &args.profile {
            path.clone()
        } else {
            let mut path = dirs::home_dir().ok_or(Error::OsNotSupported)?;
            path.push(".cronos");
            path.push(env!("CARGO_BIN_NAME"));
            path
        };

        Ok(SettingsBuilder { profile, args })
    }

    /// JSON-RPC client for the configured endpoint
    pub fn rpc_client(
        &self,
        status: fn(&str),
    ) -> Result<RpcHttpClient, Error> {
        Ok(RpcHttpClient::new(self.rpc.as_str())?
            .wait_for_tx(self.wait_for_tx)
            .with_status(status))
    }
}

impl From<&LogLevel> for Level {
    fn from(level: &LogLevel) -> Level {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Json => "json",
                Self::Plain => "plain",
                Self::Coloured => "coloured",
            }
        )
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Trace => "trace",
                Self::Debug => "debug",
                Self::Info => "info",
                Self::Warn => "warn",
                Self::Error => "error",
            }
        )
    }
}

impl fmt::Display for Logging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Logging: [{}] ({})", self.level, self.format)
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "─".repeat(14);
        writeln!(f, "{separator}")?;
        writeln!(f, "Settings")?;
        writeln!(f, "{separator}")?;
        writeln!(f, "Profile directory: {}", self.profile.display())?;
        match &self.address {
            Some(address) => writeln!(f, "Sender: {address}")?,
            None => writeln!(f, "Sender: [first provider account]")?,
        }
        writeln!(f, "{separator}")?;
        writeln!(f, "rpc: {}", self.rpc)?;
        writeln!(f, "auth: {}", self.auth)?;
        writeln!(f, "explorer: {}", self.explorer)?;
        if let Some(chain_id) = self.chain_id {
            writeln!(f, "chain id: {chain_id}")?;
        }
        writeln!(f, "wait for tx: {}", self.wait_for_tx)?;
        writeln!(f, "{separator}")?;
        writeln!(f, "{}", self.logging)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::config::Config;

    fn settings(args: &[&str]) -> Result<Settings, Error> {
        let args = WalletArgs::parse_from(
            ["cronos-wallet", "--profile", "/tmp/cronos-test"]
                .iter()
                .chain(args),
        );
        let cfg = Config::parse(crate::config::DEFAULT_CONFIG)?;
        Settings::args(args)?.network(cfg.network)
    }

    #[test]
    fn defaults_from_config() {
        let settings = settings(&[]).unwrap();
        assert_eq!(settings.rpc.as_str(), "https://evm-t3.cronos.org/");
        assert_eq!(
            settings.explorer.as_str(),
            "https://testnet.cronoscan.com/tx/"
        );
        assert!(settings.wait_for_tx);
        assert_eq!(settings.chain_id, Some(338));
        assert!(settings.address.is_none());
    }

    #[test]
    fn named_network() {
        let settings = settings(&["--network", "local"]).unwrap();
        assert_eq!(settings.rpc.as_str(), "http://127.0.0.1:8545/");
        assert!(!settings.wait_for_tx);
        assert_eq!(settings.chain_id, None);
        // falls back to the default explorer
        assert_eq!(settings.explorer.as_str(), EXPLORER_TX_URL);
    }

    #[test]
    fn unknown_network() {
        let res = settings(&["--network", "mainnet"]);
        assert!(matches!(res, Err(Error::NetworkNotFound)));
    }

    #[test]
    fn args_override_config() {
        let settings = settings(&[
            "--rpc",
            "http://10.0.0.2:8545",
            "--address",
            "0x1111111111111111111111111111111111111111",
        ])
        .unwrap();
        assert_eq!(settings.rpc.as_str(), "http://10.0.0.2:8545/");
        assert_eq!(
            settings.address.unwrap().to_string(),
            "0x1111111111111111111111111111111111111111"
        );
    }

    #[test]
    fn wait_flag_overrides_config() {
        // the default config waits, the local network does not
        let testnet = settings(&["--wait-for-tx", "false"]).unwrap();
        assert!(!testnet.wait_for_tx);

        let local =
            settings(&["--network", "local", "--wait-for-tx", "true"]).unwrap();
        assert!(local.wait_for_tx);
    }

    #[test]
    fn malformed_endpoint_is_an_error() {
        let res = settings(&["--rpc", "not a url"]);
        assert!(matches!(res, Err(Error::Url(_))));

        let res = settings(&["--auth", "http://[::1"]);
        assert!(matches!(res, Err(Error::Url(_))));
    }
}
