// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::collections::HashMap;
use std::path::Path;
use std::{fs, io};

use serde::Deserialize;
use url::Url;

use cronos_wallet::Error;

/// Embedded configuration, written to the global location on first run
pub(crate) const DEFAULT_CONFIG: &str =
    include_str!("../../default.config.toml");

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct Network {
    pub(crate) rpc: Url,
    pub(crate) auth: Url,
    pub(crate) explorer: Option<Url>,
    pub(crate) wait_for_tx: Option<bool>,
    pub(crate) chain_id: Option<u64>,
    pub(crate) network: Option<HashMap<String, Network>>,
}

/// Config holds the settings for the CLI wallet
#[derive(Debug)]
pub struct Config {
    /// Network configuration
    pub(crate) network: Network,
}

fn read_to_string<P: AsRef<Path>>(path: P) -> io::Result<Option<String>> {
    fs::read_to_string(&path)
        .map(Some)
        .or_else(|e| match e.kind() {
            io::ErrorKind::NotFound => Ok(None),
            _ => Err(e),
        })
}

impl Config {
    /// Parse a configuration from its TOML content
    pub fn parse(contents: &str) -> Result<Config, Error> {
        let network: Network = toml::from_str(contents)?;
        Ok(Config { network })
    }

    /// Attempt to load configuration from file
    pub fn load(profile: &Path) -> Result<Config, Error> {
        let profile = profile.join("config.toml");

        // Try to read profile config first, then global config
        if let Some(contents) = read_to_string(&profile)? {
            return Self::parse(&contents);
        }

        let mut path = dirs::home_dir().ok_or(Error::OsNotSupported)?;
        path.push(".config");
        path.push(env!("CARGO_BIN_NAME"));
        path.push("config.toml");

        let contents = match read_to_string(&path)? {
            Some(contents) => contents,
            None => {
                // If no config exists anywhere, create one in the global
                // location. Writing errors are ignored, the embedded default
                // is used anyway.
                if let Some(parent) = path.parent() {
                    let _ = fs::create_dir_all(parent);
                }
                let _ = fs::write(&path, DEFAULT_CONFIG);

                DEFAULT_CONFIG.to_string()
            }
        };

        Self::parse(&contents)
    }
}
