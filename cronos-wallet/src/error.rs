// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::io;

/// Errors returned by this library
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// JSON-RPC error object returned by the node
    #[error("RPC error {code}: {message}")]
    Rpc {
        /// JSON-RPC error code
        code: i64,
        /// Human readable error message
        message: String,
    },
    /// The node answered with something that is not a JSON-RPC response
    #[error("Malformed RPC response: {0}")]
    RpcResponse(String),
    /// Authentication provider error
    #[error("Authentication error: {0}")]
    Auth(String),
    /// The callback URL does not carry a login credential
    #[error("No login credential found in the page URL")]
    MissingCredential,
    /// Filesystem errors
    #[error(transparent)]
    IO(#[from] io::Error),
    /// JSON serialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// URL parsing errors
    #[error(transparent)]
    Url(#[from] url::ParseError),
    /// Reqwest errors
    #[error("A request error occurred: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// The HTTP client could not be initialized
    #[error("Unable to initialize the HTTP client")]
    HttpClient,
    /// Amount is not a valid decimal CRO value
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    /// Amount does not fit the smallest unit representation
    #[error("Amount is too large")]
    AmountTooLarge,
    /// Invalid address
    #[error("Invalid address")]
    BadAddress,
    /// Hex quantity could not be decoded
    #[error("Invalid hex quantity: {0}")]
    BadQuantity(String),
    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(String),
    /// Configuration file cannot be parsed
    #[error("Unable to read the configuration: {0}")]
    ConfigRead(#[from] toml::de::Error),
    /// Provided Network not found
    #[error(
        "Network not found, check config.toml, specify network with -n flag"
    )]
    NetworkNotFound,
    /// The endpoint serves another chain than the configured one
    #[error("Connected to chain {found}, expected {expected}")]
    WrongChain {
        /// Chain id from the configuration
        expected: u64,
        /// Chain id reported by the endpoint
        found: u64,
    },
    /// Unable to locate the user's home directory
    #[error("Operating system not supported")]
    OsNotSupported,
}
