// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Ethereum JSON-RPC over HTTP, limited to what a value transfer needs.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::clients::{CallObject, RpcClient, TransferRequest};
use crate::currency::Wei;
use crate::{Address, Error};

/// Size in bytes of a transaction hash
const HASH_SIZE: usize = 32;

/// Delay between two receipt lookups
const RECEIPT_POLL: Duration = Duration::from_millis(1000);

/// Params of the methods taking no argument
const NO_PARAMS: [(); 0] = [];

fn silent(_: &str) {}

/// Hash identifying a transaction accepted by the network
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TxHash([u8; HASH_SIZE]);

impl TxHash {
    /// Returns the raw bytes of the hash
    pub fn to_bytes(&self) -> [u8; HASH_SIZE] {
        self.0
    }
}

impl From<[u8; HASH_SIZE]> for TxHash {
    fn from(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }
}

impl FromStr for TxHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::RpcResponse(format!("invalid hash {s}"));

        let hex_part = s.strip_prefix("0x").ok_or_else(invalid)?;
        let mut bytes = [0u8; HASH_SIZE];
        hex::decode_to_slice(hex_part, &mut bytes).map_err(|_| invalid())?;

        Ok(Self(bytes))
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxHash({self})")
    }
}

impl<'de> Deserialize<'de> for TxHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TxHash::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Decodes a JSON-RPC hex quantity (`0x` prefixed, no leading zeros check)
pub(crate) fn parse_quantity(s: &str) -> Result<u128, Error> {
    let bad = || Error::BadQuantity(s.to_string());

    match s.strip_prefix("0x") {
        Some(digits) if !digits.is_empty() => {
            u128::from_str_radix(digits, 16).map_err(|_| bad())
        }
        _ => Err(bad()),
    }
}

/// Receipt of a transaction included into a block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Hash of the transaction
    pub transaction_hash: TxHash,
    /// Height of the block including the transaction
    pub block_number: u64,
    /// Gas spent by the transaction
    pub gas_used: u64,
    /// Whether the execution succeeded
    pub success: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReceipt {
    transaction_hash: TxHash,
    block_number: String,
    gas_used: String,
    #[serde(default)]
    status: Option<String>,
}

impl TryFrom<RawReceipt> for Receipt {
    type Error = Error;

    fn try_from(raw: RawReceipt) -> Result<Self, Self::Error> {
        let success = match raw.status.as_deref() {
            // receipts from before byzantium carry no status
            None => true,
            Some(status) => parse_quantity(status)? == 1,
        };

        Ok(Receipt {
            transaction_hash: raw.transaction_hash,
            block_number: parse_quantity(&raw.block_number)? as u64,
            gas_used: parse_quantity(&raw.gas_used)? as u64,
            success,
        })
    }
}

#[derive(Serialize)]
struct Request<'a, P> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: P,
}

#[derive(Deserialize)]
struct ErrorObject {
    code: i64,
    message: String,
}

#[derive(Deserialize)]
struct Response {
    #[serde(default)]
    result: Value,
    error: Option<ErrorObject>,
}

/// Interprets the body of a JSON-RPC response
pub(crate) fn parse_response<R>(body: &[u8]) -> Result<R, Error>
where
    R: DeserializeOwned,
{
    let response: Response = serde_json::from_slice(body)
        .map_err(|e| Error::RpcResponse(e.to_string()))?;

    if let Some(err) = response.error {
        return Err(Error::Rpc {
            code: err.code,
            message: err.message,
        });
    }

    Ok(serde_json::from_value(response.result)?)
}

#[derive(Clone)]
/// JSON-RPC HTTP Client
pub struct RpcHttpClient {
    client: reqwest::Client,
    uri: String,
    next_id: Arc<AtomicU64>,
    wait_for_tx: bool,
    status: fn(&str),
}

impl RpcHttpClient {
    /// Create a new JSON-RPC Client
    ///
    /// # Errors
    /// This method errors if a TLS backend cannot be initialized, or the
    /// resolver cannot load the system configuration.
    pub fn new<S: Into<String>>(uri: S) -> Result<Self, Error> {
        let client = reqwest::ClientBuilder::new()
            .connect_timeout(Duration::from_secs(30))
            .build();

        match client {
            Ok(client) => Ok(Self {
                uri: uri.into(),
                client,
                next_id: Arc::new(AtomicU64::new(1)),
                wait_for_tx: false,
                status: silent,
            }),
            Err(_) => Err(Error::HttpClient),
        }
    }

    /// Resolve sent transactions only once their receipt is available
    pub fn wait_for_tx(mut self, wait: bool) -> Self {
        self.wait_for_tx = wait;
        self
    }

    /// Set the callback used to report progress while waiting
    pub fn with_status(mut self, status: fn(&str)) -> Self {
        self.status = status;
        self
    }

    /// The endpoint this client talks to
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Send a JSON-RPC request and decode its result
    ///
    /// # Errors
    /// This method errors if there was an error while sending the request,
    /// if the node answered with an error object or if the result cannot be
    /// decoded into `R`.
    pub async fn call<P, R>(&self, method: &str, params: P) -> Result<R, Error>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let request = Request {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };

        debug!(method, id = request.id, "rpc request");

        let response =
            self.client.post(&self.uri).json(&request).send().await?;

        let status = response.status();
        let body = response.bytes().await?;

        if status.is_client_error() || status.is_server_error() {
            let error = String::from_utf8(body.to_vec())
                .unwrap_or("unparsable error".into());

            return Err(Error::RpcResponse(format!("{status}: {error}")));
        }

        parse_response(&body)
    }

    /// Fetch the latest balance of the given account
    ///
    /// # Errors
    /// This method errors if the request fails or the quantity is malformed.
    pub async fn balance(&self, address: &Address) -> Result<Wei, Error> {
        let balance: String =
            self.call("eth_getBalance", (address, "latest")).await?;
        parse_quantity(&balance)
    }

    /// Accounts the provider is able to sign for
    ///
    /// # Errors
    /// This method errors if the request fails or an address is malformed.
    pub async fn accounts(&self) -> Result<Vec<Address>, Error> {
        let accounts: Vec<String> =
            self.call("eth_accounts", NO_PARAMS).await?;
        accounts.iter().map(|a| Address::from_str(a)).collect()
    }

    /// Fetch the chain id of the network
    ///
    /// # Errors
    /// This method errors if the request fails or the quantity is malformed.
    pub async fn chain_id(&self) -> Result<u64, Error> {
        let id: String = self.call("eth_chainId", NO_PARAMS).await?;
        Ok(parse_quantity(&id)? as u64)
    }

    /// Fetch the receipt of a transaction, `None` while it is pending
    ///
    /// # Errors
    /// This method errors if the request fails or the receipt is malformed.
    pub async fn receipt(
        &self,
        hash: &TxHash,
    ) -> Result<Option<Receipt>, Error> {
        let raw: Option<RawReceipt> = self
            .call("eth_getTransactionReceipt", [hash.to_string()])
            .await?;

        raw.map(Receipt::try_from).transpose()
    }

    /// Wait for a transaction to be included in a block
    ///
    /// # Errors
    /// This method errors if a lookup fails or if the transaction reverted.
    pub async fn wait_for(&self, hash: &TxHash) -> Result<Receipt, Error> {
        loop {
            match self.receipt(hash).await? {
                Some(receipt) if receipt.success => {
                    info!(%hash, block = receipt.block_number, "tx included");
                    break Ok(receipt);
                }
                Some(_) => {
                    break Err(Error::Transaction(format!(
                        "transaction {hash} reverted"
                    )));
                }
                None => {
                    (self.status)(
                        "Waiting for tx to be included into a block...",
                    );
                    sleep(RECEIPT_POLL).await;
                }
            }
        }
    }
}

#[async_trait]
impl RpcClient for RpcHttpClient {
    async fn gas_price(&self) -> Result<Wei, Error> {
        let price: String = self.call("eth_gasPrice", NO_PARAMS).await?;
        parse_quantity(&price)
    }

    async fn send_transaction(
        &self,
        request: &TransferRequest,
    ) -> Result<TxHash, Error> {
        let call = CallObject::from(request);
        let hash: TxHash = self.call("eth_sendTransaction", [call]).await?;

        info!(%hash, from = %request.from, to = %request.to, "tx sent");

        if self.wait_for_tx {
            self.wait_for(&hash).await?;
        }

        Ok(hash)
    }
}
