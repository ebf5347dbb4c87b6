// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::str::FromStr;

use tracing::{debug, info};

use crate::currency::Cro;
use crate::gas::{Gas, TRANSFER_LIMIT};
use crate::{
    Address, BalanceRefresher, EXPLORER_TX_URL, Error, RpcClient,
    TransferRequest, TxHash,
};

/// Label of the submit button while the form is editable
pub const SEND_LABEL: &str = "Send Transaction";
/// Label of the submit button while a transfer is in flight
pub const SUBMITTED_LABEL: &str = "Submitted...";
/// Text of the explorer link
pub const LINK_TEXT: &str = "View Transaction";

/// The two states of the transfer form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    /// Inputs editable, submit enabled
    #[default]
    Idle,
    /// A transfer is outstanding, everything disabled
    Submitting,
}

/// Field values captured when a submission starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Destination address as typed
    pub to_address: String,
    /// Amount in CRO as typed
    pub amount: String,
}

/// State of the send-transaction form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferForm {
    to_address: String,
    amount: String,
    state: FormState,
    tx_hash: Option<TxHash>,
}

impl TransferForm {
    /// An empty, editable form
    pub fn new() -> Self {
        Self::default()
    }

    /// Destination address field
    pub fn to_address(&self) -> &str {
        &self.to_address
    }

    /// Amount field
    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// Current state
    pub fn state(&self) -> FormState {
        self.state
    }

    /// Whether a submission is outstanding
    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    /// Hash of the last completed transfer
    pub fn tx_hash(&self) -> Option<&TxHash> {
        self.tx_hash.as_ref()
    }

    /// Input event on the destination field, dropped while disabled
    pub fn set_to_address<S: Into<String>>(&mut self, value: S) {
        if !self.is_submitting() {
            self.to_address = value.into();
        }
    }

    /// Input event on the amount field, dropped while disabled
    pub fn set_amount<S: Into<String>>(&mut self, value: S) {
        if !self.is_submitting() {
            self.amount = value.into();
        }
    }

    /// Idle to Submitting.
    ///
    /// Returns `None` and leaves the form untouched if a field is empty or a
    /// submission is already outstanding.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.is_submitting()
            || self.to_address.is_empty()
            || self.amount.is_empty()
        {
            return None;
        }

        self.tx_hash = None;
        self.state = FormState::Submitting;

        Some(Submission {
            to_address: self.to_address.clone(),
            amount: self.amount.clone(),
        })
    }

    /// Submitting to Idle, with the hash of the accepted transfer
    pub fn complete(&mut self, hash: TxHash) {
        self.tx_hash = Some(hash);
        self.state = FormState::Idle;
        self.to_address.clear();
        self.amount.clear();
    }
}

/// Submit control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    /// Text of the button
    pub label: &'static str,
    /// Whether clicks are ignored
    pub disabled: bool,
}

/// Hyperlink to open in a new window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Visible text
    pub text: &'static str,
    /// Target URL
    pub href: String,
}

/// What the transfer form looks like right now
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRender {
    /// Value of the destination input
    pub to_address: String,
    /// Value of the amount input
    pub amount: String,
    /// Whether both inputs are disabled
    pub inputs_disabled: bool,
    /// The submit control
    pub button: SubmitButton,
    /// Explorer link of the last transfer
    pub link: Option<Link>,
}

/// Send-transaction form.
///
/// Sends CRO from `public_address`, whose key is held by the RPC provider,
/// and asks `fetch_balance` to refresh the displayed balance afterwards.
pub struct TransferView<R, B> {
    public_address: Address,
    rpc: R,
    fetch_balance: B,
    explorer: String,
    form: TransferForm,
}

impl<R, B> TransferView<R, B>
where
    R: RpcClient,
    B: BalanceRefresher,
{
    /// Mount a new, empty form
    pub fn new(public_address: Address, rpc: R, fetch_balance: B) -> Self {
        Self {
            public_address,
            rpc,
            fetch_balance,
            explorer: EXPLORER_TX_URL.to_string(),
            form: TransferForm::new(),
        }
    }

    /// Link transactions to another explorer base URL
    pub fn with_explorer<S: Into<String>>(mut self, tx_url: S) -> Self {
        self.explorer = tx_url.into();
        self
    }

    /// Sender of the transfers
    pub fn public_address(&self) -> &Address {
        &self.public_address
    }

    /// Current form state
    pub fn form(&self) -> &TransferForm {
        &self.form
    }

    /// Input event on the destination field
    pub fn set_to_address<S: Into<String>>(&mut self, value: S) {
        self.form.set_to_address(value)
    }

    /// Input event on the amount field
    pub fn set_amount<S: Into<String>>(&mut self, value: S) {
        self.form.set_amount(value)
    }

    /// Explorer URL of the given transaction
    pub fn tx_url(&self, hash: &TxHash) -> String {
        format!("{}{hash}", self.explorer)
    }

    /// Describe the form for the frontend
    pub fn render(&self) -> TransferRender {
        let submitting = self.form.is_submitting();
        let label = match submitting {
            true => SUBMITTED_LABEL,
            false => SEND_LABEL,
        };

        TransferRender {
            to_address: self.form.to_address.clone(),
            amount: self.form.amount.clone(),
            inputs_disabled: submitting,
            button: SubmitButton {
                label,
                disabled: submitting,
            },
            link: self.form.tx_hash().map(|hash| Link {
                text: LINK_TEXT,
                href: self.tx_url(hash),
            }),
        }
    }

    /// Click on the submit button.
    ///
    /// Returns `Ok(None)` without touching anything if a field is empty.
    /// Otherwise transfers the amount, converted to wei, to the destination
    /// and refreshes the sender balance.
    ///
    /// # Errors
    /// Any error from parsing the fields or from the RPC collaborator is
    /// returned as is, leaving the form in [`FormState::Submitting`].
    pub async fn submit(&mut self) -> Result<Option<TxHash>, Error> {
        let Some(submission) = self.form.begin_submit() else {
            debug!("submit ignored, form incomplete or busy");
            return Ok(None);
        };

        let to = Address::from_str(&submission.to_address)?;
        let value = *Cro::from_str(&submission.amount)?;

        let gas_price = self.rpc.gas_price().await?;
        let request = TransferRequest {
            from: self.public_address,
            to,
            value,
            gas: Gas::new(TRANSFER_LIMIT).with_price(gas_price),
        };

        let hash = self.rpc.send_transaction(&request).await?;
        info!(%hash, "transfer accepted");

        self.form.complete(hash);
        self.fetch_balance.fetch_balance(&self.public_address).await;

        Ok(Some(hash))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash() -> TxHash {
        TxHash::from([7u8; 32])
    }

    fn filled() -> TransferForm {
        let mut form = TransferForm::new();
        form.set_to_address("0x2222222222222222222222222222222222222222");
        form.set_amount("1.5");
        form
    }

    #[test]
    fn empty_fields_do_not_submit() {
        let mut form = TransferForm::new();
        assert!(form.begin_submit().is_none());

        form.set_to_address("0x2222222222222222222222222222222222222222");
        let before = form.clone();
        assert!(form.begin_submit().is_none());
        assert_eq!(form, before);

        let mut form = TransferForm::new();
        form.set_amount("1");
        assert!(form.begin_submit().is_none());
        assert_eq!(form.state(), FormState::Idle);
    }

    #[test]
    fn submit_then_complete() {
        let mut form = filled();
        form.complete(hash());
        form.set_to_address("0x3333333333333333333333333333333333333333");
        form.set_amount("2");

        let submission = form.begin_submit().unwrap();
        assert_eq!(submission.amount, "2");
        assert!(form.is_submitting());
        // the previous link goes away as soon as a new transfer starts
        assert_eq!(form.tx_hash(), None);

        form.complete(hash());
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(form.to_address(), "");
        assert_eq!(form.amount(), "");
        assert_eq!(form.tx_hash(), Some(&hash()));
    }

    #[test]
    fn inputs_disabled_while_submitting() {
        let mut form = filled();
        form.begin_submit().unwrap();

        form.set_amount("100");
        form.set_to_address("");
        assert_eq!(form.amount(), "1.5");
        assert!(!form.to_address().is_empty());

        // a second click is swallowed by the disabled button
        assert!(form.begin_submit().is_none());
        assert!(form.is_submitting());
    }
}
