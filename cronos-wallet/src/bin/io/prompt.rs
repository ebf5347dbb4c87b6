// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::fmt::Display;
use std::io::stdout;
use std::str::FromStr;

use anyhow::Result;
use crossterm::{
    ExecutableCommand,
    cursor::{Hide, Show},
};
use inquire::validator::Validation;
use inquire::{Confirm, Select, Text};

use cronos_wallet::Address;
use cronos_wallet::currency::Cro;

/// Request a receiver address
pub(crate) fn request_rcvr_addr() -> Result<String> {
    let addr = Text::new("Please enter the recipient address:")
        .with_placeholder("To Address")
        .with_validator(|addr: &str| {
            Ok(match Address::from_str(addr) {
                Ok(_) => Validation::Valid,
                Err(_) => Validation::Invalid(
                    "Please introduce a valid address".into(),
                ),
            })
        })
        .prompt()?;

    Ok(addr)
}

/// Request the amount of CRO to send
pub(crate) fn request_token_amt() -> Result<String> {
    let amt = Text::new("Introduce the amount of CRO to send:")
        .with_placeholder("Amount")
        .with_validator(|amt: &str| {
            Ok(match Cro::from_str(amt) {
                Ok(_) => Validation::Valid,
                Err(err) => Validation::Invalid(err.to_string().into()),
            })
        })
        .prompt()?;

    Ok(amt)
}

/// Request an address typed by the user
pub(crate) fn request_sender_addr() -> Result<Address> {
    let addr = Text::new("Please enter the address sending the transfers:")
        .with_validator(|addr: &str| {
            Ok(match Address::from_str(addr) {
                Ok(_) => Validation::Valid,
                Err(_) => Validation::Invalid(
                    "Please introduce a valid address".into(),
                ),
            })
        })
        .prompt()?;

    Ok(Address::from_str(&addr)?)
}

/// Let the user pick one of the given options
pub(crate) fn select<T: Display>(msg: &str, options: Vec<T>) -> Result<T> {
    Ok(Select::new(msg, options).prompt()?)
}

/// Request block explorer to be opened
pub(crate) fn launch_explorer(url: String) -> Result<()> {
    let open = Confirm::new("Launch block explorer?")
        .with_default(false)
        .prompt()?;

    if open {
        open::that(url)?;
    }
    Ok(())
}

/// Shows the terminal cursor
pub(crate) fn show_cursor() -> Result<()> {
    let mut stdout = stdout();
    stdout.execute(Show)?;
    Ok(())
}

/// Hides the terminal cursor
pub(crate) fn hide_cursor() -> Result<()> {
    let mut stdout = stdout();
    stdout.execute(Hide)?;
    Ok(())
}
