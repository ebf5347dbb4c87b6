// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

mod command;
mod config;
mod interactive;
mod io;
mod settings;

pub(crate) use command::{Command, RunResult};

use std::fs;

use clap::Parser;
use inquire::InquireError;
use tracing::Level;

use crate::settings::{LogFormat, Settings};

use config::Config;
use io::WalletArgs;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    if let Err(err) = exec().await {
        // display the error message (if any)
        match err.downcast_ref::<InquireError>() {
            Some(InquireError::OperationInterrupted)
            | Some(InquireError::OperationCanceled) => {}
            _ => eprintln!("{err}"),
        };
        // give cursor back to the user
        io::prompt::show_cursor()?;
    }
    Ok(())
}

async fn exec() -> anyhow::Result<()> {
    // parse user args
    let args = WalletArgs::parse();
    // get the subcommand, if any
    let cmd = args.command.clone();

    // Get the initial settings from the args
    let settings_builder = Settings::args(args)?;

    // Obtain the profile dir from the settings
    let profile_folder = settings_builder.profile().clone();

    fs::create_dir_all(profile_folder.as_path())?;

    // load configuration (or use default)
    let cfg = Config::load(&profile_folder)?;

    // Finally complete the settings by setting the network
    let settings = settings_builder.network(cfg.network)?;

    // generate a subscriber with the desired log level
    let level = &settings.logging.level;
    let level: Level = level.into();
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr);

    // set the subscriber as global
    match settings.logging.format {
        LogFormat::Json => {
            let subscriber = subscriber.json().flatten_event(true).finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogFormat::Plain => {
            let subscriber = subscriber.with_ansi(false).finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogFormat::Coloured => {
            let subscriber = subscriber.finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    };

    // run command
    match cmd {
        Some(Command::Settings) => println!("{settings}"),
        Some(cmd) => match cmd.run(&settings).await? {
            RunResult::Settings => {}
            result => println!("{result}"),
        },
        None => interactive::run_loop(&settings).await?,
    }

    Ok(())
}
