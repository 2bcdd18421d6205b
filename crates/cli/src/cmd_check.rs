// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.

use wordgate::cli::ScanArgs;
use wordgate::config::Config;
use wordgate::error::ExitCode;
use wordgate::session::Session;

/// Run the check command.
///
/// Prints each category with a match and exits 1 if there was any.
pub fn run(config: &Config, args: &ScanArgs) -> anyhow::Result<ExitCode> {
    let session = Session::open(config, args)?;
    let text = args.read_text()?;

    let mut hits = Vec::new();
    let found = session
        .context()
        .contains_with(session.mode(), &text, |_, category, found| {
            if *found {
                hits.push(category.to_string());
            }
            true
        })?;

    for category in &hits {
        println!("{}", category);
    }
    tracing::debug!("check found matches in {} categories", hits.len());

    Ok(if found {
        ExitCode::Sensitive
    } else {
        ExitCode::Success
    })
}
