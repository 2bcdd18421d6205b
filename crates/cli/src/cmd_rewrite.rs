// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Highlight and mask command implementations.

use wordgate::cli::{MaskArgs, ScanArgs};
use wordgate::config::Config;
use wordgate::error::ExitCode;
use wordgate::session::Session;

/// Run the highlight command.
pub fn highlight(config: &Config, args: &ScanArgs) -> anyhow::Result<ExitCode> {
    let session = Session::open(config, args)?;
    let text = args.read_text()?;
    println!("{}", session.context().highlight(session.mode(), &text)?);
    Ok(ExitCode::Success)
}

/// Run the mask command.
pub fn mask(config: &Config, args: &MaskArgs) -> anyhow::Result<ExitCode> {
    let session = Session::open(config, &args.scan)?.with_mask(args.mask);
    let text = args.scan.read_text()?;
    let masked = session
        .context()
        .filter(session.mode(), &text, session.mask())?;
    println!("{}", masked);
    Ok(ExitCode::Success)
}
