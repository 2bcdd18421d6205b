// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match command implementation.

use std::io::Write;

use wordgate::cli::{MatchArgs, OutputFormat};
use wordgate::config::Config;
use wordgate::error::ExitCode;
use wordgate::output::MatchOutput;
use wordgate::output::json::JsonFormatter;
use wordgate::output::text::TextFormatter;
use wordgate::session::Session;

/// Run the match command.
pub fn run(config: &Config, args: &MatchArgs) -> anyhow::Result<ExitCode> {
    let session = Session::open(config, &args.scan)?;
    let text = args.scan.read_text()?;

    let mut output = MatchOutput::new(session.kind(), session.mode());
    session
        .context()
        .match_words_with(session.mode(), &text, |filter, category, words| {
            output.push(filter, category, words);
            true
        })?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    match args.output {
        OutputFormat::Text => TextFormatter::new(&mut handle).write(&output)?,
        OutputFormat::Json => JsonFormatter::new(&mut handle).write(&output)?,
    }
    handle.flush()?;

    Ok(ExitCode::Success)
}
