// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::backend::BackendKind;
use crate::error::{Error, Result};
use crate::scan::MatchMode;

/// Sensitive-word detection, masking and highlighting
#[derive(Parser)]
#[command(name = "wordgate")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "WORDGATE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Exit 1 if the text contains any listed word
    Check(ScanArgs),
    /// Print every listed word found in the text
    Match(MatchArgs),
    /// Wrap listed words in highlight markup
    Highlight(ScanArgs),
    /// Replace listed words with a mask character
    Mask(MaskArgs),
    /// List available matching backends
    Backends,
}

/// Input and engine options shared by every scanning command.
#[derive(clap::Args)]
pub struct ScanArgs {
    /// Text to scan (reads stdin when absent or `-`)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Matching backend (name or alias)
    #[arg(short, long, value_name = "KIND")]
    pub backend: Option<BackendKind>,

    /// Traversal mode
    #[arg(short, long)]
    pub mode: Option<MatchMode>,

    /// Word list file, one category per file (repeatable)
    #[arg(short = 'w', long = "words", value_name = "FILE")]
    pub words: Vec<PathBuf>,
}

#[derive(clap::Args)]
pub struct MatchArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct MaskArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Mask character (default from config, else `*`)
    #[arg(long, value_name = "CHAR")]
    pub mask: Option<char>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl ScanArgs {
    /// The text argument, or all of stdin when absent or `-`.
    ///
    /// One trailing line break is dropped from stdin input.
    pub fn read_text(&self) -> Result<String> {
        match self.text.as_deref() {
            Some(text) if text != "-" => Ok(text.to_string()),
            _ => {
                let mut input = String::new();
                std::io::stdin()
                    .read_to_string(&mut input)
                    .map_err(|e| Error::Io {
                        path: PathBuf::from("<stdin>"),
                        source: e,
                    })?;
                Ok(strip_line_break(input))
            }
        }
    }
}

fn strip_line_break(mut input: String) -> String {
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    input
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
