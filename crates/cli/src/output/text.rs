// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! One matched word per line, sorted; nothing when no word matched.

use std::io::Write;

use super::MatchOutput;

pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write(&mut self, output: &MatchOutput) -> std::io::Result<()> {
        for word in &output.words {
            writeln!(self.writer, "{}", word)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
