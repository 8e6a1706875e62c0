// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Replay a recorded text file to a USB serial device.
//!
//! Usage:
//!   serial-replay
//!   serial-replay --verbose
//!
//! The tool asks for confirmation, picks the first port whose description
//! contains "USB", opens it at 115200 8N1 and sends each line of
//! `all_merged.txt` (trimmed, `\n`-terminated) with a 7 ms pause between
//! lines.

mod cli;
mod progress;
mod transport;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    cli::run(args)
}
