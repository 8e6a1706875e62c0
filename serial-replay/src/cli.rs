// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command-line interface definitions.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use serial_replay_common::{Driver, ReplayConfig, RunOutcome, ThreadSleep};

use crate::progress::ProgressOpener;
use crate::transport::{SystemOpener, SystemPorts};

/// Command-line arguments.
///
/// Baud rate, replay file and pacing are fixed; the only switch controls
/// diagnostics on stderr.
#[derive(Parser)]
#[command(name = "serial-replay")]
#[command(version)]
#[command(about = "Replay all_merged.txt line by line to the first USB serial device")]
pub struct Cli {
    /// Print debug diagnostics (one entry per transmitted line)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Install the stderr diagnostics subscriber.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("serial_replay=debug,serial_replay_common=debug,warn")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// Execute one replay run against the host's serial ports.
pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    let config = ReplayConfig::default();
    let mut driver = Driver::new(
        config,
        SystemPorts,
        ProgressOpener::new(SystemOpener::new()),
        ThreadSleep,
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = driver
        .run(&mut stdin.lock(), &mut stdout.lock())
        .context("Failed to talk to the terminal")?;

    if let RunOutcome::Completed(report) = &outcome {
        tracing::info!(
            sent = report.lines_sent,
            failed = report.failures.len(),
            "run completed"
        );
    }

    Ok(())
}
