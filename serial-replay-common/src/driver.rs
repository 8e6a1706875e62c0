// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Top-level run driver.
//!
//! ```text
//! AwaitingConfirmation --y--> Running --ok--> Completed
//!          |                     |
//!          +--n / other--> Aborted <--discovery / open / file failure
//! ```
//!
//! The driver owns its collaborators and talks to the operator through the
//! reader/writer passed to [`Driver::run`], so the whole flow runs in tests
//! without a terminal or hardware.

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::config::ReplayConfig;
use crate::connection::{open_connection, Connection, ConnectionOpener};
use crate::discovery::{discover_port, PortLister};
use crate::error::ReplayError;
use crate::pause::Pause;
use crate::replay::{replay_file, ReplayReport};

pub const PROMPT: &str = "Do you want to run the file? (y/n): ";
pub const DECLINED_MESSAGE: &str = "script stopped";
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please enter 'y' or 'n'.";
pub const RUNNING_MESSAGE: &str = "Running...";
pub const COMPLETED_MESSAGE: &str = "Completed!";

/// Operator answer to [`PROMPT`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
    Invalid,
}

impl Confirmation {
    /// Trimmed, case-insensitive `y` / `n`; anything else is invalid.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "y" => Confirmation::Yes,
            "n" => Confirmation::No,
            _ => Confirmation::Invalid,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    AwaitingConfirmation,
    Running,
    Completed,
    Aborted,
}

/// How a run ended.
#[derive(Debug)]
pub enum RunOutcome {
    Completed(ReplayReport),
    Declined,
    InvalidInput,
    Failed(ReplayError),
}

pub struct Driver<L, O, P> {
    config: ReplayConfig,
    lister: L,
    opener: O,
    pause: P,
    state: DriverState,
}

impl<L, O, P> Driver<L, O, P>
where
    L: PortLister,
    O: ConnectionOpener,
    P: Pause,
{
    pub fn new(config: ReplayConfig, lister: L, opener: O, pause: P) -> Self {
        Self {
            config,
            lister,
            opener,
            pause,
            state: DriverState::AwaitingConfirmation,
        }
    }

    pub fn config(&self) -> &ReplayConfig {
        &self.config
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Prompt the operator, then discover, open and replay.
    ///
    /// Only I/O errors on `input`/`out` are returned as `Err`; every run
    /// failure ends up in [`RunOutcome::Failed`].
    pub fn run<R, W>(&mut self, input: &mut R, out: &mut W) -> io::Result<RunOutcome>
    where
        R: BufRead + ?Sized,
        W: Write + ?Sized,
    {
        self.state = DriverState::AwaitingConfirmation;

        write!(out, "{}", PROMPT)?;
        out.flush()?;

        match read_confirmation(input)? {
            Confirmation::Yes => {}
            Confirmation::No => {
                writeln!(out, "{}", DECLINED_MESSAGE)?;
                self.state = DriverState::Aborted;
                info!("run declined by operator");
                return Ok(RunOutcome::Declined);
            }
            Confirmation::Invalid => {
                writeln!(out, "{}", INVALID_INPUT_MESSAGE)?;
                self.state = DriverState::Aborted;
                info!("invalid confirmation input");
                return Ok(RunOutcome::InvalidInput);
            }
        }

        self.pause.pause(self.config.settle_time);
        self.state = DriverState::Running;
        info!(file = %self.config.file_path.display(), "run confirmed");

        self.execute(out)
    }

    fn execute<W: Write + ?Sized>(&mut self, out: &mut W) -> io::Result<RunOutcome> {
        let opened = discover_port(&self.lister, &self.config.port_marker).and_then(|port| {
            open_connection(&self.opener, &port, self.config.baud_rate)
                .map(|connection| (port, connection))
        });

        // "Running..." follows the discovery/open report even when it failed
        let (port, mut connection) = match opened {
            Ok(opened) => {
                writeln!(out, "{}", RUNNING_MESSAGE)?;
                opened
            }
            Err(error) => {
                let outcome = self.abort(out, error)?;
                writeln!(out, "{}", RUNNING_MESSAGE)?;
                return Ok(outcome);
            }
        };

        let result = replay_file(
            &mut connection,
            &self.config.file_path,
            self.config.inter_line_delay,
            &mut self.pause,
        );
        connection.close();
        info!(port = %port, "serial port closed");

        match result {
            Ok(report) => {
                for failure in &report.failures {
                    writeln!(out, "{}", failure.error)?;
                }
                writeln!(out, "{}", COMPLETED_MESSAGE)?;
                self.state = DriverState::Completed;
                Ok(RunOutcome::Completed(report))
            }
            Err(error) => self.abort(out, error),
        }
    }

    fn abort<W: Write + ?Sized>(
        &mut self,
        out: &mut W,
        error: ReplayError,
    ) -> io::Result<RunOutcome> {
        warn!(%error, "run aborted");
        writeln!(out, "{}", error)?;
        self.state = DriverState::Aborted;
        Ok(RunOutcome::Failed(error))
    }
}

/// Read one answer line. End of input and non-UTF-8 input count as invalid.
fn read_confirmation<R: BufRead + ?Sized>(input: &mut R) -> io::Result<Confirmation> {
    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(0) => Ok(Confirmation::Invalid),
        Ok(_) => Ok(Confirmation::parse(&answer)),
        Err(e) if e.kind() == io::ErrorKind::InvalidData => Ok(Confirmation::Invalid),
        Err(e) => Err(e),
    }
}
