// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Error taxonomy for a replay run.
//!
//! None of these abort the process: the driver turns each one into an
//! operator message and ends the run. [`SendError`] is per line and never
//! stops the replay.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure that ends a run before or during replay.
#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("ESP device not found.")]
    DeviceNotFound,

    #[error("Failed to enumerate serial ports: {0}")]
    Enumeration(#[source] io::Error),

    #[error("Failed to open serial port {port}: {source}")]
    OpenFailure {
        port: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open file {}: {source}", .path.display())]
    FileOpenFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read file {} at line {line}: {source}", .path.display())]
    FileReadFailure {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// Failure to transmit a single line.
#[derive(Error, Debug)]
pub enum SendError {
    #[error("Serial port is not open. Cannot send data.")]
    NotOpen,

    #[error("Failed to send data over serial port: {0}")]
    Write(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ReplayError>;
