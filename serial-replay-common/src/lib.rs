// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Hardware-free core of serial-replay.
//!
//! - [`discovery`]: pick the first USB-described serial port
//! - [`connection`]: connection traits and single-line transmission
//! - [`replay`]: stream a text file line by line with a fixed pause
//! - [`driver`]: confirmation prompt and the discover → open → replay sequence
//!
//! Host serial access lives in the `serial-replay` binary behind the
//! [`PortLister`] and [`ConnectionOpener`] traits.

pub mod config;
pub mod connection;
pub mod discovery;
pub mod driver;
pub mod error;
pub mod pause;
pub mod replay;

// Re-export commonly used types
pub use config::{ReplayConfig, DEFAULT_BAUD_RATE, DEFAULT_FILE_NAME, USB_PORT_MARKER};
pub use config::{DEFAULT_INTER_LINE_DELAY_MS, DEFAULT_SETTLE_TIME_MS};
pub use connection::{Connection, ConnectionOpener};
pub use discovery::{PortInfo, PortLister};
pub use driver::{Confirmation, Driver, DriverState, RunOutcome};
pub use error::{ReplayError, SendError};
pub use pause::{Pause, ThreadSleep};
pub use replay::{LineFailure, ReplayReport, TextLines};
