// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Replay configuration.
//!
//! The binary always runs with [`ReplayConfig::default`]; the `with_*`
//! builders exist so tests can point the driver at a temporary file and
//! shorten the pauses.

use std::path::{Path, PathBuf};
use std::time::Duration;

// --- Defaults ---

pub const DEFAULT_BAUD_RATE: u32 = 115_200;
pub const DEFAULT_FILE_NAME: &str = "all_merged.txt";
pub const DEFAULT_INTER_LINE_DELAY_MS: u64 = 7;
pub const DEFAULT_SETTLE_TIME_MS: u64 = 1000;

/// Substring a port description must contain to be selected.
pub const USB_PORT_MARKER: &str = "USB";

/// Settings for one replay run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplayConfig {
    pub baud_rate: u32,
    pub file_path: PathBuf,
    pub inter_line_delay: Duration,
    pub settle_time: Duration,
    pub port_marker: String,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            baud_rate: DEFAULT_BAUD_RATE,
            file_path: PathBuf::from(DEFAULT_FILE_NAME),
            inter_line_delay: Duration::from_millis(DEFAULT_INTER_LINE_DELAY_MS),
            settle_time: Duration::from_millis(DEFAULT_SETTLE_TIME_MS),
            port_marker: USB_PORT_MARKER.to_string(),
        }
    }
}

impl ReplayConfig {
    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    pub fn with_file_path(mut self, path: impl AsRef<Path>) -> Self {
        self.file_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_inter_line_delay(mut self, delay: Duration) -> Self {
        self.inter_line_delay = delay;
        self
    }

    pub fn with_settle_time(mut self, settle_time: Duration) -> Self {
        self.settle_time = settle_time;
        self
    }
}
