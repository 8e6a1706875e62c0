// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Terminal progress for a running replay.
//!
//! [`ProgressOpener`] wraps any opener so every connection it hands out
//! ticks a spinner on each line written. The line count is not known up
//! front, so this is a spinner with a counter rather than a bar.

use std::io;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use serial_replay_common::{Connection, ConnectionOpener};

pub struct ProgressOpener<O> {
    inner: O,
}

impl<O> ProgressOpener<O> {
    pub fn new(inner: O) -> Self {
        Self { inner }
    }
}

impl<O: ConnectionOpener> ConnectionOpener for ProgressOpener<O> {
    type Connection = ProgressConnection<O::Connection>;

    fn open(&self, port: &str, baud_rate: u32) -> io::Result<Self::Connection> {
        let inner = self.inner.open(port, baud_rate)?;
        Ok(ProgressConnection::new(inner, line_spinner(port)))
    }
}

fn line_spinner(port: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    // Template is a literal; fall back to the default style if it ever fails to parse
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} [{elapsed_precise}] {pos} lines -> {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(port.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub struct ProgressConnection<C> {
    inner: C,
    pb: ProgressBar,
}

impl<C> ProgressConnection<C> {
    pub fn new(inner: C, pb: ProgressBar) -> Self {
        Self { inner, pb }
    }
}

impl<C: Connection> Connection for ProgressConnection<C> {
    fn port_name(&self) -> &str {
        self.inner.port_name()
    }

    fn is_open(&self) -> bool {
        self.inner.is_open()
    }

    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        let result = self.inner.write_all(bytes);
        if result.is_ok() {
            self.pb.inc(1);
        }
        result
    }

    fn close(&mut self) {
        if !self.pb.is_finished() {
            self.pb
                .finish_with_message(format!("{} (closed)", self.inner.port_name()));
        }
        self.inner.close();
    }
}
