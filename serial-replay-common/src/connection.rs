// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Serial connection abstraction.

use std::io;

use tracing::info;

use crate::error::{ReplayError, Result, SendError};

/// An exclusively owned link to the device.
pub trait Connection {
    /// Name of the port this connection was opened on.
    fn port_name(&self) -> &str;

    fn is_open(&self) -> bool;

    /// Write all bytes and flush them to the device.
    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Release the OS handle. Further writes must fail with [`SendError::NotOpen`].
    fn close(&mut self);
}

/// Opens connections by port name.
pub trait ConnectionOpener {
    type Connection: Connection;

    fn open(&self, port: &str, baud_rate: u32) -> io::Result<Self::Connection>;
}

/// Open `port` at `baud_rate`, mapping any failure to [`ReplayError::OpenFailure`].
pub fn open_connection<O: ConnectionOpener>(
    opener: &O,
    port: &str,
    baud_rate: u32,
) -> Result<O::Connection> {
    let connection = opener
        .open(port, baud_rate)
        .map_err(|source| ReplayError::OpenFailure {
            port: port.to_string(),
            source,
        })?;
    info!(port, baud_rate, "serial port opened");
    Ok(connection)
}

/// Transmit one line followed by a single `\n`.
///
/// The line and terminator go out in one write.
pub fn send_line<C: Connection + ?Sized>(
    connection: &mut C,
    line: &str,
) -> std::result::Result<(), SendError> {
    if !connection.is_open() {
        return Err(SendError::NotOpen);
    }

    let mut frame = Vec::with_capacity(line.len() + 1);
    frame.extend_from_slice(line.as_bytes());
    frame.push(b'\n');
    connection.write_all(&frame)?;
    Ok(())
}
