// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Host serial transport backed by the `serialport` crate.

use std::io::{self, Write};
use std::time::Duration;

use serialport::{DataBits, FlowControl, Parity, SerialPort, SerialPortType, StopBits};

use serial_replay_common::{Connection, ConnectionOpener, PortInfo, PortLister};

/// Default timeout for serial writes in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Lists ports through [`serialport::available_ports`].
pub struct SystemPorts;

impl PortLister for SystemPorts {
    fn list_ports(&self) -> io::Result<Vec<PortInfo>> {
        let ports = serialport::available_ports()?;
        Ok(ports
            .into_iter()
            .map(|port| PortInfo::new(port.port_name, describe(&port.port_type)))
            .collect())
    }
}

/// Human-readable description of a port.
///
/// USB ports report their product string as-is, so only adapters whose
/// product names "USB" match the discovery marker. Ports without a product
/// string are "n/a".
pub fn describe(port_type: &SerialPortType) -> String {
    match port_type {
        SerialPortType::UsbPort(info) => info
            .product
            .clone()
            .unwrap_or_else(|| "n/a".to_string()),
        SerialPortType::BluetoothPort => "Bluetooth".to_string(),
        SerialPortType::PciPort => "PCI".to_string(),
        SerialPortType::Unknown => "n/a".to_string(),
    }
}

/// Opens ports at 8N1 without flow control.
pub struct SystemOpener {
    timeout: Duration,
}

impl SystemOpener {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT_MS)
    }

    pub fn with_timeout(timeout_ms: u64) -> Self {
        Self {
            timeout: Duration::from_millis(timeout_ms),
        }
    }
}

impl Default for SystemOpener {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectionOpener for SystemOpener {
    type Connection = SerialConnection;

    fn open(&self, port_name: &str, baud_rate: u32) -> io::Result<SerialConnection> {
        let port = serialport::new(port_name, baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(self.timeout)
            .open()?;

        Ok(SerialConnection {
            name: port_name.to_string(),
            port: Some(port),
        })
    }
}

/// An open serial port. Dropping the inner port releases the OS handle.
pub struct SerialConnection {
    name: String,
    port: Option<Box<dyn SerialPort>>,
}

impl Connection for SerialConnection {
    fn port_name(&self) -> &str {
        &self.name
    }

    fn is_open(&self) -> bool {
        self.port.is_some()
    }

    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        let port = self
            .port
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "port closed"))?;
        port.write_all(bytes)?;
        port.flush()
    }

    fn close(&mut self) {
        self.port = None;
    }
}
