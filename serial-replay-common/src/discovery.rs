// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Serial port discovery.
//!
//! Selection is pure logic over a list of [`PortInfo`]; the host
//! enumeration sits behind [`PortLister`] so it can be swapped for a fixed
//! list in tests.

use std::io;

use tracing::{debug, info};

use crate::error::{ReplayError, Result};

/// One enumerated serial port.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortInfo {
    /// OS identifier used to open the port (e.g. `/dev/ttyUSB0`, `COM3`).
    pub name: String,
    /// Human-readable description.
    pub description: String,
}

impl PortInfo {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Source of the host's serial ports, in enumeration order.
pub trait PortLister {
    fn list_ports(&self) -> io::Result<Vec<PortInfo>>;
}

/// Return the first port whose description contains `marker` (case-sensitive).
pub fn select_port<'a>(ports: &'a [PortInfo], marker: &str) -> Option<&'a PortInfo> {
    ports.iter().find(|port| port.description.contains(marker))
}

/// Enumerate ports and return the name of the first one matching `marker`.
pub fn discover_port(lister: &impl PortLister, marker: &str) -> Result<String> {
    let ports = lister.list_ports().map_err(ReplayError::Enumeration)?;
    for port in &ports {
        debug!(port = %port.name, description = %port.description, "enumerated port");
    }

    let port = select_port(&ports, marker).ok_or(ReplayError::DeviceNotFound)?;
    info!(port = %port.name, description = %port.description, "selected port");
    Ok(port.name.clone())
}
