// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! In-memory doubles shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use serial_replay_common::{Connection, ConnectionOpener, Pause, PortInfo, PortLister};

/// Everything the doubles observed, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    List,
    Open { port: String, baud_rate: u32 },
    Write(Vec<u8>),
    Pause(Duration),
    Close,
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

pub fn event_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn writes(log: &EventLog) -> Vec<Vec<u8>> {
    log.borrow()
        .iter()
        .filter_map(|event| match event {
            Event::Write(bytes) => Some(bytes.clone()),
            _ => None,
        })
        .collect()
}

pub fn pauses(log: &EventLog) -> Vec<Duration> {
    log.borrow()
        .iter()
        .filter_map(|event| match event {
            Event::Pause(duration) => Some(*duration),
            _ => None,
        })
        .collect()
}

pub fn count(log: &EventLog, predicate: impl Fn(&Event) -> bool) -> usize {
    log.borrow().iter().filter(|event| predicate(event)).count()
}

// --- Port lister ---

pub struct FixedLister {
    pub ports: Vec<PortInfo>,
    pub fail: bool,
    pub log: EventLog,
}

impl FixedLister {
    pub fn new(ports: Vec<PortInfo>, log: &EventLog) -> Self {
        Self {
            ports,
            fail: false,
            log: log.clone(),
        }
    }

    pub fn failing(log: &EventLog) -> Self {
        Self {
            ports: Vec::new(),
            fail: true,
            log: log.clone(),
        }
    }
}

impl PortLister for FixedLister {
    fn list_ports(&self) -> io::Result<Vec<PortInfo>> {
        self.log.borrow_mut().push(Event::List);
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::Other, "enumeration unavailable"));
        }
        Ok(self.ports.clone())
    }
}

pub fn usb_port(name: &str) -> PortInfo {
    PortInfo::new(name, format!("CP2102 USB to UART Bridge Controller ({})", name))
}

// --- Connection ---

pub struct MemoryConnection {
    pub port: String,
    pub open: bool,
    /// Fail the write with this 1-based index.
    pub fail_write: Option<usize>,
    pub writes_seen: usize,
    pub log: EventLog,
}

impl MemoryConnection {
    pub fn new(port: &str, log: &EventLog) -> Self {
        Self {
            port: port.to_string(),
            open: true,
            fail_write: None,
            writes_seen: 0,
            log: log.clone(),
        }
    }
}

impl Connection for MemoryConnection {
    fn port_name(&self) -> &str {
        &self.port
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        assert!(self.open, "write attempted on a closed connection");
        self.writes_seen += 1;
        if self.fail_write == Some(self.writes_seen) {
            return Err(io::Error::new(io::ErrorKind::TimedOut, "write timed out"));
        }
        self.log.borrow_mut().push(Event::Write(bytes.to_vec()));
        Ok(())
    }

    fn close(&mut self) {
        self.open = false;
        self.log.borrow_mut().push(Event::Close);
    }
}

pub struct MemoryOpener {
    pub fail: Option<io::ErrorKind>,
    pub log: EventLog,
}

impl MemoryOpener {
    pub fn new(log: &EventLog) -> Self {
        Self {
            fail: None,
            log: log.clone(),
        }
    }

    pub fn failing(kind: io::ErrorKind, log: &EventLog) -> Self {
        Self {
            fail: Some(kind),
            log: log.clone(),
        }
    }
}

impl ConnectionOpener for MemoryOpener {
    type Connection = MemoryConnection;

    fn open(&self, port: &str, baud_rate: u32) -> io::Result<MemoryConnection> {
        self.log.borrow_mut().push(Event::Open {
            port: port.to_string(),
            baud_rate,
        });
        if let Some(kind) = self.fail {
            return Err(io::Error::new(kind, "device busy"));
        }
        Ok(MemoryConnection::new(port, &self.log))
    }
}

// --- Pause ---

pub struct RecordingPause {
    pub log: EventLog,
}

impl RecordingPause {
    pub fn new(log: &EventLog) -> Self {
        Self { log: log.clone() }
    }
}

impl Pause for RecordingPause {
    fn pause(&mut self, duration: Duration) {
        self.log.borrow_mut().push(Event::Pause(duration));
    }
}
