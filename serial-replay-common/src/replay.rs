// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Line replay engine.
//!
//! Streams a text file to a [`Connection`] one line at a time. Each line is
//! trimmed, sent with a `\n` terminator, and followed by a fixed pause. There
//! is no read-back: the pause is the only pacing.
//!
//! Lines end at `\n`, `\r\n` or a bare `\r`, so files saved with any of the
//! three conventions replay the same way.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::connection::{send_line, Connection};
use crate::error::{ReplayError, Result, SendError};
use crate::pause::Pause;

/// A line that could not be transmitted.
#[derive(Debug)]
pub struct LineFailure {
    /// 1-based line number in the source file.
    pub line: usize,
    pub error: SendError,
}

/// Summary of a finished replay.
#[derive(Debug, Default)]
pub struct ReplayReport {
    pub lines_sent: usize,
    pub failures: Vec<LineFailure>,
}

impl ReplayReport {
    pub fn lines_attempted(&self) -> usize {
        self.lines_sent + self.failures.len()
    }
}

/// Replay every line of `path` over `connection`.
///
/// The file is opened before anything is sent, so an unreadable path means
/// zero writes. A failed send is recorded and the next line is tried.
pub fn replay_file<C, P>(
    connection: &mut C,
    path: &Path,
    delay: Duration,
    pause: &mut P,
) -> Result<ReplayReport>
where
    C: Connection + ?Sized,
    P: Pause + ?Sized,
{
    let file = File::open(path).map_err(|source| ReplayError::FileOpenFailure {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), port = connection.port_name(), "replay started");

    replay_lines(connection, BufReader::new(file), path, delay, pause)
}

/// Replay lines from an already opened reader. `path` is only used for errors.
pub fn replay_lines<C, R, P>(
    connection: &mut C,
    reader: R,
    path: &Path,
    delay: Duration,
    pause: &mut P,
) -> Result<ReplayReport>
where
    C: Connection + ?Sized,
    R: BufRead,
    P: Pause + ?Sized,
{
    let mut report = ReplayReport::default();

    for (index, line) in TextLines::new(reader).enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|source| ReplayError::FileReadFailure {
            path: path.to_path_buf(),
            line: line_no,
            source,
        })?;
        let line = line.trim();

        match send_line(connection, line) {
            Ok(()) => {
                debug!(line = line_no, bytes = line.len() + 1, "sent");
                report.lines_sent += 1;
            }
            Err(error) => {
                warn!(line = line_no, %error, "send failed");
                report.failures.push(LineFailure {
                    line: line_no,
                    error,
                });
            }
        }

        pause.pause(delay);
    }

    info!(
        sent = report.lines_sent,
        failed = report.failures.len(),
        "replay finished"
    );
    Ok(report)
}

/// Lines of a UTF-8 reader, split on `\n`, `\r\n` and `\r`.
///
/// Terminators are not included. A final line without a terminator is
/// still yielded; an empty input yields nothing.
pub struct TextLines<R> {
    reader: R,
    pending: VecDeque<String>,
    chunk: Vec<u8>,
}

impl<R: BufRead> TextLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            chunk: Vec::new(),
        }
    }

    /// Read up to the next `\n` and queue every line it contains.
    fn fill(&mut self) -> io::Result<bool> {
        self.chunk.clear();
        if self.reader.read_until(b'\n', &mut self.chunk)? == 0 {
            return Ok(false);
        }

        let text = std::str::from_utf8(&self.chunk)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let (body, lf_terminated) = match text.strip_suffix('\n') {
            Some(body) => (body.strip_suffix('\r').unwrap_or(body), true),
            None => (text, false),
        };

        let mut pieces: Vec<&str> = body.split('\r').collect();
        // Without a trailing `\n`, a trailing `\r` ends the last line
        if !lf_terminated && body.ends_with('\r') {
            pieces.pop();
        }
        self.pending.extend(pieces.into_iter().map(str::to_string));
        Ok(true)
    }
}

impl<R: BufRead> Iterator for TextLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(Ok(line));
            }
            match self.fill() {
                Ok(true) => continue,
                Ok(false) => return None,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
