//! JSON-lines event log.
//!
//! The terminal is in raw mode while playing, so nothing goes to stderr.
//! When a log path is configured every game event is appended to that file
//! as one JSON object per line. A failed write closes the log; the game
//! keeps running.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::AppConfig;
use crate::types::CoreEvent;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LogRecord {
    Start {
        tick_ms: u32,
        mouse: bool,
    },
    Serve {
        tick: u64,
        vx: f64,
        vy: f64,
    },
    Point {
        tick: u64,
        scorer: &'static str,
        left: u32,
        right: u32,
    },
    Won {
        tick: u64,
        winner: &'static str,
        text: &'static str,
        left: u32,
        right: u32,
    },
    Reset {
        tick: u64,
    },
    Quit {
        tick: u64,
        left: u32,
        right: u32,
    },
}

impl LogRecord {
    pub fn from_event(tick: u64, event: &CoreEvent) -> Self {
        match *event {
            CoreEvent::Serve { velocity } => LogRecord::Serve {
                tick,
                vx: velocity.x,
                vy: velocity.y,
            },
            CoreEvent::Point {
                scorer,
                left,
                right,
            } => LogRecord::Point {
                tick,
                scorer: scorer.as_str(),
                left,
                right,
            },
            CoreEvent::Won {
                winner,
                left,
                right,
            } => LogRecord::Won {
                tick,
                winner: winner.as_str(),
                text: winner.win_text(),
                left,
                right,
            },
            CoreEvent::Reset => LogRecord::Reset { tick },
        }
    }
}

pub struct EventLog {
    out: Option<Box<dyn Write>>,
    buf: Vec<u8>,
}

impl EventLog {
    pub fn disabled() -> Self {
        Self {
            out: None,
            buf: Vec::new(),
        }
    }

    /// Append to `path`, creating it if needed.
    pub fn open(path: &str) -> Result<Self> {
        let file: File = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening event log {}", path))?;
        Ok(Self::with_writer(BufWriter::new(file)))
    }

    pub fn with_writer(w: impl Write + 'static) -> Self {
        Self {
            out: Some(Box::new(w)),
            buf: Vec::with_capacity(256),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        match config.log_path.as_deref() {
            Some(path) => Self::open(path),
            None => Ok(Self::disabled()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn record(&mut self, record: &LogRecord) {
        let Some(out) = self.out.as_mut() else {
            return;
        };
        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, record).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if out.write_all(&self.buf).is_err() {
            self.out = None;
        }
    }

    pub fn record_events(&mut self, tick: u64, events: impl IntoIterator<Item = CoreEvent>) {
        for event in events {
            self.record(&LogRecord::from_event(tick, &event));
        }
    }

    pub fn flush(&mut self) {
        if let Some(out) = self.out.as_mut() {
            if out.flush().is_err() {
                self.out = None;
            }
        }
    }
}

impl Drop for EventLog {
    fn drop(&mut self) {
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DVec2, Side};
    use std::io;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_record_shapes() {
        let v = serde_json::to_value(LogRecord::from_event(
            7,
            &CoreEvent::Point {
                scorer: Side::Right,
                left: 0,
                right: 1,
            },
        ))
        .unwrap();
        assert_eq!(v["event"], "point");
        assert_eq!(v["tick"], 7);
        assert_eq!(v["scorer"], "right");
        assert_eq!(v["right"], 1);

        let v = serde_json::to_value(LogRecord::from_event(
            9,
            &CoreEvent::Won {
                winner: Side::Left,
                left: 1,
                right: 0,
            },
        ))
        .unwrap();
        assert_eq!(v["event"], "won");
        assert_eq!(v["text"], "Player 1 win!");

        let v = serde_json::to_value(LogRecord::from_event(
            0,
            &CoreEvent::Serve {
                velocity: DVec2::new(-4.0, 0.0),
            },
        ))
        .unwrap();
        assert_eq!(v["event"], "serve");
        assert_eq!(v["vx"], -4.0);
    }

    #[test]
    fn test_disabled_log_ignores_records() {
        let mut log = EventLog::disabled();
        assert!(!log.is_enabled());
        log.record(&LogRecord::Reset { tick: 1 });
        log.flush();
    }

    #[test]
    fn test_write_failure_disables_log() {
        let mut log = EventLog::with_writer(FailingWriter);
        assert!(log.is_enabled());
        log.record(&LogRecord::Reset { tick: 1 });
        assert!(!log.is_enabled());
    }
}
