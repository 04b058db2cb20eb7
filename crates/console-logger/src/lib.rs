//! Console Logger
//!
//! A `tracing` subscriber for WASM frontends. Every formatted event goes to
//! the browser devtools console (using the console method matching its
//! level) and into a bounded ring buffer, so the app can show or copy the
//! most recent lines when something goes wrong.

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex, OnceLock};

use chrono::{DateTime, Utc};
use tracing::{Level, Metadata};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Lines kept by the global buffer
pub const DEFAULT_CAPACITY: usize = 200;

static BUFFER: OnceLock<SharedBuffer> = OnceLock::new();

type SharedBuffer = Arc<Mutex<RollingBuffer>>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("invalid log level: {0}")]
    InvalidLevel(String),
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(String),
}

/// One captured log line
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub at: DateTime<Utc>,
    pub level: Level,
    pub text: String,
}

/// Fixed-capacity line buffer; the oldest line is evicted first.
#[derive(Debug)]
pub struct RollingBuffer {
    lines: VecDeque<LogLine>,
    capacity: usize,
}

impl RollingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, line: LogLine) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Oldest first
    pub fn snapshot(&self) -> Vec<LogLine> {
        self.lines.iter().cloned().collect()
    }
}

/// `MakeWriter` handing out one `ConsoleWriter` per event
#[derive(Clone)]
pub struct ConsoleMakeWriter {
    buffer: SharedBuffer,
}

impl ConsoleMakeWriter {
    pub fn new(buffer: SharedBuffer) -> Self {
        Self { buffer }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO, self.buffer.clone())
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level(), self.buffer.clone())
    }
}

/// Collects one formatted event and emits it on drop
pub struct ConsoleWriter {
    level: Level,
    bytes: Vec<u8>,
    buffer: SharedBuffer,
}

impl ConsoleWriter {
    fn new(level: Level, buffer: SharedBuffer) -> Self {
        Self {
            level,
            bytes: Vec::new(),
            buffer,
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.bytes.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.bytes).trim_end().to_string();
        emit(self.level, &text);
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(LogLine {
                at: Utc::now(),
                level: self.level,
                text,
            });
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, text: &str) {
    let value = wasm_bindgen::JsValue::from_str(text);
    match level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::INFO => web_sys::console::info_1(&value),
        _ => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, text: &str) {
    eprintln!("{}", text);
}

/// Install the global subscriber.
///
/// `level` accepts the usual names (`trace`..`error`, `off`).
pub fn init_logger(app_name: &str, level: &str) -> Result<(), LoggerError> {
    let filter: LevelFilter = level
        .parse()
        .map_err(|_| LoggerError::InvalidLevel(level.to_string()))?;

    let buffer = BUFFER
        .get_or_init(|| Arc::new(Mutex::new(RollingBuffer::new(DEFAULT_CAPACITY))))
        .clone();

    let layer = fmt::layer()
        .without_time()
        .with_ansi(false)
        .with_target(true)
        .with_writer(ConsoleMakeWriter::new(buffer));

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))?;

    tracing::info!(app = app_name, %filter, "console logger ready");
    Ok(())
}

/// Recent lines from the global buffer (empty before `init_logger`)
pub fn recent_lines() -> Vec<LogLine> {
    BUFFER
        .get()
        .and_then(|buffer| buffer.lock().ok().map(|b| b.snapshot()))
        .unwrap_or_default()
}

/// Plain-text dump of `lines`, one per row, prefixed with the UTC time
pub fn render_lines(lines: &[LogLine]) -> String {
    lines
        .iter()
        .map(|l| format!("{} {}", l.at.format("%H:%M:%S"), l.text))
        .collect::<Vec<_>>()
        .join("\n")
}
