//! Rolling Logger
//!
//! `tracing-subscriber` fmt layer whose writer keeps the most recent lines
//! in a circular buffer and forwards every line to the browser console
//! (stderr off wasm).

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::level_filters::LevelFilter;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::fmt::MakeWriter;

static RING: OnceLock<RingBuffer> = OnceLock::new();

const TIME_FORMAT: &str = "%H:%M:%S%.3f";

/// Bounded in-memory log history, usable as a `MakeWriter`
#[derive(Clone)]
pub struct RingBuffer {
    capacity: usize,
    lines: Arc<Mutex<VecDeque<String>>>,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
        }
    }

    /// Snapshot of buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn push(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if let Ok(mut lines) = self.lines.lock() {
            if lines.len() == self.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }
}

/// Writer for one formatted event; lines are emitted on drop
pub struct LineWriter {
    ring: RingBuffer,
    level: Level,
    pending: Vec<u8>,
}

impl io::Write for LineWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LineWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.pending);
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            emit(self.level, line);
            self.ring.push(line.to_string());
        }
    }
}

impl<'a> MakeWriter<'a> for RingBuffer {
    type Writer = LineWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LineWriter {
            ring: self.clone(),
            level: Level::INFO,
            pending: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        LineWriter {
            ring: self.clone(),
            level: *meta.level(),
            pending: Vec::new(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global subscriber. Only the first call takes effect.
pub fn init(
    level: LevelFilter,
    capacity: usize,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let ring = RING.get_or_init(|| RingBuffer::new(capacity)).clone();
    tracing_subscriber::fmt()
        .with_writer(ring)
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .with_timer(ChronoLocal::new(TIME_FORMAT.to_string()))
        .try_init()
}

/// Buffered lines of the installed subscriber (empty before `init`)
pub fn recent_lines() -> Vec<String> {
    RING.get().map(RingBuffer::lines).unwrap_or_default()
}
