//! The terminal collaborator boundary: `in`/`out` opcodes go through this
//! trait instead of touching stdin/stdout directly, so the core crate has
//! no terminal dependency and tests can script input/capture output.

use std::io::{self, Read, Write};

pub trait Io {
    /// Reads a whitespace-delimited decimal integer. `None` on EOF or a
    /// malformed token, which the caller treats as a no-op (spec §4.6).
    fn read_number(&mut self) -> Option<i32>;

    /// Reads a single byte and returns its value as a code point. `None`
    /// on EOF. Byte-oriented, matching the reference C `fscanf("%c", …)`
    /// (spec §9's `in(char)` Open Question — resolved in DESIGN.md).
    fn read_char(&mut self) -> Option<i32>;

    fn write_number(&mut self, value: i32);

    /// Writes `value` as a Unicode character if it is a valid scalar
    /// value; otherwise nothing is written (the pop still happened).
    fn write_char(&mut self, value: i32);
}

/// Real terminal I/O. Flushes after every write (spec §5: standard I/O
/// must not be buffered so interactive programs display output
/// promptly).
pub struct StdIo {
    stdin: io::Stdin,
}

impl StdIo {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Default for StdIo {
    fn default() -> Self {
        Self::new()
    }
}

impl Io for StdIo {
    /// Skips leading whitespace, then collects one token and parses it —
    /// close enough to scanf's `"%d"` for interactive use.
    fn read_number(&mut self) -> Option<i32> {
        let mut lock = self.stdin.lock();
        let mut byte = [0u8; 1];
        let mut token = Vec::new();

        loop {
            lock.read_exact(&mut byte).ok()?;
            if !byte[0].is_ascii_whitespace() {
                token.push(byte[0]);
                break;
            }
        }
        while lock.read_exact(&mut byte).is_ok() && !byte[0].is_ascii_whitespace() {
            token.push(byte[0]);
        }

        std::str::from_utf8(&token).ok()?.parse().ok()
    }

    fn read_char(&mut self) -> Option<i32> {
        let mut byte = [0u8; 1];
        self.stdin.lock().read_exact(&mut byte).ok()?;
        Some(byte[0] as i32)
    }

    fn write_number(&mut self, value: i32) {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        let _ = write!(lock, "{}", value);
        let _ = lock.flush();
    }

    fn write_char(&mut self, value: i32) {
        if let Some(c) = char::from_u32(value as u32) {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            let _ = write!(lock, "{}", c);
            let _ = lock.flush();
        }
    }
}

/// In-memory `Io` for tests: `reads` is drained front-to-back, `writes`
/// records every output call in order.
#[derive(Debug, Default)]
pub struct BufferIo {
    reads: std::collections::VecDeque<i32>,
    pub writes: Vec<i32>,
}

impl BufferIo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            reads: values.into_iter().collect(),
            writes: Vec::new(),
        }
    }

    pub fn output_string(&self) -> String {
        self.writes
            .iter()
            .filter_map(|&v| char::from_u32(v as u32))
            .collect()
    }
}

impl Io for BufferIo {
    fn read_number(&mut self) -> Option<i32> {
        self.reads.pop_front()
    }

    fn read_char(&mut self) -> Option<i32> {
        self.reads.pop_front()
    }

    fn write_number(&mut self, value: i32) {
        self.writes.push(value);
    }

    fn write_char(&mut self, value: i32) {
        if char::from_u32(value as u32).is_some() {
            self.writes.push(value);
        }
    }
}
