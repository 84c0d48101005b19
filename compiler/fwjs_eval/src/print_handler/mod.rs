//! Destination for the `print` side effect.
//!
//! Every `print` writes exactly one line: the display form of its operand.
//! Where that line goes is chosen by the embedder:
//! - stdout (default)
//! - an in-memory buffer, for tests and hosts that show output themselves
//!
//! Enum dispatch, no trait objects: the handler set is closed.

use std::io::Write;

use parking_lot::Mutex;

/// Writes each line to stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn write_line(&self, line: &str) {
        let mut out = std::io::stdout().lock();
        // A closed stdout must not abort evaluation
        let _ = writeln!(out, "{line}");
    }
}

/// Records each line in memory.
#[derive(Default)]
pub struct BufferPrintHandler {
    lines: Mutex<Vec<String>>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_line(&self, line: &str) {
        self.lines.lock().push(line.to_owned());
    }

    /// Captured lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Captured output as text, each line terminated by `\n`.
    pub fn get_output(&self) -> String {
        let lines = self.lines.lock();
        let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
        for line in lines.iter() {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
}

impl PrintHandlerImpl {
    /// Emit one line (a newline is appended).
    pub fn write_line(&self, line: &str) {
        match self {
            Self::Stdout(h) => h.write_line(line),
            Self::Buffer(h) => h.write_line(line),
        }
    }

    /// Captured lines. Always empty for stdout.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Stdout(_) => Vec::new(),
            Self::Buffer(h) => h.lines(),
        }
    }

    /// Captured output. Always empty for stdout.
    pub fn get_output(&self) -> String {
        match self {
            Self::Stdout(_) => String::new(),
            Self::Buffer(h) => h.get_output(),
        }
    }

    pub fn clear(&self) {
        match self {
            Self::Stdout(_) => {}
            Self::Buffer(h) => h.clear(),
        }
    }
}

/// Shared print handler, cloned into every child interpreter.
pub type SharedPrintHandler = std::sync::Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

/// A handler that captures output; read it back with `get_output` or `lines`.
pub fn buffer_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

#[cfg(test)]
mod tests;
