//! Where printed results go.
//!
//! The REPL and the `run`/`eval` commands write through an `OutputSink`, so
//! tests can capture exactly what a user would see. Enum dispatch keeps the
//! hot path free of trait objects.

use parking_lot::Mutex;

/// Captures output in memory.
#[derive(Debug, Default)]
pub struct BufferSink {
    buffer: Mutex<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    fn print(&self, msg: &str) {
        self.buffer.lock().push_str(msg);
    }
}

/// Output destination.
#[derive(Debug)]
pub enum OutputSink {
    /// Writes to stdout.
    Stdout,
    /// Captures to a buffer (tests, embedding).
    Buffer(BufferSink),
}

impl OutputSink {
    pub fn stdout() -> Self {
        OutputSink::Stdout
    }

    pub fn buffer() -> Self {
        OutputSink::Buffer(BufferSink::new())
    }

    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            OutputSink::Stdout => println!("{msg}"),
            OutputSink::Buffer(sink) => sink.println(msg),
        }
    }

    /// Print without newline.
    pub fn print(&self, msg: &str) {
        match self {
            OutputSink::Stdout => print!("{msg}"),
            OutputSink::Buffer(sink) => sink.print(msg),
        }
    }

    /// Everything captured so far. Always empty for stdout.
    pub fn output(&self) -> String {
        match self {
            OutputSink::Stdout => String::new(),
            OutputSink::Buffer(sink) => sink.buffer.lock().clone(),
        }
    }

    /// Discard captured output.
    pub fn clear(&self) {
        if let OutputSink::Buffer(sink) = self {
            sink.buffer.lock().clear();
        }
    }
}

impl Default for OutputSink {
    fn default() -> Self {
        Self::stdout()
    }
}
