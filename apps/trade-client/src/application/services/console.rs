//! Shared operator console.
//!
//! The operator loop and inbound callbacks both write here. Each call holds
//! the lock for the whole block it writes, so a prompt and an inbound dump
//! never interleave mid-line. Reading input is not done under the lock.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Cloneable handle to the console output.
#[derive(Clone)]
pub struct Console {
    writer: SharedWriter,
}

impl Console {
    /// Console writing to an arbitrary sink.
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Console writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Write a block under a single lock acquisition, then flush.
    ///
    /// # Errors
    ///
    /// Returns the first write error from the block or the flush.
    pub fn write_block<F>(&self, block: F) -> io::Result<()>
    where
        F: FnOnce(&mut dyn Write) -> io::Result<()>,
    {
        let mut writer = self.writer.lock();
        block(&mut **writer)?;
        writer.flush()
    }

    /// Write one line.
    ///
    /// # Errors
    ///
    /// Returns the underlying write error.
    pub fn line(&self, text: &str) -> io::Result<()> {
        self.write_block(|w| writeln!(w, "{text}"))
    }

    /// Write text without a line terminator, for prompts.
    ///
    /// # Errors
    ///
    /// Returns the underlying write error.
    pub fn prompt(&self, text: &str) -> io::Result<()> {
        self.write_block(|w| write!(w, "{text}"))
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn clones_share_one_writer() {
        let capture = Capture::default();
        let console = Console::new(capture.clone());
        let other = console.clone();

        console.prompt("Symbol: ").unwrap();
        other.line("AAPL").unwrap();

        assert_eq!(String::from_utf8(capture.0.lock().clone()).unwrap(), "Symbol: AAPL\n");
    }

    #[test]
    fn concurrent_blocks_do_not_interleave() {
        let capture = Capture::default();
        let console = Console::new(capture.clone());

        let handles: Vec<_> = (0..4)
            .map(|n| {
                let console = console.clone();
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        console
                            .write_block(|w| {
                                writeln!(w, "begin {n}")?;
                                writeln!(w, "end {n}")
                            })
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let output = String::from_utf8(capture.0.lock().clone()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 400);
        for pair in lines.chunks(2) {
            let n = pair[0].trim_start_matches("begin ");
            assert_eq!(pair[1], format!("end {n}"));
        }
    }
}
