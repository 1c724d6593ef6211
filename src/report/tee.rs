//! Output duplication to console and log file.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// A writer that forwards everything to stdout and to a log file, so a run
/// stays visible on screen while being captured for later review.
pub struct Tee {
    terminal: io::Stdout,
    log: File,
}

impl Tee {
    /// Creates the log file (truncating any previous one) and returns the
    /// combined writer.
    pub fn create(path: &Path) -> io::Result<Self> {
        Ok(Self {
            terminal: io::stdout(),
            log: File::create(path)?,
        })
    }
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.terminal.write_all(buf)?;
        self.log.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.terminal.flush()?;
        self.log.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_tee_writes_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run.log");
        {
            let mut tee = Tee::create(&path).unwrap();
            writeln!(tee, "hello").unwrap();
            tee.flush().unwrap();
        }
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "hello\n");
    }

    #[test]
    fn test_tee_truncates_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run.log");
        std::fs::write(&path, "old contents").unwrap();
        {
            let mut tee = Tee::create(&path).unwrap();
            write!(tee, "new").unwrap();
            tee.flush().unwrap();
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }
}
