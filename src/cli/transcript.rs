//! Session transcript: mirrors prompts, input lines, and result blocks to a
//! file, in the order the user saw them.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub struct Transcript {
    writer: BufWriter<File>,
}

impl Transcript {
    pub fn create(path: &Path) -> io::Result<Self> {
        Ok(Self {
            writer: BufWriter::new(File::create(path)?),
        })
    }

    /// Appends one block of text and flushes, so the log survives an
    /// interrupted session.
    pub fn record(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()
    }
}
