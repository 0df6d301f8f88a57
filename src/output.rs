//! Buffered writer for result files.
//!
//! Uses itoa for integer formatting to avoid allocation per value.

use std::io::{self, BufWriter, Write};

/// Output buffer size (64 KB). Result files hold at most a few thousand
/// short lines with the default range.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Writes one decimal integer per `\n`-terminated line.
pub struct ResultWriter<W: Write> {
    writer: BufWriter<W>,
    itoa_buf: itoa::Buffer,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(output: W) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_SIZE, output)
    }

    pub fn with_capacity(capacity: usize, output: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(capacity, output),
            itoa_buf: itoa::Buffer::new(),
        }
    }

    /// Write a value followed by newline.
    #[inline]
    pub fn write_value(&mut self, value: i64) -> io::Result<()> {
        self.writer
            .write_all(self.itoa_buf.format(value).as_bytes())?;
        self.writer.write_all(b"\n")
    }

    /// Write every value in order.
    pub fn write_all_values(&mut self, values: &[i64]) -> io::Result<()> {
        for &value in values {
            self.write_value(value)?;
        }
        Ok(())
    }

    /// Flush the buffer and return the underlying writer.
    pub fn finish(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}
