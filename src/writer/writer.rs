use std::io::{self, BufWriter, Write};

/// Handle the logger writes through. Obtained from a `WriterManager`
/// and given back to it on close.
pub trait Writer {
    fn write(&mut self, text: &str) -> io::Result<()>;
    fn new_line(&mut self) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
}

pub struct BufferedWriter<W: Write> {
    inner: BufWriter<W>,
    line_terminator: String,
}

impl<W: Write> BufferedWriter<W> {
    pub fn new(inner: W) -> Self {
        Self::with_line_terminator(inner, "\n")
    }

    pub fn with_line_terminator(inner: W, line_terminator: &str) -> Self {
        Self {
            inner: BufWriter::new(inner),
            line_terminator: line_terminator.into(),
        }
    }

    pub fn into_inner(self) -> io::Result<W> {
        self.inner.into_inner().map_err(|e| e.into_error())
    }
}

impl<W: Write> Writer for BufferedWriter<W> {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())
    }

    fn new_line(&mut self) -> io::Result<()> {
        self.inner.write_all(self.line_terminator.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
