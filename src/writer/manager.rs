use std::fs::{File, OpenOptions};
use std::path::Path;

use log::debug;

use super::writer::{BufferedWriter, Writer};
use crate::error::Result;

/// Acquires and releases the writer handle for a file path.
pub trait WriterManager {
    fn open(&mut self, path: &Path) -> Result<Box<dyn Writer>>;

    /// Releases the handle. `None` means nothing was ever opened and must not fail.
    fn close(&mut self, writer: Option<Box<dyn Writer>>) -> Result<()>;
}

pub struct FileWriterManager {
    append: bool,
    line_terminator: String,
}

impl FileWriterManager {
    pub fn new() -> Self {
        Self {
            append: false,
            line_terminator: "\n".into(),
        }
    }

    pub fn append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }

    pub fn line_terminator(mut self, line_terminator: &str) -> Self {
        self.line_terminator = line_terminator.into();
        self
    }

    fn open_file(&self, path: &Path) -> std::io::Result<File> {
        let mut options = OpenOptions::new();
        options.create(true);
        if self.append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }
        options.open(path)
    }
}

impl Default for FileWriterManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WriterManager for FileWriterManager {
    fn open(&mut self, path: &Path) -> Result<Box<dyn Writer>> {
        let file = self
            .open_file(path)
            .map_err(|e| ("couldn't open file for writing", e))?;

        debug!("opened {} (append: {})", path.display(), self.append);
        Ok(Box::new(BufferedWriter::with_line_terminator(
            file,
            &self.line_terminator,
        )))
    }

    fn close(&mut self, writer: Option<Box<dyn Writer>>) -> Result<()> {
        if let Some(mut writer) = writer {
            writer
                .flush()
                .map_err(|e| ("couldn't flush file writer", e))?;
            debug!("closed file writer");
        }
        Ok(())
    }
}
