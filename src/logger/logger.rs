use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use log::{debug, warn};

use super::value::Value;
use crate::config::LoggerConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::utils::time::format_modified;
use crate::writer::{FileWriterManager, Writer, WriterManager};

pub const DEFAULT_DELIMITER: &str = ",";
pub const DEFAULT_NULL_STRING: &str = "null";

/// Writes values as delimiter-separated lines.
///
/// The logger is Closed until `open()` obtains a writer from its
/// `WriterManager`, and Closed again after `close()` hands the writer back.
/// Writing while Closed fails with `ErrorKind::NotOpen`.
pub struct CsvLogger {
    filename: Option<PathBuf>,
    delimiter: String,
    null_string: String,
    writer_manager: Box<dyn WriterManager>,
    writer: Option<Box<dyn Writer>>,
    // Path the current writer was opened for; later set_filename calls don't move it.
    opened_path: Option<PathBuf>,
}

impl CsvLogger {
    pub fn new() -> Self {
        Self {
            filename: None,
            delimiter: DEFAULT_DELIMITER.into(),
            null_string: DEFAULT_NULL_STRING.into(),
            writer_manager: Box::new(FileWriterManager::new()),
            writer: None,
            opened_path: None,
        }
    }

    pub fn from_config(config: &LoggerConfig) -> Self {
        let mut logger = Self::new();
        logger.set_filename(&config.filename);
        logger.set_delimiter(&config.delimiter);
        logger.set_null_string(&config.null_string);
        logger.set_writer_manager(Box::new(
            FileWriterManager::new()
                .append(config.append)
                .line_terminator(&config.line_terminator),
        ));
        logger
    }

    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    pub fn set_filename<P: AsRef<Path>>(&mut self, filename: P) {
        self.filename = Some(filename.as_ref().to_path_buf());
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn set_delimiter(&mut self, delimiter: &str) {
        self.delimiter = delimiter.into();
    }

    pub fn null_string(&self) -> &str {
        &self.null_string
    }

    pub fn set_null_string(&mut self, null_string: &str) {
        self.null_string = null_string.into();
    }

    pub fn set_writer_manager(&mut self, writer_manager: Box<dyn WriterManager>) {
        self.writer_manager = writer_manager;
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.writer.is_some()
    }

    pub fn open(&mut self) -> Result<()> {
        if self.is_open() {
            return Err(Error::new(ErrorKind::Config, "CSV file is already open"));
        }

        let filename = self
            .filename
            .as_ref()
            .ok_or_else(|| Error::new(ErrorKind::Config, "no filename configured"))?;

        self.writer = Some(self.writer_manager.open(filename)?);
        self.opened_path = Some(filename.clone());
        debug!("opened CSV file {}", filename.display());
        Ok(())
    }

    pub fn close(&mut self) -> Result<()> {
        let writer = self.writer.take();
        self.opened_path = None;
        if writer.is_none() {
            debug!("closing CSV logger that was never opened");
        }
        self.writer_manager.close(writer)
    }

    /// Writes the value followed by the delimiter. `Null` writes the delimiter alone.
    pub fn write<'a, V: Into<Value<'a>>>(&mut self, value: V) -> Result<()> {
        let text = format!("{}{}", value.into().render(), self.delimiter);
        self.writer()?
            .write(&text)
            .map_err(|e| ("couldn't write field", e))?;
        Ok(())
    }

    /// Writes the value and terminates the line. `Null` writes the null string.
    pub fn write_line<'a, V: Into<Value<'a>>>(&mut self, value: V) -> Result<()> {
        let value = value.into();
        let text = if value.is_null() {
            self.null_string.clone()
        } else {
            value.render().into_owned()
        };

        let writer = self.writer()?;
        writer
            .write(&text)
            .map_err(|e| ("couldn't write field", e))?;
        writer
            .new_line()
            .map_err(|e| ("couldn't terminate line", e))?;
        Ok(())
    }

    /// Writes the fields as one line. An empty sequence writes nothing.
    pub fn write_line_all<I, S>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let writer = self.writer.as_mut().ok_or_else(Error::not_open)?;

        let mut fields = fields.into_iter().peekable();
        if fields.peek().is_none() {
            return Ok(());
        }

        while let Some(field) = fields.next() {
            let res = if fields.peek().is_some() {
                writer.write(&format!("{}{}", field.as_ref(), self.delimiter))
            } else {
                writer.write(field.as_ref())
            };
            res.map_err(|e| ("couldn't write field", e))?;
        }

        writer
            .new_line()
            .map_err(|e| ("couldn't terminate line", e))?;
        Ok(())
    }

    fn writer(&mut self) -> Result<&mut Box<dyn Writer>> {
        self.writer.as_mut().ok_or_else(Error::not_open)
    }
}

impl Default for CsvLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CsvLogger {
    fn drop(&mut self) {
        if self.is_open() {
            warn!("CSV logger dropped while open, closing it");
            if let Err(e) = self.close() {
                warn!("couldn't close CSV logger: {}", e);
            }
        }
    }
}

impl fmt::Display for CsvLogger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let filename = match (&self.writer, &self.opened_path) {
            (Some(_), Some(filename)) => filename,
            _ => return write!(f, "CSV File not opened yet."),
        };

        // A file that vanished after open reports the epoch and zero bytes.
        let metadata = fs::metadata(filename).ok();
        let modified = metadata
            .as_ref()
            .and_then(|m| m.modified().ok())
            .unwrap_or(SystemTime::UNIX_EPOCH);
        let size = metadata.map(|m| m.len()).unwrap_or(0);

        write!(
            f,
            "CSV File [{}], last modfied at [{}], size [{} bytes].",
            filename.display(),
            format_modified(modified),
            size
        )
    }
}
