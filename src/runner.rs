use std::borrow::Cow;
use std::io::BufRead;

use log::{debug, info, warn};
use serde_json::Value as JsonValue;

use crate::error::{Error, ErrorKind, Result};
use crate::logger::{CsvLogger, Value};
use crate::reader::LineReader;

// stdin
//   -> Line (one JSON array per line)
//     -> Vec<Value>
//       -> CsvLogger: write(v[0]) .. write(v[n-2]), write_line(v[n-1])
//         -> file

pub struct Runner<'a, R> {
    reader: LineReader<R>,
    logger: &'a mut CsvLogger,
}

impl<'a, R: BufRead> Runner<'a, R> {
    pub fn new(reader: LineReader<R>, logger: &'a mut CsvLogger) -> Self {
        Self { reader, logger }
    }

    /// Writes every record from the reader and returns how many were written.
    pub fn run(&mut self) -> Result<usize> {
        let mut written = 0;

        for (line_no, line) in (&mut self.reader).enumerate() {
            let line = line.map_err(|e| ("couldn't read input line", e))?;
            let line = String::from_utf8(line).map_err(|_| {
                Error::new(
                    ErrorKind::Input,
                    &format!("line {}: input is not valid UTF-8", line_no + 1),
                )
            })?;
            if line.trim().is_empty() {
                continue;
            }

            let fields = decode_record(&line).map_err(|e| {
                Error::new(
                    ErrorKind::Input,
                    &format!("line {}: {}", line_no + 1, e.message()),
                )
            })?;
            let (last, init) = match fields.split_last() {
                Some(split) => split,
                None => {
                    debug!("line {}: empty record skipped", line_no + 1);
                    continue;
                }
            };
            for field in init {
                self.logger.write(field.clone())?;
            }
            self.logger.write_line(last.clone())?;
            written += 1;
        }

        info!("{} records written", written);
        Ok(written)
    }
}

/// Closes the logger after a run. A failed run is reported over a failed close.
pub fn finish(run: Result<usize>, logger: &mut CsvLogger) -> Result<usize> {
    let closed = logger.close();
    match (run, closed) {
        (Err(e), Err(close_err)) => {
            warn!("couldn't close output file: {}", close_err);
            Err(e)
        }
        (Err(e), Ok(_)) => Err(e),
        (Ok(_), Err(close_err)) => Err(close_err),
        (Ok(written), Ok(_)) => Ok(written),
    }
}

pub fn decode_record(line: &str) -> Result<Vec<Value<'static>>> {
    let record: Vec<JsonValue> =
        serde_json::from_str(line).map_err(|e| ("record must be a JSON array", e))?;

    record.into_iter().map(decode_field).collect()
}

fn decode_field(field: JsonValue) -> Result<Value<'static>> {
    match field {
        JsonValue::Null => Ok(Value::Null),
        JsonValue::String(s) => Ok(Value::Str(Cow::Owned(s))),
        JsonValue::Bool(b) => Ok(Value::Str(Cow::Borrowed(if b { "true" } else { "false" }))),
        // Integers past i64::MAX are kept as their literal text.
        JsonValue::Number(n) => match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => Ok(Value::Long(i)),
            (None, Some(_)) => Ok(Value::Str(Cow::Owned(n.to_string()))),
            (None, None) => n
                .as_f64()
                .map(Value::Double)
                .ok_or_else(|| Error::from("unsupported number")),
        },
        JsonValue::Array(_) | JsonValue::Object(_) => {
            Err("nested arrays and objects are not supported".into())
        }
    }
}
