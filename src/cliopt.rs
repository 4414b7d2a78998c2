use std::path::PathBuf;

use structopt::StructOpt;

use crate::config::LoggerConfig;
use crate::error::{Error, ErrorKind, Result};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "csvlog",
    about = "Write JSON arrays from stdin as delimiter-separated lines"
)]
pub struct CliOpt {
    /// Output file. Overrides the filename from --config.
    #[structopt(parse(from_os_str))]
    pub output: Option<PathBuf>,

    #[structopt(long = "delimiter", short = "d")]
    pub delimiter: Option<String>,

    /// Written in place of a null last field.
    #[structopt(long = "null", short = "n")]
    pub null_string: Option<String>,

    #[structopt(long = "append", short = "a")]
    pub append: bool,

    /// JSON file with logger settings.
    #[structopt(long = "config", short = "c", parse(from_os_str))]
    pub config: Option<PathBuf>,

    /// Print the file summary to stderr when done.
    #[structopt(long = "verbose", short = "v")]
    pub verbose: bool,
}

impl CliOpt {
    /// Config file values first, then command line flags on top.
    pub fn logger_config(&self) -> Result<LoggerConfig> {
        let mut config = match &self.config {
            Some(path) => LoggerConfig::from_file(path)?,
            None => LoggerConfig::default(),
        };

        if let Some(output) = &self.output {
            config.filename = output.clone();
        }
        if let Some(delimiter) = &self.delimiter {
            config.delimiter = delimiter.clone();
        }
        if let Some(null_string) = &self.null_string {
            config.null_string = null_string.clone();
        }
        if self.append {
            config.append = true;
        }

        if config.filename.as_os_str().is_empty() {
            return Err(Error::new(ErrorKind::Config, "no output file given"));
        }
        Ok(config)
    }
}
