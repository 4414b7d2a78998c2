use std::io::{self, BufReader};

use log::LevelFilter;
use structopt::StructOpt;

use csvlog::cliopt::CliOpt;
use csvlog::logger::CsvLogger;
use csvlog::reader::LineReader;
use csvlog::runner::{finish, Runner};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opt = CliOpt::from_args();

    let mut builder = env_logger::Builder::from_default_env();
    if opt.verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();

    let mut logger = CsvLogger::from_config(&opt.logger_config()?);
    logger.open()?;

    let stdin = io::stdin();
    let mut runner = Runner::new(LineReader::new(BufReader::new(stdin.lock())), &mut logger);
    let res = runner.run();

    if opt.verbose {
        eprintln!("{}", logger);
    }
    finish(res, &mut logger)?;
    Ok(())
}
