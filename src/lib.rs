pub mod cliopt;
pub mod config;
pub mod error;
pub mod logger;
pub mod reader;
pub mod runner;
pub mod utils;
pub mod writer;
