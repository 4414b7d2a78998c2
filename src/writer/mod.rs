mod manager;
mod writer;

pub use manager::{FileWriterManager, WriterManager};
pub use writer::{BufferedWriter, Writer};
