/// Filesystem adapters for reading BOM snapshots and writing reports
mod file_reader;
mod file_writer;

pub use file_reader::JsonFileBomSource;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
