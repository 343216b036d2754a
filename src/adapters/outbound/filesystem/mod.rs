/// Filesystem adapters for file I/O operations
mod document_reader;
mod file_writer;

pub use document_reader::FileSystemDocumentReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
