pub mod export;
pub mod summary;

pub use export::{
    ExportMetadata, ExportRow, export_file_name, export_to_string, read_export, write_export,
};
pub use summary::{DatasetSummary, summarize};
