pub use convert::{convert, reader_builder};
pub use record::OuiRecord;
pub use vendor::{mac_prefix, VendorDb, UNKNOWN_VENDOR};

mod convert;
mod record;
mod vendor;

#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("Record at line {line} has {len} fields, expected at least 3")]
    ShortRecord { line: u64, len: usize },
    #[error("Failed writing converted record: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum VendorDbError {
    #[error("Line {0} is too short to hold an assignment and vendor name")]
    MalformedLine(usize),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
