use crate::{ConvertError, OuiRecord};
use csv::{Reader, ReaderBuilder, StringRecord};
use std::io::{Read, Write};

/// Reader settings for registry exports
///
/// The first row is a header and is dropped without being looked at. Rows are
/// allowed to differ in length; only rows too short to project are rejected.
pub fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .delimiter(b',')
        .quote(b'"')
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::None);
    builder
}

/// Writes `assignment,organization` for every data row of `rdr` to `out`
///
/// Rows are handled one at a time in input order. The first error stops the
/// pass, anything written before it stays written. Returns the number of rows
/// written.
pub fn convert<R, W>(mut rdr: Reader<R>, mut out: W) -> Result<u64, ConvertError>
where
    R: Read,
    W: Write,
{
    let mut record = StringRecord::new();
    let mut written = 0;

    while rdr.read_record(&mut record)? {
        let oui = OuiRecord::try_from(&record)?;
        writeln!(out, "{}", oui)?;
        written += 1;
    }

    out.flush()?;
    Ok(written)
}
