pub mod analysis;
pub mod error;
pub mod record;

use crate::error::{ParseError, RowError};
use crate::record::{RawSale, SaleRecord};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use tracing::warn;

/// A well-formed row is date, product, quantity, price.
const FIELDS_PER_ROW: usize = 4;

/// Reads the sales CSV at `path`, skipping the header line and any row that
/// fails validation. Skipped rows are reported on the log channel and left
/// out of the result; open and reader-level failures abort the whole parse.
pub fn parse_sales(path: impl AsRef<Path>) -> Result<Vec<SaleRecord>, ParseError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ParseError::Open {
        path: path.display().to_string(),
        source,
    })?;

    // flexible: a row with the wrong field count is skipped here, not a
    // reader error.
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(file);
    let mut records = Vec::new();

    for result in rdr.records() {
        let row = result.map_err(|source| {
            let line = source.position().map_or(0, |pos| pos.line());
            ParseError::Read { line, source }
        })?;
        let line = row.position().map_or(0, |pos| pos.line());

        if row.len() != FIELDS_PER_ROW {
            warn!(
                "skipping line {}: {}",
                line,
                RowError::FieldCount { found: row.len() }
            );
            continue;
        }

        let raw: RawSale = row
            .deserialize(None)
            .map_err(|source| ParseError::Read { line, source })?;

        match SaleRecord::try_from(raw) {
            Ok(sale) => records.push(sale),
            Err(e) => warn!("skipping line {}: {}", line, e),
        }
    }

    Ok(records)
}
