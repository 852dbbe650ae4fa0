// src/process/mod.rs

pub mod lines;
pub mod utils;

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::{
    fs::File,
    io::{BufReader, Read, Write},
    path::Path,
};
use tracing::{debug, info, instrument, trace};

use crate::error::{OuiError, Result};
use crate::registry::{OuiTable, UNKNOWN_ORG};
use lines::KeepBlankLines;
use utils::pad_row;

/// Label forced into the header's second column.
pub const OUI_HEADER: &str = "OUI";

/// Column holding the MAC address.
const MAC_COLUMN: usize = 0;
/// Column overwritten with the organization.
const OUI_COLUMN: usize = 1;
const MIN_WIDTH: usize = OUI_COLUMN + 1;

/// Counters for one annotation pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AnnotateStats {
    /// Data rows written, header excluded.
    pub rows: u64,
    pub matched: u64,
    pub unknown: u64,
    /// Rows (header included) that had to be padded to two columns.
    pub padded: u64,
}

/// Header row with column 1 forced to [`OUI_HEADER`].
pub fn annotate_header<S: AsRef<str>>(fields: &[S]) -> Vec<String> {
    let mut row = pad_row(fields, MIN_WIDTH);
    row[OUI_COLUMN] = OUI_HEADER.to_string();
    row
}

/// Data row with column 1 replaced by the organization for column 0.
pub fn annotate_row<S: AsRef<str>>(fields: &[S], table: &OuiTable) -> Vec<String> {
    annotate_row_hit(fields, table).0
}

/// As [`annotate_row`], also reporting whether the registry had the prefix.
fn annotate_row_hit<S: AsRef<str>>(fields: &[S], table: &OuiTable) -> (Vec<String>, bool) {
    let mut row = pad_row(fields, MIN_WIDTH);
    let org = table.resolve(row[MAC_COLUMN].trim());
    let hit = org.is_some();
    row[OUI_COLUMN] = org.unwrap_or(UNKNOWN_ORG).to_string();
    (row, hit)
}

/// CSV reader over `input` that yields every line as a record, blank ones included.
pub fn input_reader<R: Read>(input: R) -> csv::Reader<KeepBlankLines<BufReader<R>>> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(KeepBlankLines::new(BufReader::new(input)))
}

/// CSV writer with CRLF terminators and rows of any width.
pub fn output_writer<W: Write>(output: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .flexible(true)
        .terminator(Terminator::CRLF)
        .from_writer(output)
}

/// Stream `reader` into `writer`, annotating one record at a time.
///
/// `input`/`output` only label errors.
pub fn annotate_records<R: Read, W: Write>(
    reader: &mut csv::Reader<R>,
    writer: &mut csv::Writer<W>,
    table: &OuiTable,
    input: &Path,
    output: &Path,
) -> Result<AnnotateStats> {
    let mut stats = AnnotateStats::default();
    let mut record = StringRecord::new();

    // 1) header
    if !reader
        .read_record(&mut record)
        .map_err(|e| OuiError::csv(input, e))?
    {
        debug!("Input has no header row, nothing to annotate");
        writer.flush().map_err(|e| OuiError::file_access(output, e))?;
        return Ok(stats);
    }
    let fields: Vec<&str> = record.iter().collect();
    if fields.len() < MIN_WIDTH {
        stats.padded += 1;
    }
    writer
        .write_record(annotate_header(&fields))
        .map_err(|e| OuiError::csv(output, e))?;

    // 2) data rows
    while reader
        .read_record(&mut record)
        .map_err(|e| OuiError::csv(input, e))?
    {
        let fields: Vec<&str> = record.iter().collect();
        if fields.len() < MIN_WIDTH {
            stats.padded += 1;
        }
        let (row, hit) = annotate_row_hit(&fields, table);
        if hit {
            stats.matched += 1;
        } else {
            stats.unknown += 1;
        }
        trace!(mac = %row[MAC_COLUMN], org = %row[OUI_COLUMN], "Annotated row");
        writer
            .write_record(&row)
            .map_err(|e| OuiError::csv(output, e))?;
        stats.rows += 1;
    }

    writer.flush().map_err(|e| OuiError::file_access(output, e))?;
    Ok(stats)
}

/// Annotate the CSV at `input`, writing the result to `output`.
///
/// Output is created (or truncated) before any row is read, so a failure
/// part-way can leave a partial file behind.
#[instrument(
    level = "info",
    skip(input, output, table),
    fields(input = %input.as_ref().display(), output = %output.as_ref().display())
)]
pub fn annotate_csv<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    table: &OuiTable,
) -> Result<AnnotateStats> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let in_file = File::open(input).map_err(|e| OuiError::file_access(input, e))?;
    let out_file = File::create(output).map_err(|e| OuiError::file_access(output, e))?;

    let mut reader = input_reader(in_file);
    let mut writer = output_writer(out_file);

    let stats = annotate_records(&mut reader, &mut writer, table, input, output)?;
    info!(
        rows = stats.rows,
        matched = stats.matched,
        unknown = stats.unknown,
        padded = stats.padded,
        "Annotated CSV"
    );
    Ok(stats)
}
