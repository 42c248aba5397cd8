use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

use crate::errors::{IntervalError, IntervalResult};
use crate::models::Interval;

///
/// Get a reader for either a gzipped or non-gzipped file.
///
/// # Arguments
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Parse one line of a BED-like file into its chromosome and interval.
/// Only the first three tab-separated columns are read; anything after them is ignored.
///
/// Returns `Ok(None)` for blank lines, comments and `track`/`browser` header lines.
///
pub fn parse_bed_line(line: &str) -> IntervalResult<Option<(&str, Interval<u64>)>> {
    let trimmed = line.trim_end();
    if trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("track")
        || trimmed.starts_with("browser")
    {
        return Ok(None);
    }

    let mut fields = trimmed.split('\t');

    let chr = fields
        .next()
        .filter(|c| !c.is_empty())
        .ok_or_else(|| IntervalError::ParseError(format!("Missing chromosome field: {line}")))?;
    let start = fields
        .next()
        .ok_or_else(|| IntervalError::ParseError(format!("Missing start field: {line}")))?;
    let end = fields
        .next()
        .ok_or_else(|| IntervalError::ParseError(format!("Missing end field: {line}")))?;

    let start = start
        .trim()
        .parse::<u64>()
        .map_err(|e| IntervalError::ParseError(format!("Invalid start '{start}': {e}")))?;
    let end = end
        .trim()
        .parse::<u64>()
        .map_err(|e| IntervalError::ParseError(format!("Invalid end '{end}': {e}")))?;

    Ok(Some((chr, Interval::try_new(start, end)?)))
}
