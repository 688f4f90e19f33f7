use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::error::InputError;
use crate::types::HeaderEntry;

//  #define INTEL_FAM6_ATOM_AIRMONT		0x4C /* Cherry Trail, Braswell */
//    -> ("INTEL_FAM6_ATOM_AIRMONT", "0x4C")
static DEFINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#define\W*(\w*)\W*(0x[\da-zA-Z]{2})").expect("static regex must compile")
});

/// Parses a single header line. Only defines with a literal two digit
/// value match; symbolic aliases such as `X86_MODEL_ANY` do not.
pub fn parse_line(line: &str) -> Option<HeaderEntry> {
    let caps = DEFINE_RE.captures(line)?;
    Some(HeaderEntry::new(&caps[1], &caps[2]))
}

/// Loads every model define from `intel-family.h`.
///
/// # Errors
/// Returns an error if the file is missing or cannot be read.
pub fn load_header(path: &Path) -> Result<Vec<HeaderEntry>, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInputFile {
            path: path.to_path_buf(),
        });
    }

    info!("Loading {}.", path.display());
    let read_err = |source: std::io::Error| InputError::Read {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(read_err)?;
    let reader = BufReader::new(file);

    let mut entries = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(read_err)?;
        if let Some(entry) = parse_line(&line) {
            entries.push(entry);
        }
    }
    Ok(entries)
}
