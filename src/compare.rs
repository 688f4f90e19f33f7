use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::error::InputError;
use crate::header::load_header;
use crate::mapfile::load_mapfile;
use crate::report::Report;
use crate::types::{HeaderEntry, KnownException, MappingRow, MissingRecord, Severity};

pub const MAPFILE_NAME: &str = "mapfile.csv";
pub const INTEL_FAMILY_HEADER: [&str; 5] = ["arch", "x86", "include", "asm", "intel-family.h"];

/// Model IDs the kernel knows about that perfmon deliberately does not publish.
pub static KNOWN_EXCEPTIONS: &[KnownException] = &[
    KnownException {
        model_id: "0x09",
        description: "Quark event files are not published.",
    },
    KnownException {
        model_id: "0x0E",
        description: "Yonah event files are not published.",
    },
    KnownException {
        model_id: "0x0F",
        description: "Core2 event files are not published.",
    },
    KnownException {
        model_id: "0x16",
        description: "Core2 event files are not published.",
    },
    KnownException {
        model_id: "0x17",
        description: "Core2 event files are not published.",
    },
    KnownException {
        model_id: "0x1D",
        description: "Core2 event files are not published.",
    },
    KnownException {
        model_id: "0x66",
        description: "Cannonlake event files are not published.",
    },
    KnownException {
        model_id: "0x75",
        description: "Lightning Mountain event files are not published.",
    },
    KnownException {
        model_id: "0x8A",
        description: "Lakefield event files are not published.",
    },
    KnownException {
        model_id: "0x9D",
        description: "Spring Hill event files are not published.",
    },
];

/// Returns the header entries whose model ID has no mapfile row, sorted by
/// model ID. Entries covered by `exceptions` are downgraded to warnings.
pub fn find_missing(
    mapping: &[MappingRow],
    header: &[HeaderEntry],
    exceptions: &[KnownException],
) -> Vec<MissingRecord> {
    let mut missing = unmapped(mapping, header);
    info!("Setting known or intentionally missing IDs.");
    apply_exceptions(&mut missing, exceptions);
    missing
}

/// Every header entry absent from the mapfile, as an error, sorted by model ID.
fn unmapped(mapping: &[MappingRow], header: &[HeaderEntry]) -> Vec<MissingRecord> {
    let published: HashSet<&str> = mapping.iter().map(|r| r.model_id.as_str()).collect();

    let mut missing: Vec<MissingRecord> = header
        .iter()
        .filter(|e| !published.contains(e.model_id.as_str()))
        .map(MissingRecord::from_entry)
        .collect();
    missing.sort_by(|a, b| a.model_id.cmp(&b.model_id));
    missing
}

fn apply_exceptions(missing: &mut [MissingRecord], exceptions: &[KnownException]) {
    for exception in exceptions {
        for rec in missing.iter_mut().filter(|r| r.model_id == exception.model_id) {
            rec.severity = Severity::Warning;
            rec.description = exception.description.to_string();
        }
    }
}

/// One mapfile vs. kernel comparison run.
#[derive(Debug)]
pub struct Comparison {
    mapping: Vec<MappingRow>,
    header: Vec<HeaderEntry>,
    missing: Vec<MissingRecord>,
}

impl Comparison {
    /// Loads `mapfile.csv` from the perfmon checkout and `intel-family.h`
    /// from the kernel checkout, then compares them.
    ///
    /// # Errors
    /// Returns an error if either input is missing or malformed.
    pub fn new(perfmon_root: &Path, kernel_root: &Path) -> Result<Self, InputError> {
        Self::with_exceptions(perfmon_root, kernel_root, KNOWN_EXCEPTIONS)
    }

    /// Same as [`Comparison::new`] with a caller supplied exception list.
    ///
    /// # Errors
    /// Returns an error if either input is missing or malformed.
    pub fn with_exceptions(
        perfmon_root: &Path,
        kernel_root: &Path,
        exceptions: &[KnownException],
    ) -> Result<Self, InputError> {
        let mapfile_path = perfmon_root.join(MAPFILE_NAME);
        let header_path = INTEL_FAMILY_HEADER
            .iter()
            .fold(kernel_root.to_path_buf(), |p, part| p.join(part));

        let mapping = load_mapfile(&mapfile_path)?;
        let header = load_header(&header_path)?;

        info!(
            "Finding {} model IDs missing in {}.",
            file_name(&header_path),
            file_name(&mapfile_path)
        );
        let missing = find_missing(&mapping, &header, exceptions);

        Ok(Comparison {
            mapping,
            header,
            missing,
        })
    }

    pub fn mapping(&self) -> &[MappingRow] {
        &self.mapping
    }

    pub fn header(&self) -> &[HeaderEntry] {
        &self.header
    }

    pub fn missing(&self) -> &[MissingRecord] {
        &self.missing
    }

    pub fn report(&self) -> Report<'_> {
        Report::new(&self.missing)
    }

    /// True if any kernel model ID is missing without a known exception.
    pub fn is_missing_model(&self) -> bool {
        self.report().has_errors()
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
