//! Finds Intel model IDs that the Linux kernel's `intel-family.h` defines
//! but perfmon's `mapfile.csv` does not publish.

pub mod compare;
pub mod error;
pub mod header;
pub mod logging;
pub mod mapfile;
pub mod report;
pub mod types;

pub use compare::{Comparison, KNOWN_EXCEPTIONS, find_missing};
pub use error::InputError;
pub use report::{Report, ReportLine};
pub use types::{HeaderEntry, KnownException, MappingRow, MissingRecord, Severity};
