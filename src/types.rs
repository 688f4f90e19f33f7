use std::fmt;

/// One row of `mapfile.csv`, reduced to the key we compare on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingRow {
    pub family_model: String,
    /// `0xHH` derived from `family_model`, or `family_model` itself when it
    /// does not follow the `<vendor>-<family>-<model>` layout.
    pub model_id: String,
}

/// A `#define NAME 0xHH` line from `intel-family.h`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEntry {
    pub name: String,
    pub model_id: String,
}

impl HeaderEntry {
    pub fn new(name: impl Into<String>, model_id: impl Into<String>) -> Self {
        HeaderEntry {
            name: name.into(),
            model_id: model_id.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownException {
    pub model_id: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A kernel model ID with no row in the mapfile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingRecord {
    pub name: String,
    pub model_id: String,
    pub severity: Severity,
    pub description: String,
}

impl MissingRecord {
    pub fn from_entry(entry: &HeaderEntry) -> Self {
        MissingRecord {
            name: entry.name.clone(),
            model_id: entry.model_id.clone(),
            severity: Severity::Error,
            description: String::new(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
