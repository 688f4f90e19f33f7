use tracing::{Level, error, info, warn};

use crate::types::{MissingRecord, Severity};

const NAME_WIDTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub level: Level,
    pub message: String,
}

impl ReportLine {
    fn new(level: Level, message: impl Into<String>) -> Self {
        ReportLine {
            level,
            message: message.into(),
        }
    }
}

/// Human readable summary of the missing model IDs.
pub struct Report<'a> {
    missing: &'a [MissingRecord],
}

impl<'a> Report<'a> {
    pub fn new(missing: &'a [MissingRecord]) -> Self {
        Report { missing }
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &'a MissingRecord> + 'a {
        self.missing.iter().filter(move |r| r.severity == severity)
    }

    /// True when at least one record is an error. Drives the exit status.
    pub fn has_errors(&self) -> bool {
        self.missing.iter().any(MissingRecord::is_error)
    }

    pub fn lines(&self) -> Vec<ReportLine> {
        let warnings: Vec<&MissingRecord> = self.with_severity(Severity::Warning).collect();
        let errors: Vec<&MissingRecord> = self.with_severity(Severity::Error).collect();

        let mut lines = Vec::new();
        if warnings.is_empty() && errors.is_empty() {
            lines.push(ReportLine::new(
                Level::INFO,
                "Mapfile and kernel model IDs are in sync.",
            ));
            return lines;
        }

        if !warnings.is_empty() {
            lines.push(ReportLine::new(
                Level::WARN,
                "Mapfile and kernel have the following known acceptable mismatches.",
            ));
            for rec in warnings {
                lines.push(ReportLine::new(
                    Level::WARN,
                    format!(
                        "  {:<w$} {}  {}",
                        rec.name,
                        rec.model_id,
                        rec.description,
                        w = NAME_WIDTH
                    ),
                ));
            }
        }

        if !errors.is_empty() {
            lines.push(ReportLine::new(Level::ERROR, "Mapfile and kernel are out of sync!"));
            for rec in errors {
                lines.push(ReportLine::new(
                    Level::ERROR,
                    format!("  {:<w$} {}", rec.name, rec.model_id, w = NAME_WIDTH),
                ));
            }
        }
        lines
    }

    /// Writes every line through the tracing subscriber.
    pub fn emit(&self) {
        for line in self.lines() {
            if line.level == Level::ERROR {
                error!("{}", line.message);
            } else if line.level == Level::WARN {
                warn!("{}", line.message);
            } else {
                info!("{}", line.message);
            }
        }
    }
}
