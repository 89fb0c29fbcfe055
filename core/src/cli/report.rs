use crate::types::SortReport;
use std::fmt;

/// Text summary of one or more sorted sessions
pub struct TextReport<'a> {
    reports: &'a [SortReport],
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(reports: &'a [SortReport]) -> Self {
        Self { reports }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DICOM Sort Summary")?;
        writeln!(f, "==================")?;
        writeln!(f)?;

        for report in self.reports {
            writeln!(f, "{}", report.session_folder.display())?;
            if report.aborted {
                writeln!(f, "  Aborted:        yes")?;
            }
            writeln!(f, "  Moved:          {}", report.moved.len())?;
            writeln!(f, "  Unchanged:      {}", report.unchanged.len())?;
            writeln!(f, "  Skipped:        {}", report.skipped_count())?;
            writeln!(f, "  Series created: {}", report.created_dirs.len())?;
            for dir in &report.created_dirs {
                if let Some(name) = dir.file_name() {
                    writeln!(f, "    {}", name.to_string_lossy())?;
                }
            }
            writeln!(f, "  Warnings:       {}", report.warnings.len())?;
            writeln!(f)?;
        }

        let moved: usize = self.reports.iter().map(|r| r.moved.len()).sum();
        let warnings: usize = self.reports.iter().map(|r| r.warnings.len()).sum();
        writeln!(
            f,
            "Total: {} session(s), {} file(s) moved, {} warning(s)",
            self.reports.len(),
            moved,
            warnings
        )?;

        Ok(())
    }
}
