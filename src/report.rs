use std::fmt;

use crate::analyzer::AnalysisResult;

/// The human-readable four-line report.
impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "External Links: {}", self.external_link_count)?;
        writeln!(f, "Internal Links: {}", self.internal_link_count)?;
        // `{:?}` keeps a trailing `.0` on whole numbers and prints the shortest round-trip form otherwise.
        writeln!(f, "Alt Tags Percentage: {:?}%", self.alt_tag_coverage_percent)?;
        write!(f, "Keywords Found: {}", self.keywords_found.join(", "))
    }
}
