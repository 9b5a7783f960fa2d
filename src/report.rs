//! Lint reports
//!
//! Runs the validator over a batch of files and renders the outcome for
//! humans (text) or for tooling (JSON).

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::validation::{Violation, lint_file};

pub const FIX_HINT: &str =
    "❗ Please add an emoji at the beginning of each workflow, job, and step name.";

/// Violations found in a single file
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileReport {
    pub file: PathBuf,
    pub violations: Vec<Violation>,
}

/// Outcome of linting a batch of files
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LintSummary {
    pub files_checked: usize,
    /// Only files with at least one violation, in lint order
    pub reports: Vec<FileReport>,
}

impl LintSummary {
    pub fn total_violations(&self) -> usize {
        self.reports.iter().map(|r| r.violations.len()).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.total_violations() == 0
    }

    fn record(&mut self, file: PathBuf, violations: Vec<Violation>) {
        self.files_checked += 1;
        if !violations.is_empty() {
            self.reports.push(FileReport { file, violations });
        }
    }
}

/// Lint every file in order, stopping at the first parse or structure error
pub fn lint_paths(paths: &[PathBuf]) -> Result<LintSummary> {
    let mut summary = LintSummary::default();

    for path in paths {
        let violations =
            lint_file(path).with_context(|| format!("Error linting {}", path.display()))?;
        log::debug!("{}: {} violation(s)", path.display(), violations.len());
        summary.record(path.clone(), violations);
    }

    Ok(summary)
}

/// Write the human-readable report
///
/// A clean run goes to `out`; violations go to `err`, grouped by file.
pub fn write_text(summary: &LintSummary, out: &mut dyn Write, err: &mut dyn Write) -> io::Result<()> {
    if summary.is_clean() {
        writeln!(out, "✅ All {} workflow(s) passed!", summary.files_checked)?;
        return Ok(());
    }

    writeln!(
        err,
        "❌ Found {} violation(s) across {} file(s):\n",
        summary.total_violations(),
        summary.reports.len()
    )?;

    for report in &summary.reports {
        writeln!(err, "File: {}", report.file.display())?;
        for violation in &report.violations {
            writeln!(err, "  [{}] {}", violation.kind, violation.identifier)?;
            writeln!(err, "    → {}", violation.message)?;
        }
        writeln!(err)?;
    }

    writeln!(err, "{FIX_HINT}")
}

/// Pretty-printed JSON array of the files with violations
pub fn to_json(summary: &LintSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&summary.reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::lint_document;

    fn summary_for(file: &str, text: &str) -> LintSummary {
        let mut summary = LintSummary::default();
        summary.record(PathBuf::from(file), lint_document(text).unwrap());
        summary
    }

    fn render(summary: &LintSummary) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        write_text(summary, &mut out, &mut err).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_clean_report() {
        let summary = summary_for("ci.yml", "name: 🚀 CI\njobs: {}\n");
        assert!(summary.is_clean());

        let (out, err) = render(&summary);
        assert_eq!(out, "✅ All 1 workflow(s) passed!\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_violation_report() {
        let summary = summary_for("ci.yml", "jobs:\n  build:\n    steps:\n      - name: Checkout\n");
        assert_eq!(summary.total_violations(), 3);

        let (out, err) = render(&summary);
        assert!(out.is_empty());
        let expected = "\
❌ Found 3 violation(s) across 1 file(s):

File: ci.yml
  [Workflow] workflow
    → Missing display name. Please add a 'name:' field starting with an emoji.
  [Job] build
    → Missing display name. Please add a 'name:' field starting with an emoji.
  [Step] Checkout
    → Name must start with an emoji. Example: '🚀 Deploy'

❗ Please add an emoji at the beginning of each workflow, job, and step name.
";
        assert_eq!(err, expected);
    }

    #[test]
    fn test_clean_files_are_counted_but_not_reported() {
        let mut summary = summary_for("bad.yml", "name: CI\njobs: {}\n");
        summary.record(PathBuf::from("good.yml"), Vec::new());

        assert_eq!(summary.files_checked, 2);
        assert_eq!(summary.reports.len(), 1);
        assert_eq!(summary.reports[0].file, PathBuf::from("bad.yml"));
    }

    #[test]
    fn test_json_report() {
        let summary = summary_for("ci.yml", "name: CI\njobs: {}\n");
        let json = to_json(&summary).unwrap();
        let expected = r#"[
  {
    "File": "ci.yml",
    "Violations": [
      {
        "Kind": "Workflow",
        "Identifier": "CI",
        "Message": "Name must start with an emoji. Example: '🚀 Deploy'"
      }
    ]
  }
]"#;
        assert_eq!(json, expected);
    }
}
