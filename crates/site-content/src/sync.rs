//! Idempotent managed-block synchronization.
//!
//! `synchronize` is a pure function over document text: it removes every
//! existing instance of the managed block, inserts the freshly rendered
//! block before the highest-priority anchor, and verifies that exactly one
//! instance remains. Callers own all I/O.

use serde::Serialize;
use tracing::debug;

use crate::document::{Document, is_blank};
use crate::error::{Error, Result};
use crate::scan::{BlockRule, find_instances};

/// Outcome summary of one synchronization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// Number of existing block instances removed.
    pub removed: usize,
    /// How many removed instances had unbalanced containers.
    pub malformed: usize,
    /// The anchor literal the block was inserted before.
    pub anchor: String,
    /// True when a fallback (non-first) anchor was used.
    pub fallback: bool,
    /// Number of block instances in the result, re-scanned after the
    /// rebuild. Always 1 on success.
    pub verified: usize,
}

/// Replace the managed block in `document` with `rendered`.
///
/// `rendered` must begin with the rule's marker line; a block without the
/// marker fails the final verification rather than silently duplicating
/// on the next run. Every line of `rendered` receives the anchor line's
/// leading indentation. Returns the updated document text and a report.
///
/// The document text is only transformed in memory. On error nothing
/// useful is returned, so callers leave the target untouched.
pub fn synchronize(document: &str, rule: &BlockRule, rendered: &str) -> Result<(String, SyncReport)> {
    let mut doc = Document::parse(document);

    let instances = find_instances(doc.lines(), rule);
    let removed = instances.len();
    let malformed = instances.iter().filter(|b| !b.terminated).count();

    let lines = doc.lines_mut();
    for instance in instances.iter().rev() {
        lines.drain(instance.start..instance.end);
        collapse_seam(lines, instance.start);
    }

    let Some((priority, at)) = select_anchor(lines, &rule.anchors) else {
        return Err(Error::no_insertion_point(&rule.anchors));
    };
    let anchor = rule.anchors[priority].clone();

    let indent = leading_whitespace(&lines[at]).to_string();
    let block_lines: Vec<String> = Document::parse(rendered)
        .lines()
        .iter()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{indent}{line}")
            }
        })
        .collect();
    lines.splice(at..at, block_lines);

    let verified = find_instances(doc.lines(), rule).len();
    if verified != 1 {
        return Err(Error::PostconditionViolation { found: verified });
    }

    debug!(removed, malformed, anchor = %anchor, "synchronized managed block");
    let report = SyncReport {
        removed,
        malformed,
        anchor,
        fallback: priority > 0,
        verified,
    };
    Ok((doc.render(), report))
}

/// Pick the insertion point: the first line containing the first anchor
/// that matches anywhere in the document.
fn select_anchor(lines: &[String], anchors: &[String]) -> Option<(usize, usize)> {
    for (priority, anchor) in anchors.iter().enumerate() {
        if let Some(at) = lines.iter().position(|line| line.contains(anchor.as_str())) {
            return Some((priority, at));
        }
    }
    None
}

/// Collapse a blank-line run straddling a removal seam to a single blank
/// line. Blank runs elsewhere are left alone.
fn collapse_seam(lines: &mut Vec<String>, seam: usize) {
    while seam > 0 && seam < lines.len() && is_blank(&lines[seam - 1]) && is_blank(&lines[seam]) {
        lines.remove(seam);
    }
}

fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rule() -> BlockRule {
        BlockRule::new(
            "<!-- Archive Section -->",
            vec!["<!-- Footer -->".to_string(), "</body>".to_string()],
        )
    }

    const BLOCK: &str = "<!-- Archive Section -->\n<div class=\"archive\">\n  <p>fresh</p>\n</div>";

    #[test]
    fn inserts_before_primary_anchor_with_indentation() {
        let document = "<body>\n    <!-- Footer -->\n</body>\n";
        let (updated, report) = synchronize(document, &rule(), BLOCK).unwrap();

        assert_eq!(
            updated,
            "<body>\n\
             \x20   <!-- Archive Section -->\n\
             \x20   <div class=\"archive\">\n\
             \x20     <p>fresh</p>\n\
             \x20   </div>\n\
             \x20   <!-- Footer -->\n\
             </body>\n"
        );
        assert_eq!(report.removed, 0);
        assert!(!report.fallback);
        assert_eq!(report.anchor, "<!-- Footer -->");
        assert_eq!(report.verified, 1);
    }

    #[test]
    fn falls_back_to_secondary_anchor() {
        let document = "<body>\n</body>\n";
        let (updated, report) = synchronize(document, &rule(), BLOCK).unwrap();

        assert!(updated.ends_with("</body>\n"));
        assert!(updated.starts_with("<body>\n<!-- Archive Section -->"));
        assert!(report.fallback);
        assert_eq!(report.anchor, "</body>");
    }

    #[test]
    fn missing_anchor_is_an_error() {
        let err = synchronize("<p>nothing here</p>\n", &rule(), BLOCK).unwrap_err();
        assert!(matches!(err, Error::NoInsertionPoint { .. }));
    }

    #[test]
    fn rendered_block_without_marker_fails_verification() {
        let err = synchronize(
            "<!-- Footer -->\n",
            &rule(),
            "<div class=\"archive\"></div>",
        )
        .unwrap_err();
        assert!(matches!(err, Error::PostconditionViolation { found: 0 }));
    }

    #[test]
    fn seam_blanks_collapse_to_one() {
        let document = "<p>intro</p>\n\
                        \n\
                        <!-- Archive Section -->\n\
                        <div>stale</div>\n\
                        \n\
                        <!-- Footer -->\n";
        let (updated, report) = synchronize(document, &rule(), BLOCK).unwrap();

        assert_eq!(
            updated,
            "<p>intro</p>\n\
             \n\
             <!-- Archive Section -->\n\
             <div class=\"archive\">\n\
             \x20 <p>fresh</p>\n\
             </div>\n\
             <!-- Footer -->\n"
        );
        assert_eq!(report.removed, 1);
    }

    #[test]
    fn blank_runs_away_from_the_seam_survive() {
        let document = "<p>a</p>\n\n\n<p>b</p>\n<!-- Footer -->\n";
        let (updated, _) = synchronize(document, &rule(), BLOCK).unwrap();
        assert!(updated.starts_with("<p>a</p>\n\n\n<p>b</p>\n"));
    }

    #[test]
    fn empty_rendered_lines_stay_unindented() {
        let block = "<!-- Archive Section -->\n<div>\n\n</div>";
        let document = "    <!-- Footer -->\n";
        let (updated, _) = synchronize(document, &rule(), block).unwrap();
        assert_eq!(
            updated,
            "    <!-- Archive Section -->\n    <div>\n\n    </div>\n    <!-- Footer -->\n"
        );
    }

    #[test]
    fn malformed_instance_is_counted() {
        let document = "<!-- Archive Section -->\n\
                        <div class=\"archive\">\n\
                        <p>never closed</p>\n\
                        <!-- Footer -->\n";
        let (updated, report) = synchronize(document, &rule(), BLOCK).unwrap();

        assert_eq!(report.removed, 1);
        assert_eq!(report.malformed, 1);
        assert!(updated.contains("<p>fresh</p>"));
        assert!(updated.contains("<!-- Footer -->"));
        assert!(!updated.contains("never closed"));
    }

    #[test]
    fn report_serializes_to_json() {
        let report = SyncReport {
            removed: 2,
            malformed: 1,
            anchor: "<!-- Footer -->".to_string(),
            fallback: false,
            verified: 1,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["removed"], 2);
        assert_eq!(json["anchor"], "<!-- Footer -->");
    }
}
