//! Structural scanning for managed blocks.
//!
//! A managed block starts at a marker line (an HTML comment) and extends
//! through a balanced run of container elements. Extent is computed by
//! counting container-open and container-close occurrences per line until
//! the nesting depth returns to zero. The serialized HTML is never pattern
//! matched as a whole, so nested containers inside the block cannot
//! confuse the scan.

/// Describes how to locate and place one managed block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRule {
    /// Marker line that opens the block, matched against each line's
    /// trimmed text as a prefix.
    pub marker: String,
    /// Container element name whose nesting delimits the block extent.
    pub container: String,
    /// Insertion anchors, highest priority first. Matched by substring
    /// containment within a line.
    pub anchors: Vec<String>,
}

impl BlockRule {
    pub fn new(marker: impl Into<String>, anchors: Vec<String>) -> Self {
        Self {
            marker: marker.into(),
            container: "div".to_string(),
            anchors,
        }
    }

    pub fn with_container(mut self, tag: impl Into<String>) -> Self {
        self.container = tag.into();
        self
    }
}

/// One occurrence of a managed block within a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockInstance {
    /// Index of the marker line.
    pub start: usize,
    /// Index one past the last line of the instance.
    pub end: usize,
    /// False when the container nesting never returned to zero.
    pub terminated: bool,
}

impl BlockInstance {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// True when the line's trimmed text begins with the marker.
///
/// Trimming makes the match robust against indentation and stray trailing
/// whitespace left behind by earlier hand edits.
pub(crate) fn is_marker_line(line: &str, marker: &str) -> bool {
    line.trim().starts_with(marker)
}

/// Count container-open and container-close occurrences in one line.
///
/// An open is `<tag` and a close is `</tag`, each followed by `>`, `/`,
/// whitespace, or the end of the line, so `<div` does not match
/// `<divider`.
pub(crate) fn container_transitions(line: &str, tag: &str) -> (usize, usize) {
    let open = format!("<{tag}");
    let close = format!("</{tag}");
    (
        count_with_boundary(line, &open),
        count_with_boundary(line, &close),
    )
}

fn count_with_boundary(line: &str, needle: &str) -> usize {
    line.match_indices(needle)
        .filter(|(idx, _)| match line[idx + needle.len()..].chars().next() {
            None => true,
            Some(c) => c == '>' || c == '/' || c.is_whitespace(),
        })
        .count()
}

/// Find every instance of the managed block, in document order.
///
/// Instances never overlap: scanning resumes after the end of each found
/// instance.
pub fn find_instances(lines: &[String], rule: &BlockRule) -> Vec<BlockInstance> {
    let mut instances = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        if !is_marker_line(&lines[i], &rule.marker) {
            i += 1;
            continue;
        }
        let instance = scan_extent(lines, i, rule);
        i = instance.end.max(i + 1);
        instances.push(instance);
    }
    instances
}

fn scan_extent(lines: &[String], start: usize, rule: &BlockRule) -> BlockInstance {
    let (opens, closes) = container_transitions(&lines[start], &rule.container);
    let mut depth = opens as isize - closes as isize;
    let mut opened = opens > 0;
    let mut j = start;
    loop {
        if opened && depth <= 0 {
            return BlockInstance {
                start,
                end: j + 1,
                terminated: true,
            };
        }
        j += 1;
        if j == lines.len() {
            if !opened {
                // Marker on the final line with nothing after it.
                return BlockInstance {
                    start,
                    end: start + 1,
                    terminated: true,
                };
            }
            // Container never closed. Truncate the instance at the first
            // later anchor line so the insertion target survives removal.
            let end = (start + 1..lines.len())
                .find(|&k| {
                    rule.anchors
                        .iter()
                        .any(|anchor| lines[k].contains(anchor.as_str()))
                })
                .unwrap_or(lines.len());
            return BlockInstance {
                start,
                end,
                terminated: false,
            };
        }
        let (opens, closes) = container_transitions(&lines[j], &rule.container);
        if !opened {
            if opens == 0 {
                // The line after the marker opens no container, so the
                // instance is the stale marker line alone.
                return BlockInstance {
                    start,
                    end: start + 1,
                    terminated: true,
                };
            }
            opened = true;
        }
        depth += opens as isize - closes as isize;
    }
}
