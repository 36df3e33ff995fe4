//! Archive block rendering.
//!
//! Renders the managed archive section from ordered post records. The
//! first line is the marker and the container nesting closes on the last
//! line, so the synchronizer sees the output as exactly one block.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::record::PostRecord;

/// Layout inputs for the archive block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveLayout {
    /// Marker line opening the managed block.
    pub marker: String,
    /// Heading shown above the card grid.
    pub heading: String,
    /// Posts directory prefix used in links and thumbnail paths.
    pub posts_dir: String,
}

/// Render the archive block from records already in display order.
pub fn render_archive(records: &[PostRecord], layout: &ArchiveLayout) -> String {
    let mut out = String::new();
    out.push_str(&layout.marker);
    out.push('\n');
    out.push_str("<div class=\"archive-section\">\n");
    out.push_str(&format!(
        "  <h2 class=\"archive-title\">{}</h2>\n",
        encode_text(&layout.heading)
    ));
    out.push_str("  <div class=\"archive-grid\">\n");

    for record in records {
        let href = format!("{}/{}/", layout.posts_dir, record.folder);
        out.push_str(&format!(
            "    <a class=\"archive-card\" href=\"{}\">\n",
            encode_double_quoted_attribute(&href)
        ));
        if !record.thumbnail.is_empty() {
            let src = format!("{}/{}", layout.posts_dir, record.thumbnail);
            out.push_str(&format!(
                "      <img class=\"archive-thumb\" src=\"{}\" alt=\"{}\">\n",
                encode_double_quoted_attribute(&src),
                encode_double_quoted_attribute(&record.title)
            ));
        }
        out.push_str("      <div class=\"archive-card-body\">\n");
        out.push_str(&format!(
            "        <span class=\"archive-category\">{}</span>\n",
            encode_text(&record.category)
        ));
        out.push_str(&format!(
            "        <h3 class=\"archive-card-title\">{}</h3>\n",
            encode_text(&record.title)
        ));
        out.push_str(&format!(
            "        <p class=\"archive-card-summary\">{}</p>\n",
            encode_text(&record.summary)
        ));
        out.push_str("      </div>\n");
        out.push_str("    </a>\n");
    }

    out.push_str("  </div>\n");
    out.push_str("</div>");
    out
}
