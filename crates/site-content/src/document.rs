//! Line-oriented document model

/// A text document held as an ordered sequence of lines.
///
/// Lines are stored without their `\n` terminator but keep any `\r`, so a
/// parse/render round trip is byte-identical for both LF and CRLF input.
/// Whether the source ended with a newline is recorded and restored on
/// render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    trailing_newline: bool,
}

impl Document {
    /// Split text into lines.
    pub fn parse(text: &str) -> Self {
        if text.is_empty() {
            return Self {
                lines: Vec::new(),
                trailing_newline: false,
            };
        }
        let (body, trailing_newline) = match text.strip_suffix('\n') {
            Some(body) => (body, true),
            None => (text, false),
        };
        Self {
            lines: body.split('\n').map(String::from).collect(),
            trailing_newline,
        }
    }

    /// Rebuild the document text, restoring the trailing newline if the
    /// source had one.
    pub fn render(&self) -> String {
        let mut text = self.lines.join("\n");
        if self.trailing_newline {
            text.push('\n');
        }
        text
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub(crate) fn lines_mut(&mut self) -> &mut Vec<String> {
        &mut self.lines
    }
}

/// True for lines that are empty or whitespace-only.
pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
