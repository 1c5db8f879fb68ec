//! Document access abstraction for rendering and hit-testing.
//!
//! The viewport treats the document as an opaque provider of lines. It
//! queries line count, line text, and per-line character counts on every
//! frame and never caches any of it — the document may mutate between
//! frames, and whatever it reports at call time is what gets drawn.

/// A document as the viewport sees it — a sequence of lines queried live.
///
/// This trait is object-safe: it can be used as `&dyn DocumentSource`.
///
/// # Contract
///
/// - Results reflect current content at call time; the viewport never
///   caches line data across calls.
/// - Out-of-range line indices are answered, not panicked on:
///   `line_text` returns an empty string and `line_len` returns 0.
/// - A document always exposes at least one line; an empty document is a
///   document with a single empty line.
pub trait DocumentSource {
    /// Returns the total number of lines in the document.
    fn line_count(&self) -> usize;

    /// Returns the text of the given line, without its terminator.
    ///
    /// Returns an empty string if the line index is out of bounds.
    fn line_text(&self, line: usize) -> String;

    /// Returns the length of the given line in characters.
    ///
    /// Returns 0 if the line index is out of bounds.
    fn line_len(&self, line: usize) -> usize;
}

/// A plain in-memory document: one `String` per line.
///
/// This is the reference `DocumentSource` used by hosts that already hold
/// their text as lines, and by tests. Real editors will typically adapt
/// their own buffer type instead.
#[derive(Debug, Clone, Default)]
pub struct LineDocument {
    lines: Vec<String>,
}

impl LineDocument {
    /// Creates a document with a single empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Creates a document from a string, splitting on `'\n'`.
    ///
    /// An empty string yields one empty line; a trailing newline yields a
    /// final empty line, matching how editors surface a trailing newline.
    pub fn from_str(content: &str) -> Self {
        Self {
            lines: content.split('\n').map(String::from).collect(),
        }
    }

    /// Replaces the text of an existing line. Out-of-bounds indices are
    /// ignored.
    pub fn set_line(&mut self, line: usize, text: impl Into<String>) {
        if let Some(slot) = self.lines.get_mut(line) {
            *slot = text.into();
        }
    }

    /// Appends a line at the end of the document.
    pub fn push_line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }
}

impl DocumentSource for LineDocument {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_text(&self, line: usize) -> String {
        self.lines.get(line).cloned().unwrap_or_default()
    }

    fn line_len(&self, line: usize) -> usize {
        self.lines.get(line).map(|l| l.chars().count()).unwrap_or(0)
    }
}
