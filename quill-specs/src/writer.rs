//! Indentation-aware line writer for rendering specs.

const INDENT: &str = "    ";

/// Accumulates lines of source text with proper indentation.
///
/// Used by the spec types' `Display` impls; one level of indentation is
/// four spaces.
#[derive(Debug, Default)]
pub struct SourceWriter {
    buffer: String,
    level: usize,
}

impl SourceWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one line at the current indentation level.
    pub fn line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.level {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Write a blank line.
    pub fn blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase the indentation level.
    pub fn indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    /// Decrease the indentation level, saturating at zero.
    pub fn dedent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    /// Consume the writer and return the accumulated text.
    pub fn finish(self) -> String {
        self.buffer
    }
}
