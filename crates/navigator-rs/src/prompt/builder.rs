//! Structured system prompt builder.
//!
//! [`SystemPromptBuilder`] assembles the Navigator system prompt from a
//! preamble, `## Section` blocks, and raw text pieces, joined with blank
//! lines. It replaces manual string concatenation with a composable builder
//! so the composer can keep its fixed assembly order explicit.

/// Builder for multi-part system prompts.
///
/// Parts are joined with double newlines. Empty parts are silently skipped.
///
/// # Example
///
/// ```
/// use navigator_rs::prompt::SystemPromptBuilder;
///
/// let prompt = SystemPromptBuilder::new("You are Navigator.")
///     .section("Operating Rules", "- Be concise.")
///     .raw("Context Reliability Score: 100/100")
///     .build();
///
/// assert!(prompt.contains("## Operating Rules"));
/// assert!(prompt.ends_with("Context Reliability Score: 100/100"));
/// ```
pub struct SystemPromptBuilder {
    parts: Vec<String>,
}

impl SystemPromptBuilder {
    /// Create a new builder with an initial preamble.
    ///
    /// The preamble is included as-is, with no heading.
    pub fn new(preamble: impl Into<String>) -> Self {
        Self {
            parts: vec![preamble.into()],
        }
    }

    /// Append a named section with a `## ` markdown heading.
    ///
    /// Skipped if `content` is empty.
    pub fn section(mut self, heading: &str, content: impl Into<String>) -> Self {
        let content = content.into();
        if !content.is_empty() {
            self.parts.push(format!("## {heading}\n\n{content}"));
        }
        self
    }

    /// Append raw text without a heading.
    ///
    /// Skipped if `content` is empty.
    pub fn raw(mut self, content: impl Into<String>) -> Self {
        let content = content.into();
        if !content.is_empty() {
            self.parts.push(content);
        }
        self
    }

    /// Build the final prompt by joining all parts with double newlines.
    pub fn build(self) -> String {
        self.parts.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preamble_only() {
        let prompt = SystemPromptBuilder::new("You are Navigator.").build();
        assert_eq!(prompt, "You are Navigator.");
    }

    #[test]
    fn sections_get_markdown_headings() {
        let prompt = SystemPromptBuilder::new("Preamble")
            .section("Rules", "Some rules")
            .build();
        assert_eq!(prompt, "Preamble\n\n## Rules\n\nSome rules");
    }

    #[test]
    fn empty_section_skipped() {
        let prompt = SystemPromptBuilder::new("Preamble")
            .section("Empty", "")
            .section("Present", "content")
            .build();
        assert!(!prompt.contains("Empty"));
        assert!(prompt.contains("## Present"));
    }

    #[test]
    fn raw_appended_without_heading() {
        let prompt = SystemPromptBuilder::new("Preamble")
            .raw("Score line")
            .build();
        assert_eq!(prompt, "Preamble\n\nScore line");
    }

    #[test]
    fn empty_raw_skipped() {
        let prompt = SystemPromptBuilder::new("P").raw("").build();
        assert_eq!(prompt, "P");
    }

    #[test]
    fn parts_keep_insertion_order() {
        let prompt = SystemPromptBuilder::new("P")
            .raw("first")
            .section("Middle", "second")
            .raw("third")
            .build();
        let first = prompt.find("first").unwrap();
        let second = prompt.find("second").unwrap();
        let third = prompt.find("third").unwrap();
        assert!(first < second && second < third);
    }
}
