//! System prompt assembly: builder and score-driven composer.
//!
//! Two layers:
//!
//! 1. **[`builder`]** — [`SystemPromptBuilder`], a low-level builder that
//!    joins a preamble, `## Section` blocks, and raw text into one prompt
//!    string.
//!
//! 2. **[`composer`]** — [`build_system_prompt`] selects a
//!    [`DirectiveTier`] from the reliability score and assembles the final
//!    prompt: preamble, operating rules, the literal score line, and the
//!    tier directive, in that fixed order.

pub mod builder;
pub mod composer;

// Re-export commonly used items at the module level.
pub use builder::SystemPromptBuilder;
pub use composer::{DirectiveTier, PromptContext, RELIABLE_AT, UNRELIABLE_BELOW, build_system_prompt};
