//! System prompt composition from a reliability score.
//!
//! The composer maps a score onto one of three [`DirectiveTier`]s and
//! assembles, in fixed order: the constant Navigator preamble, the literal
//! score line, and the tier's behavioral directive. The directive wording is
//! part of the externally observable contract. It is sent verbatim to the
//! language model and changes whether the model hedges or answers
//! confidently.

use super::builder::SystemPromptBuilder;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Scores below this are treated as unreliable context.
pub const UNRELIABLE_BELOW: u8 = 50;

/// Scores at or above this are treated as reliable context.
pub const RELIABLE_AT: u8 = 80;

/// Identity and operating rules, always included first.
const PREAMBLE: &str = "You are Navigator, an AI assistant embedded in the user's browser. \
You answer questions about the page the user is currently viewing.";

const OPERATING_RULES: &str = "\
- Answer only from the page context provided in this conversation.
- If the information is not in the provided context, reply: \"I cannot find that information on the current page.\"
- Never infer or guess hidden, off-screen, or truncated content.
- Be concise.";

const UNRELIABLE_DIRECTIVE: &str = "\
The page context provided for this request is unreliable. You MUST hedge, \
refuse, or state that you cannot find the information. Prefer declining to \
answer over guessing.";

const PARTIAL_DIRECTIVE: &str = "\
The page context may be incomplete. Proceed with caution and avoid strong \
claims based on it.";

const RELIABLE_DIRECTIVE: &str = "\
The page context is reliable. Proceed normally, but do not infer content \
beyond what was provided.";

/// Behavioral directive selected from the reliability score.
///
/// Thresholds are closed on the upper tier: 50 is `Partial`, not
/// `Unreliable`; 80 is `Reliable`, not `Partial`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectiveTier {
    Unreliable,
    Partial,
    Reliable,
}

impl DirectiveTier {
    /// Select the tier for a score. First match wins: `< 50` unreliable,
    /// `< 80` partial, otherwise reliable. Out-of-range scores take the
    /// same threshold rule with no special-casing.
    pub fn for_score(score: u8) -> Self {
        if score < UNRELIABLE_BELOW {
            Self::Unreliable
        } else if score < RELIABLE_AT {
            Self::Partial
        } else {
            Self::Reliable
        }
    }

    /// The directive text injected into the system prompt for this tier.
    pub fn directive(self) -> &'static str {
        match self {
            Self::Unreliable => UNRELIABLE_DIRECTIVE,
            Self::Partial => PARTIAL_DIRECTIVE,
            Self::Reliable => RELIABLE_DIRECTIVE,
        }
    }
}

/// Input to [`build_system_prompt`]. Currently carries only the score;
/// extensible in principle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptContext {
    /// Context reliability score in [0, 100], from
    /// [`reliability::score`](crate::reliability::score).
    pub context_reliability: u8,
}

impl From<u8> for PromptContext {
    fn from(context_reliability: u8) -> Self {
        Self {
            context_reliability,
        }
    }
}

/// Assemble the full system prompt for the given context.
///
/// Pure and deterministic: identical input yields byte-identical output.
/// The result always contains the literal line
/// `Context Reliability Score: {score}/100`.
///
/// # Example
///
/// ```
/// use navigator_rs::prompt::build_system_prompt;
///
/// let prompt = build_system_prompt(&100.into());
/// assert!(prompt.contains("Context Reliability Score: 100/100"));
/// ```
pub fn build_system_prompt(ctx: &PromptContext) -> String {
    let tier = DirectiveTier::for_score(ctx.context_reliability);
    trace!(
        "composing prompt: score {} -> {tier:?} tier",
        ctx.context_reliability
    );

    SystemPromptBuilder::new(PREAMBLE)
        .section("Operating Rules", OPERATING_RULES)
        .raw(format!(
            "Context Reliability Score: {}/100",
            ctx.context_reliability
        ))
        .raw(tier.directive())
        .build()
}
