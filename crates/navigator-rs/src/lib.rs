//! Context Reliability Engine for the Navigator browser assistant.
//!
//! Navigator answers questions about the page the user is viewing. How much
//! the model should trust the page context it was given varies per request:
//! DOM extraction can fail or come back sparse, the page can mutate between
//! capture and use, and a screenshot-based vision fallback may have supplied
//! context at varying confidence. This crate converts those signals into a
//! single bounded score and turns the score into a behavioral directive in
//! the model's system prompt.
//!
//! Two pure functions form the core:
//!
//! ```
//! use navigator_rs::prompt::build_system_prompt;
//! use navigator_rs::reliability::{ReliabilitySignals, score};
//!
//! let signals = ReliabilitySignals::new(true, 500);
//! let reliability = score(&signals);
//! assert_eq!(reliability, 100);
//!
//! let prompt = build_system_prompt(&reliability.into());
//! assert!(prompt.contains("Context Reliability Score: 100/100"));
//! ```
//!
//! Signal gathering (DOM extraction, churn measurement, vision confidence
//! reporting) and model invocation live in the extension runtime, outside
//! this crate. The crate only consumes the signals shape and produces the
//! prompt string for the next collaborator.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`reliability`] | [`ReliabilitySignals`](reliability::ReliabilitySignals), the penalty-based scorer, and [`ScoreReport`](reliability::ScoreReport) reason codes |
//! | [`prompt`] | [`SystemPromptBuilder`](prompt::SystemPromptBuilder) and the [`DirectiveTier`](prompt::DirectiveTier) composer |
//! | [`boundary`] | JSON Schema generation and validation for signal documents arriving from the untyped extension side |
//!
//! # Design principles
//!
//! 1. **Stateless core.** Both core functions are pure, synchronous, and
//!    total: no caching, no shared state, no failure modes. Statelessness
//!    is what makes results reproducible and concurrent reuse trivial.
//!
//! 2. **Validation at the boundary, not in the core.** The scorer assumes
//!    well-typed input; [`boundary`] rejects malformed documents before
//!    they reach it.
//!
//! 3. **Explain, don't just score.** [`reliability::report`] records which
//!    penalties applied as stable reason codes, so a score is always
//!    auditable.

pub mod boundary;
pub mod prompt;
pub mod reliability;

// Re-export the core contract at the crate root.
pub use prompt::{DirectiveTier, PromptContext, build_system_prompt};
pub use reliability::{ReliabilitySignals, ScoreReport, VisionConfidence, report, score};
