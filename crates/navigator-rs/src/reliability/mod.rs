//! Reliability scoring: signals in, bounded 0–100 score out.
//!
//! Two pieces:
//!
//! 1. **[`signals`]** — [`ReliabilitySignals`], the typed per-request evidence
//!    gathered by the extension (DOM availability, token volume, churn,
//!    vision-fallback usage and confidence).
//!
//! 2. **[`scorer`]** — [`score`] computes the clamped score from a fixed set
//!    of weighted penalties; [`report`] additionally records which
//!    [`PenaltyReason`]s applied.
//!
//! Both functions are pure, synchronous, and total: no I/O, no shared state,
//! no failure modes. Any number of requests may score concurrently without
//! coordination.

pub mod scorer;
pub mod signals;

// Re-export commonly used items at the module level.
pub use scorer::{PenaltyReason, ScoreReport, report, score};
pub use signals::{ReliabilitySignals, VisionConfidence};
