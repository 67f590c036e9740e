//! Context reliability scoring: additive penalty model over capture signals.
//!
//! Scoring starts from a perfect baseline of 100 and subtracts a fixed
//! penalty for each degradation signal present. The running total may go
//! negative; it is clamped to [0, 100] exactly once, at the end. Penalties
//! are independent subtractions except the two vision-confidence penalties,
//! which are mutually exclusive (at most one applies, chosen by the reported
//! confidence tier).
//!
//! Reason codes (not prose) record which penalties applied, so downstream
//! consumers can explain a score without re-deriving it.

use super::signals::{ReliabilitySignals, VisionConfidence};
use serde::Serialize;
use tracing::debug;

/// Baseline score before any penalties.
const BASELINE: i32 = 100;

/// Penalty when no DOM-derived text context was available at all.
pub const PENALTY_NO_DOM_CONTEXT: u32 = 30;

/// Flat penalty whenever the vision fallback contributed context,
/// regardless of its reported confidence.
pub const PENALTY_VISION_FALLBACK: u32 = 40;

/// Additional penalty when the vision fallback reported medium confidence.
pub const PENALTY_VISION_MEDIUM: u32 = 15;

/// Additional penalty when the vision fallback reported low confidence.
pub const PENALTY_VISION_LOW: u32 = 40;

/// Penalty when the DOM extraction is too sparse to ground claims.
pub const PENALTY_SPARSE_DOM: u32 = 20;

/// Penalty when the DOM is mutating rapidly enough to risk staleness
/// between capture and use.
pub const PENALTY_DOM_CHURN: u32 = 15;

/// Token count below which DOM context is considered too sparse.
pub const SPARSE_TOKEN_THRESHOLD: u32 = 300;

/// Churn magnitude above which the capture is considered staleness-prone.
pub const CHURN_THRESHOLD: f64 = 3.0;

/// Why a score was reduced. Each variant maps to one fixed penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PenaltyReason {
    /// No DOM text was captured; the model has no textual grounding.
    NoDomContext,
    /// A screenshot-based vision fallback supplied context.
    VisionFallback,
    /// The vision fallback reported low confidence.
    VisionLowConfidence,
    /// The vision fallback reported medium confidence.
    VisionMediumConfidence,
    /// Fewer than [`SPARSE_TOKEN_THRESHOLD`] DOM tokens were extracted.
    SparseDomContext,
    /// DOM churn exceeded [`CHURN_THRESHOLD`] since the last capture.
    DomChurn,
}

impl PenaltyReason {
    /// Points this reason deducts from the baseline.
    pub fn points(self) -> u32 {
        match self {
            Self::NoDomContext => PENALTY_NO_DOM_CONTEXT,
            Self::VisionFallback => PENALTY_VISION_FALLBACK,
            Self::VisionLowConfidence => PENALTY_VISION_LOW,
            Self::VisionMediumConfidence => PENALTY_VISION_MEDIUM,
            Self::SparseDomContext => PENALTY_SPARSE_DOM,
            Self::DomChurn => PENALTY_DOM_CHURN,
        }
    }

    /// Stable snake_case code, as serialized.
    pub fn code(self) -> &'static str {
        match self {
            Self::NoDomContext => "no_dom_context",
            Self::VisionFallback => "vision_fallback",
            Self::VisionLowConfidence => "vision_low_confidence",
            Self::VisionMediumConfidence => "vision_medium_confidence",
            Self::SparseDomContext => "sparse_dom_context",
            Self::DomChurn => "dom_churn",
        }
    }
}

/// A score together with the reasons it was reduced.
///
/// `score` always equals what [`score()`](score) returns for the same
/// signals; the reasons are recorded in penalty-application order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    /// The clamped reliability score in [0, 100].
    pub score: u8,
    /// Penalties that applied, in application order.
    pub reasons: Vec<PenaltyReason>,
}

impl ScoreReport {
    /// Total points deducted before clamping.
    pub fn total_penalty(&self) -> u32 {
        self.reasons.iter().map(|r| r.points()).sum()
    }

    /// Format as a short log-friendly string.
    pub fn to_log_string(&self) -> String {
        if self.reasons.is_empty() {
            return format!("reliability: {}/100", self.score);
        }
        let reasons: Vec<String> = self
            .reasons
            .iter()
            .map(|r| format!("{} -{}", r.code(), r.points()))
            .collect();
        format!("reliability: {}/100 ({})", self.score, reasons.join(", "))
    }
}

/// Compute the context reliability score for the given signals.
///
/// Pure and total: defined for every well-typed input, never fails, and
/// returns an integer in [0, 100].
///
/// # Example
///
/// ```
/// use navigator_rs::reliability::{score, ReliabilitySignals};
///
/// let signals = ReliabilitySignals::new(true, 500);
/// assert_eq!(score(&signals), 100);
/// ```
pub fn score(signals: &ReliabilitySignals) -> u8 {
    report(signals).score
}

/// Compute the score along with the penalty reasons that produced it.
///
/// Same penalty walk as [`score`]; the vision-confidence penalties are
/// mutually exclusive and only considered when the fallback was actually
/// used. Clamping happens once, after all penalties are summed, so
/// compounding penalties are never masked mid-walk.
pub fn report(signals: &ReliabilitySignals) -> ScoreReport {
    let mut reasons = Vec::new();

    if !signals.has_dom_context {
        reasons.push(PenaltyReason::NoDomContext);
    }

    if signals.vision_used {
        reasons.push(PenaltyReason::VisionFallback);
        match signals.vision_confidence {
            VisionConfidence::Low => reasons.push(PenaltyReason::VisionLowConfidence),
            VisionConfidence::Medium => reasons.push(PenaltyReason::VisionMediumConfidence),
            VisionConfidence::High | VisionConfidence::None => {}
        }
    }

    if signals.dom_token_count < SPARSE_TOKEN_THRESHOLD {
        reasons.push(PenaltyReason::SparseDomContext);
    }

    if signals.dom_diff_churn > CHURN_THRESHOLD {
        reasons.push(PenaltyReason::DomChurn);
    }

    let raw = BASELINE - reasons.iter().map(|r| r.points() as i32).sum::<i32>();
    let score = raw.clamp(0, 100) as u8;

    let result = ScoreReport { score, reasons };
    debug!("{}", result.to_log_string());
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_signals_score_100() {
        let signals = ReliabilitySignals::new(true, 500);
        assert_eq!(score(&signals), 100);
    }

    #[test]
    fn missing_dom_context_scores_70() {
        let signals = ReliabilitySignals::new(false, 500);
        assert_eq!(score(&signals), 70);
    }

    #[test]
    fn low_confidence_vision_on_sparse_dom_clamps_at_zero() {
        // 100 - 40 (vision) - 40 (low) - 20 (sparse) = 0, exactly at the floor.
        let signals = ReliabilitySignals::new(true, 100).with_vision(VisionConfidence::Low);
        assert_eq!(score(&signals), 0);
    }

    #[test]
    fn churning_dom_with_medium_vision_scores_30() {
        // 100 - 40 (vision) - 15 (medium) - 15 (churn) = 30.
        let signals = ReliabilitySignals::new(true, 500)
            .with_churn(5.0)
            .with_vision(VisionConfidence::Medium);
        assert_eq!(score(&signals), 30);
    }

    #[test]
    fn low_and_medium_penalties_are_mutually_exclusive() {
        // Identical signals except the confidence tier must differ by exactly
        // the gap between the two penalties (40 - 15 = 25).
        let low = ReliabilitySignals::new(true, 500).with_vision(VisionConfidence::Low);
        let medium = ReliabilitySignals::new(true, 500).with_vision(VisionConfidence::Medium);
        assert_eq!(score(&medium) - score(&low), 25);

        let low_report = report(&low);
        assert!(low_report.reasons.contains(&PenaltyReason::VisionLowConfidence));
        assert!(!low_report.reasons.contains(&PenaltyReason::VisionMediumConfidence));
    }

    #[test]
    fn high_confidence_adds_nothing_beyond_flat_penalty() {
        let high = ReliabilitySignals::new(true, 500).with_vision(VisionConfidence::High);
        let unreported = ReliabilitySignals::new(true, 500).with_vision(VisionConfidence::None);
        assert_eq!(score(&high), 60);
        assert_eq!(score(&high), score(&unreported));
    }

    #[test]
    fn confidence_ignored_when_vision_not_used() {
        let mut signals = ReliabilitySignals::new(true, 500);
        signals.vision_confidence = VisionConfidence::Low;
        assert_eq!(score(&signals), 100);
        assert!(report(&signals).reasons.is_empty());
    }

    #[test]
    fn worst_case_clamps_negative_total_to_zero() {
        // 100 - 30 - 40 - 40 - 20 - 15 = -45 before the single final clamp.
        let signals = ReliabilitySignals::new(false, 0)
            .with_churn(10.0)
            .with_vision(VisionConfidence::Low);
        let result = report(&signals);
        assert_eq!(result.score, 0);
        assert_eq!(result.total_penalty(), 145);
    }

    #[test]
    fn churn_threshold_is_exclusive() {
        // Exactly 3.0 is not "greater than 3".
        let at = ReliabilitySignals::new(true, 500).with_churn(3.0);
        let above = ReliabilitySignals::new(true, 500).with_churn(3.1);
        assert_eq!(score(&at), 100);
        assert_eq!(score(&above), 85);
    }

    #[test]
    fn token_threshold_is_exclusive() {
        // Exactly 300 tokens is not sparse; 299 is.
        assert_eq!(score(&ReliabilitySignals::new(true, 300)), 100);
        assert_eq!(score(&ReliabilitySignals::new(true, 299)), 80);
    }

    #[test]
    fn score_in_range_over_all_penalty_combinations() {
        // Exhaustively enumerate every penalty combination the signal space
        // can produce and verify the range invariant plus score/report
        // agreement.
        let vision_variants = [
            None,
            Some(VisionConfidence::Low),
            Some(VisionConfidence::Medium),
            Some(VisionConfidence::High),
            Some(VisionConfidence::None),
        ];

        for has_dom in [true, false] {
            for tokens in [0, 299, 300, 500] {
                for churn in [0.0, 3.0, 5.0] {
                    for vision in vision_variants {
                        let mut signals =
                            ReliabilitySignals::new(has_dom, tokens).with_churn(churn);
                        if let Some(confidence) = vision {
                            signals = signals.with_vision(confidence);
                        }

                        let result = report(&signals);
                        assert!(result.score <= 100, "out of range for {signals:?}");
                        assert_eq!(result.score, score(&signals));
                    }
                }
            }
        }
    }

    #[test]
    fn report_records_reasons_in_application_order() {
        let signals = ReliabilitySignals::new(false, 100)
            .with_churn(4.0)
            .with_vision(VisionConfidence::Medium);
        let result = report(&signals);
        assert_eq!(
            result.reasons,
            vec![
                PenaltyReason::NoDomContext,
                PenaltyReason::VisionFallback,
                PenaltyReason::VisionMediumConfidence,
                PenaltyReason::SparseDomContext,
                PenaltyReason::DomChurn,
            ]
        );
    }

    #[test]
    fn log_string_lists_applied_penalties() {
        let signals = ReliabilitySignals::new(true, 100);
        let log = report(&signals).to_log_string();
        assert_eq!(log, "reliability: 80/100 (sparse_dom_context -20)");

        let clean = report(&ReliabilitySignals::new(true, 500)).to_log_string();
        assert_eq!(clean, "reliability: 100/100");
    }

    #[test]
    fn reasons_serialize_as_snake_case() {
        let json = serde_json::to_string(&PenaltyReason::VisionFallback).unwrap();
        assert_eq!(json, "\"vision_fallback\"");
    }
}
