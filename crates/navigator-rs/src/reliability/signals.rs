//! Typed input signals for reliability scoring.
//!
//! The browser extension collects these per request: whether DOM text was
//! extracted at all, how large the extraction was, how much the DOM has
//! mutated since capture, and whether a screenshot-based vision fallback
//! contributed context (and at what confidence). The scorer consumes the
//! struct read-only; it is constructed fresh per request and never mutated.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Confidence reported by the vision fallback model.
///
/// `None` means no confidence was reported, which is distinct from `Low`.
/// Only meaningful when [`ReliabilitySignals::vision_used`] is `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum VisionConfidence {
    Low,
    Medium,
    High,
    /// No confidence reported (or vision was not used at all).
    #[default]
    None,
}

impl FromStr for VisionConfidence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "none" => Ok(Self::None),
            other => Err(format!(
                "unknown vision confidence '{other}' (expected: low, medium, high, none)"
            )),
        }
    }
}

/// Per-request evidence about how trustworthy the captured page context is.
///
/// `dom_diff_churn` and `vision_confidence` are optional in the wire format
/// and default to `0.0` and [`VisionConfidence::None`] when absent. The
/// remaining fields are required.
///
/// # Example
///
/// ```
/// use navigator_rs::reliability::{ReliabilitySignals, VisionConfidence};
///
/// let signals = ReliabilitySignals::new(true, 100)
///     .with_churn(5.0)
///     .with_vision(VisionConfidence::Medium);
///
/// assert!(signals.vision_used);
/// assert_eq!(signals.vision_confidence, VisionConfidence::Medium);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReliabilitySignals {
    /// Whether any DOM-derived text context was available.
    pub has_dom_context: bool,
    /// Size of the extracted DOM context in tokens.
    pub dom_token_count: u32,
    /// Magnitude of DOM mutation since the last capture.
    #[serde(default)]
    pub dom_diff_churn: f64,
    /// Whether a vision (screenshot) fallback contributed context.
    pub vision_used: bool,
    /// Confidence of the vision fallback, when one was used.
    #[serde(default)]
    pub vision_confidence: VisionConfidence,
}

impl ReliabilitySignals {
    /// Create signals for a DOM-only capture with no churn and no vision
    /// fallback.
    pub fn new(has_dom_context: bool, dom_token_count: u32) -> Self {
        Self {
            has_dom_context,
            dom_token_count,
            dom_diff_churn: 0.0,
            vision_used: false,
            vision_confidence: VisionConfidence::None,
        }
    }

    /// Set the DOM churn magnitude.
    pub fn with_churn(mut self, churn: f64) -> Self {
        self.dom_diff_churn = churn;
        self
    }

    /// Mark the vision fallback as used, with the reported confidence.
    pub fn with_vision(mut self, confidence: VisionConfidence) -> Self {
        self.vision_used = true;
        self.vision_confidence = confidence;
        self
    }
}
