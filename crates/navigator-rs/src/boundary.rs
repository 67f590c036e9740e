//! JSON boundary validation for signal documents.
//!
//! The extension side hands signals over as untyped JSON. The core scorer is
//! total and never validates, so malformed documents must be rejected here,
//! at the host boundary, before they reach it. Validation runs against a
//! JSON Schema generated from [`ReliabilitySignals`] itself, so the schema
//! can never drift from the Rust type.

use crate::reliability::ReliabilitySignals;
use schemars::JsonSchema;

/// Generate a JSON Schema `serde_json::Value` from a type that implements
/// `schemars::JsonSchema`.
///
/// # Example
///
/// ```
/// use navigator_rs::boundary::json_schema_for;
/// use navigator_rs::reliability::ReliabilitySignals;
///
/// let schema = json_schema_for::<ReliabilitySignals>();
/// assert_eq!(schema["type"], "object");
/// ```
pub fn json_schema_for<T: JsonSchema>() -> serde_json::Value {
    let schema = schemars::schema_for!(T);
    serde_json::to_value(schema)
        .unwrap_or_else(|_| serde_json::json!({"type": "object", "properties": {}}))
}

/// The JSON Schema describing the signals wire format.
///
/// Published so the extension can validate documents on its side of the
/// boundary too.
pub fn signals_schema() -> serde_json::Value {
    json_schema_for::<ReliabilitySignals>()
}

/// Parse and validate a raw signals document.
///
/// Returns the typed signals, or a formatted multi-line error string listing
/// each violation by instance path.
pub fn validate_signals(raw: &str) -> Result<ReliabilitySignals, String> {
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| format!("invalid JSON in signals document: {e}"))?;

    let schema = signals_schema();
    if let Ok(validator) = jsonschema::validator_for(&schema) {
        let errors: Vec<String> = validator
            .iter_errors(&value)
            .map(|e| format!("  - {}: {e}", e.instance_path()))
            .collect();

        if !errors.is_empty() {
            return Err(format!(
                "signals document does not match the expected shape:\n{}",
                errors.join("\n")
            ));
        }
    }

    serde_json::from_value(value).map_err(|e| format!("failed to decode signals: {e}"))
}
