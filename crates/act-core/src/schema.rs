//! JSON Schemas for the input and export payloads.
//!
//! The runtime types keep item fields as an opaque bag, so the schemas are
//! generated from documentation-only mirror types that spell out the shape
//! the prompt asks for. Extra keys stay allowed.

use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};

/// Priority spelling used on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PriorityDoc {
    Haute,
    Moyenne,
    Basse,
}

/// Effort level spelling used on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub enum EffortDoc {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
}

/// One action item as produced by the model.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ActionItemDoc {
    /// Short unique id, e.g. `it-01`.
    pub id: String,
    pub titre: Option<String>,
    /// One or two sentences describing the exact action.
    pub description: Option<String>,
    /// Direct verb plus object.
    pub action: Option<String>,
    pub priorite: Option<PriorityDoc>,
    pub effet_attendu: Option<String>,
    pub temps_estime_min: Option<u32>,
    pub niveau_d_effort: Option<EffortDoc>,
    /// Ids of items that must be done first.
    pub dependances: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub statut_suggere: Option<String>,
    /// Next micro-step, ten minutes at most.
    pub suggested_next: Option<String>,
}

/// Payload accepted by `load`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct InputPayloadDoc {
    /// Free-text goal the items were generated for.
    pub seed_intent: Option<String>,
    pub items: Vec<ActionItemDoc>,
    /// Model-written recap; displayed, never exported.
    pub summary: Option<String>,
}

/// Payload written by `export`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportPayloadDoc {
    pub seed_intent: String,
    pub items: Vec<ActionItemDoc>,
}

/// Which payload a schema describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Input,
    Export,
}

/// JSON Schema for the given payload.
///
/// # Errors
///
/// Returns the serializer error if the generated schema cannot be turned
/// into a JSON value.
pub fn payload_schema(kind: PayloadKind) -> Result<serde_json::Value, serde_json::Error> {
    match kind {
        PayloadKind::Input => serde_json::to_value(schema_for!(InputPayloadDoc)),
        PayloadKind::Export => serde_json::to_value(schema_for!(ExportPayloadDoc)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_schema_requires_items_only() {
        let schema = payload_schema(PayloadKind::Input).unwrap();
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required, &vec![serde_json::json!("items")]);
    }

    #[test]
    fn export_schema_requires_intent_and_items() {
        let schema = payload_schema(PayloadKind::Export).unwrap();
        let required = schema["required"].as_array().unwrap();
        assert!(required.contains(&serde_json::json!("seed_intent")));
        assert!(required.contains(&serde_json::json!("items")));
    }
}
