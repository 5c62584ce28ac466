//! Export payload.
//!
//! The export keeps the input key names (`seed_intent`, `items`) so that an
//! exported file loads back unchanged.

use serde::{Deserialize, Serialize};

use crate::item::ActionItem;

/// Kept items paired with the intent that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportPayload {
    pub seed_intent: String,
    pub items: Vec<ActionItem>,
}

impl ExportPayload {
    /// Two-space indented JSON. Non-ASCII text is written as-is.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; with string keys only this does not
    /// happen in practice.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Single-line JSON, as used for reproducible diffs.
    ///
    /// # Errors
    ///
    /// See [`Self::to_json_pretty`].
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_order_is_stable() {
        let payload = ExportPayload {
            seed_intent: "Lancer le produit".into(),
            items: vec![ActionItem::new("it-01").with_field("titre", "Rédiger")],
        };
        assert_eq!(
            payload.to_json().unwrap(),
            r#"{"seed_intent":"Lancer le produit","items":[{"id":"it-01","titre":"Rédiger"}]}"#
        );
    }

    #[test]
    fn pretty_output_uses_two_space_indent() {
        let payload = ExportPayload {
            seed_intent: String::new(),
            items: Vec::new(),
        };
        let pretty = payload.to_json_pretty().unwrap();
        assert_eq!(pretty, "{\n  \"seed_intent\": \"\",\n  \"items\": []\n}");
    }

    #[test]
    fn exports_with_blank_ids_do_not_decode() {
        let decoded: ExportPayload =
            serde_json::from_str(r#"{"seed_intent":"x","items":[{"id":"a"}]}"#).unwrap();
        assert_eq!(decoded.items, vec![ActionItem::new("a")]);

        let blank = r#"{"seed_intent":"x","items":[{"id":""}]}"#;
        assert!(serde_json::from_str::<ExportPayload>(blank).is_err());
    }
}
