//! Codec for the `specs` JSON document column.
//!
//! `specs` is stored as one JSON array of `{"label", "value"}` objects. A
//! missing document (SQL `NULL` or JSON `null`) means "no specs".

use serde_json::Value as JsonValue;
use tracing::warn;

use catalogue_products::Spec;

use super::RepositoryError;

/// What to do when a stored `specs` document does not decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpecsDecodePolicy {
    /// Serve the row with empty specs and log a warning.
    #[default]
    Lenient,
    /// Fail the whole read with [`RepositoryError::Decode`].
    Strict,
}

impl SpecsDecodePolicy {
    /// Parse a policy name (`lenient` / `strict`, case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Some(Self::Lenient),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }

    /// Decode a stored document for the given product, applying this policy.
    pub fn decode(
        self,
        product_id: &str,
        document: Option<JsonValue>,
    ) -> Result<Vec<Spec>, RepositoryError> {
        match decode_specs(document) {
            Ok(specs) => Ok(specs),
            Err(e) => match self {
                Self::Lenient => {
                    warn!(product_id, error = %e, "undecodable specs document, serving empty specs");
                    Ok(Vec::new())
                }
                Self::Strict => Err(RepositoryError::Decode(format!("product {product_id}: {e}"))),
            },
        }
    }
}

/// Serialize specs into the JSON document stored in the `specs` column.
pub fn encode_specs(specs: &[Spec]) -> Result<JsonValue, serde_json::Error> {
    serde_json::to_value(specs)
}

/// Decode a stored `specs` document. `None` and JSON `null` yield no specs.
pub fn decode_specs(document: Option<JsonValue>) -> Result<Vec<Spec>, serde_json::Error> {
    match document {
        None | Some(JsonValue::Null) => Ok(Vec::new()),
        Some(value) => serde_json::from_value(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn encodes_as_array_of_label_value_objects() {
        let doc = encode_specs(&[Spec::new("Weight", "45g"), Spec::new("Colour", "red")]).unwrap();
        assert_eq!(
            doc,
            json!([{"label": "Weight", "value": "45g"}, {"label": "Colour", "value": "red"}])
        );
        assert_eq!(encode_specs(&[]).unwrap(), json!([]));
    }

    #[test]
    fn absent_document_is_empty() {
        assert!(decode_specs(None).unwrap().is_empty());
        assert!(decode_specs(Some(JsonValue::Null)).unwrap().is_empty());
        assert!(decode_specs(Some(json!([]))).unwrap().is_empty());
    }

    #[test]
    fn preserves_order() {
        let doc = json!([{"label": "b", "value": "2"}, {"label": "a", "value": "1"}]);
        let specs = decode_specs(Some(doc)).unwrap();
        assert_eq!(specs, vec![Spec::new("b", "2"), Spec::new("a", "1")]);
    }

    #[test]
    fn non_array_document_fails_to_decode() {
        assert!(decode_specs(Some(json!({"label": "x"}))).is_err());
        assert!(decode_specs(Some(json!("text"))).is_err());
        assert!(decode_specs(Some(json!([1, 2]))).is_err());
    }

    #[test]
    fn lenient_policy_swallows_bad_documents() {
        let specs = SpecsDecodePolicy::Lenient
            .decode("1", Some(json!({"not": "an array"})))
            .unwrap();
        assert!(specs.is_empty());
    }

    #[test]
    fn strict_policy_surfaces_bad_documents() {
        let err = SpecsDecodePolicy::Strict
            .decode("1", Some(json!({"not": "an array"})))
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Decode(msg) if msg.starts_with("product 1:")));
    }

    #[test]
    fn policy_names_parse_case_insensitively() {
        assert_eq!(SpecsDecodePolicy::parse("Strict"), Some(SpecsDecodePolicy::Strict));
        assert_eq!(SpecsDecodePolicy::parse(" lenient "), Some(SpecsDecodePolicy::Lenient));
        assert_eq!(SpecsDecodePolicy::parse("drop"), None);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: arbitrary label/value text survives the document encoding unchanged.
            #[test]
            fn specs_round_trip_byte_for_byte(
                pairs in prop::collection::vec((any::<String>(), any::<String>()), 0..16)
            ) {
                let specs: Vec<Spec> = pairs.into_iter().map(|(l, v)| Spec::new(l, v)).collect();

                // Go through the textual form, as the database does.
                let stored = encode_specs(&specs).unwrap().to_string();
                let reloaded: JsonValue = serde_json::from_str(&stored).unwrap();
                let decoded = decode_specs(Some(reloaded)).unwrap();

                prop_assert_eq!(decoded.len(), specs.len());
                for (got, want) in decoded.iter().zip(&specs) {
                    prop_assert_eq!(got.label.as_bytes(), want.label.as_bytes());
                    prop_assert_eq!(got.value.as_bytes(), want.value.as_bytes());
                }
            }
        }
    }
}
