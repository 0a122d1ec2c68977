use serde_json::Value;

use super::record::Record;

/// A list endpoint's body, classified once when it is decoded.
///
/// List endpoints answer either with a bare array or with a pagination
/// envelope carrying the array under `results`. Any other JSON is `Other`
/// and normalizes to no records.
#[derive(Debug, Clone, PartialEq)]
pub enum RawResponse {
    List(Vec<Record>),
    Envelope(Vec<Record>),
    Other,
}

impl RawResponse {
    /// The array check runs before the envelope check.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(items) => RawResponse::List(into_records(items)),
            Value::Object(mut map) => match map.remove("results") {
                Some(Value::Array(items)) => RawResponse::Envelope(into_records(items)),
                _ => RawResponse::Other,
            },
            _ => RawResponse::Other,
        }
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice::<Value>(bytes).map(Self::from_value)
    }

    pub fn into_records(self) -> Vec<Record> {
        match self {
            RawResponse::List(records) | RawResponse::Envelope(records) => records,
            RawResponse::Other => Vec::new(),
        }
    }

    pub fn shape(&self) -> &'static str {
        match self {
            RawResponse::List(_) => "list",
            RawResponse::Envelope(_) => "envelope",
            RawResponse::Other => "other",
        }
    }
}

fn into_records(items: Vec<Value>) -> Vec<Record> {
    items.into_iter().map(Record::new).collect()
}

pub fn normalize(raw: &Value) -> Vec<Record> {
    RawResponse::from_value(raw.clone()).into_records()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn values(records: Vec<Record>) -> Vec<Value> {
        records.into_iter().map(Record::into_value).collect()
    }

    #[test]
    fn test_array_is_returned_unchanged() {
        let raw = json!([{"id": 2}, {"id": 1}, "loose", 3, null]);
        assert_eq!(Value::Array(values(normalize(&raw))), raw);
    }

    #[test]
    fn test_envelope_yields_results() {
        let raw = json!({"count": 2, "next": null, "results": [{"id": "a"}, {"id": "b"}]});
        assert_eq!(values(normalize(&raw)), vec![json!({"id": "a"}), json!({"id": "b"})]);
    }

    #[test]
    fn test_other_shapes_are_empty() {
        for raw in [
            json!({"results": "nope"}),
            json!({"results": {"id": 1}}),
            json!({"items": [1, 2]}),
            json!({}),
            json!("text"),
            json!(12),
            json!(true),
            json!(null),
        ] {
            assert!(normalize(&raw).is_empty(), "expected empty for {}", raw);
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let raw = json!({"results": [{"id": 1, "members": ["Thor"]}]});
        assert_eq!(normalize(&raw), normalize(&raw));
    }

    #[test]
    fn test_shape_classification() {
        assert_eq!(RawResponse::from_value(json!([])).shape(), "list");
        assert_eq!(RawResponse::from_value(json!({"results": []})).shape(), "envelope");
        assert_eq!(RawResponse::from_value(json!({"detail": "x"})).shape(), "other");
    }

    #[test]
    fn test_from_slice_rejects_malformed_json() {
        assert!(RawResponse::from_slice(b"{\"results\": [").is_err());
        assert_eq!(
            RawResponse::from_slice(b"{\"results\": []}").unwrap(),
            RawResponse::Envelope(Vec::new())
        );
    }
}
