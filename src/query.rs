//! Query-string flattening for filter structs.
//!
//! Bindings describe their filters as serde structs whose `#[serde(rename)]` attributes
//! hold the wire names. [`to_query_pairs`] turns such a struct into ordered key/value
//! pairs: `None` and `null` are dropped, arrays become repeated keys, scalars are
//! rendered the way the service expects them in a URL.

use crate::{Error, Result};
use serde::Serialize;
use serde_json::Value;

/// Flattens a serializable filter struct into ordered query pairs.
///
/// # Errors
///
/// Returns [`Error::SerializationFailed`] if `params` does not serialize to a JSON object
/// (or to `null`, which yields no pairs).
///
/// # Examples
///
/// ```
/// use follow_up_boss::query::to_query_pairs;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Filter {
///     #[serde(rename = "personId", skip_serializing_if = "Option::is_none")]
///     person_id: Option<u64>,
///     #[serde(rename = "type[]")]
///     types: Vec<&'static str>,
/// }
///
/// let pairs = to_query_pairs(&Filter { person_id: Some(3), types: vec!["a", "b"] }).unwrap();
/// assert_eq!(pairs, vec![
///     ("personId".to_string(), "3".to_string()),
///     ("type[]".to_string(), "a".to_string()),
///     ("type[]".to_string(), "b".to_string()),
/// ]);
/// ```
pub fn to_query_pairs<T>(params: &T) -> Result<Vec<(String, String)>>
where
    T: Serialize + ?Sized,
{
    let value =
        serde_json::to_value(params).map_err(|e| Error::SerializationFailed(e.to_string()))?;

    let map = match value {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(Error::SerializationFailed(format!(
                "query parameters must be a map, got {other}"
            )))
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items {
                    if let Some(rendered) = render_scalar(item) {
                        pairs.push((key.clone(), rendered));
                    }
                }
            }
            other => {
                if let Some(rendered) = render_scalar(other) {
                    pairs.push((key, rendered));
                }
            }
        }
    }

    Ok(pairs)
}

fn render_scalar(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        nested => Some(nested.to_string()),
    }
}

/// Common paging and sorting filters accepted by most list endpoints.
///
/// Embed it with `#[serde(flatten)]` in a binding's filter struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Page {
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Number of records to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    /// Sort expression, e.g. `-created`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl Page {
    /// Creates an empty page filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the offset.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the sort expression.
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    #[derive(Serialize)]
    struct Filter {
        #[serde(flatten)]
        page: Page,
        #[serde(rename = "personId", skip_serializing_if = "Option::is_none")]
        person_id: Option<u64>,
        #[serde(rename = "includeTrash", skip_serializing_if = "Option::is_none")]
        include_trash: Option<bool>,
        #[serde(flatten)]
        extra: Map<String, Value>,
    }

    #[test]
    fn test_none_fields_are_omitted() {
        let pairs = to_query_pairs(&Filter {
            page: Page::new().limit(25),
            person_id: None,
            include_trash: Some(false),
            extra: Map::new(),
        })
        .unwrap();

        assert_eq!(
            pairs,
            vec![
                ("limit".to_string(), "25".to_string()),
                ("includeTrash".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_extra_fields_pass_through() {
        let mut extra = Map::new();
        extra.insert("fields".to_string(), json!("id,name"));
        extra.insert("skipped".to_string(), Value::Null);

        let pairs = to_query_pairs(&Filter {
            page: Page::new(),
            person_id: Some(12),
            include_trash: None,
            extra,
        })
        .unwrap();

        assert_eq!(
            pairs,
            vec![
                ("personId".to_string(), "12".to_string()),
                ("fields".to_string(), "id,name".to_string()),
            ]
        );
    }

    #[test]
    fn test_unit_and_none_yield_nothing() {
        assert!(to_query_pairs(&()).unwrap().is_empty());
        assert!(to_query_pairs(&Option::<Page>::None).unwrap().is_empty());
    }

    #[test]
    fn test_scalar_is_rejected() {
        let err = to_query_pairs(&5).unwrap_err();
        assert!(matches!(err, Error::SerializationFailed(_)));
    }
}
