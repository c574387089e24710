//! Declarative route descriptions as authored in the routing configuration
//!
//! A `RouteSpec` is either a leaf (a navigable page) or a grouping node that
//! only contributes path and source prefixes to its children.
//!
//! Deserialization is lenient: a missing or `null` path/source reads as an
//! empty string, a route list that is not an array reads as empty, and
//! entries that cannot be read at all are skipped with a warning so that one
//! bad entry does not take its siblings down with it.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// One entry of the route tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    /// Path segment contributed by this node
    #[serde(default, deserialize_with = "nullable_string")]
    pub path: String,

    /// Source-location segment contributed by this node
    #[serde(default, deserialize_with = "nullable_string")]
    pub src: String,

    /// Optional tag used for navigation by name (read on leaves only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Optional loader identifier (read on leaves only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loader: Option<String>,

    /// Nested routes; present means this node is a pure grouping node
    #[serde(
        default,
        deserialize_with = "deserialize_children",
        skip_serializing_if = "Option::is_none"
    )]
    pub children: Option<Vec<RouteSpec>>,
}

impl RouteSpec {
    /// Create a leaf route
    pub fn leaf(path: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            src: src.into(),
            ..Default::default()
        }
    }

    /// Create a grouping node
    pub fn group(path: impl Into<String>, src: impl Into<String>, children: Vec<RouteSpec>) -> Self {
        Self {
            path: path.into(),
            src: src.into(),
            children: Some(children),
            ..Default::default()
        }
    }

    /// Set the tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Set the loader
    pub fn with_loader(mut self, loader: impl Into<String>) -> Self {
        self.loader = Some(loader.into());
        self
    }

    /// Whether this node only groups children
    pub fn is_group(&self) -> bool {
        self.children.is_some()
    }
}

/// Catch-all page shown when no route matches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackSpec {
    #[serde(default, deserialize_with = "nullable_string")]
    pub src: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loader: Option<String>,
}

impl FallbackSpec {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            loader: None,
        }
    }
}

/// Read a route list from an arbitrary JSON value.
///
/// Anything other than an array yields an empty list.
pub fn routes_from_value(value: Value) -> Vec<RouteSpec> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value::<RouteSpec>(item) {
                Ok(route) => Some(route),
                Err(err) => {
                    warn!(index, error = %err, "Skipping malformed route entry");
                    None
                }
            })
            .collect(),
        Value::Null => vec![],
        other => {
            warn!(value = %other, "Route list is not an array, ignoring it");
            vec![]
        }
    }
}

/// Serde adapter for a lenient top-level route list
pub fn deserialize_routes<'de, D>(deserializer: D) -> Result<Vec<RouteSpec>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(routes_from_value(value.unwrap_or(Value::Null)))
}

fn deserialize_children<'de, D>(deserializer: D) -> Result<Option<Vec<RouteSpec>>, D::Error>
where
    D: Deserializer<'de>,
{
    // `null` children mean a leaf; any other value makes a grouping node
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(routes_from_value))
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_segments_are_empty() {
        let route: RouteSpec = serde_json::from_value(json!({ "tag": "home" })).unwrap();
        assert_eq!(route.path, "");
        assert_eq!(route.src, "");
        assert_eq!(route.tag.as_deref(), Some("home"));
        assert!(!route.is_group());

        let route: RouteSpec = serde_json::from_value(json!({ "path": null, "src": "x" })).unwrap();
        assert_eq!(route.path, "");
    }

    #[test]
    fn test_nested_children() {
        let route: RouteSpec = serde_json::from_value(json!({
            "path": "docs",
            "src": "docs",
            "children": [{ "path": "intro", "src": "intro" }]
        }))
        .unwrap();

        assert!(route.is_group());
        assert_eq!(route.children.unwrap(), vec![RouteSpec::leaf("intro", "intro")]);
    }

    #[test]
    fn test_null_children_is_leaf() {
        let route: RouteSpec =
            serde_json::from_value(json!({ "path": "a", "src": "a", "children": null })).unwrap();
        assert!(!route.is_group());
    }

    #[test]
    fn test_non_array_children_is_empty_group() {
        let route: RouteSpec =
            serde_json::from_value(json!({ "path": "a", "src": "a", "children": "oops" })).unwrap();
        assert_eq!(route.children, Some(vec![]));
    }

    #[test]
    fn test_routes_from_value_skips_malformed() {
        let routes = routes_from_value(json!([
            { "path": "a", "src": "a" },
            { "path": 42, "src": "b" },
            { "path": "c", "src": "c" }
        ]));

        let paths: Vec<_> = routes.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["a", "c"]);
    }

    #[test]
    fn test_routes_from_non_array() {
        assert!(routes_from_value(json!({ "path": "a" })).is_empty());
        assert!(routes_from_value(json!("pages")).is_empty());
        assert!(routes_from_value(Value::Null).is_empty());
    }
}
