//! Cache Key Derivation
//!
//! Turns a GET request's logical identity (path plus query parameters) into a
//! deterministic cache key, and flattens the same parameters into query pairs.

use serde_json::{Map, Value};

/// Query parameters as a JSON object.
pub type Params = Map<String, Value>;

// == Normalize Path ==
/// Canonical spelling of an endpoint path: one leading `/`, no trailing `/`.
///
/// `lawyers`, `/lawyers` and `/lawyers/` all name the same endpoint. The
/// empty path is the API root, `/`.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    format!("/{}", trimmed)
}

// == Cache Key ==
/// Derives the cache key for a GET to `path` with `params`.
///
/// The path is normalised first, so spellings that reach the same URL share
/// a key. Parameters are serialised with their keys sorted (recursively), so
/// the order in which they were supplied never matters. Absent and empty
/// parameter objects produce the same key.
pub fn cache_key(path: &str, params: Option<&Params>) -> String {
    let canonical = match params {
        Some(params) if !params.is_empty() => canonicalize(&Value::Object(params.clone())),
        _ => "{}".to_string(),
    };
    format!("{}:{}", normalize_path(path), canonical)
}

fn canonicalize(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let fields: Vec<String> = keys
                .into_iter()
                .map(|k| format!("{}:{}", Value::String(k.clone()), canonicalize(&map[k])))
                .collect();
            format!("{{{}}}", fields.join(","))
        }
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(canonicalize).collect();
            format!("[{}]", items.join(","))
        }
        other => other.to_string(),
    }
}

// == Query Pairs ==
/// Flattens parameters into `(name, value)` pairs for the query string.
///
/// Strings are sent as-is, numbers and booleans in their JSON spelling, arrays
/// as repeated names, nested objects as compact JSON. Nulls are skipped.
pub fn query_pairs(params: Option<&Params>) -> Vec<(String, String)> {
    let Some(params) = params else {
        return Vec::new();
    };

    let mut pairs = Vec::with_capacity(params.len());
    for (name, value) in params {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items {
                    if let Some(text) = scalar_text(item) {
                        pairs.push((name.clone(), text));
                    }
                }
            }
            other => {
                if let Some(text) = scalar_text(other) {
                    pairs.push((name.clone(), text));
                }
            }
        }
    }
    pairs
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn params(value: Value) -> Params {
        match value {
            Value::Object(map) => map,
            _ => panic!("params must be an object"),
        }
    }

    #[test]
    fn test_key_is_order_insensitive() {
        let mut first = Params::new();
        first.insert("a".to_string(), json!(1));
        first.insert("b".to_string(), json!(2));

        let mut second = Params::new();
        second.insert("b".to_string(), json!(2));
        second.insert("a".to_string(), json!(1));

        assert_eq!(
            cache_key("/lawyers", Some(&first)),
            cache_key("/lawyers", Some(&second))
        );
    }

    #[test]
    fn test_absent_and_empty_params_match() {
        let empty = Params::new();
        assert_eq!(cache_key("/blogs", None), cache_key("/blogs", Some(&empty)));
        assert_eq!(cache_key("/blogs", None), "/blogs:{}");
    }

    #[test]
    fn test_different_params_differ() {
        let a = params(json!({"page": 1}));
        let b = params(json!({"page": 2}));
        let c = params(json!({"page": "1"}));

        assert_ne!(cache_key("/blogs", Some(&a)), cache_key("/blogs", Some(&b)));
        assert_ne!(cache_key("/blogs", Some(&a)), cache_key("/blogs", Some(&c)));
    }

    #[test]
    fn test_path_spellings_share_key() {
        let canonical = cache_key("/lawyers", None);

        assert_eq!(cache_key("lawyers", None), canonical);
        assert_eq!(cache_key("/lawyers/", None), canonical);
        assert_eq!(cache_key("lawyers/", None), canonical);
        assert_eq!(canonical, "/lawyers:{}");
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("lawyers/42"), "/lawyers/42");
        assert_eq!(normalize_path("/blogs/"), "/blogs");
    }

    #[test]
    fn test_different_paths_differ() {
        assert_ne!(cache_key("/blogs", None), cache_key("/lawyers", None));
    }

    #[test]
    fn test_nested_objects_are_canonical() {
        let a = params(json!({"filter": {"city": "Lyon", "area": "tax"}}));
        let key = cache_key("/lawyers", Some(&a));
        assert_eq!(key, r#"/lawyers:{"filter":{"area":"tax","city":"Lyon"}}"#);
    }

    #[test]
    fn test_query_pairs() {
        let p = params(json!({
            "q": "divorce",
            "page": 2,
            "verified": true,
            "tags": ["family", "civil"],
            "skip": null
        }));

        let mut pairs = query_pairs(Some(&p));
        pairs.sort();

        assert_eq!(
            pairs,
            vec![
                ("page".to_string(), "2".to_string()),
                ("q".to_string(), "divorce".to_string()),
                ("tags".to_string(), "civil".to_string()),
                ("tags".to_string(), "family".to_string()),
                ("verified".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_pairs_absent() {
        assert!(query_pairs(None).is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        // Permuting insertion order of the same parameters never changes the key.
        #[test]
        fn prop_key_ignores_param_order(
            fields in prop::collection::btree_map("[a-z]{1,8}", 0i64..1000, 0..8)
        ) {
            let forward: Params = fields
                .iter()
                .map(|(k, v)| (k.clone(), json!(v)))
                .collect();
            let backward: Params = fields
                .iter()
                .rev()
                .map(|(k, v)| (k.clone(), json!(v)))
                .collect();

            prop_assert_eq!(
                cache_key("/p", Some(&forward)),
                cache_key("/p", Some(&backward))
            );
        }

        // Changing any single parameter value changes the key.
        #[test]
        fn prop_key_distinguishes_values(
            name in "[a-z]{1,8}",
            a in 0i64..1000,
            b in 0i64..1000
        ) {
            prop_assume!(a != b);
            let mut first = Params::new();
            first.insert(name.clone(), json!(a));
            let mut second = Params::new();
            second.insert(name, json!(b));

            prop_assert_ne!(
                cache_key("/p", Some(&first)),
                cache_key("/p", Some(&second))
            );
        }
    }
}
