//! Cache key trait and request key derivation

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::Result;

/// Trait for types that can be used as cache keys
///
/// Implement this trait to use custom types as cache keys.
pub trait CacheKey: Send + Sync {
    /// Generate the key string
    fn cache_key(&self) -> String;
}

impl CacheKey for String {
    fn cache_key(&self) -> String {
        self.clone()
    }
}

impl CacheKey for &str {
    fn cache_key(&self) -> String {
        self.to_string()
    }
}

/// Logical endpoints served by the facade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    PopularMovies,
    TrendingMovies,
    PopularTv,
    Search,
    MovieDetails,
    TvDetails,
}

impl Endpoint {
    /// Key prefix for this endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::PopularMovies => "popular_movies",
            Endpoint::TrendingMovies => "trending_movies",
            Endpoint::PopularTv => "popular_tv",
            Endpoint::Search => "search",
            Endpoint::MovieDetails => "movie_details",
            Endpoint::TvDetails => "tv_details",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Endpoint> for String {
    fn from(endpoint: Endpoint) -> Self {
        endpoint.as_str().to_string()
    }
}

/// Key of a cacheable request: logical endpoint plus its parameters.
///
/// Parameters are canonicalised (object keys sorted at every depth), so
/// `{page:1,x:2}` and `{x:2,page:1}` produce the same key whatever order
/// the caller built them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestKey {
    endpoint: String,
    params: Value,
}

impl RequestKey {
    /// Create a key from an endpoint name and a JSON parameter object
    pub fn new(endpoint: impl Into<String>, params: Value) -> Self {
        Self {
            endpoint: endpoint.into(),
            params: canonicalize(params),
        }
    }

    /// Create a key from any serializable parameter struct
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Decode`](crate::CatalogError::Decode) if the
    /// parameters cannot be represented as JSON.
    pub fn from_params<P: Serialize>(endpoint: impl Into<String>, params: &P) -> Result<Self> {
        Ok(Self::new(endpoint, serde_json::to_value(params)?))
    }

    /// Endpoint name
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Canonical parameters
    pub fn params(&self) -> &Value {
        &self.params
    }
}

impl CacheKey for RequestKey {
    fn cache_key(&self) -> String {
        format!("{}_{}", self.endpoint, self.params)
    }
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<String, Value> = map
                .into_iter()
                .map(|(k, v)| (k, canonicalize(v)))
                .collect();
            Value::Object(sorted.into_iter().collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_key() {
        let key = "my_key".to_string();
        assert_eq!(key.cache_key(), "my_key");
    }

    #[test]
    fn test_request_key_format() {
        let key = RequestKey::new(Endpoint::PopularMovies, json!({"page": 1}));
        assert_eq!(key.cache_key(), r#"popular_movies_{"page":1}"#);
        assert_eq!(key.endpoint(), "popular_movies");
    }

    #[test]
    fn test_request_key_is_deterministic() {
        let a = RequestKey::new("popular_movies", json!({"page": 1}));
        let b = RequestKey::new("popular_movies", json!({"page": 1}));
        assert_eq!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn test_request_key_ignores_param_order() {
        let mut forward = serde_json::Map::new();
        forward.insert("page".into(), json!(1));
        forward.insert("x".into(), json!(2));

        let mut backward = serde_json::Map::new();
        backward.insert("x".into(), json!(2));
        backward.insert("page".into(), json!(1));

        let a = RequestKey::new("popular_movies", Value::Object(forward));
        let b = RequestKey::new("popular_movies", Value::Object(backward));
        assert_eq!(a.cache_key(), b.cache_key());
        assert_eq!(a.cache_key(), r#"popular_movies_{"page":1,"x":2}"#);
    }

    #[test]
    fn test_nested_objects_are_sorted() {
        let key = RequestKey::new("search", json!({"z": {"b": 1, "a": 2}, "a": [{"d": 0, "c": 1}]}));
        assert_eq!(
            key.cache_key(),
            r#"search_{"a":[{"c":1,"d":0}],"z":{"a":2,"b":1}}"#
        );
    }

    #[test]
    fn test_from_params_struct() {
        #[derive(Serialize)]
        struct Params {
            query: &'static str,
            page: u32,
        }

        let key = RequestKey::from_params(
            Endpoint::Search,
            &Params {
                query: "dune",
                page: 2,
            },
        )
        .unwrap();
        assert_eq!(key.cache_key(), r#"search_{"page":2,"query":"dune"}"#);
    }

    #[test]
    fn test_different_endpoints_differ() {
        let a = RequestKey::new(Endpoint::MovieDetails, json!({"id": 7}));
        let b = RequestKey::new(Endpoint::TvDetails, json!({"id": 7}));
        assert_ne!(a.cache_key(), b.cache_key());
    }
}
