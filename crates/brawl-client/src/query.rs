//! Query parameters and canonical request keys.

use std::collections::BTreeMap;

use url::form_urlencoded;

/// Query parameters kept in key order.
///
/// Two parameter sets with the same pairs always serialize identically,
/// whatever order they were inserted in, so the serialized form can be used
/// as a cache key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    /// Empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.0.insert(key.into(), value.to_string());
        self
    }

    /// Add a parameter only when a value is present.
    pub fn insert_opt<V: ToString>(
        &mut self,
        key: impl Into<String>,
        value: Option<V>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Whether no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value of a parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// `k=v&k=v` form, keys sorted, values form-encoded.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.0 {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// Cursor paging parameters accepted by list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    /// Return items before this cursor.
    pub before: Option<String>,
    /// Return items after this cursor.
    pub after: Option<String>,
    /// Maximum number of items to return.
    pub limit: Option<u32>,
}

impl PageQuery {
    /// No paging parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `before` cursor.
    pub fn before(mut self, cursor: impl Into<String>) -> Self {
        self.before = Some(cursor.into());
        self
    }

    /// Set the `after` cursor.
    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    /// Set the item limit.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl From<&PageQuery> for QueryParams {
    fn from(page: &PageQuery) -> Self {
        let mut params = QueryParams::new();
        params
            .insert_opt("after", page.after.as_deref())
            .insert_opt("before", page.before.as_deref())
            .insert_opt("limit", page.limit);
        params
    }
}

impl From<PageQuery> for QueryParams {
    fn from(page: PageQuery) -> Self {
        QueryParams::from(&page)
    }
}

/// Canonical key for a request: base URL, path, then sorted query string.
///
/// The key is also the URL the request is sent to. `path` is expected to be
/// percent-encoded already.
pub fn request_key(base_url: &str, path: &str, query: &QueryParams) -> String {
    let base = base_url.trim_end_matches('/');
    let mut key = if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    };

    if !query.is_empty() {
        key.push('?');
        key.push_str(&query.to_query_string());
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.brawlstars.com/v1";

    #[test]
    fn test_key_without_query() {
        assert_eq!(
            request_key(BASE, "/players/%232Q0VVCJ2", &QueryParams::new()),
            "https://api.brawlstars.com/v1/players/%232Q0VVCJ2"
        );
        let trailing_slash = "https://api.brawlstars.com/v1/";
        assert_eq!(
            request_key(trailing_slash, "brawlers", &QueryParams::new()),
            "https://api.brawlstars.com/v1/brawlers"
        );
    }

    #[test]
    fn test_key_ignores_insertion_order() {
        let mut first = QueryParams::new();
        first.insert("limit", 10).insert("before", "abc");
        let mut second = QueryParams::new();
        second.insert("before", "abc").insert("limit", 10);

        let key = request_key(BASE, "/rankings/us/players", &first);
        assert_eq!(key, request_key(BASE, "/rankings/us/players", &second));
        assert_eq!(
            key,
            "https://api.brawlstars.com/v1/rankings/us/players?before=abc&limit=10"
        );
    }

    #[test]
    fn test_absent_fields_omitted() {
        let params = QueryParams::from(PageQuery::new().limit(5));
        assert_eq!(params.to_query_string(), "limit=5");
        assert_eq!(params.get("before"), None);

        assert!(QueryParams::from(PageQuery::new()).is_empty());
    }

    #[test]
    fn test_values_are_encoded() {
        let params: QueryParams = [("after", "a b&c")].into_iter().collect();
        assert_eq!(params.to_query_string(), "after=a+b%26c");
    }
}
