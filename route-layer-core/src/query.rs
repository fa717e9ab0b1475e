//! Query string parsing and serialization
//!
//! Repeated keys are kept as an ordered list of occurrences so a list
//! written as `?k=a&k=b` reads back as a list and serializes the same way.
//! Parsing never fails: malformed segments are read as far as possible and
//! undecodable escapes are kept verbatim.

use std::fmt;

/// Ordered multimap of query parameters.
///
/// Keys keep the order they first appeared in. Each key holds its
/// occurrences in order; `None` is a bare key with no `=`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, Vec<Option<String>>)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parse a raw query string. A leading `?` is ignored.
    pub fn parse(query: &str) -> Self {
        let mut params = Self::new();
        let query = query.strip_prefix('?').unwrap_or(query);

        for segment in query.split('&') {
            if segment.is_empty() {
                continue;
            }

            match segment.split_once('=') {
                Some((key, value)) => {
                    params.push_occurrence(decode_component(key), Some(decode_component(value)))
                }
                None => params.push_occurrence(decode_component(segment), None),
            }
        }

        params
    }

    /// All occurrences of `key`, in order. Empty if the key is missing.
    pub fn get_all(&self, key: &str) -> &[Option<String>] {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    /// First occurrence of `key` that carries a value.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.get_all(key).iter().flatten().next().map(String::as_str)
    }

    /// Replace every occurrence of `key` with a single value.
    /// An existing key keeps its position; a new key goes last.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = Some(value.into());
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, values)) => *values = vec![value],
            None => self.entries.push((key.to_string(), vec![value])),
        }
    }

    /// Add one more occurrence of `key` after the existing ones.
    pub fn append(&mut self, key: &str, value: impl Into<String>) {
        self.push_occurrence(key.to_string(), Some(value.into()));
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push_occurrence(&mut self, key: String, value: Option<String>) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value),
            None => self.entries.push((key, vec![value])),
        }
    }
}

/// Serializes without the leading `?`.
impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, values) in &self.entries {
            let key = urlencoding::encode(key);
            for value in values {
                if !first {
                    f.write_str("&")?;
                }
                first = false;

                match value {
                    Some(value) => write!(f, "{}={}", key, urlencoding::encode(value))?,
                    None => f.write_str(&key)?,
                }
            }
        }
        Ok(())
    }
}

/// A location split into path, query and fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    pub path: String,
    pub query: QueryParams,
    pub fragment: Option<String>,
}

impl ParsedUrl {
    /// Split `url` into its parts. Never fails; an empty string gives an
    /// empty path and no parameters.
    pub fn parse(url: &str) -> Self {
        let (rest, fragment) = match url.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (url, None),
        };

        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, QueryParams::parse(query)),
            None => (rest, QueryParams::new()),
        };

        Self {
            path: path.to_string(),
            query,
            fragment,
        }
    }
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}

/// Decode a key or value: `+` is a space, then percent escapes.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path_only() {
        let url = ParsedUrl::parse("/page");
        assert_eq!(url.path, "/page");
        assert!(url.query.is_empty());
        assert_eq!(url.fragment, None);
    }

    #[test]
    fn test_parse_empty() {
        let url = ParsedUrl::parse("");
        assert_eq!(url.path, "");
        assert!(url.query.is_empty());
        assert_eq!(url.to_string(), "");
    }

    #[test]
    fn test_parse_search_only() {
        let url = ParsedUrl::parse("?tab=info");
        assert_eq!(url.path, "");
        assert_eq!(url.query.first("tab"), Some("info"));
        assert_eq!(url.to_string(), "?tab=info");
    }

    #[test]
    fn test_repeated_keys_keep_order() {
        let query = QueryParams::parse("k=b&other=1&k=a");
        assert_eq!(
            query.get_all("k"),
            &[Some("b".to_string()), Some("a".to_string())]
        );
        assert_eq!(query.keys().collect::<Vec<_>>(), vec!["k", "other"]);
        assert_eq!(query.to_string(), "k=b&k=a&other=1");
    }

    #[test]
    fn test_bare_key_has_no_value() {
        let query = QueryParams::parse("flag&x=1");
        assert_eq!(query.get_all("flag"), &[None::<String>]);
        assert_eq!(query.first("flag"), None);
        assert_eq!(query.keys().collect::<Vec<_>>(), vec!["flag", "x"]);
        assert_eq!(query.to_string(), "flag&x=1");
    }

    #[test]
    fn test_empty_segments_skipped() {
        let query = QueryParams::parse("?&&a=1&&");
        assert_eq!(query.keys().count(), 1);
        assert_eq!(query.to_string(), "a=1");
    }

    #[test]
    fn test_empty_value_is_kept() {
        let query = QueryParams::parse("a=");
        assert_eq!(query.get_all("a"), &[Some(String::new())]);
        assert_eq!(query.to_string(), "a=");
    }

    #[test]
    fn test_value_splits_on_first_equals() {
        let query = QueryParams::parse("expr=a=b");
        assert_eq!(query.first("expr"), Some("a=b"));
        assert_eq!(query.to_string(), "expr=a%3Db");
    }

    #[test]
    fn test_decodes_plus_and_percent() {
        let query = QueryParams::parse("q=hello+world&name=caf%C3%A9");
        assert_eq!(query.first("q"), Some("hello world"));
        assert_eq!(query.first("name"), Some("café"));
        assert_eq!(query.to_string(), "q=hello%20world&name=caf%C3%A9");
    }

    #[test]
    fn test_invalid_utf8_kept_verbatim() {
        let query = QueryParams::parse("bad=%FF%FE");
        assert_eq!(query.first("bad"), Some("%FF%FE"));
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut query = QueryParams::parse("a=1&k=x&k=y&b=2");
        query.set("k", "z");
        assert_eq!(query.to_string(), "a=1&k=z&b=2");
    }

    #[test]
    fn test_set_new_key_goes_last() {
        let mut query = QueryParams::parse("a=1");
        query.set("k", "z");
        assert_eq!(query.to_string(), "a=1&k=z");
    }

    #[test]
    fn test_append_adds_occurrence() {
        let mut query = QueryParams::parse("k=x&a=1");
        query.append("k", "y");
        query.append("new", "v");
        assert_eq!(query.to_string(), "k=x&k=y&a=1&new=v");
    }

    #[test]
    fn test_reserved_characters_stay_encoded() {
        let query = QueryParams::parse("q=c%2B%2B&note=x%26y&eq=k%3Dv&pct=50%25");
        assert_eq!(query.first("q"), Some("c++"));
        assert_eq!(query.first("note"), Some("x&y"));
        assert_eq!(query.first("eq"), Some("k=v"));
        assert_eq!(query.first("pct"), Some("50%"));
        assert_eq!(query.to_string(), "q=c%2B%2B&note=x%26y&eq=k%3Dv&pct=50%25");
    }

    #[test]
    fn test_fragment_preserved() {
        let url = ParsedUrl::parse("/page?a=1#section?x=2");
        assert_eq!(url.path, "/page");
        assert_eq!(url.query.first("a"), Some("1"));
        assert_eq!(url.query.first("x"), None);
        assert_eq!(url.fragment.as_deref(), Some("section?x=2"));
        assert_eq!(url.to_string(), "/page?a=1#section?x=2");
    }

    #[test]
    fn test_trailing_question_mark_dropped() {
        assert_eq!(ParsedUrl::parse("/page?").to_string(), "/page");
    }

    #[test]
    fn test_unchanged_round_trip() {
        let raw = "/list?sort=name&tag=a&tag=b&empty=&flag";
        assert_eq!(ParsedUrl::parse(raw).to_string(), raw);
    }
}
