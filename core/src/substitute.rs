//! `{{NAME}}` placeholder substitution.
//!
//! # Design
//! Variables come from an [`Environment`] capability rather than the process
//! environment directly, so tests can hand in a fixed map. The environment is
//! snapshotted into a [`PlaceholderMap`] (sorted, first-seen-wins) and the
//! input is rewritten in one forward scan. Substituted values are copied to
//! the output and never rescanned, so a value containing `{{OTHER}}` stays
//! literal.

use std::collections::{BTreeMap, HashMap};

const OPEN: &[u8] = b"{{";
const CLOSE: &[u8] = b"}}";

/// A source of substitution variables.
pub trait Environment {
    /// Value of a single variable, if set.
    fn lookup(&self, name: &str) -> Option<String>;

    /// Every variable, in the source's own order. Duplicated names are
    /// allowed; the first occurrence wins when building a [`PlaceholderMap`].
    fn vars(&self) -> Vec<(String, String)>;
}

impl Environment for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl Environment for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

/// Snapshot of the variables available for substitution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderMap {
    vars: BTreeMap<String, String>,
}

impl PlaceholderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot `env`. When a name appears more than once the first value is
    /// kept.
    pub fn from_env<E: Environment + ?Sized>(env: &E) -> Self {
        env.vars().into_iter().collect()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Entries sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for PlaceholderMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut vars = BTreeMap::new();
        for (name, value) in iter {
            vars.entry(name).or_insert(value);
        }
        Self { vars }
    }
}

/// Replace every `{{name}}` in `input` whose name is in `vars`.
///
/// Unknown placeholders are copied verbatim. Bytes outside placeholders,
/// including invalid UTF-8, pass through untouched.
pub fn substitute(input: &[u8], vars: &PlaceholderMap) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;

    while i < input.len() {
        if input[i..].starts_with(OPEN) {
            if let Some((value, consumed)) = placeholder_at(&input[i..], vars) {
                out.extend_from_slice(value.as_bytes());
                i += consumed;
                continue;
            }
        }
        out.push(input[i]);
        i += 1;
    }

    out
}

/// If `rest` starts with `{{name}}` for a known name, return its value and
/// the number of bytes the token spans.
fn placeholder_at<'m>(rest: &[u8], vars: &'m PlaceholderMap) -> Option<(&'m str, usize)> {
    let inner = &rest[OPEN.len()..];
    let end = inner.windows(CLOSE.len()).position(|w| w == CLOSE)?;
    let name = std::str::from_utf8(&inner[..end]).ok()?;
    let value = vars.get(name)?;
    Some((value, OPEN.len() + end + CLOSE.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> PlaceholderMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn replaces_every_occurrence() {
        let map = vars(&[("HOST", "example.com")]);
        let out = substitute(b"GET http://{{HOST}}/a\nHost: {{HOST}}\n", &map);
        assert_eq!(out, b"GET http://example.com/a\nHost: example.com\n");
    }

    #[test]
    fn unknown_placeholder_is_left_alone() {
        let map = vars(&[("HOST", "example.com")]);
        let out = substitute(b"X-Token: {{TOKEN}}", &map);
        assert_eq!(out, b"X-Token: {{TOKEN}}");
    }

    #[test]
    fn values_are_not_expanded_recursively() {
        let map = vars(&[("A", "{{B}}"), ("B", "bee")]);
        assert_eq!(substitute(b"{{A}}", &map), b"{{B}}");
        assert_eq!(substitute(b"{{B}}{{A}}", &map), b"bee{{B}}");
    }

    #[test]
    fn placeholder_inside_braces() {
        let map = vars(&[("A", "x")]);
        assert_eq!(substitute(b"{{{A}}}", &map), b"{x}");
        assert_eq!(substitute(b"{{a{{A}}", &map), b"{{ax");
    }

    #[test]
    fn unterminated_placeholder_is_copied() {
        let map = vars(&[("A", "x")]);
        assert_eq!(substitute(b"{{A", &map), b"{{A");
        assert_eq!(substitute(b"{{", &map), b"{{");
    }

    #[test]
    fn empty_value_removes_token() {
        let map = vars(&[("EMPTY", "")]);
        assert_eq!(substitute(b"a{{EMPTY}}b", &map), b"ab");
    }

    #[test]
    fn invalid_utf8_passes_through() {
        let map = vars(&[("A", "x")]);
        assert_eq!(substitute(b"\xff{{A}}\xfe", &map), b"\xffx\xfe");
    }

    #[test]
    fn first_seen_value_wins() {
        let map: PlaceholderMap = vec![
            ("A".to_string(), "first".to_string()),
            ("A".to_string(), "second".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(map.get("A"), Some("first"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn from_env_snapshots_a_map() {
        let mut env = HashMap::new();
        env.insert("B".to_string(), "2".to_string());
        env.insert("A".to_string(), "1".to_string());
        let map = PlaceholderMap::from_env(&env);
        let names: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(env.lookup("A").as_deref(), Some("1"));
    }
}
