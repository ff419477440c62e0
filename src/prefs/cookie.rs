use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use super::store::KeyValueStore;

/// Path scope covering the whole application
pub const SITE_PATH: &str = "/";

// Bytes that would break `k=v; k=v` framing or be mangled by the browser.
const COOKIE_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b',')
    .add(b';')
    .add(b'%')
    .add(b'\\');

// Names additionally must not contain the `=` separator.
const COOKIE_NAME: &AsciiSet = &COOKIE_VALUE.add(b'=');

/// Find `key` in a cookie header (`a=1; b=2`).
///
/// Segments are split on `;` and leading spaces trimmed. Each segment is
/// split at its first `=` and both halves are URL-decoded, so a segment
/// matches only when its whole name equals `key`: `hint` never answers
/// for `hints`. First match wins. Segments with no `=` are skipped.
/// Returns `""` when nothing matches.
pub fn lookup(header: &str, key: &str) -> String {
    for segment in header.split(';') {
        let Some((name, value)) = segment.trim_start_matches(' ').split_once('=') else {
            continue;
        };
        if decode(name) == key {
            return decode(value);
        }
    }
    String::new()
}

fn decode(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, COOKIE_VALUE).to_string()
}

fn encode_name(key: &str) -> String {
    utf8_percent_encode(key, COOKIE_NAME).to_string()
}

/// Cookie-style store: an ordered list of `name=value` pairs scoped to a
/// path, readable back as a header string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieJar {
    path: String,
    // names and values are kept encoded, the way they sit in the header
    entries: Vec<(String, String)>,
}

impl Default for CookieJar {
    fn default() -> Self {
        Self::with_path(SITE_PATH)
    }
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            entries: Vec::new(),
        }
    }

    /// Parse an existing header. Segments without `=` are dropped.
    pub fn from_header(header: &str) -> Self {
        let mut jar = Self::new();
        for segment in header.split(';') {
            let segment = segment.trim();
            match segment.split_once('=') {
                Some((name, value)) if !name.is_empty() => {
                    jar.entries.push((name.to_string(), value.to_string()));
                }
                _ => {
                    if !segment.is_empty() {
                        tracing::trace!(segment, "skipping malformed cookie segment");
                    }
                }
            }
        }
        jar
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Render as a request header: `a=1; b=2`.
    pub fn header(&self) -> String {
        self.entries
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// The assignment a browser would receive for `key=value`.
    pub fn assignment(&self, key: &str, value: &str) -> String {
        format!("{}={};path={}", encode_name(key), encode(value), self.path)
    }
}

impl KeyValueStore for CookieJar {
    fn get(&self, key: &str) -> String {
        lookup(&self.header(), key)
    }

    fn set(&mut self, key: &str, value: &str) {
        let name = encode_name(key);
        let encoded = encode(value);
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = encoded,
            None => self.entries.push((name, encoded)),
        }
    }
}
