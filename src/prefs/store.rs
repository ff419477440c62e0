/// String key/value store with "empty means unset" semantics.
///
/// Implementations never fail from the caller's point of view: reads of
/// missing keys yield `""` and writes are fire-and-forget.
pub trait KeyValueStore {
    /// Stored value for `key`, or `""` when absent.
    fn get(&self, key: &str) -> String;

    /// Write `key=value`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);

    /// Blank the value. The entry stays, but reads as unset.
    fn clear(&mut self, key: &str) {
        self.set(key, "");
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> String {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn clear(&mut self, key: &str) {
        (**self).clear(key);
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> String {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn clear(&mut self, key: &str) {
        (**self).clear(key);
    }
}

/// Process-local store, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: Vec<(String, String)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> String {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .unwrap_or_default()
    }

    fn set(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }
}
