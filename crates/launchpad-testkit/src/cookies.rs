//! In-memory cookie jar

use std::cell::{Cell, RefCell};

use launchpad_core::cookie::{parse_jar, serialize_jar, CookieEntry, SetCookie};
use launchpad_core::{CookieJarEffects, LaunchError, LaunchResult};

/// Cookie jar that behaves like `document.cookie` for a single path.
///
/// Epoch-expired writes remove the entry; other writes replace the value in
/// place or append. Every write is recorded, including ones that removed
/// nothing, so tests can check the order of assignments.
#[derive(Debug, Default)]
pub struct MemoryCookieJar {
    entries: RefCell<Vec<CookieEntry>>,
    writes: RefCell<Vec<SetCookie>>,
    reject_writes: Cell<bool>,
    drop_writes: Cell<bool>,
}

impl MemoryCookieJar {
    /// Empty jar
    pub fn new() -> Self {
        Self::default()
    }

    /// Jar pre-populated with `name=value` pairs
    pub fn with_entries(pairs: &[(&str, &str)]) -> Self {
        let jar = Self::new();
        jar.entries.replace(
            pairs
                .iter()
                .map(|(name, value)| CookieEntry {
                    name: (*name).to_string(),
                    value: (*value).to_string(),
                })
                .collect(),
        );
        jar
    }

    /// Make every write fail, like a sandboxed document that throws
    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }

    /// Make every write a silent no-op, like cookies disabled by policy
    pub fn drop_writes(&self, drop: bool) {
        self.drop_writes.set(drop);
    }

    /// Current entries
    pub fn entries(&self) -> Vec<CookieEntry> {
        self.entries.borrow().clone()
    }

    /// Value of `name`, if present
    pub fn value(&self, name: &str) -> Option<String> {
        self.entries
            .borrow()
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value.clone())
    }

    /// How many entries are named `name`
    pub fn count(&self, name: &str) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| entry.name == name)
            .count()
    }

    /// Every assignment applied so far, in order
    pub fn writes(&self) -> Vec<SetCookie> {
        self.writes.borrow().clone()
    }
}

impl CookieJarEffects for MemoryCookieJar {
    fn read_all(&self) -> String {
        serialize_jar(self.entries.borrow().iter())
    }

    fn write(&self, cookie: &SetCookie) -> LaunchResult<()> {
        if self.reject_writes.get() {
            return Err(LaunchError::consent_write(format!(
                "cookie write rejected for {}",
                cookie.name
            )));
        }
        self.writes.borrow_mut().push(cookie.clone());
        if self.drop_writes.get() {
            return Ok(());
        }

        let mut entries = self.entries.borrow_mut();
        if cookie.is_removal() {
            entries.retain(|entry| entry.name != cookie.name);
        } else if let Some(entry) = entries.iter_mut().find(|entry| entry.name == cookie.name) {
            entry.value.clone_from(&cookie.value);
        } else {
            entries.push(CookieEntry {
                name: cookie.name.clone(),
                value: cookie.value.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jar_semantics() {
        let jar = MemoryCookieJar::with_entries(&[("a", "1")]);
        jar.write(&SetCookie::strict("b", "2")).unwrap();
        jar.write(&SetCookie::strict("a", "3")).unwrap();
        assert_eq!(jar.read_all(), "a=3; b=2");

        jar.write(&SetCookie::expire("a")).unwrap();
        assert_eq!(jar.read_all(), "b=2");
        assert_eq!(parse_jar(&jar.read_all()).len(), 1);
        assert_eq!(jar.writes().len(), 3);
    }

    #[test]
    fn test_rejected_and_dropped_writes() {
        let jar = MemoryCookieJar::new();
        jar.reject_writes(true);
        assert!(jar.write(&SetCookie::strict("a", "1")).is_err());

        jar.reject_writes(false);
        jar.drop_writes(true);
        assert!(jar.write(&SetCookie::strict("a", "1")).is_ok());
        assert_eq!(jar.read_all(), "");
    }
}
