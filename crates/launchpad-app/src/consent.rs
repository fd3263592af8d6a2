//! Cookie-backed consent store
//!
//! The consent marker is a single cookie whose value is `"1"` or `"0"`.
//! Opting out expires every cookie the origin holds first, then writes the
//! `"0"` marker last so it survives the sweep.

use launchpad_core::consent::{ConsentFlag, DEFAULT_CONSENT_COOKIE};
use launchpad_core::cookie::{parse_jar, SetCookie};
use launchpad_core::{ConsentStorage, CookieJarEffects, LaunchResult};

/// [`ConsentStorage`] over any cookie jar.
#[derive(Debug, Clone)]
pub struct CookieConsentStore<J> {
    jar: J,
    marker: String,
}

impl<J: CookieJarEffects> CookieConsentStore<J> {
    /// Store using the default marker name.
    pub fn new(jar: J) -> Self {
        Self::with_marker(jar, DEFAULT_CONSENT_COOKIE)
    }

    /// Store using a custom marker name.
    pub fn with_marker(jar: J, marker: impl Into<String>) -> Self {
        Self {
            jar,
            marker: marker.into(),
        }
    }

    /// Name of the consent marker cookie.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// The underlying jar.
    pub fn jar(&self) -> &J {
        &self.jar
    }

    /// Current consent as a flag.
    pub fn flag(&self) -> ConsentFlag {
        let granted = parse_jar(&self.jar.read_all()).iter().any(|entry| {
            entry.name == self.marker && ConsentFlag::from_value(&entry.value).is_granted()
        });
        ConsentFlag::from(granted)
    }

    /// Expire every cookie currently in the jar.
    ///
    /// Keeps going after a failed write so one stubborn entry does not
    /// shield the rest; the first failure is returned.
    fn expire_all(&self) -> LaunchResult<usize> {
        let existing = parse_jar(&self.jar.read_all());
        let mut first_error = None;
        for entry in &existing {
            if let Err(err) = self.jar.write(&SetCookie::expire(&entry.name)) {
                first_error.get_or_insert(err);
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(existing.len()),
        }
    }
}

impl<J: CookieJarEffects> ConsentStorage for CookieConsentStore<J> {
    fn get(&self) -> bool {
        self.flag().is_granted()
    }

    fn set(&self, enabled: bool) -> LaunchResult<()> {
        let flag = ConsentFlag::from(enabled);
        let sweep = if flag.is_granted() {
            Ok(0)
        } else {
            self.expire_all()
        };

        let marker = self
            .jar
            .write(&SetCookie::strict(&self.marker, flag.as_value()));

        match &sweep {
            Ok(expired) => tracing::debug!(%flag, expired, "consent updated"),
            Err(err) => tracing::debug!(%flag, error = %err, "consent updated with sweep failure"),
        }

        sweep.and(marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchpad_testkit::MemoryCookieJar;

    #[test]
    fn test_empty_jar_reads_false() {
        let store = CookieConsentStore::new(MemoryCookieJar::new());
        assert!(!store.get());
        assert_eq!(store.flag(), ConsentFlag::Denied);
    }

    #[test]
    fn test_opt_in_writes_strict_marker() {
        let store = CookieConsentStore::new(MemoryCookieJar::new());
        store.set(true).unwrap();

        assert!(store.get());
        let writes = store.jar().writes();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].to_string(), "consent=1; secure; SameSite=Strict");
    }

    #[test]
    fn test_opt_in_keeps_other_cookies() {
        let jar = MemoryCookieJar::with_entries(&[("theme", "dark")]);
        let store = CookieConsentStore::new(jar);
        store.set(true).unwrap();
        assert_eq!(store.jar().value("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_opt_out_sweeps_before_marker() {
        let jar = MemoryCookieJar::with_entries(&[
            ("consent", "1"),
            ("session", "abc"),
            ("theme", "dark"),
        ]);
        let store = CookieConsentStore::new(jar);
        store.set(false).unwrap();

        let writes = store.jar().writes();
        let (last, sweep) = writes.split_last().unwrap();
        assert_eq!(last.to_string(), "consent=0; secure; SameSite=Strict");
        let expired: Vec<_> = sweep.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(expired, vec!["consent", "session", "theme"]);
        assert!(sweep.iter().all(SetCookie::is_removal));

        assert_eq!(store.jar().read_all(), "consent=0");
        assert!(!store.get());
    }

    #[test]
    fn test_substring_is_not_a_marker() {
        let jar = MemoryCookieJar::with_entries(&[("xconsent", "1"), ("consent_old", "1")]);
        let store = CookieConsentStore::new(jar);
        assert!(!store.get());
    }

    #[test]
    fn test_custom_marker_name() {
        let store = CookieConsentStore::with_marker(MemoryCookieJar::new(), "allow_storage");
        store.set(true).unwrap();
        assert_eq!(store.marker(), "allow_storage");
        assert_eq!(store.jar().value("allow_storage").as_deref(), Some("1"));
    }

    #[test]
    fn test_rejected_write_is_reported_not_fatal() {
        let jar = MemoryCookieJar::with_entries(&[("consent", "1")]);
        jar.reject_writes(true);
        let store = CookieConsentStore::new(jar);

        let err = store.set(false).unwrap_err();
        assert!(matches!(err, launchpad_core::LaunchError::ConsentWrite { .. }));
        // Jar untouched; the read path still works.
        assert!(store.get());
    }

    #[test]
    fn test_silently_dropped_writes() {
        let jar = MemoryCookieJar::new();
        jar.drop_writes(true);
        let store = CookieConsentStore::new(jar);
        assert!(store.set(true).is_ok());
        assert!(!store.get());
    }
}
