//! Consent store invariants over arbitrary cookie jars

use launchpad_app::CookieConsentStore;
use launchpad_core::{ConsentStorage, CookieJarEffects};
use launchpad_testkit::MemoryCookieJar;
use proptest::prelude::*;

fn jar_entries() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-z_]{1,10}", "[A-Za-z0-9]{0,8}"), 0..12)
}

fn jar_from(entries: &[(String, String)]) -> MemoryCookieJar {
    let pairs: Vec<(&str, &str)> = entries
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    MemoryCookieJar::with_entries(&pairs)
}

proptest! {
    #[test]
    fn set_then_get_round_trips(entries in jar_entries(), enabled in any::<bool>()) {
        let store = CookieConsentStore::new(jar_from(&entries));
        store.set(enabled).unwrap();
        prop_assert_eq!(store.get(), enabled);
    }

    #[test]
    fn opt_out_expires_every_prior_entry(entries in jar_entries()) {
        let store = CookieConsentStore::new(jar_from(&entries));
        store.set(false).unwrap();

        let writes = store.jar().writes();
        let (marker, sweep) = writes.split_last().unwrap();
        prop_assert_eq!(marker.name.as_str(), "consent");
        prop_assert_eq!(marker.value.as_str(), "0");
        prop_assert!(!marker.is_removal());

        for (name, _) in &entries {
            prop_assert!(sweep.iter().any(|w| &w.name == name && w.is_removal()));
        }
        prop_assert_eq!(store.jar().read_all(), "consent=0");
    }

    #[test]
    fn opt_in_is_idempotent(entries in jar_entries()) {
        let store = CookieConsentStore::new(jar_from(&entries));
        let markers_before = store.jar().count("consent");
        prop_assume!(markers_before <= 1);

        store.set(true).unwrap();
        store.set(true).unwrap();

        prop_assert!(store.get());
        prop_assert_eq!(store.jar().count("consent"), 1);
    }
}

#[test]
fn empty_jar_reads_false() {
    let store = CookieConsentStore::new(MemoryCookieJar::new());
    assert!(!store.get());
}

#[test]
fn opt_in_after_opt_out_restores_consent() {
    let store = CookieConsentStore::new(MemoryCookieJar::with_entries(&[("tracking", "x")]));
    store.set(false).unwrap();
    store.set(true).unwrap();
    assert!(store.get());
    assert_eq!(store.jar().read_all(), "consent=1");
}
