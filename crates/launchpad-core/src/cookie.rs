//! Cookie wire format
//!
//! Serializes `document.cookie` assignments and parses the jar string the
//! browser hands back (`"a=1; b=2"`). Only the attributes the consent marker
//! needs are modelled: `expires`, `secure`, and `SameSite`.

use std::fmt;

/// UTC date used to force immediate removal of a cookie.
pub const EPOCH_EXPIRY: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// When a written cookie expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CookieExpiry {
    /// No `expires` attribute; lifetime is the browsing session.
    #[default]
    Session,
    /// Expired at the Unix epoch, so the browser drops it on write.
    Epoch,
}

/// `SameSite` attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    /// Only sent on same-site requests
    Strict,
    /// Sent on same-site requests and top-level navigations
    Lax,
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "Strict"),
            Self::Lax => write!(f, "Lax"),
        }
    }
}

/// A single cookie assignment, rendered with `Display` into the string that
/// is written to `document.cookie`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCookie {
    /// Cookie name
    pub name: String,
    /// Cookie value, written verbatim
    pub value: String,
    /// Expiry attribute
    pub expiry: CookieExpiry,
    /// Whether the `secure` attribute is set
    pub secure: bool,
    /// Optional `SameSite` attribute
    pub same_site: Option<SameSite>,
}

impl SetCookie {
    /// A session cookie with `secure` and `SameSite=Strict`.
    pub fn strict(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            expiry: CookieExpiry::Session,
            secure: true,
            same_site: Some(SameSite::Strict),
        }
    }

    /// An assignment that removes `name`. The value is cleared and no other
    /// attributes are sent, so it matches whatever path the original used
    /// when that path is the document default.
    pub fn expire(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
            expiry: CookieExpiry::Epoch,
            secure: false,
            same_site: None,
        }
    }

    /// Whether writing this cookie removes it from the jar.
    pub fn is_removal(&self) -> bool {
        self.expiry == CookieExpiry::Epoch
    }
}

impl fmt::Display for SetCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)?;
        if self.expiry == CookieExpiry::Epoch {
            write!(f, "; expires={EPOCH_EXPIRY}")?;
        }
        if self.secure {
            write!(f, "; secure")?;
        }
        if let Some(same_site) = self.same_site {
            write!(f, "; SameSite={same_site}")?;
        }
        Ok(())
    }
}

/// One `name=value` pair from a serialized jar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieEntry {
    /// Cookie name
    pub name: String,
    /// Cookie value
    pub value: String,
}

/// Parse the jar string returned by `document.cookie`.
///
/// Segments are split on `;` and trimmed. A segment without `=` is a name
/// with an empty value; empty segments are skipped. Order is preserved.
pub fn parse_jar(serialized: &str) -> Vec<CookieEntry> {
    serialized
        .split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('=') {
            Some((name, value)) => CookieEntry {
                name: name.trim().to_string(),
                value: value.trim().to_string(),
            },
            None => CookieEntry {
                name: segment.to_string(),
                value: String::new(),
            },
        })
        .collect()
}

/// Render entries back into jar form (`"a=1; b=2"`).
pub fn serialize_jar<'a>(entries: impl IntoIterator<Item = &'a CookieEntry>) -> String {
    entries
        .into_iter()
        .map(|entry| format!("{}={}", entry.name, entry.value))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Whether a cookie name can be written without escaping.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c == '=' || c == ';' || c == ',' || c.is_whitespace() || c.is_control())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_cookie_format() {
        let cookie = SetCookie::strict("consent", "1");
        assert_eq!(cookie.to_string(), "consent=1; secure; SameSite=Strict");
    }

    #[test]
    fn test_expire_cookie_format() {
        let cookie = SetCookie::expire("session_id");
        assert!(cookie.is_removal());
        assert_eq!(
            cookie.to_string(),
            "session_id=; expires=Thu, 01 Jan 1970 00:00:00 GMT"
        );
    }

    #[test]
    fn test_parse_jar() {
        let entries = parse_jar("consent=1;  theme=dark ;flag; ;a=b=c");
        let pairs: Vec<_> = entries
            .iter()
            .map(|e| (e.name.as_str(), e.value.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("consent", "1"), ("theme", "dark"), ("flag", ""), ("a", "b=c")]
        );
    }

    #[test]
    fn test_parse_empty_jar() {
        assert!(parse_jar("").is_empty());
        assert!(parse_jar("  ;  ").is_empty());
    }

    #[test]
    fn test_serialize_jar_matches_browser_form() {
        let entries = parse_jar("a=1;b=2");
        assert_eq!(serialize_jar(&entries), "a=1; b=2");
    }

    #[test]
    fn test_name_validation() {
        assert!(is_valid_name("consent"));
        assert!(is_valid_name("__Host-consent"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("a=b"));
        assert!(!is_valid_name("a b"));
        assert!(!is_valid_name("a;b"));
    }
}
