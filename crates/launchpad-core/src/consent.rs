//! Consent flag and its cookie encoding

use std::fmt;

/// Default name of the consent marker cookie.
pub const DEFAULT_CONSENT_COOKIE: &str = "consent";

/// Whether the user has opted into persistent storage.
///
/// Encoded as the literal `"1"` or `"0"`. Anything else, including a missing
/// marker, reads as [`ConsentFlag::Denied`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConsentFlag {
    /// Opted in
    Granted,
    /// Opted out, or never asked
    #[default]
    Denied,
}

impl ConsentFlag {
    /// Wire value for this flag.
    pub fn as_value(self) -> &'static str {
        match self {
            Self::Granted => "1",
            Self::Denied => "0",
        }
    }

    /// Decode a stored marker value. Only `"1"` grants.
    pub fn from_value(value: &str) -> Self {
        if value == "1" {
            Self::Granted
        } else {
            Self::Denied
        }
    }

    /// `true` for [`ConsentFlag::Granted`].
    pub fn is_granted(self) -> bool {
        self == Self::Granted
    }
}

impl From<bool> for ConsentFlag {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Granted
        } else {
            Self::Denied
        }
    }
}

impl From<ConsentFlag> for bool {
    fn from(flag: ConsentFlag) -> Self {
        flag.is_granted()
    }
}

impl fmt::Display for ConsentFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Granted => write!(f, "granted"),
            Self::Denied => write!(f, "denied"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(ConsentFlag::Granted.as_value(), "1");
        assert_eq!(ConsentFlag::Denied.as_value(), "0");
        assert_eq!(ConsentFlag::from_value("1"), ConsentFlag::Granted);
        assert_eq!(ConsentFlag::from_value("0"), ConsentFlag::Denied);
        assert_eq!(ConsentFlag::from_value("true"), ConsentFlag::Denied);
        assert_eq!(ConsentFlag::from_value(""), ConsentFlag::Denied);
    }

    #[test]
    fn test_bool_conversion() {
        assert!(bool::from(ConsentFlag::from(true)));
        assert!(!bool::from(ConsentFlag::from(false)));
        assert_eq!(ConsentFlag::default(), ConsentFlag::Denied);
    }
}
