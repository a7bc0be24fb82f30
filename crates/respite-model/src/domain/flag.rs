use serde::{Deserialize, Serialize};

/// Boolean flag with a lenient textual form.
///
/// Accepts `true`/`false` plus the usual aliases (`1`/`0`, `t`/`f`, `yes`/`no`, `on`/`off`),
/// compared case-insensitively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Flag(bool);

impl Flag {
    /// Create an enabled flag.
    pub const fn enabled() -> Self {
        Self(true)
    }

    /// Create a disabled flag.
    pub const fn disabled() -> Self {
        Self(false)
    }

    /// Check if the flag is enabled.
    pub const fn is_enabled(&self) -> bool {
        self.0
    }

    /// Parse a boolean literal, returning `None` if it is not recognized.
    pub fn from_literal(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "true" | "t" | "1" | "yes" | "y" | "on" => Some(Self::enabled()),
            "false" | "f" | "0" | "no" | "n" | "off" => Some(Self::disabled()),
            _ => None,
        }
    }
}

impl From<bool> for Flag {
    fn from(b: bool) -> Self {
        Self(b)
    }
}

impl From<Flag> for bool {
    fn from(f: Flag) -> Self {
        f.0
    }
}

#[cfg(test)]
mod tests {
    use super::Flag;

    #[test]
    fn default_is_disabled() {
        assert!(!Flag::default().is_enabled());
    }

    #[test]
    fn literal_aliases_are_recognized() {
        for s in ["true", "TRUE", "t", "1", "yes", "on"] {
            assert_eq!(Flag::from_literal(s), Some(Flag::enabled()), "literal {s:?}");
        }
        for s in ["false", "False", "f", "0", "no", "off"] {
            assert_eq!(Flag::from_literal(s), Some(Flag::disabled()), "literal {s:?}");
        }
    }

    #[test]
    fn unknown_literals_are_rejected() {
        for s in ["", "notbool", "2", "enabled", "tru"] {
            assert!(Flag::from_literal(s).is_none(), "literal {s:?}");
        }
    }

    #[test]
    fn from_bool_and_into_bool() {
        let f: Flag = true.into();
        assert!(f.is_enabled());

        let b: bool = Flag::disabled().into();
        assert!(!b);
    }

    #[test]
    fn serde_transparent_roundtrip() {
        let json = serde_json::to_string(&Flag::enabled()).unwrap();
        assert_eq!(json, "true");

        let back: Flag = serde_json::from_str(&json).unwrap();
        assert!(back.is_enabled());
    }
}
