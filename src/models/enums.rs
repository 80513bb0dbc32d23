use serde::{Deserialize, Serialize};

/// Failed to parse an enum from its wire string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid value for {field}: {value}")]
pub struct InvalidEnum {
    pub field: String,
    pub value: String,
}

/// Macro to generate an ordered enum with as_str + std::str::FromStr pattern.
/// Variants are declared in ascending order; the derived `Ord` follows it.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidEnum;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Severity {
    Low => "low",
    Medium => "medium",
    High => "high",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_is_totally_ordered() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert_eq!(
            [Severity::High, Severity::Low, Severity::Medium].iter().max(),
            Some(&Severity::High)
        );
    }

    #[test]
    fn severity_roundtrips_through_str() {
        for s in ["low", "medium", "high"] {
            let parsed: Severity = s.parse().unwrap();
            assert_eq!(parsed.as_str(), s);
        }
    }

    #[test]
    fn severity_rejects_unknown_string() {
        let err = "critical".parse::<Severity>().unwrap_err();
        assert_eq!(err.field, "Severity");
        assert_eq!(err.value, "critical");
    }

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Medium).unwrap(), "\"medium\"");
        let back: Severity = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(back, Severity::High);
    }
}
