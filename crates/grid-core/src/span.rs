// ABOUTME: Column span: how many columns a piece of content occupies.
// ABOUTME: Either an explicit non-zero count or "match parent" meaning all columns.

use std::fmt;
use std::num::NonZeroU32;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColumnSpan {
    /// Use every column of the enclosing grid
    #[default]
    MatchParent,
    Columns(NonZeroU32),
}

impl ColumnSpan {
    /// Returns `None` for zero, which is not a valid span
    pub fn columns(count: u32) -> Option<Self> {
        NonZeroU32::new(count).map(ColumnSpan::Columns)
    }

    /// Number of columns this span takes in a grid of `total_columns`
    pub fn resolve(self, total_columns: u32) -> u32 {
        match self {
            ColumnSpan::MatchParent => total_columns,
            ColumnSpan::Columns(n) => n.get(),
        }
    }
}

const MATCH_PARENT: &str = "match_parent";

// Serialized as a plain integer, or the string "match_parent".
impl Serialize for ColumnSpan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ColumnSpan::MatchParent => serializer.serialize_str(MATCH_PARENT),
            ColumnSpan::Columns(n) => serializer.serialize_u32(n.get()),
        }
    }
}

impl<'de> Deserialize<'de> for ColumnSpan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SpanVisitor;

        impl Visitor<'_> for SpanVisitor {
            type Value = ColumnSpan;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a positive column count or \"{MATCH_PARENT}\"")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<ColumnSpan, E> {
                u32::try_from(value)
                    .ok()
                    .and_then(ColumnSpan::columns)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(value), &self))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<ColumnSpan, E> {
                match u64::try_from(value) {
                    Ok(value) => self.visit_u64(value),
                    Err(_) => Err(E::invalid_value(de::Unexpected::Signed(value), &self)),
                }
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<ColumnSpan, E> {
                if value == MATCH_PARENT {
                    Ok(ColumnSpan::MatchParent)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(value), &self))
                }
            }
        }

        deserializer.deserialize_any(SpanVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_a_span() {
        assert_eq!(ColumnSpan::columns(0), None);
        assert!(ColumnSpan::columns(3).is_some());
    }

    #[test]
    fn match_parent_resolves_to_total() {
        assert_eq!(ColumnSpan::MatchParent.resolve(12), 12);
        assert_eq!(ColumnSpan::columns(5).unwrap().resolve(12), 5);
    }

    #[test]
    fn parses_from_toml_as_number_or_keyword() {
        #[derive(Deserialize)]
        struct Holder {
            span: ColumnSpan,
        }

        let numbered: Holder = toml::from_str("span = 6").unwrap();
        assert_eq!(numbered.span, ColumnSpan::columns(6).unwrap());

        let keyword: Holder = toml::from_str("span = \"match_parent\"").unwrap();
        assert_eq!(keyword.span, ColumnSpan::MatchParent);

        assert!(toml::from_str::<Holder>("span = 0").is_err());
        assert!(toml::from_str::<Holder>("span = \"half\"").is_err());
    }
}
