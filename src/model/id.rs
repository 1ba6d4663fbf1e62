use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque record identifier issued by the API.
///
/// The API hands out UUID strings, but numeric identifiers are accepted as well and
/// are written back in the same JSON shape they were read in.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Number(i64),
    Text(String),
}

impl Id {
    /// Returns true for an empty text identifier, which is what an unselected form
    /// field holds.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{}", number),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for Id {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Id;

    #[test]
    /// Tests decoding and encoding identifiers.
    ///
    /// Verifies numeric and string identifiers keep their JSON shape.
    ///
    /// Expected: numbers stay numbers and strings stay strings
    fn keeps_json_shape() {
        let numeric: Id = serde_json::from_str("7").unwrap();
        let text: Id = serde_json::from_str("\"4f1c\"").unwrap();

        assert_eq!(numeric, Id::Number(7));
        assert_eq!(text, Id::Text("4f1c".to_string()));
        assert_eq!(serde_json::to_string(&numeric).unwrap(), "7");
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"4f1c\"");
    }

    #[test]
    /// Tests displaying identifiers.
    ///
    /// Verifies they render as path segments without quotes.
    ///
    /// Expected: `7` and `abc`
    fn displays_as_path_segment() {
        assert_eq!(Id::from(7).to_string(), "7");
        assert_eq!(Id::from("abc").to_string(), "abc");
    }

    #[test]
    /// Tests detecting blank identifiers.
    ///
    /// Verifies only whitespace text counts as blank.
    ///
    /// Expected: true for `"  "` only
    fn blank_only_for_empty_text() {
        assert!(Id::from("  ").is_blank());
        assert!(!Id::from("r1").is_blank());
        assert!(!Id::from(0).is_blank());
    }
}
