//! The flags record handed back to editor tooling.

use serde::{Deserialize, Serialize};

/// The flag sequence for a freestanding C++ translation unit: no standard
/// library, no startup files, warnings promoted to errors.
pub const FREESTANDING_FLAGS: [&str; 9] = [
    "-x",
    "c++",
    "-Wall",
    "-Wextra",
    "-Werror",
    "-ffreestanding",
    "-nostdinc++",
    "-nostdlib",
    "-nostartfiles",
];

/// An ordered sequence of compiler flags under the `flags` key, in the
/// record shape semantic-completion hosts consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagsRecord {
    pub flags: Vec<String>,
}

impl FlagsRecord {
    pub fn new(flags: Vec<String>) -> Self {
        Self { flags }
    }

    /// The static freestanding record.
    pub fn freestanding() -> Self {
        Self::new(FREESTANDING_FLAGS.iter().map(|s| s.to_string()).collect())
    }

    /// Append extra flags, preserving order.
    pub fn extend(&mut self, extra: impl IntoIterator<Item = String>) {
        self.flags.extend(extra);
    }

    /// The language forced with `-x`, if any.
    pub fn language(&self) -> Option<&str> {
        let mut args = self.flags.iter();
        while let Some(arg) = args.next() {
            if arg == "-x" {
                return args.next().map(String::as_str);
            }
            if let Some(lang) = arg.strip_prefix("-x") {
                return Some(lang);
            }
        }
        None
    }

    /// The `-W*` warning flags, in order.
    pub fn warning_flags(&self) -> Vec<&str> {
        self.flags
            .iter()
            .filter(|f| f.starts_with("-W"))
            .map(String::as_str)
            .collect()
    }

    /// Whether the record requests a freestanding build.
    pub fn is_freestanding(&self) -> bool {
        self.flags.iter().any(|f| f == "-ffreestanding")
    }

    /// Serialize to the JSON shape the editor consumes.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a record from JSON.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freestanding_record() {
        let record = FlagsRecord::freestanding();
        assert_eq!(record.flags, FREESTANDING_FLAGS);
        assert!(record.is_freestanding());
    }

    #[test]
    fn test_language() {
        assert_eq!(FlagsRecord::freestanding().language(), Some("c++"));

        let joined = FlagsRecord::new(vec!["-xc".to_string()]);
        assert_eq!(joined.language(), Some("c"));

        let none = FlagsRecord::new(vec!["-Wall".to_string()]);
        assert_eq!(none.language(), None);
    }

    #[test]
    fn test_warning_flags() {
        let record = FlagsRecord::freestanding();
        assert_eq!(record.warning_flags(), vec!["-Wall", "-Wextra", "-Werror"]);
    }

    #[test]
    fn test_json_shape() {
        let record = FlagsRecord::new(vec!["-Wall".to_string()]);
        assert_eq!(record.to_json().unwrap(), r#"{"flags":["-Wall"]}"#);

        let parsed = FlagsRecord::from_json(r#"{"flags":["-x","c++"]}"#).unwrap();
        assert_eq!(parsed.language(), Some("c++"));
    }
}
