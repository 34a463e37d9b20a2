//! Per-field error entries.

use std::fmt;

use crate::foundation::ErrorKind;

/// One failing field and the kind of failure it produced.
///
/// Serializes as a single-key object, e.g. `{"recipient": "regexp"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorEntry {
    field: String,
    kind: ErrorKind,
}

/// Ordered error entries, one per failing field, in declaration order.
pub type ErrorList = Vec<ErrorEntry>;

impl ErrorEntry {
    /// Creates an entry for `field`.
    pub fn new(field: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }

    /// Creates a `missing` entry for `field`.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, ErrorKind::Missing)
    }

    /// The failing field name.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The failure kind.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ErrorEntry {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.field, &self.kind)?;
        map.end()
    }
}
