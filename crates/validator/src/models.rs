//! The declared Open Badges models: Assertion, Badge and Issuer.
//!
//! Each model is built once, on first use, and shared for the rest of the
//! process.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::Error;
use crate::model::{Model, optional, required};
use crate::validators::{Pattern, email, iso_date, max_length, url};

/// Upper bound for names, descriptions and organisation strings.
pub const MAX_TEXT_LENGTH: usize = 128;

/// Badge version pattern. The third segment is a literal `d`, not `\d`, so
/// only versions like `1.0.d` (or `v1.0.dd`) match.
pub const BADGE_VERSION_PATTERN: &str = r"v?\d+\.\d+\.d+";

/// A badge assertion: who earned the badge, and when.
pub static ASSERTION: LazyLock<Model> = LazyLock::new(|| {
    Model::builder("Assertion")
        .field("recipient", required([email()]))
        .field("evidence", optional([url()]))
        .field("expires", optional([iso_date()]))
        .field("issued_at", optional([iso_date()]))
        .build()
});

/// A badge class description.
pub static BADGE: LazyLock<Model> = LazyLock::new(|| {
    let version = regex::Regex::new(BADGE_VERSION_PATTERN).expect("badge version pattern compiles");

    Model::builder("Badge")
        .field("version", required([Pattern::from_regex(version)]))
        .field("name", required([max_length(MAX_TEXT_LENGTH)]))
        .field("description", required([max_length(MAX_TEXT_LENGTH)]))
        .field("image", required([url()]))
        .field("criteria", required([url()]))
        .build()
});

/// The organisation issuing badges.
pub static ISSUER: LazyLock<Model> = LazyLock::new(|| {
    Model::builder("Issuer")
        .field("name", required([max_length(MAX_TEXT_LENGTH)]))
        .field("org", optional([max_length(MAX_TEXT_LENGTH)]))
        .field("contact", optional([email()]))
        .field("url", optional([url()]))
        .build()
});

// ============================================================================
// MODEL SELECTION
// ============================================================================

/// Selects one of the declared models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    /// [`ASSERTION`]
    Assertion,
    /// [`BADGE`]
    Badge,
    /// [`ISSUER`]
    Issuer,
}

impl ModelKind {
    /// All declared models.
    pub const ALL: [ModelKind; 3] = [ModelKind::Assertion, ModelKind::Badge, ModelKind::Issuer];

    /// The shared model definition.
    #[must_use]
    pub fn model(self) -> &'static Model {
        match self {
            ModelKind::Assertion => &ASSERTION,
            ModelKind::Badge => &BADGE,
            ModelKind::Issuer => &ISSUER,
        }
    }

    /// Lowercase name, as accepted by `FromStr`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ModelKind::Assertion => "assertion",
            ModelKind::Badge => "badge",
            ModelKind::Issuer => "issuer",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownModel(s.to_owned()))
    }
}

/// Returns the shared definition for `kind`.
#[must_use]
pub fn model(kind: ModelKind) -> &'static Model {
    kind.model()
}

// ============================================================================
// TESTS
// ============================================================================
