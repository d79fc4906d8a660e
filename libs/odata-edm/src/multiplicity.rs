//! Association end multiplicity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Multiplicity of the target end of a navigation property.
///
/// Serialized with the EDM literals `0..1`, `*` and `1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdmMultiplicity {
    #[serde(rename = "0..1")]
    ZeroToOne,
    #[serde(rename = "*")]
    Many,
    #[default]
    #[serde(rename = "1")]
    One,
}

impl EdmMultiplicity {
    /// EDM literal of this multiplicity.
    #[must_use]
    pub const fn literal(self) -> &'static str {
        match self {
            Self::ZeroToOne => "0..1",
            Self::Many => "*",
            Self::One => "1",
        }
    }

    /// `true` when the target end holds a collection.
    #[must_use]
    pub const fn is_many(self) -> bool {
        matches!(self, Self::Many)
    }
}

impl fmt::Display for EdmMultiplicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}

impl FromStr for EdmMultiplicity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0..1" => Ok(Self::ZeroToOne),
            "*" => Ok(Self::Many),
            "1" => Ok(Self::One),
            other => Err(ParseError::UnknownMultiplicity(other.to_owned())),
        }
    }
}
