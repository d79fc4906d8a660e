//! EDM primitive type kinds.
//!
//! `EdmSimpleTypeKind` is the closed set of primitive types an EDM property
//! can be declared with. `Null` is not a real EDM type: it marks a property
//! declaration whose type was left for the EDM provider to derive.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Namespace prefix of the EDM primitive types.
pub const EDM_NAMESPACE: &str = "Edm";

/// Primitive EDM type kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdmSimpleTypeKind {
    Binary,
    Boolean,
    Byte,
    DateTime,
    DateTimeOffset,
    Decimal,
    Double,
    Guid,
    Int16,
    Int32,
    Int64,
    SByte,
    Single,
    String,
    Time,
    Null,
}

impl EdmSimpleTypeKind {
    /// Every kind, in declaration order.
    pub const ALL: [EdmSimpleTypeKind; 16] = [
        Self::Binary,
        Self::Boolean,
        Self::Byte,
        Self::DateTime,
        Self::DateTimeOffset,
        Self::Decimal,
        Self::Double,
        Self::Guid,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::SByte,
        Self::Single,
        Self::String,
        Self::Time,
        Self::Null,
    ];

    /// Unqualified EDM name, e.g. `Int32`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Binary => "Binary",
            Self::Boolean => "Boolean",
            Self::Byte => "Byte",
            Self::DateTime => "DateTime",
            Self::DateTimeOffset => "DateTimeOffset",
            Self::Decimal => "Decimal",
            Self::Double => "Double",
            Self::Guid => "Guid",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::SByte => "SByte",
            Self::Single => "Single",
            Self::String => "String",
            Self::Time => "Time",
            Self::Null => "Null",
        }
    }

    /// Namespace-qualified name, e.g. `Edm.Int32`.
    #[must_use]
    pub fn full_name(self) -> String {
        format!("{EDM_NAMESPACE}.{}", self.name())
    }

    /// `true` for the "not set" marker.
    #[must_use]
    pub const fn is_null(self) -> bool {
        matches!(self, Self::Null)
    }

    /// `true` for the kinds that carry date or time semantics.
    #[must_use]
    pub const fn is_temporal(self) -> bool {
        matches!(self, Self::DateTime | Self::DateTimeOffset | Self::Time)
    }

    /// `true` for the integral and floating point kinds.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Byte
                | Self::SByte
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::Single
                | Self::Double
                | Self::Decimal
        )
    }
}

impl fmt::Display for EdmSimpleTypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EdmSimpleTypeKind {
    type Err = ParseError;

    /// Accepts both `Int32` and `Edm.Int32`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bare = s
            .strip_prefix(EDM_NAMESPACE)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == bare)
            .ok_or_else(|| ParseError::UnknownSimpleType(s.to_owned()))
    }
}
