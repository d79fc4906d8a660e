//! Declared field types as reported by the persistence metamodel.
//!
//! The metamodel names field types by their JVM names (`java.lang.Long`,
//! `long`, `byte[]`, ...). Primitive and boxed spellings of the same type
//! collapse to one `TypeTag`; anything unrecognized keeps only its name.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Source types the convertor knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    String,
    /// `char` or `Character`.
    Character,
    /// `char[]`.
    CharArray,
    /// `Character[]`.
    BoxedCharArray,
    Long,
    Short,
    Integer,
    Double,
    Float,
    BigDecimal,
    /// `byte[]`.
    ByteArray,
    /// `Byte[]`.
    BoxedByteArray,
    Byte,
    Boolean,
    Date,
    Calendar,
    Uuid,
}

/// Recognized type names. The first spelling of each tag is its canonical name.
const TYPE_NAMES: &[(&str, TypeTag)] = &[
    ("java.lang.String", TypeTag::String),
    ("java.lang.Character", TypeTag::Character),
    ("char", TypeTag::Character),
    ("char[]", TypeTag::CharArray),
    ("[C", TypeTag::CharArray),
    ("java.lang.Character[]", TypeTag::BoxedCharArray),
    ("[Ljava.lang.Character;", TypeTag::BoxedCharArray),
    ("java.lang.Long", TypeTag::Long),
    ("long", TypeTag::Long),
    ("java.lang.Short", TypeTag::Short),
    ("short", TypeTag::Short),
    ("java.lang.Integer", TypeTag::Integer),
    ("int", TypeTag::Integer),
    ("java.lang.Double", TypeTag::Double),
    ("double", TypeTag::Double),
    ("java.lang.Float", TypeTag::Float),
    ("float", TypeTag::Float),
    ("java.math.BigDecimal", TypeTag::BigDecimal),
    ("byte[]", TypeTag::ByteArray),
    ("[B", TypeTag::ByteArray),
    ("java.lang.Byte[]", TypeTag::BoxedByteArray),
    ("[Ljava.lang.Byte;", TypeTag::BoxedByteArray),
    ("java.lang.Byte", TypeTag::Byte),
    ("byte", TypeTag::Byte),
    ("java.lang.Boolean", TypeTag::Boolean),
    ("boolean", TypeTag::Boolean),
    ("java.util.Date", TypeTag::Date),
    ("java.util.Calendar", TypeTag::Calendar),
    ("java.util.UUID", TypeTag::Uuid),
];

impl TypeTag {
    pub const ALL: [TypeTag; 17] = [
        Self::String,
        Self::Character,
        Self::CharArray,
        Self::BoxedCharArray,
        Self::Long,
        Self::Short,
        Self::Integer,
        Self::Double,
        Self::Float,
        Self::BigDecimal,
        Self::ByteArray,
        Self::BoxedByteArray,
        Self::Byte,
        Self::Boolean,
        Self::Date,
        Self::Calendar,
        Self::Uuid,
    ];

    /// Resolve a metamodel type name. Surrounding whitespace is ignored.
    #[must_use]
    pub fn from_type_name(name: &str) -> Option<Self> {
        let name = name.trim();
        TYPE_NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|&(_, tag)| tag)
    }

    /// Canonical metamodel name of this tag.
    #[must_use]
    pub fn canonical_name(self) -> &'static str {
        TYPE_NAMES
            .iter()
            .find(|&&(_, tag)| tag == self)
            .map_or("", |&(name, _)| name)
    }

    /// Date-like types whose EDM kind depends on the temporal annotation.
    #[must_use]
    pub const fn is_temporal(self) -> bool {
        matches!(self, Self::Date | Self::Calendar)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// Declared type of a persistent field.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SourceType {
    name: String,
    tag: Option<TypeTag>,
}

impl SourceType {
    /// A source type by metamodel name; unknown names are kept as-is.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        let tag = TypeTag::from_type_name(&name);
        Self { name, tag }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `None` for types the convertor does not support.
    #[must_use]
    pub fn tag(&self) -> Option<TypeTag> {
        self.tag
    }
}

impl From<TypeTag> for SourceType {
    fn from(tag: TypeTag) -> Self {
        Self {
            name: tag.canonical_name().to_owned(),
            tag: Some(tag),
        }
    }
}

impl From<String> for SourceType {
    fn from(name: String) -> Self {
        Self::named(name)
    }
}

impl From<&str> for SourceType {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<SourceType> for String {
    fn from(source: SourceType) -> Self {
        source.name
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
