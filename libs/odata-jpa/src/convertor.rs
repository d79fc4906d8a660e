//! JPA field type → EDM simple type conversion.
//!
//! Non-temporal types map through a static table. `Date` and `Calendar`
//! become `Time` when the attribute carries a `TIME` temporal annotation
//! somewhere along its declaring type's superclass chain, `DateTime`
//! otherwise.

use odata_edm::EdmSimpleTypeKind;
use tracing::debug;

use crate::config::ConvertorConfig;
use crate::error::{ModelError, ModelResult};
use crate::metamodel::{Attribute, TypeIntrospector};
use crate::source_type::{SourceType, TypeTag};
use crate::temporal::{TemporalKind, TemporalResolver};

/// EDM kinds of every non-temporal `TypeTag`.
static SIMPLE_TYPE_TABLE: [(TypeTag, EdmSimpleTypeKind); 15] = [
    (TypeTag::String, EdmSimpleTypeKind::String),
    (TypeTag::Character, EdmSimpleTypeKind::String),
    (TypeTag::CharArray, EdmSimpleTypeKind::String),
    (TypeTag::BoxedCharArray, EdmSimpleTypeKind::String),
    (TypeTag::Long, EdmSimpleTypeKind::Int64),
    (TypeTag::Short, EdmSimpleTypeKind::Int16),
    (TypeTag::Integer, EdmSimpleTypeKind::Int32),
    (TypeTag::Double, EdmSimpleTypeKind::Double),
    (TypeTag::Float, EdmSimpleTypeKind::Single),
    (TypeTag::BigDecimal, EdmSimpleTypeKind::Decimal),
    (TypeTag::ByteArray, EdmSimpleTypeKind::Binary),
    (TypeTag::BoxedByteArray, EdmSimpleTypeKind::Binary),
    (TypeTag::Byte, EdmSimpleTypeKind::Byte),
    (TypeTag::Boolean, EdmSimpleTypeKind::Boolean),
    (TypeTag::Uuid, EdmSimpleTypeKind::Guid),
];

/// EDM kind of a non-temporal tag; `None` for `Date` and `Calendar`.
#[must_use]
pub fn simple_kind_of(tag: TypeTag) -> Option<EdmSimpleTypeKind> {
    SIMPLE_TYPE_TABLE
        .iter()
        .find(|&&(candidate, _)| candidate == tag)
        .map(|&(_, kind)| kind)
}

/// Converts persistence field types to EDM simple types.
///
/// Holds no mutable state; one instance may be shared freely.
pub struct JpaTypeConvertor<'a> {
    introspector: &'a dyn TypeIntrospector,
    config: ConvertorConfig,
}

impl<'a> JpaTypeConvertor<'a> {
    #[must_use]
    pub fn new(introspector: &'a dyn TypeIntrospector) -> Self {
        Self::with_config(introspector, ConvertorConfig::default())
    }

    #[must_use]
    pub fn with_config(introspector: &'a dyn TypeIntrospector, config: ConvertorConfig) -> Self {
        Self {
            introspector,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ConvertorConfig {
        &self.config
    }

    /// EDM simple type of `source_type`.
    ///
    /// `attribute` is consulted only for `Date` and `Calendar` types, to find
    /// out whether the field holds a time of day.
    ///
    /// # Errors
    /// - `ModelError::TypeNotSupported` if no rule covers `source_type`
    /// - `ModelError::Lookup` if the temporal annotation cannot be read
    pub fn convert_to_edm_simple_type(
        &self,
        source_type: &SourceType,
        attribute: Option<&Attribute>,
    ) -> ModelResult<EdmSimpleTypeKind> {
        let Some(tag) = source_type.tag() else {
            debug!(type_name = %source_type, "no EDM simple type for source type");
            return Err(ModelError::type_not_supported(source_type.name()));
        };

        let kind = if tag.is_temporal() {
            self.temporal_simple_kind(attribute)?
        } else {
            simple_kind_of(tag)
                .ok_or_else(|| ModelError::type_not_supported(source_type.name()))?
        };

        debug!(type_name = %source_type, %kind, "mapped source type");
        Ok(kind)
    }

    /// EDM simple type of an attribute's own declared type.
    ///
    /// # Errors
    /// Same as [`Self::convert_to_edm_simple_type`].
    pub fn convert_attribute(&self, attribute: &Attribute) -> ModelResult<EdmSimpleTypeKind> {
        self.convert_to_edm_simple_type(attribute.source_type(), Some(attribute))
    }

    fn temporal_simple_kind(
        &self,
        attribute: Option<&Attribute>,
    ) -> ModelResult<EdmSimpleTypeKind> {
        let Some(attribute) = attribute else {
            return Ok(EdmSimpleTypeKind::DateTime);
        };
        let temporal = TemporalResolver::new(self.introspector, &self.config)
            .resolve(attribute.declaring_type(), attribute.name())?;
        Ok(match temporal {
            Some(TemporalKind::Time) => EdmSimpleTypeKind::Time,
            Some(TemporalKind::Date | TemporalKind::Timestamp) | None => {
                EdmSimpleTypeKind::DateTime
            }
        })
    }
}
