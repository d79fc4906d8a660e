//! Read-only view of the persistence metamodel.
//!
//! The convertor only needs two questions answered about managed types:
//! whether a type declares a field (and with which temporal annotation), and
//! what its superclass is. `TypeIntrospector` is that seam; `Metamodel` is an
//! in-memory implementation for frameworks that describe their types upfront.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{LookupError, ModelError, ModelResult};
use crate::source_type::SourceType;
use crate::temporal::TemporalKind;

/// Result of probing a managed type for a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldProbe {
    /// The type does not declare the field.
    NotFound,
    /// The type declares the field, with its temporal annotation if any.
    Declared(Option<TemporalKind>),
}

/// Metadata access used while resolving temporal annotations.
pub trait TypeIntrospector: Send + Sync {
    /// Look up a field declared directly on `type_name`.
    ///
    /// # Errors
    /// Returns `LookupError` when the metadata cannot be read. A missing field
    /// is not an error and must be reported as `FieldProbe::NotFound`.
    fn probe_field(&self, type_name: &str, field: &str) -> Result<FieldProbe, LookupError>;

    /// Direct superclass of `type_name`, `None` at the top of the hierarchy.
    ///
    /// # Errors
    /// Returns `LookupError` when the metadata cannot be read.
    fn superclass_of(&self, type_name: &str) -> Result<Option<String>, LookupError>;
}

/// Persistent attribute of a managed type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    name: String,
    declaring_type: String,
    source_type: SourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temporal: Option<TemporalKind>,
}

impl Attribute {
    #[must_use]
    pub fn new(
        declaring_type: impl Into<String>,
        name: impl Into<String>,
        source_type: impl Into<SourceType>,
    ) -> Self {
        Self {
            name: name.into(),
            declaring_type: declaring_type.into(),
            source_type: source_type.into(),
            temporal: None,
        }
    }

    #[must_use]
    pub fn with_temporal(mut self, temporal: TemporalKind) -> Self {
        self.temporal = Some(temporal);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn declaring_type(&self) -> &str {
        &self.declaring_type
    }

    #[must_use]
    pub fn source_type(&self) -> &SourceType {
        &self.source_type
    }

    #[must_use]
    pub fn temporal(&self) -> Option<TemporalKind> {
        self.temporal
    }
}

/// Entity, embeddable or mapped superclass known to the metamodel.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct ManagedType {
    name: String,
    superclass: Option<String>,
    attributes: Vec<Attribute>,
}

impl ManagedType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            superclass: None,
            attributes: Vec::new(),
        }
    }

    pub fn with_superclass(mut self, superclass: impl Into<String>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    /// Declare a field on this type.
    pub fn with_attribute(
        mut self,
        name: impl Into<String>,
        source_type: impl Into<SourceType>,
    ) -> Self {
        let attribute = Attribute::new(self.name.clone(), name, source_type);
        self.attributes.push(attribute);
        self
    }

    /// Declare a date-like field carrying a temporal annotation.
    pub fn with_temporal_attribute(
        mut self,
        name: impl Into<String>,
        source_type: impl Into<SourceType>,
        temporal: TemporalKind,
    ) -> Self {
        let attribute =
            Attribute::new(self.name.clone(), name, source_type).with_temporal(temporal);
        self.attributes.push(attribute);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn superclass(&self) -> Option<&str> {
        self.superclass.as_deref()
    }

    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Attribute declared directly on this type.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

/// In-memory metamodel.
#[derive(Clone, Debug, Default)]
pub struct Metamodel {
    types: HashMap<String, ManagedType>,
}

impl Metamodel {
    pub fn builder() -> MetamodelBuilder {
        MetamodelBuilder::default()
    }

    #[must_use]
    pub fn managed_type(&self, name: &str) -> Option<&ManagedType> {
        self.types.get(name)
    }

    /// Attribute declared directly on `type_name`.
    #[must_use]
    pub fn attribute(&self, type_name: &str, name: &str) -> Option<&Attribute> {
        self.managed_type(type_name)?.attribute(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn require(&self, type_name: &str) -> Result<&ManagedType, LookupError> {
        self.types
            .get(type_name)
            .ok_or_else(|| LookupError::UnknownType(type_name.to_owned()))
    }
}

impl TypeIntrospector for Metamodel {
    fn probe_field(&self, type_name: &str, field: &str) -> Result<FieldProbe, LookupError> {
        Ok(self
            .require(type_name)?
            .attribute(field)
            .map_or(FieldProbe::NotFound, |a| FieldProbe::Declared(a.temporal)))
    }

    fn superclass_of(&self, type_name: &str) -> Result<Option<String>, LookupError> {
        Ok(self.require(type_name)?.superclass.clone())
    }
}

/// Collects managed types and rejects duplicates on `build`.
#[derive(Debug, Default)]
#[must_use]
pub struct MetamodelBuilder {
    types: Vec<ManagedType>,
}

impl MetamodelBuilder {
    pub fn managed_type(mut self, managed_type: ManagedType) -> Self {
        self.types.push(managed_type);
        self
    }

    /// # Errors
    /// Returns `ModelError::DuplicateType` if a type name was registered twice,
    /// or `ModelError::DuplicateAttribute` if a type declares a field twice.
    pub fn build(self) -> ModelResult<Metamodel> {
        let mut types = HashMap::with_capacity(self.types.len());
        for managed_type in self.types {
            let mut seen = HashSet::with_capacity(managed_type.attributes.len());
            if let Some(dup) = managed_type
                .attributes
                .iter()
                .find(|attribute| !seen.insert(attribute.name.as_str()))
            {
                return Err(ModelError::DuplicateAttribute {
                    type_name: managed_type.name.clone(),
                    attribute: dup.name.clone(),
                });
            }
            let name = managed_type.name.clone();
            if types.insert(name.clone(), managed_type).is_some() {
                return Err(ModelError::DuplicateType(name));
            }
        }
        tracing::debug!(types = types.len(), "metamodel built");
        Ok(Metamodel { types })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::source_type::TypeTag;

    fn metamodel() -> Metamodel {
        Metamodel::builder()
            .managed_type(
                ManagedType::new("com.acme.Auditable")
                    .with_temporal_attribute("createdAt", TypeTag::Date, TemporalKind::Timestamp),
            )
            .managed_type(
                ManagedType::new("com.acme.Order")
                    .with_superclass("com.acme.Auditable")
                    .with_attribute("id", TypeTag::Long)
                    .with_attribute("note", "java.lang.String"),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn attributes_know_their_declaring_type() {
        let model = metamodel();
        let id = model.attribute("com.acme.Order", "id").unwrap();
        assert_eq!(id.declaring_type(), "com.acme.Order");
        assert_eq!(id.source_type().tag(), Some(TypeTag::Long));
        assert_eq!(id.temporal(), None);
        assert_eq!(model.len(), 2);
    }

    #[test]
    fn probe_reports_declared_fields_only() {
        let model = metamodel();
        assert_eq!(
            model.probe_field("com.acme.Auditable", "createdAt").unwrap(),
            FieldProbe::Declared(Some(TemporalKind::Timestamp))
        );
        assert_eq!(
            model.probe_field("com.acme.Order", "id").unwrap(),
            FieldProbe::Declared(None)
        );
        assert_eq!(
            model.probe_field("com.acme.Order", "createdAt").unwrap(),
            FieldProbe::NotFound
        );
    }

    #[test]
    fn superclass_lookup() {
        let model = metamodel();
        assert_eq!(
            model.superclass_of("com.acme.Order").unwrap().as_deref(),
            Some("com.acme.Auditable")
        );
        assert_eq!(model.superclass_of("com.acme.Auditable").unwrap(), None);
    }

    #[test]
    fn unknown_type_is_a_lookup_error() {
        let model = metamodel();
        assert_eq!(
            model.probe_field("com.acme.Missing", "id").unwrap_err(),
            LookupError::UnknownType("com.acme.Missing".to_owned())
        );
        assert!(model.superclass_of("com.acme.Missing").is_err());
    }

    #[test]
    fn duplicate_types_are_rejected() {
        let err = Metamodel::builder()
            .managed_type(ManagedType::new("com.acme.Order"))
            .managed_type(ManagedType::new("com.acme.Order"))
            .build()
            .unwrap_err();
        assert_eq!(err, ModelError::DuplicateType("com.acme.Order".to_owned()));
    }

    #[test]
    fn duplicate_attributes_are_rejected() {
        let err = Metamodel::builder()
            .managed_type(
                ManagedType::new("com.acme.Order")
                    .with_attribute("placedAt", TypeTag::Date)
                    .with_temporal_attribute("placedAt", TypeTag::Date, TemporalKind::Time),
            )
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateAttribute {
                type_name: "com.acme.Order".to_owned(),
                attribute: "placedAt".to_owned(),
            }
        );
    }

    #[test]
    fn same_attribute_on_different_types_is_allowed() {
        let model = Metamodel::builder()
            .managed_type(ManagedType::new("com.acme.Base").with_attribute("id", TypeTag::Long))
            .managed_type(
                ManagedType::new("com.acme.Order")
                    .with_superclass("com.acme.Base")
                    .with_attribute("id", TypeTag::Long),
            )
            .build()
            .unwrap();
        assert_eq!(model.len(), 2);
    }
}
