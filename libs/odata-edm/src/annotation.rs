//! Declarative field metadata for EDM properties and navigation properties.
//!
//! These records are attached to model fields and read by an EDM provider
//! while it builds the schema. Every field has a default meaning "not set";
//! the provider is expected to derive a value for anything left unset.

use serde::{Deserialize, Serialize};

use crate::{EdmFacets, EdmMultiplicity, EdmSimpleTypeKind};

/// Maps a model field to an EDM property.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[must_use]
pub struct EdmProperty {
    /// Simple type of the property. `Null` lets the provider derive a type
    /// compatible with the field, and is also the value to keep for complex
    /// typed properties.
    #[serde(rename = "type")]
    pub kind: EdmSimpleTypeKind,
    /// Property name. Empty lets the provider generate one.
    pub name: String,
    pub facets: EdmFacets,
}

impl Default for EdmProperty {
    fn default() -> Self {
        Self {
            kind: EdmSimpleTypeKind::Null,
            name: String::new(),
            facets: EdmFacets::default(),
        }
    }
}

impl EdmProperty {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: EdmSimpleTypeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_facets(mut self, facets: EdmFacets) -> Self {
        self.facets = facets;
        self
    }

    /// `true` if a simple type was declared explicitly.
    #[must_use]
    pub fn has_kind(&self) -> bool {
        !self.kind.is_null()
    }

    #[must_use]
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}

/// Maps a model field to an EDM navigation property.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[must_use]
pub struct EdmNavigationProperty {
    /// Navigation property name. Empty lets the provider generate one.
    pub name: String,
    /// Target entity type. `None` lets the provider determine it from the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_type: Option<String>,
    /// Name of the association set. Empty lets the provider generate one.
    pub association: String,
    /// Name of the target role. Empty lets the provider generate one.
    pub to_role: String,
    /// Multiplicity of the target end.
    ///
    /// The provider may replace the default `One` when it can tell better,
    /// e.g. `Many` for a collection typed field.
    pub to_multiplicity: EdmMultiplicity,
}

impl EdmNavigationProperty {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_to_type(mut self, to_type: impl Into<String>) -> Self {
        self.to_type = Some(to_type.into());
        self
    }

    pub fn with_association(mut self, association: impl Into<String>) -> Self {
        self.association = association.into();
        self
    }

    pub fn with_to_role(mut self, to_role: impl Into<String>) -> Self {
        self.to_role = to_role.into();
        self
    }

    pub fn with_to_multiplicity(mut self, to_multiplicity: EdmMultiplicity) -> Self {
        self.to_multiplicity = to_multiplicity;
        self
    }

    #[must_use]
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    #[must_use]
    pub fn has_association(&self) -> bool {
        !self.association.is_empty()
    }

    #[must_use]
    pub fn has_to_role(&self) -> bool {
        !self.to_role.is_empty()
    }
}
