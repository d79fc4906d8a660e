#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! EDM building blocks shared by `OData` model providers.
//!
//! - `EdmSimpleTypeKind`: primitive EDM types
//! - `EdmMultiplicity`, `EdmFacets`: property and association details
//! - `EdmProperty`, `EdmNavigationProperty`: declarative field metadata

pub mod annotation;
pub mod facets;
pub mod kind;
pub mod multiplicity;

pub use annotation::{EdmNavigationProperty, EdmProperty};
pub use facets::EdmFacets;
pub use kind::{EDM_NAMESPACE, EdmSimpleTypeKind};
pub use multiplicity::EdmMultiplicity;

/// Errors raised when parsing EDM literals.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown EDM simple type: {0}")]
    UnknownSimpleType(String),

    #[error("unknown multiplicity: {0}")]
    UnknownMultiplicity(String),
}
