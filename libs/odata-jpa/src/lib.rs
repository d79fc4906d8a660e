#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! JPA persistence types → `OData` EDM simple types.
//!
//! `JpaTypeConvertor` maps declared field types to `EdmSimpleTypeKind`.
//! Date-like fields consult the persistence metamodel, through the
//! `TypeIntrospector` seam, for a temporal annotation.

pub mod config;
pub mod convertor;
pub mod error;
pub mod metamodel;
pub mod source_type;
pub mod temporal;

pub use config::{ConfigError, ConvertorConfig};
pub use convertor::{JpaTypeConvertor, simple_kind_of};
pub use error::{LookupError, ModelError, ModelResult};
pub use metamodel::{Attribute, FieldProbe, ManagedType, Metamodel, TypeIntrospector};
pub use source_type::{SourceType, TypeTag};
pub use temporal::{TemporalKind, TemporalResolver};
