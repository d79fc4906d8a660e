//! Errors raised while deriving EDM metadata from the persistence metamodel.

/// Failure to read metadata from the metamodel itself.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("managed type '{0}' is not known to the metamodel")]
    UnknownType(String),

    #[error("access to '{type_name}' denied: {reason}")]
    AccessDenied { type_name: String, reason: String },

    #[error("inheritance cycle detected at '{0}'")]
    InheritanceCycle(String),

    #[error("inheritance chain of '{type_name}' deeper than {max_depth}")]
    DepthExceeded { type_name: String, max_depth: usize },
}

/// Terminal error of a model mapping call.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("type not supported: {type_name}")]
    TypeNotSupported { type_name: String },

    #[error("failed to read metadata of '{type_name}.{field}': {source}")]
    Lookup {
        type_name: String,
        field: String,
        #[source]
        source: LookupError,
    },

    #[error("managed type '{0}' registered more than once")]
    DuplicateType(String),

    #[error("attribute '{attribute}' declared more than once on '{type_name}'")]
    DuplicateAttribute { type_name: String, attribute: String },
}

impl ModelError {
    pub(crate) fn type_not_supported(type_name: impl Into<String>) -> Self {
        Self::TypeNotSupported {
            type_name: type_name.into(),
        }
    }

    pub(crate) fn lookup(type_name: &str, field: &str, source: LookupError) -> Self {
        Self::Lookup {
            type_name: type_name.to_owned(),
            field: field.to_owned(),
            source,
        }
    }
}

pub type ModelResult<T> = Result<T, ModelError>;
