//! Temporal annotations of date-like fields.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::ConvertorConfig;
use crate::error::{LookupError, ModelError, ModelResult};
use crate::metamodel::{FieldProbe, TypeIntrospector};

/// Which part of a date-like value a field stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TemporalKind {
    Date,
    Time,
    Timestamp,
}

/// Finds the temporal annotation of a field, searching the superclass chain.
pub struct TemporalResolver<'a> {
    introspector: &'a dyn TypeIntrospector,
    config: &'a ConvertorConfig,
}

impl<'a> TemporalResolver<'a> {
    #[must_use]
    pub fn new(introspector: &'a dyn TypeIntrospector, config: &'a ConvertorConfig) -> Self {
        Self {
            introspector,
            config,
        }
    }

    /// Temporal annotation of `field`, starting at `declaring_type`.
    ///
    /// Each type up to the configured root is probed in turn; the first
    /// annotation found wins. `None` means no type in the chain annotates the
    /// field.
    ///
    /// # Errors
    /// Returns `ModelError::Lookup` if the metamodel cannot be read, the chain
    /// contains a cycle, or it is deeper than `max_inheritance_depth`.
    pub fn resolve(
        &self,
        declaring_type: &str,
        field: &str,
    ) -> ModelResult<Option<TemporalKind>> {
        let fail = |source| ModelError::lookup(declaring_type, field, source);

        let mut visited = HashSet::new();
        let mut current = Some(declaring_type.to_owned());

        while let Some(type_name) = current {
            if type_name == self.config.root_type {
                break;
            }
            // `visited` holds the declaring type plus every superclass probed so far.
            if visited.len() > self.config.max_inheritance_depth {
                return Err(fail(LookupError::DepthExceeded {
                    type_name: declaring_type.to_owned(),
                    max_depth: self.config.max_inheritance_depth,
                }));
            }

            match self.introspector.probe_field(&type_name, field).map_err(fail)? {
                FieldProbe::Declared(Some(kind)) => {
                    trace!(type_name = %type_name, field, ?kind, "temporal annotation found");
                    return Ok(Some(kind));
                }
                FieldProbe::Declared(None) | FieldProbe::NotFound => {
                    trace!(
                        type_name = %type_name,
                        field,
                        "no temporal annotation, checking superclass"
                    );
                }
            }

            let superclass = self.introspector.superclass_of(&type_name).map_err(fail)?;
            visited.insert(type_name);
            if let Some(next) = superclass.as_ref().filter(|next| visited.contains(*next)) {
                return Err(fail(LookupError::InheritanceCycle(next.clone())));
            }
            current = superclass;
        }

        Ok(None)
    }
}
