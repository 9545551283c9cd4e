//! Settable, validated search values

use super::validators::{ValidationError, Validator};
use crate::types::ValueKind;
use std::fmt;

/// A named search value.
///
/// Serialized as `key:value` in the search text when used as a qualifier,
/// or as `key=value` in the query string when used as a [`Parameter`]. The
/// value is always kept in string form; it starts at a default and only
/// counts as set after a successful [`Qualifier::set`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Qualifier {
    key: &'static str,
    kind: ValueKind,
    value: String,
    set: bool,
    validator: Option<Validator>,
}

/// Query-string parameters share the qualifier shape
pub type Parameter = Qualifier;

impl Qualifier {
    /// Create an unset value with a default and an optional validator
    pub fn new(
        key: &'static str,
        kind: ValueKind,
        default: impl Into<String>,
        validator: Option<Validator>,
    ) -> Self {
        Self {
            key,
            kind,
            value: default.into(),
            set: false,
            validator,
        }
    }

    /// Validate and store `value`; on error nothing changes
    pub fn set(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        if let Some(validator) = &self.validator {
            validator.validate(&value)?;
        }
        self.value = value;
        self.set = true;
        Ok(())
    }

    /// Whether a value was explicitly set
    pub fn is_set(&self) -> bool {
        self.set
    }

    /// Wire name
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Current value (the default until set)
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Semantic type tag
    pub fn kind(&self) -> ValueKind {
        self.kind
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
