//! Value validators for search parameters and qualifiers
//!
//! Each validator is a pure predicate over the candidate string. A validator
//! is chosen when its qualifier is constructed and never changes afterwards.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:>|>=|<|<=|\*\.\.)?\d+(?:\.\.\*|\.\.\d+)?$").expect("valid range regex")
});

/// Spellings accepted as booleans
const BOOL_SPELLINGS: [&str; 12] = [
    "1", "t", "T", "TRUE", "true", "True", "0", "f", "F", "FALSE", "false", "False",
];

/// A rejected value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{value} is not included in {}", .options.join(", "))]
    NotIncluded { value: String, options: Vec<String> },

    #[error("{value} is not an integer value")]
    NotInteger { value: String },

    #[error("{value} is larger than the maximum {max}")]
    TooLarge { value: i64, max: i64 },

    #[error("{value} is not a boolean value")]
    NotBoolean { value: String },

    #[error("{value} is invalid format")]
    InvalidRange { value: String },
}

/// The fixed set of validation rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validator {
    /// Value must equal one of the options exactly
    Membership(Vec<String>),
    /// Value must be a base-10 integer
    Integer,
    /// Value must be an integer no larger than the bound
    MaxInt(i64),
    /// Value must be a boolean spelling
    Boolean,
    /// Value must be a numeric range such as `10..20`, `>=5` or `*..9`
    Range,
}

impl Validator {
    /// Membership in `options`
    pub fn membership<S: AsRef<str>>(options: &[S]) -> Self {
        Self::Membership(options.iter().map(|o| o.as_ref().to_string()).collect())
    }

    /// Integer no larger than `max`
    pub fn max_int(max: i64) -> Self {
        Self::MaxInt(max)
    }

    /// Check `candidate` against this rule
    pub fn validate(&self, candidate: &str) -> Result<(), ValidationError> {
        match self {
            Validator::Membership(options) => {
                if options.iter().any(|o| o == candidate) {
                    Ok(())
                } else {
                    Err(ValidationError::NotIncluded {
                        value: candidate.to_string(),
                        options: options.clone(),
                    })
                }
            }
            Validator::Integer => parse_int(candidate).map(|_| ()),
            Validator::MaxInt(max) => {
                let value = parse_int(candidate)?;
                if value > *max {
                    Err(ValidationError::TooLarge { value, max: *max })
                } else {
                    Ok(())
                }
            }
            Validator::Boolean => {
                if BOOL_SPELLINGS.contains(&candidate) {
                    Ok(())
                } else {
                    Err(ValidationError::NotBoolean {
                        value: candidate.to_string(),
                    })
                }
            }
            Validator::Range => {
                if RANGE_RE.is_match(candidate) {
                    Ok(())
                } else {
                    Err(ValidationError::InvalidRange {
                        value: candidate.to_string(),
                    })
                }
            }
        }
    }
}

fn parse_int(candidate: &str) -> Result<i64, ValidationError> {
    candidate
        .parse::<i64>()
        .map_err(|_| ValidationError::NotInteger {
            value: candidate.to_string(),
        })
}
