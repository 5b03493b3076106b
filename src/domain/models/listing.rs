use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::domain::errors::ValidationError;

/// Number of entries returned when the caller does not supply `max_keys`.
/// Matches the provider's default page size.
pub const DEFAULT_MAX_KEYS: usize = 1000;

/// A validated listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    /// Key prefix filter; empty matches all keys
    pub prefix: String,
    /// Upper bound on returned entries, always >= 1
    pub max_keys: usize,
}

impl ListingQuery {
    /// Build a query from the raw query-string parameters.
    ///
    /// `prefix` passes through unmodified; absent means no filter.
    /// `max_keys`, if present, must parse as a decimal integer strictly
    /// greater than zero. Absent falls back to [`DEFAULT_MAX_KEYS`].
    /// Deterministic, no side effects.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ValidationError> {
        let prefix = params.get("prefix").cloned().unwrap_or_default();

        let max_keys = match params.get("max_keys") {
            None => DEFAULT_MAX_KEYS,
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ValidationError::InvalidParameter {
                        parameter: "max_keys".to_string(),
                        value: raw.clone(),
                        expected: "a positive integer".to_string(),
                    });
                }
            },
        };

        Ok(Self { prefix, max_keys })
    }

    /// Set the prefix filter
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the entry limit
    pub fn with_max_keys(mut self, max_keys: usize) -> Self {
        self.max_keys = max_keys;
        self
    }
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            max_keys: DEFAULT_MAX_KEYS,
        }
    }
}

/// A single object reported by the storage backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectEntry {
    pub key: String,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
}

/// Accumulated outcome of one listing operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingResult {
    /// Entries in backend return order
    pub entries: Vec<ObjectEntry>,
    /// True when more entries exist beyond what was returned
    pub truncated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_params_absent() {
        let query = ListingQuery::from_params(&HashMap::new()).unwrap();
        assert_eq!(query.prefix, "");
        assert_eq!(query.max_keys, DEFAULT_MAX_KEYS);
    }

    #[test]
    fn test_prefix_passes_through_unmodified() {
        let query = ListingQuery::from_params(&params(&[("prefix", "docs/2024 ")])).unwrap();
        assert_eq!(query.prefix, "docs/2024 ");
    }

    #[test]
    fn test_valid_max_keys() {
        let query = ListingQuery::from_params(&params(&[("max_keys", "25")])).unwrap();
        assert_eq!(query.max_keys, 25);
    }

    #[test]
    fn test_rejects_bad_max_keys() {
        for bad in ["0", "-5", "abc", "", "2.5", "10x"] {
            let err = ListingQuery::from_params(&params(&[("max_keys", bad)])).unwrap_err();
            match err {
                ValidationError::InvalidParameter {
                    parameter, value, ..
                } => {
                    assert_eq!(parameter, "max_keys");
                    assert_eq!(value, bad);
                }
                other => panic!("unexpected error: {:?}", other),
            }
        }
    }

    #[test]
    fn test_same_input_same_outcome() {
        let input = params(&[("prefix", "a/"), ("max_keys", "7")]);
        assert_eq!(
            ListingQuery::from_params(&input).unwrap(),
            ListingQuery::from_params(&input).unwrap()
        );
    }
}
