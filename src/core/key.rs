//! Composite key derivation from lot codes
//!
//! A key is the pair of characters at positions 2-3 of the lot code plus
//! the character at position 6 (1-indexed), serialized as `"<A>_<B>"`.
//! Keys are upper-cased before storage and lookup.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Zero-based character offsets read from the lot code
const PAIR_RANGE: std::ops::Range<usize> = 1..3;
const SINGLE_OFFSET: usize = 5;

/// Minimum lot-code length (in characters) that can be keyed
pub const MIN_LOT_LEN: usize = 6;

/// Validation errors for maintenance-supplied key components
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("digits 2-3 must be exactly 2 characters, got {0:?}")]
    PairLength(String),

    #[error("digit 6 must be exactly 1 character, got {0:?}")]
    SingleLength(String),

    #[error("key must have the form <AA>_<B>, got {0:?}")]
    Malformed(String),
}

/// The `(A, B)` lookup key derived from fixed lot-code positions
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompositeKey {
    pair: String,
    single: String,
}

impl CompositeKey {
    /// Build a key from maintenance input, validating component lengths
    pub fn new(pair: &str, single: &str) -> Result<Self, KeyError> {
        if pair.chars().count() != 2 {
            return Err(KeyError::PairLength(pair.to_string()));
        }
        if single.chars().count() != 1 {
            return Err(KeyError::SingleLength(single.to_string()));
        }
        Ok(Self {
            pair: pair.to_uppercase(),
            single: single.to_uppercase(),
        })
    }

    /// Characters at lot-code positions 2-3
    pub fn pair(&self) -> &str {
        &self.pair
    }

    /// Character at lot-code position 6
    pub fn single(&self) -> &str {
        &self.single
    }

    /// The serialized form used by the persisted store
    pub fn storage_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CompositeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.pair, self.single)
    }
}

impl FromStr for CompositeKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (pair, single) = s
            .split_once('_')
            .ok_or_else(|| KeyError::Malformed(s.to_string()))?;
        Self::new(pair, single)
    }
}

/// Derive a key from a raw lot code, or `None` when the lot is too short
/// to key (a normal outcome, not an error).
///
/// Offsets are character offsets, so multi-byte input cannot panic here.
/// No other validation is applied; extraction does not care whether the
/// components are alphanumeric.
pub fn extract(lot: &str) -> Option<CompositeKey> {
    let chars: Vec<char> = lot.chars().collect();
    if chars.len() < MIN_LOT_LEN {
        return None;
    }
    let pair: String = chars[PAIR_RANGE].iter().collect();
    let single = chars[SINGLE_OFFSET].to_string();
    Some(CompositeKey {
        pair: pair.to_uppercase(),
        single: single.to_uppercase(),
    })
}
