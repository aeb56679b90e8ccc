//! Entity ID - cuid-style string identifier
//!
//! Structure: `c` + base-36 timestamp (9 chars) + base-36 counter (4 chars)
//! + base-36 entropy (10 chars), 24 characters total, lowercase throughout.
//! The leading `c` and the lowercase-alphanumeric body are load-bearing:
//! inbound identifiers are validated against that shape before they reach
//! storage.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Lowest accepted identifier length (prefix + 7 body chars)
const MIN_LEN: usize = 8;
/// Highest accepted identifier length
const MAX_LEN: usize = 32;
/// Length of generated identifiers
const GENERATED_LEN: usize = 24;

const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Cuid-style entity identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(String);

impl EntityId {
    /// Leading character every identifier carries
    pub const PREFIX: char = 'c';

    /// Wrap a raw string without validation.
    ///
    /// Intended for values already persisted by this system; external input
    /// must go through [`EntityId::parse`].
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parse and validate an identifier from external input.
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        if s.len() < MIN_LEN || s.len() > MAX_LEN {
            return Err(IdParseError::InvalidLength);
        }
        if !s.starts_with(Self::PREFIX) {
            return Err(IdParseError::InvalidPrefix);
        }
        if !s
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        {
            return Err(IdParseError::InvalidCharacter);
        }
        Ok(Self(s.to_string()))
    }

    /// Get the identifier as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier and return the inner string
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Error when parsing an EntityId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("identifier length out of range")]
    InvalidLength,

    #[error("identifier must start with 'c'")]
    InvalidPrefix,

    #[error("identifier must be lowercase alphanumeric")]
    InvalidCharacter,
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl std::str::FromStr for EntityId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityId::parse(s)
    }
}

/// Encode `value` as fixed-width lowercase base-36, truncating high bits
/// beyond `width` digits.
fn base36(mut value: u64, width: usize) -> String {
    let mut buf = vec![b'0'; width];
    for slot in buf.iter_mut().rev() {
        *slot = BASE36_ALPHABET[(value % 36) as usize];
        value /= 36;
        if value == 0 {
            break;
        }
    }
    // Safety of from_utf8: the alphabet is pure ASCII
    String::from_utf8(buf).unwrap_or_default()
}

/// Thread-safe entity ID generator
///
/// Combines a millisecond timestamp, a per-process counter, and random
/// entropy so concurrent generators never collide in practice. Uses lock-free
/// atomic operations.
pub struct EntityIdGenerator {
    counter: AtomicU64,
}

impl EntityIdGenerator {
    /// Create a new generator
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    /// Generate a new unique EntityId
    pub fn generate(&self) -> EntityId {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        // 4 base-36 digits wrap at 36^4
        let count = self.counter.fetch_add(1, Ordering::Relaxed) % 1_679_616;
        let entropy: u64 = rand::random();

        let mut id = String::with_capacity(GENERATED_LEN);
        id.push(EntityId::PREFIX);
        id.push_str(&base36(millis, 9));
        id.push_str(&base36(count, 4));
        id.push_str(&base36(entropy, 10));
        EntityId(id)
    }
}

impl Default for EntityIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
