//! Entity Identity
//!
//! Type-safe UUID wrappers for grocery entities, plus the [`IdGenerator`]
//! seam used wherever a record assigns its own identity.
//!
//! On the wire every id is a plain UUID string: lowercase 8-4-4-4-12 on
//! encode; on decode the hyphenated form in either letter case.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;
use uuid::Uuid;

/// Expectation reported when a UUID-typed field holds anything else.
pub(crate) const EXPECTING_UUID: &str = "a hyphenated UUID string";

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use grocery_shared_dto::id::{Id, markers};
/// type ItemId = Id<markers::GroceryItem>;
///
/// let id = ItemId::new();
/// assert_eq!(id.to_string().len(), 36);
/// ```
pub struct Id<T> {
    value: Uuid,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Create an ID from the given generator
    pub fn generate(generator: &dyn IdGenerator) -> Self {
        Self::from_uuid(generator.next_uuid())
    }

    /// Create from an existing UUID
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    /// Parse the hyphenated 36-character form.
    ///
    /// Simple, braced and URN renderings are rejected even though they
    /// name a valid UUID.
    pub fn parse_str(s: &str) -> Result<Self, IdParseError> {
        parse_hyphenated(s).map(Self::from_uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }

    /// Convert to UUID
    pub fn into_uuid(self) -> Uuid {
        self.value
    }

    pub fn is_nil(&self) -> bool {
        self.value.is_nil()
    }
}

fn parse_hyphenated(s: &str) -> Result<Uuid, IdParseError> {
    // 36 bytes is only reachable by the hyphenated format; `try_parse`
    // then checks group lengths and hex digits.
    if s.len() != 36 {
        return Err(IdParseError::NotHyphenated(s.len()));
    }
    Ok(Uuid::try_parse(s)?)
}

/// Failure to read an [`Id`] from its text form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdParseError {
    #[error("expected a 36-character hyphenated UUID, found {0} characters")]
    NotHyphenated(usize),

    #[error(transparent)]
    Invalid(#[from] uuid::Error),
}

// Manual impls: deriving would demand the same traits from the marker.

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value.as_hyphenated())
    }
}

impl<T> FromStr for Id<T> {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T> From<Id<T>> for Uuid {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut buf = Uuid::encode_buffer();
        serializer.serialize_str(self.value.as_hyphenated().encode_lower(&mut buf))
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor<T>(PhantomData<fn() -> T>);

        impl<T> Visitor<'_> for IdVisitor<T> {
            type Value = Id<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(EXPECTING_UUID)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Id::parse_str(v).map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_str(IdVisitor(PhantomData))
    }
}

// ============================================================================
// Generators
// ============================================================================

/// Source of fresh identities for records that assign their own id.
pub trait IdGenerator: Send + Sync {
    fn next_uuid(&self) -> Uuid;
}

/// Random UUID v4 generator, the default everywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic generator yielding `00000000-0000-0000-0000-000000000001`,
/// `...0002`, and so on. Intended for fixtures and tests.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start so that the first generated id has the low bits `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            counter: AtomicU64::new(first.saturating_sub(1)),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_uuid(&self) -> Uuid {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        Uuid::from_u64_pair(0, n)
    }
}

/// Generator that always hands out the same UUID.
#[derive(Debug, Clone, Copy)]
pub struct FixedIdGenerator(pub Uuid);

impl IdGenerator for FixedIdGenerator {
    fn next_uuid(&self) -> Uuid {
        self.0
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for grocery category IDs
    pub struct GroceryCategory;

    /// Marker for grocery item IDs
    pub struct GroceryItem;

    /// Marker for user IDs
    pub struct User;
}

/// Type aliases for common IDs
pub type CategoryId = Id<markers::GroceryCategory>;
pub type GroceryItemId = Id<markers::GroceryItem>;
pub type UserId = Id<markers::User>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let category_id: CategoryId = Id::new();
        let item_id: GroceryItemId = Id::new();

        // These are different types, cannot be mixed
        let _c: Uuid = category_id.into_uuid();
        let _i: Uuid = item_id.into_uuid();
    }

    #[test]
    fn test_id_new_is_v4() {
        let id = UserId::new();
        assert_eq!(id.as_uuid().get_version_num(), 4);
        assert!(!id.is_nil());
    }

    #[test]
    fn test_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id: GroceryItemId = Id::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }

    #[test]
    fn test_display_is_lowercase_hyphenated() {
        let id = CategoryId::parse_str("67E55044-10B1-426F-9247-BB680E5FE0C8").unwrap();
        assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
    }

    #[test]
    fn test_parse_rejects_non_hyphenated_forms() {
        assert!(UserId::parse_str("67e5504410b1426f9247bb680e5fe0c8").is_err());
        assert!(UserId::parse_str("{67e55044-10b1-426f-9247-bb680e5fe0c8}").is_err());
        assert!(UserId::parse_str("urn:uuid:67e55044-10b1-426f-9247-bb680e5fe0c8").is_err());
        assert!(UserId::parse_str("not-a-uuid").is_err());
        assert!(UserId::parse_str("67e55044-10b1-426f-9247-bb680e5fe0cz").is_err());
        assert_eq!(
            UserId::parse_str("").unwrap_err(),
            IdParseError::NotHyphenated(0)
        );
    }

    #[test]
    fn test_serde_string_form() {
        let id = GroceryItemId::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"67e55044-10b1-426f-9247-bb680e5fe0c8\"");

        let back: GroceryItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_serde_rejects_non_string() {
        assert!(serde_json::from_str::<UserId>("42").is_err());
        assert!(serde_json::from_str::<UserId>("\"not-a-uuid\"").is_err());
    }

    #[test]
    fn test_sequential_generator() {
        let generator = SequentialIdGenerator::new();
        let first = CategoryId::generate(&generator);
        let second = CategoryId::generate(&generator);
        assert_eq!(first.to_string(), "00000000-0000-0000-0000-000000000001");
        assert_eq!(second.to_string(), "00000000-0000-0000-0000-000000000002");

        let generator = SequentialIdGenerator::starting_at(10);
        assert_eq!(generator.next_uuid(), Uuid::from_u64_pair(0, 10));
    }

    #[test]
    fn test_fixed_generator() {
        let uuid = Uuid::new_v4();
        let generator = FixedIdGenerator(uuid);
        assert_eq!(UserId::generate(&generator).into_uuid(), uuid);
        assert_eq!(UserId::generate(&generator).into_uuid(), uuid);
    }
}
