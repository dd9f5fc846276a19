//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Equality of entities is identity-based: two values describing the same
/// identifier refer to the same thing even when other attributes differ.
pub trait Entity {
    /// Identifier type.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
