//! Validated value types: checked once, immutable afterwards.

/// Marker trait for immutable, construction-validated domain values.
///
/// Implementors guarantee:
///
/// - every invariant is checked by the constructor, which returns
///   [`DomainResult`](crate::DomainResult) and never yields a partially built value
/// - no setter exists; to "change" a value, build a new one
/// - accessors for sequence or map fields return fresh owned copies, so a
///   caller mutating what it received cannot reach the internal state
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone)]
/// struct Label { id: String, tags: Vec<String> }
///
/// impl PartialEq for Label {
///     fn eq(&self, other: &Self) -> bool { self.id == other.id }
/// }
///
/// impl ValueObject for Label {}
///
/// impl Label {
///     pub fn tags(&self) -> Vec<String> { self.tags.clone() }
/// }
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
