//! Classification of indexed properties into value kinds.

use serde::Serialize;

/// Index columns whose values are dates. Matching is case-insensitive on
/// the full property name.
pub const DATE_PROPERTIES: &[&str] = &["releasedate"];

/// The value domain of an indexed property, driving which comparison
/// operators the form offers for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PropertyKind {
    #[serde(rename = "date")]
    Date,

    /// Everything that is not a known date column, including properties
    /// the index added after this list was written.
    #[serde(rename = "string")]
    Text,
}

/// Classify a property name by membership in [`DATE_PROPERTIES`].
///
/// Total over all inputs: unrecognized or malformed names are [`PropertyKind::Text`].
pub fn classify(name: &str) -> PropertyKind {
    if DATE_PROPERTIES.iter().any(|p| p.eq_ignore_ascii_case(name)) {
        PropertyKind::Date
    } else {
        PropertyKind::Text
    }
}
