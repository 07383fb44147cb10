//! City catalog
//!
//! The fixed set of cities the server can answer for.

/// Cities with weather coverage.
pub const SUPPORTED_CITIES: [&str; 10] = [
    "bari", "roma", "milano", "napoli", "torino", "palermo", "genova", "bologna", "firenze",
    "venezia",
];

/// True iff `city` names a supported city.
///
/// Matching is an ASCII case fold followed by an exact comparison.
/// Whitespace is never trimmed: `" roma"` is not found.
pub fn is_supported(city: &[u8]) -> bool {
    SUPPORTED_CITIES
        .iter()
        .any(|supported| city.eq_ignore_ascii_case(supported.as_bytes()))
}
