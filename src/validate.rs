//! Request validation
//!
//! Pure predicates applied before a lookup is answered. The character policy
//! is split on purpose: the client runs a minimal local pre-check (tabs
//! only), while the server enforces the authoritative policy (tabs plus a
//! symbol denylist). A city that slips past the client check still gets an
//! INVALID_REQUEST from the server.

use crate::protocol::QueryType;

/// Symbols the server refuses inside a city name. Letters, digits, spaces,
/// and non-ASCII bytes are all permitted; tabs are rejected separately.
const DENYLIST: &[u8] = br#"@#$%^&*()!~`+=[]{}|\<>?/;:""#;

/// True iff `byte` is one of the four recognized query tags.
///
/// Case variants are not recognized: `T` is as invalid as `x`.
pub fn is_valid_query_type(byte: u8) -> bool {
    QueryType::from_byte(byte).is_some()
}

/// Authoritative server-side character policy.
///
/// True iff the city contains a horizontal tab or any denylisted symbol.
pub fn has_illegal_characters(city: &[u8]) -> bool {
    city.iter().any(|&b| b == b'\t' || DENYLIST.contains(&b))
}

/// Minimal client-side pre-check: rejects tabs only.
///
/// Everything else is left to the server, which answers over the wire.
pub fn fails_client_precheck(city: &[u8]) -> bool {
    city.contains(&b'\t')
}
