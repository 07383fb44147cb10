//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol. Pure data
//! transformation over fixed-size buffers; no I/O. All multi-byte integers
//! are big-endian.
//!
//! ## Wire Format
//!
//! ### Request (65 bytes)
//! ```text
//! ┌──────────┬────────────────────────────────────────┐
//! │ Type (1) │        City (64, null-padded)          │
//! └──────────┴────────────────────────────────────────┘
//! offset 0    offset 1..65
//! ```
//!
//! ### Response (9 bytes)
//! ```text
//! ┌─────────────┬──────────┬─────────────┐
//! │ Status (4)  │ Type (1) │  Value (4)  │
//! └─────────────┴──────────┴─────────────┘
//! offset 0..4    offset 4   offset 5..9
//! ```
//!
//! The value field is the f32's raw bit pattern written in big-endian byte
//! order, exactly as if it were a u32. Hosts with matching float
//! representation and differing endianness read back the same number.
//!
//! Buffer lengths are a type-level precondition here: both decoders take
//! fixed-size array references. Checking that a datagram actually has the
//! right length belongs to the transport layer, before conversion.

use crate::error::{MeteoError, Result};

use super::{Request, Response, Status, CITY_FIELD};

/// Exact size of a request datagram: tag byte + city field.
pub const REQUEST_WIRE_SIZE: usize = 1 + CITY_FIELD;

/// Exact size of a response datagram: status word + tag byte + value word.
pub const RESPONSE_WIRE_SIZE: usize = 4 + 1 + 4;

// Byte offsets of each field within the serialized messages.
const OFF_REQ_TYPE: usize = 0;
const OFF_REQ_CITY: usize = 1;

const OFF_RESP_STATUS: usize = 0;
const OFF_RESP_TYPE: usize = 4;
const OFF_RESP_VALUE: usize = 5;

// =============================================================================
// Request Encoding/Decoding
// =============================================================================

/// Encode a request into a 65-byte datagram.
///
/// The city field is zero-padded: every byte past the city text is 0, so the
/// terminator is always present and no stale memory ever reaches the wire.
pub fn encode_request(request: &Request) -> [u8; REQUEST_WIRE_SIZE] {
    let mut buf = [0u8; REQUEST_WIRE_SIZE];
    buf[OFF_REQ_TYPE] = request.query_type();

    let city = request.city();
    buf[OFF_REQ_CITY..OFF_REQ_CITY + city.len()].copy_from_slice(city);

    buf
}

/// Decode a request from a 65-byte datagram. Infallible.
///
/// The final byte of the city field counts as a terminator no matter what
/// was transmitted, so a sender that fills all 64 bytes without a NUL still
/// yields a properly bounded 63-byte city.
pub fn decode_request(bytes: &[u8; REQUEST_WIRE_SIZE]) -> Request {
    let field = &bytes[OFF_REQ_CITY..];
    let len = field[..CITY_FIELD - 1]
        .iter()
        .position(|&b| b == 0)
        .unwrap_or(CITY_FIELD - 1);

    Request::from_wire(bytes[OFF_REQ_TYPE], field[..len].to_vec())
}

// =============================================================================
// Response Encoding/Decoding
// =============================================================================

/// Encode a response into a 9-byte datagram.
pub fn encode_response(response: &Response) -> [u8; RESPONSE_WIRE_SIZE] {
    let mut buf = [0u8; RESPONSE_WIRE_SIZE];

    buf[OFF_RESP_STATUS..OFF_RESP_STATUS + 4]
        .copy_from_slice(&response.status.as_u32().to_be_bytes());
    buf[OFF_RESP_TYPE] = response.query_type;
    buf[OFF_RESP_VALUE..OFF_RESP_VALUE + 4]
        .copy_from_slice(&response.value.to_bits().to_be_bytes());

    buf
}

/// Decode a response from a 9-byte datagram.
///
/// Fails only on a status word outside the recognized set; every other bit
/// pattern is a legal response.
pub fn decode_response(bytes: &[u8; RESPONSE_WIRE_SIZE]) -> Result<Response> {
    let word = read_u32(bytes, OFF_RESP_STATUS);
    let status = Status::from_u32(word)
        .ok_or_else(|| MeteoError::Protocol(format!("Unknown response status: {}", word)))?;

    Ok(Response {
        status,
        query_type: bytes[OFF_RESP_TYPE],
        value: f32::from_bits(read_u32(bytes, OFF_RESP_VALUE)),
    })
}

/// Pull a big-endian u32 out of the buffer at a fixed offset.
fn read_u32(bytes: &[u8], off: usize) -> u32 {
    u32::from_be_bytes([bytes[off], bytes[off + 1], bytes[off + 2], bytes[off + 3]])
}
