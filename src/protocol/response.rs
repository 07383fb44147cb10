//! Response definitions
//!
//! Represents answers sent back to clients.

/// Response status codes
///
/// The wire carries these as a big-endian u32. The set is closed: decoding
/// any other word is a protocol error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Status {
    Success = 0,
    CityNotFound = 1,
    InvalidRequest = 2,
}

impl Status {
    /// Map a wire word to a status, if recognized.
    pub fn from_u32(word: u32) -> Option<Self> {
        match word {
            0 => Some(Status::Success),
            1 => Some(Status::CityNotFound),
            2 => Some(Status::InvalidRequest),
            _ => None,
        }
    }

    /// The wire word for this status.
    pub fn as_u32(self) -> u32 {
        self as u32
    }
}

/// A response to send to a client.
///
/// `value` is meaningful only when `status == Success`; the constructors
/// force it to 0.0 for every other outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Response {
    /// Outcome of the lookup
    pub status: Status,

    /// Echo of the request's query-tag byte (0 when the request was
    /// malformed at the transport level and no tag is known)
    pub query_type: u8,

    /// The measurement, when `status == Success`
    pub value: f32,
}

impl Response {
    /// Create a SUCCESS response carrying a measurement
    pub fn success(query_type: u8, value: f32) -> Self {
        Self {
            status: Status::Success,
            query_type,
            value,
        }
    }

    /// Create a CITY_NOT_FOUND response
    pub fn city_not_found(query_type: u8) -> Self {
        Self {
            status: Status::CityNotFound,
            query_type,
            value: 0.0,
        }
    }

    /// Create an INVALID_REQUEST response
    pub fn invalid_request(query_type: u8) -> Self {
        Self {
            status: Status::InvalidRequest,
            query_type,
            value: 0.0,
        }
    }
}
