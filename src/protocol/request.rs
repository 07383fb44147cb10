//! Request definitions
//!
//! Represents weather lookups sent by clients.

use std::borrow::Cow;
use std::fmt;

use crate::error::{MeteoError, Result};

/// Total on-wire width of the city field, terminator included.
pub const CITY_FIELD: usize = 64;

/// Longest city accepted in a request (one byte is reserved for the
/// terminator).
pub const MAX_CITY_LEN: usize = CITY_FIELD - 1;

/// The four recognized query tags.
///
/// The discriminant is the raw wire byte. Case variants ('T') are NOT
/// recognized; the server answers them with INVALID_REQUEST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum QueryType {
    Temperature = b't',
    Humidity = b'h',
    Wind = b'w',
    Pressure = b'p',
}

impl QueryType {
    /// All recognized query types, in tag order.
    pub const ALL: [QueryType; 4] = [
        QueryType::Temperature,
        QueryType::Humidity,
        QueryType::Wind,
        QueryType::Pressure,
    ];

    /// Map a wire byte to a query type, if recognized.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b't' => Some(QueryType::Temperature),
            b'h' => Some(QueryType::Humidity),
            b'w' => Some(QueryType::Wind),
            b'p' => Some(QueryType::Pressure),
            _ => None,
        }
    }

    /// The raw wire byte for this query type.
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Human-readable metric name.
    pub fn label(self) -> &'static str {
        match self {
            QueryType::Temperature => "temperature",
            QueryType::Humidity => "humidity",
            QueryType::Wind => "wind speed",
            QueryType::Pressure => "pressure",
        }
    }

    /// Measurement unit shown next to values of this metric.
    pub fn unit(self) -> &'static str {
        match self {
            QueryType::Temperature => "°C",
            QueryType::Humidity => "%",
            QueryType::Wind => "km/h",
            QueryType::Pressure => "hPa",
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A weather lookup for one city.
///
/// Carries the query tag as the raw wire byte so that unrecognized tags
/// survive decoding and can be echoed back in the response. The city is held
/// as raw bytes: any non-NUL byte is wire-legal, including non-ASCII, and
/// round-trips through the codec unchanged.
///
/// Invariant: `city` is at most [`MAX_CITY_LEN`] bytes and contains no NUL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    query_type: u8,
    city: Vec<u8>,
}

impl Request {
    /// Build a request for a recognized query type.
    ///
    /// Fails if the city is longer than [`MAX_CITY_LEN`] bytes or contains a
    /// NUL byte (which would corrupt the terminator framing on the wire).
    pub fn new(query: QueryType, city: impl AsRef<[u8]>) -> Result<Self> {
        Self::from_raw(query.as_byte(), city)
    }

    /// Build a request from an arbitrary tag byte.
    ///
    /// The tag is not checked: deciding whether it names a real metric is the
    /// server's job, and the answer is a wire status, not an error here.
    pub fn from_raw(query_type: u8, city: impl AsRef<[u8]>) -> Result<Self> {
        let city = city.as_ref();
        if city.len() > MAX_CITY_LEN {
            return Err(MeteoError::InvalidInput(format!(
                "city is {} bytes, limit is {}",
                city.len(),
                MAX_CITY_LEN
            )));
        }
        if city.contains(&0) {
            return Err(MeteoError::InvalidInput(
                "city contains a NUL byte".to_string(),
            ));
        }
        Ok(Self {
            query_type,
            city: city.to_vec(),
        })
    }

    /// Construct directly from decoded wire fields.
    ///
    /// The codec guarantees the invariant: the city slice is cut at the first
    /// terminator within the 63-byte window, so it is never over-long and
    /// never contains a NUL.
    pub(crate) fn from_wire(query_type: u8, city: Vec<u8>) -> Self {
        Self { query_type, city }
    }

    /// Raw query-tag byte as sent on the wire.
    pub fn query_type(&self) -> u8 {
        self.query_type
    }

    /// The query type, if the tag byte is recognized.
    pub fn query(&self) -> Option<QueryType> {
        QueryType::from_byte(self.query_type)
    }

    /// City name as raw bytes.
    pub fn city(&self) -> &[u8] {
        &self.city
    }

    /// City name for display and logging. Lossy for non-UTF-8 senders.
    pub fn city_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.city)
    }
}
