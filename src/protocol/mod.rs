//! Protocol Module
//!
//! Defines the wire protocol for client-server communication.
//!
//! ## Wire Format (fixed-size datagrams)
//!
//! ### Request Format (65 bytes)
//! ```text
//! ┌──────────┬────────────────────────────────────────┐
//! │ Type (1) │        City (64, null-padded)          │
//! └──────────┴────────────────────────────────────────┘
//! ```
//!
//! ### Query Types
//! - 't': temperature
//! - 'h': humidity
//! - 'w': wind speed
//! - 'p': pressure
//!
//! ### Response Format (9 bytes)
//! ```text
//! ┌─────────────┬──────────┬─────────────┐
//! │ Status (4)  │ Type (1) │  Value (4)  │
//! └─────────────┴──────────┴─────────────┘
//! ```
//! Status is a big-endian u32. Value is an IEEE-754 f32 carried as the
//! big-endian byte order of its bit pattern. Type echoes the request byte.
//!
//! ### Status Codes
//! - 0: SUCCESS
//! - 1: CITY_NOT_FOUND
//! - 2: INVALID_REQUEST

mod request;
mod response;
mod codec;

pub use request::{QueryType, Request, CITY_FIELD, MAX_CITY_LEN};
pub use response::{Response, Status};
pub use codec::{
    decode_request, decode_response, encode_request, encode_response, REQUEST_WIRE_SIZE,
    RESPONSE_WIRE_SIZE,
};

/// Default UDP port for both server and client.
pub const DEFAULT_PORT: u16 = 56700;
