//! UDP Client
//!
//! One-shot request/response exchange, plus the request-line parsing and
//! result formatting the command-line client is built from.

use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};
use std::time::Duration;

use tracing::debug;

use crate::error::{MeteoError, Result};
use crate::protocol::{
    decode_response, encode_request, QueryType, Request, Response, Status, MAX_CITY_LEN,
    RESPONSE_WIRE_SIZE,
};
use crate::validate;

use super::RECV_BUFFER_SIZE;

/// UDP client performing one lookup per call
pub struct Client {
    socket: UdpSocket,
    server: SocketAddr,
}

impl Client {
    /// Resolve the server address and bind an ephemeral local socket
    pub fn connect(server: impl ToSocketAddrs) -> Result<Self> {
        let server = server
            .to_socket_addrs()
            .map_err(|e| MeteoError::Network(format!("cannot resolve server: {}", e)))?
            .next()
            .ok_or_else(|| MeteoError::Network("server resolved to no address".to_string()))?;

        let socket = UdpSocket::bind("0.0.0.0:0")?;
        debug!("Client bound to {}, server is {}", socket.local_addr()?, server);

        Ok(Self { socket, server })
    }

    /// The resolved server address
    pub fn server_addr(&self) -> SocketAddr {
        self.server
    }

    /// Bound the blocking wait for a reply
    ///
    /// `None` (the default) blocks indefinitely, matching the protocol's
    /// loss model. An expired timeout surfaces as an I/O error from
    /// [`lookup`](Self::lookup). This is transport configuration only; there
    /// is no retry machinery behind it.
    pub fn set_read_timeout(&self, timeout: Option<Duration>) -> Result<()> {
        self.socket.set_read_timeout(timeout)?;
        Ok(())
    }

    /// Send one request and block until the reply arrives
    ///
    /// No retries, and by default no timeout: a lost datagram is a blocked
    /// wait, which is this protocol's loss model. A reply of the wrong size
    /// or with an unknown status word is a protocol error.
    pub fn lookup(&self, request: &Request) -> Result<Response> {
        self.socket.send_to(&encode_request(request), self.server)?;

        let mut buf = [0u8; RECV_BUFFER_SIZE];
        let (len, from) = self.socket.recv_from(&mut buf)?;
        debug!("Received {} bytes from {}", len, from);

        if len != RESPONSE_WIRE_SIZE {
            return Err(MeteoError::Protocol(format!(
                "response datagram is {} bytes, expected {}",
                len, RESPONSE_WIRE_SIZE
            )));
        }

        let mut wire = [0u8; RESPONSE_WIRE_SIZE];
        wire.copy_from_slice(&buf[..RESPONSE_WIRE_SIZE]);
        decode_response(&wire)
    }
}

// =============================================================================
// Request-line parsing and result display
// =============================================================================

/// Parse a human-readable request line: `"<type> <city>"`.
///
/// Exactly one character before the first space names the metric; everything
/// after the separating run of spaces is the city, embedded spaces included
/// (`"t New York"` keeps `"New York"`). All failures here are local input
/// errors: nothing has touched the network yet.
///
/// The tag byte itself is NOT validated: whether it names a real metric is
/// the server's call, answered over the wire.
pub fn parse_request_line(line: &str) -> Result<Request> {
    let space = line.find(' ').ok_or_else(|| {
        MeteoError::InvalidInput("expected \"<type> <city>\"".to_string())
    })?;
    if space != 1 {
        return Err(MeteoError::InvalidInput(
            "query type must be a single character".to_string(),
        ));
    }

    let tag = line.as_bytes()[0];
    let city = line[space + 1..].trim_start_matches(' ');

    if city.is_empty() {
        return Err(MeteoError::InvalidInput("missing city name".to_string()));
    }
    if city.len() > MAX_CITY_LEN {
        return Err(MeteoError::InvalidInput(format!(
            "city name too long (max {} bytes)",
            MAX_CITY_LEN
        )));
    }
    if validate::fails_client_precheck(city.as_bytes()) {
        return Err(MeteoError::InvalidInput(
            "city contains a tab character".to_string(),
        ));
    }

    Request::from_raw(tag, city)
}

/// Title-case a city for display: first letter of each word upper, the rest
/// lower. ASCII-only folding, like the catalog's comparison.
pub fn display_city(city: &str) -> String {
    let mut out = String::with_capacity(city.len());
    let mut capitalize_next = true;

    for c in city.chars() {
        if c == ' ' {
            capitalize_next = true;
            out.push(c);
        } else if capitalize_next {
            out.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            out.push(c.to_ascii_lowercase());
        }
    }

    out
}

/// Human-readable report for one completed exchange.
pub fn format_result(response: &Response, city: &str) -> String {
    match response.status {
        Status::Success => match QueryType::from_byte(response.query_type) {
            Some(query) => format!(
                "{}: {} = {:.1} {}",
                display_city(city),
                query.label(),
                response.value,
                query.unit()
            ),
            None => format!(
                "{}: unrecognized metric tag {}",
                display_city(city),
                response.query_type
            ),
        },
        Status::CityNotFound => "City not available".to_string(),
        Status::InvalidRequest => "Invalid request".to_string(),
    }
}
