//! UDP Server
//!
//! Binds one socket and answers datagrams forever, one at a time. Per the
//! protocol's error model the server always answers: semantic failures go
//! back over the wire as non-success statuses, and a datagram of the wrong
//! size gets an INVALID_REQUEST with a zero query tag (no tag is known).
//! Only the receive/send operations themselves can fail, and those failures
//! are logged without stopping the loop.

use std::net::{SocketAddr, UdpSocket};

use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::generator::ValueSource;
use crate::handler::Handler;
use crate::protocol::{decode_request, encode_response, Response, REQUEST_WIRE_SIZE};

use super::RECV_BUFFER_SIZE;

/// UDP server for weather lookups
pub struct Server<S: ValueSource> {
    socket: UdpSocket,
    handler: Handler<S>,
}

impl<S: ValueSource> Server<S> {
    /// Bind the configured address
    pub fn new(config: &Config, handler: Handler<S>) -> Result<Self> {
        let socket = UdpSocket::bind(&config.listen_addr)?;
        info!("Listening on {}", socket.local_addr()?);

        Ok(Self { socket, handler })
    }

    /// Local address the socket is bound to
    ///
    /// Mostly useful after binding port 0.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    /// Serve forever (blocking)
    ///
    /// Each iteration receives one datagram, computes one response, and
    /// sends it back to the datagram's source address before receiving the
    /// next. A failed receive is logged and the loop moves on.
    pub fn run(&mut self) -> Result<()> {
        let mut buf = [0u8; RECV_BUFFER_SIZE];

        loop {
            let (len, peer) = match self.socket.recv_from(&mut buf) {
                Ok(received) => received,
                Err(e) => {
                    error!("Receive failed: {}", e);
                    continue;
                }
            };

            self.answer(peer, &buf[..len]);
        }
    }

    /// Compute and send the response for one inbound datagram
    fn answer(&mut self, peer: SocketAddr, datagram: &[u8]) {
        let response = match as_request_wire(datagram) {
            Some(wire) => {
                let request = decode_request(wire);
                info!(
                    "Request from {}: type='{}' city={:?}",
                    peer,
                    request.query_type() as char,
                    request.city_text()
                );
                self.handler.handle(&request)
            }
            None => {
                warn!(
                    "Datagram from {} is {} bytes, expected {}",
                    peer,
                    datagram.len(),
                    REQUEST_WIRE_SIZE
                );
                Response::invalid_request(0)
            }
        };

        let encoded = encode_response(&response);
        match self.socket.send_to(&encoded, peer) {
            Ok(_) => debug!(
                "Answered {}: status={:?} value={:.2}",
                peer, response.status, response.value
            ),
            Err(e) => warn!("Failed to send response to {}: {}", peer, e),
        }
    }
}

/// Length gate: accept exactly one request's worth of bytes.
fn as_request_wire(datagram: &[u8]) -> Option<&[u8; REQUEST_WIRE_SIZE]> {
    datagram.try_into().ok()
}
