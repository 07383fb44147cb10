//! Network Module
//!
//! UDP transport: blocking server receive loop and one-shot client.
//!
//! ## Architecture
//! - One socket per side; no connections, no sessions
//! - Datagram length is validated here, before the codec runs
//! - The server answers every datagram it can attribute to a peer

mod client;
mod server;

pub use client::{display_city, format_result, parse_request_line, Client};
pub use server::Server;

/// Receive buffer size for both sides. Larger than any legal datagram so
/// oversized traffic shows up as a length violation instead of being
/// silently truncated by the kernel.
const RECV_BUFFER_SIZE: usize = 512;
