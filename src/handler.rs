//! Request handler
//!
//! The server-side decision logic: one decoded request in, exactly one
//! response out. Checks run in a fixed precedence and the first failure
//! wins; later checks are never reached.
//!
//! 1. Unrecognized query tag   → INVALID_REQUEST (tag echoed as received)
//! 2. Illegal city characters  → INVALID_REQUEST
//! 3. City not in the catalog  → CITY_NOT_FOUND
//! 4. Otherwise                → SUCCESS with a generated measurement
//!
//! Protocol outcomes are never Rust errors: handling cannot fail, it can
//! only answer. No I/O happens here.

use crate::catalog;
use crate::generator::ValueSource;
use crate::protocol::{QueryType, Request, Response};
use crate::validate;

/// Turns requests into responses using an injected measurement source.
///
/// Holds no other state; one handler can serve any number of sequential
/// exchanges.
#[derive(Debug)]
pub struct Handler<S: ValueSource> {
    source: S,
}

impl<S: ValueSource> Handler<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Answer one request.
    pub fn handle(&mut self, request: &Request) -> Response {
        let tag = request.query_type();

        let query = match QueryType::from_byte(tag) {
            Some(query) => query,
            None => return Response::invalid_request(tag),
        };

        if validate::has_illegal_characters(request.city()) {
            return Response::invalid_request(tag);
        }

        if !catalog::is_supported(request.city()) {
            return Response::city_not_found(tag);
        }

        Response::success(tag, self.source.sample(query))
    }
}
