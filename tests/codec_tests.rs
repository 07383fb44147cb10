//! Codec Tests
//!
//! Tests for request and response encoding/decoding.

use meteo::protocol::{
    decode_request, decode_response, encode_request, encode_response, QueryType, Request,
    Response, Status, CITY_FIELD, MAX_CITY_LEN, REQUEST_WIRE_SIZE, RESPONSE_WIRE_SIZE,
};

// =============================================================================
// Request Encoding/Decoding Tests
// =============================================================================

#[test]
fn test_request_round_trip() {
    let request = Request::new(QueryType::Temperature, "roma").unwrap();
    let encoded = encode_request(&request);
    let decoded = decode_request(&encoded);

    assert_eq!(decoded, request);
    assert_eq!(decoded.query_type(), b't');
    assert_eq!(decoded.city(), b"roma");
}

#[test]
fn test_request_round_trip_all_query_types() {
    for query in QueryType::ALL {
        let request = Request::new(query, "milano").unwrap();
        let decoded = decode_request(&encode_request(&request));

        assert_eq!(decoded, request);
        assert_eq!(decoded.query(), Some(query));
    }
}

#[test]
fn test_request_round_trip_unrecognized_tag() {
    // Unrecognized tags must survive the wire so the server can echo them
    let request = Request::from_raw(b'x', "roma").unwrap();
    let decoded = decode_request(&encode_request(&request));

    assert_eq!(decoded.query_type(), b'x');
    assert_eq!(decoded.query(), None);
    assert_eq!(decoded.city(), b"roma");
}

#[test]
fn test_request_round_trip_empty_city() {
    let request = Request::new(QueryType::Wind, "").unwrap();
    let decoded = decode_request(&encode_request(&request));

    assert!(decoded.city().is_empty());
}

#[test]
fn test_request_round_trip_max_length_city() {
    let city = "x".repeat(MAX_CITY_LEN);
    let request = Request::new(QueryType::Humidity, &city).unwrap();
    let decoded = decode_request(&encode_request(&request));

    assert_eq!(decoded.city(), city.as_bytes());
}

#[test]
fn test_request_round_trip_non_ascii_city() {
    // The wire is byte-transparent; multi-byte UTF-8 comes back unchanged
    let request = Request::new(QueryType::Temperature, "città del capo").unwrap();
    let decoded = decode_request(&encode_request(&request));

    assert_eq!(decoded.city(), "città del capo".as_bytes());
    assert_eq!(decoded.city_text(), "città del capo");
}

// =============================================================================
// Request Wire Format Tests
// =============================================================================

#[test]
fn test_request_wire_size() {
    assert_eq!(REQUEST_WIRE_SIZE, 65);
    assert_eq!(REQUEST_WIRE_SIZE, 1 + CITY_FIELD);

    let request = Request::new(QueryType::Temperature, "roma").unwrap();
    assert_eq!(encode_request(&request).len(), 65);
}

#[test]
fn test_request_wire_layout() {
    let request = Request::new(QueryType::Pressure, "bari").unwrap();
    let encoded = encode_request(&request);

    // Expected: [p][b a r i][0 ... 0]
    //           tag city    zero padding to the field edge
    assert_eq!(encoded[0], b'p');
    assert_eq!(&encoded[1..5], b"bari");
    assert!(encoded[5..].iter().all(|&b| b == 0));
}

#[test]
fn test_decode_request_forces_termination() {
    // A sender that fills all 64 city bytes without a terminator still
    // yields a bounded 63-byte city
    let mut wire = [0u8; REQUEST_WIRE_SIZE];
    wire[0] = b't';
    for b in wire[1..].iter_mut() {
        *b = b'a';
    }

    let decoded = decode_request(&wire);
    assert_eq!(decoded.city().len(), MAX_CITY_LEN);
    assert!(decoded.city().iter().all(|&b| b == b'a'));
}

#[test]
fn test_decode_request_ignores_bytes_after_terminator() {
    let mut wire = [0u8; REQUEST_WIRE_SIZE];
    wire[0] = b'h';
    wire[1..5].copy_from_slice(b"roma");
    wire[6..10].copy_from_slice(b"junk");

    let decoded = decode_request(&wire);
    assert_eq!(decoded.city(), b"roma");
}

// =============================================================================
// Request Constructor Tests
// =============================================================================

#[test]
fn test_request_rejects_oversized_city() {
    let city = "x".repeat(MAX_CITY_LEN + 1);
    let result = Request::new(QueryType::Temperature, &city);

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("limit"));
}

#[test]
fn test_request_rejects_interior_nul() {
    let result = Request::new(QueryType::Temperature, b"ro\0ma");

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("NUL"));
}

// =============================================================================
// Response Encoding/Decoding Tests
// =============================================================================

#[test]
fn test_response_round_trip_success() {
    let response = Response::success(b't', 23.5);
    let decoded = decode_response(&encode_response(&response)).unwrap();

    assert_eq!(decoded.status, Status::Success);
    assert_eq!(decoded.query_type, b't');
    assert_eq!(decoded.value.to_bits(), 23.5f32.to_bits());
}

#[test]
fn test_response_round_trip_city_not_found() {
    let response = Response::city_not_found(b'h');
    let decoded = decode_response(&encode_response(&response)).unwrap();

    assert_eq!(decoded.status, Status::CityNotFound);
    assert_eq!(decoded.query_type, b'h');
    assert_eq!(decoded.value, 0.0);
}

#[test]
fn test_response_round_trip_invalid_request() {
    let response = Response::invalid_request(b'x');
    let decoded = decode_response(&encode_response(&response)).unwrap();

    assert_eq!(decoded.status, Status::InvalidRequest);
    assert_eq!(decoded.query_type, b'x');
    assert_eq!(decoded.value, 0.0);
}

#[test]
fn test_response_value_bit_pattern_preserved() {
    // Negative, fractional, tiny, and huge values all travel as raw bits
    for value in [-10.0f32, -0.0, 0.1, 1013.25, f32::MIN_POSITIVE, 1e30] {
        let response = Response::success(b'p', value);
        let decoded = decode_response(&encode_response(&response)).unwrap();

        assert_eq!(decoded.value.to_bits(), value.to_bits());
    }
}

// =============================================================================
// Response Wire Format Tests
// =============================================================================

#[test]
fn test_response_wire_size() {
    assert_eq!(RESPONSE_WIRE_SIZE, 9);

    let response = Response::success(b'w', 12.0);
    assert_eq!(encode_response(&response).len(), 9);
}

#[test]
fn test_response_wire_layout_success() {
    let response = Response::success(b't', 1.0);
    let encoded = encode_response(&response);

    // Expected: [0 0 0 0][t][0x3F 0x80 0 0]
    //           status   tag f32 1.0 bits, big-endian
    assert_eq!(&encoded[0..4], &[0x00, 0x00, 0x00, 0x00]);
    assert_eq!(encoded[4], b't');
    assert_eq!(&encoded[5..9], &[0x3F, 0x80, 0x00, 0x00]);
}

#[test]
fn test_response_wire_layout_city_not_found() {
    let encoded = encode_response(&Response::city_not_found(b'h'));

    // Status 1 as a big-endian u32, zero value
    assert_eq!(&encoded[0..4], &[0x00, 0x00, 0x00, 0x01]);
    assert_eq!(encoded[4], b'h');
    assert_eq!(&encoded[5..9], &[0x00, 0x00, 0x00, 0x00]);
}

#[test]
fn test_status_wire_words() {
    assert_eq!(Status::Success.as_u32(), 0);
    assert_eq!(Status::CityNotFound.as_u32(), 1);
    assert_eq!(Status::InvalidRequest.as_u32(), 2);

    assert_eq!(Status::from_u32(2), Some(Status::InvalidRequest));
    assert_eq!(Status::from_u32(3), None);
}

// =============================================================================
// Error Handling Tests
// =============================================================================

#[test]
fn test_unknown_response_status() {
    let mut wire = encode_response(&Response::success(b't', 1.0));
    wire[0..4].copy_from_slice(&7u32.to_be_bytes());

    let result = decode_response(&wire);
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Unknown response status"));
}
