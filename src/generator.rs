//! Measurement generators
//!
//! One generator per query type, behind a trait so the handler can be fed a
//! deterministic source in tests. The default source draws uniformly from
//! fixed per-metric ranges; the bounds are a policy choice, not a protocol
//! guarantee.

use rand::Rng;

use crate::protocol::QueryType;

/// Produces one measurement per query type.
///
/// The four generators are independent; `sample` is the single dispatch
/// point from tag to generator.
pub trait ValueSource {
    /// Air temperature in °C
    fn temperature(&mut self) -> f32;

    /// Relative humidity in %
    fn humidity(&mut self) -> f32;

    /// Wind speed in km/h
    fn wind(&mut self) -> f32;

    /// Atmospheric pressure in hPa
    fn pressure(&mut self) -> f32;

    /// Generate a measurement for the given query type.
    fn sample(&mut self, query: QueryType) -> f32 {
        match query {
            QueryType::Temperature => self.temperature(),
            QueryType::Humidity => self.humidity(),
            QueryType::Wind => self.wind(),
            QueryType::Pressure => self.pressure(),
        }
    }
}

/// Pseudo-random source with plausible per-metric ranges:
/// temperature [-10, 40] °C, humidity [20, 100] %, wind [0, 100] km/h,
/// pressure [950, 1050] hPa.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSource;

impl RandomSource {
    pub fn new() -> Self {
        Self
    }
}

impl ValueSource for RandomSource {
    fn temperature(&mut self) -> f32 {
        rand::rng().random_range(-10.0..=40.0)
    }

    fn humidity(&mut self) -> f32 {
        rand::rng().random_range(20.0..=100.0)
    }

    fn wind(&mut self) -> f32 {
        rand::rng().random_range(0.0..=100.0)
    }

    fn pressure(&mut self) -> f32 {
        rand::rng().random_range(950.0..=1050.0)
    }
}
