//! # Meteo
//!
//! A minimal UDP weather-lookup service with:
//! - Fixed-layout binary wire protocol (65-byte request, 9-byte response)
//! - Strict server-side validation with a fixed status precedence
//! - Case-insensitive catalog of supported cities
//! - Pluggable per-metric value generators
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────┐       65-byte request        ┌──────────────────┐
//! │  meteo-cli   │ ───────────────────────────▶ │   meteo-server   │
//! │  (Client)    │ ◀─────────────────────────── │  (UDP recv loop) │
//! └──────────────┘        9-byte response       └────────┬─────────┘
//!                                                        │
//!                                               ┌────────▼─────────┐
//!                                               │    Wire Codec    │
//!                                               │  (fixed layout)  │
//!                                               └────────┬─────────┘
//!                                                        │
//!                                               ┌────────▼─────────┐
//!                                               │  Request Handler │
//!                                               └──┬──────┬──────┬─┘
//!                                                  │      │      │
//!                                       ┌──────────▼─┐ ┌──▼────┐ ┌▼────────────┐
//!                                       │  Validator │ │Catalog│ │ ValueSource │
//!                                       └────────────┘ └───────┘ └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod validate;
pub mod catalog;
pub mod generator;
pub mod handler;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{MeteoError, Result};
pub use config::Config;
pub use generator::{RandomSource, ValueSource};
pub use handler::Handler;
pub use protocol::{QueryType, Request, Response, Status};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Meteo
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
