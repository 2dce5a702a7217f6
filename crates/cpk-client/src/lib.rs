//! # cpk-client — Typed Rust client for the Universal Compliance Packet API
//!
//! Provides ergonomic, typed access to the three API operations:
//! - **register** — `POST /register`, exchange an email for a `cpk_*` API key
//! - **check** — `POST /check`, score content and receive a [`CompliancePacket`]
//! - **usage** — `GET /usage`, aggregate counters plus recent checks
//!
//! ## Architecture
//!
//! Calls flow through three layers: [`transport`] performs one HTTP
//! exchange and never fails on a non-2xx status; [`interpret`]
//! classifies the `(status, raw body)` pair into a success payload or
//! a structured [`ApiError`], tolerating both generations of the
//! server's error envelope; [`ComplianceClient`] validates input
//! locally, drives the lower layers, and decodes payloads into wire
//! types. [`usage::UsageView`] is a pure projection over a usage
//! report for display.
//!
//! The client is stateless aside from configuration and performs no
//! retries — `POST /check` carries no idempotency key, so retry policy
//! stays with the caller.

pub mod client;
pub mod config;
pub mod error;
pub mod interpret;
pub mod packet;
pub mod transport;
pub mod types;
pub mod usage;

pub use client::ComplianceClient;
pub use config::{ClientConfig, ConfigError};
pub use error::{ApiError, ClientError};
pub use interpret::Payload;
pub use packet::{CompliancePacket, Recommendation, SafetyCategory};
pub use types::ApiKey;
pub use usage::{UsageRecord, UsageReport, UsageSummary, UsageView};
