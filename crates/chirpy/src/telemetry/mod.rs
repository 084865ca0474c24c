//! Tracing setup: structured JSON logs, with optional OpenTelemetry span export.
//!
//! # Telemetry invariants
//!
//! - Chirp bodies and email addresses never appear in span attributes or log
//!   fields; handlers log lengths, store error kinds and decode positions only.
//! - Log level is configurable via `RUST_LOG` or `LOG_LEVEL` (default: `info`).

pub mod init;

pub use init::init_telemetry;
