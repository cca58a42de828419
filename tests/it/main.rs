//! Single test binary entry point.
//!
//! All integration tests are compiled into one binary to keep link time down.
//!
//! Structure:
//! - helpers: Builders and a recording host
//! - integration: Full drag sessions against a host
//! - unit: Single-component tests through the public API

mod helpers;
mod integration;
