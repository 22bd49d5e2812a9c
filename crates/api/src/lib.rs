//! HTTP API: server, routing, and request/response mapping.
//!
//! The engine itself lives in `dcf-valuation`; this crate is the thin
//! adapter that parses JSON requests, invokes it, and serializes results.

pub mod app;
