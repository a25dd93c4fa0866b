//! Middleware layer.
//!
//! Cross-cutting concerns that wrap every dispatched request, regardless of
//! which route handles it.
//!
//! - [`trace`] — per-request span with method, path, status, latency

pub(crate) mod trace;
