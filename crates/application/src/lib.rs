//! Timedesk Application Layer
//!
//! Ports (trait seams) and use cases. The time-resolution use cases are the
//! core of the service: ordered provider fallback per zone, concurrent
//! failure-isolated gathering per batch.
pub mod ports;
pub mod use_cases;
