//! Clients for external delivery transports.

pub mod client;
