//! Container engine access
//!
//! Everything engine-side (wire protocol, data model, transport) is
//! delegated to the bollard client; this module owns connecting, API
//! version discovery, and the list-then-inspect query.

pub mod client;
pub mod query;
pub mod version;

pub use client::connect;
pub use query::inspect_containers;
