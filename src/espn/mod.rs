//! ESPN league snapshots and the rules applied to them.

pub mod aggregate;
pub mod compute;
pub mod document;
pub mod http;
pub mod types;
