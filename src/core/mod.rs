//! Core utilities for the ESPN Fantasy summary
//!
//! - `config`: compiled-in league configuration and credential loading
//! - `http`: request headers shared by every ESPN call

pub mod config;
pub mod http;

// Re-export commonly used items for convenience
pub use config::{CredentialSource, Credentials, LeagueConfig, ProcessEnv};
pub use http::league_header_map;
