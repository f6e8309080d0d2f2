//! HTTP utilities for ESPN API communication

use crate::{core::config::Credentials, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE};

/// Headers sent on every ESPN request: JSON accept, plus the session cookie
/// when credentials are present.
pub fn league_header_map(credentials: Option<&Credentials>) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(creds) = credentials {
        h.insert(COOKIE, HeaderValue::from_str(&creds.cookie())?);
    }
    Ok(h)
}
