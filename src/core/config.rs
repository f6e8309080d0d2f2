//! League configuration and credential loading.
//!
//! The aggregation code never reads the process environment itself; credentials
//! come in through a [`CredentialSource`] so tests can inject them.

use std::collections::HashMap;

use crate::{
    cli::types::{LeagueId, Season},
    error::EspnError,
    Result,
};

/// Trailing window size, in scoring periods.
pub const ROLLING_DAYS: u32 = 7;

/// Maximum roster entries counted as starters per team per day.
pub const MAX_STARTERS: usize = 10;

/// Lineup slot ids at or above this value are bench / IR.
pub const STARTER_SLOT_LIMIT: i64 = 20;

/// Any stat with a magnitude above this counts as a recorded stat.
pub const PARTICIPATION_EPSILON: f64 = 1e-9;

pub const SWID_ENV_VAR: &str = "ESPN_SWID";
pub const S2_ENV_VAR: &str = "ESPN_S2";

/// The one league this tool reports on.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueConfig {
    pub league_id: LeagueId,
    pub season: Season,
    /// ESPN game key, e.g. `fba` for basketball.
    pub sport: String,
    /// Private leagues require `ESPN_SWID` / `ESPN_S2` cookies.
    pub private_league: bool,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            league_id: LeagueId::new(313165618),
            season: Season::default(),
            sport: "fba".to_string(),
            private_league: true,
        }
    }
}

/// Lookup of named configuration values.
pub trait CredentialSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl CredentialSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl CredentialSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// ESPN session cookies for private leagues.
#[derive(Clone, PartialEq)]
pub struct Credentials {
    pub swid: String,
    pub espn_s2: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("swid", &self.swid)
            .field("espn_s2", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Load `ESPN_SWID` and `ESPN_S2` from `source`.
    ///
    /// Returns `Ok(None)` when either is missing and `required` is false (public
    /// leagues). When `required` is true a missing value is a configuration error.
    pub fn load(source: &impl CredentialSource, required: bool) -> Result<Option<Self>> {
        let lookup = |key: &str| source.var(key).filter(|v| !v.trim().is_empty());
        let swid = lookup(SWID_ENV_VAR);
        let s2 = lookup(S2_ENV_VAR);

        match (swid, s2) {
            (Some(swid), Some(espn_s2)) => Ok(Some(Self { swid, espn_s2 })),
            (swid, s2) if required => {
                let mut missing = Vec::new();
                if swid.is_none() {
                    missing.push(SWID_ENV_VAR.to_string());
                }
                if s2.is_none() {
                    missing.push(S2_ENV_VAR.to_string());
                }
                Err(EspnError::MissingCredentials { missing })
            }
            _ => Ok(None),
        }
    }

    /// Cookie header value ESPN expects.
    pub fn cookie(&self) -> String {
        format!("SWID={}; espn_s2={}", self.swid, self.espn_s2)
    }
}
