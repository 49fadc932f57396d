//! Property-test run profile read from the environment.
//!
//! Lets CI scale property suites up (more cases, larger generated networks)
//! without touching the suites themselves. Invalid overrides are logged and
//! ignored.

use std::env;

/// Environment variable controlling proptest case counts.
pub const PROPTEST_CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const NETSPLIT_PBT_FORK_ENV_KEY: &str = "NETSPLIT_PBT_FORK";
/// Environment variable bounding the number of edges in generated networks.
pub const NETSPLIT_PBT_MAX_EDGES_ENV_KEY: &str = "NETSPLIT_PBT_MAX_EDGES";

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
    max_edges: u64,
}

impl ProptestRunProfile {
    /// Load a profile from the environment, falling back to the given
    /// defaults for anything unset or invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use netsplit_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false, 200);
    /// assert!(profile.cases() > 0);
    /// assert!(profile.max_edges() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool, default_max_edges: u64) -> Self {
        Self {
            cases: override_or(PROPTEST_CASES_ENV_KEY, default_cases, positive_u32),
            fork: override_or(NETSPLIT_PBT_FORK_ENV_KEY, default_fork, boolean),
            max_edges: override_or(
                NETSPLIT_PBT_MAX_EDGES_ENV_KEY,
                default_max_edges,
                positive_u64,
            ),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }

    /// Upper bound on the edge identifiers used by generated networks.
    #[must_use]
    pub fn max_edges(&self) -> u64 {
        self.max_edges
    }
}

fn override_or<T>(key: &'static str, default: T, parse: fn(&str) -> Result<T, String>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "invalid property-test profile override; using default",
        );
        default
    })
}

fn positive_u32(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("value must be > 0".to_owned()),
        Ok(value) => Ok(value),
        Err(error) => Err(format!("parse error: {error}")),
    }
}

fn positive_u64(raw: &str) -> Result<u64, String> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err("value must be > 0".to_owned()),
        Ok(value) => Ok(value),
        Err(error) => Err(format!("parse error: {error}")),
    }
}

fn boolean(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off".to_owned()),
    }
}
