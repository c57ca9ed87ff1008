//! Harness configuration.

use std::env;

/// Configuration for a conformance run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Run only behaviors whose name contains this substring.
    pub filter: Option<String>,
    /// Run behaviors in parallel.
    pub parallel: bool,
    /// Stop a target's run at its first failing behavior. Implies sequential.
    pub fail_fast: bool,
    /// Generated cases per property check.
    pub property_cases: u32,
}

impl HarnessConfig {
    pub const DEFAULT_PROPERTY_CASES: u32 = 64;

    /// Read overrides from `TRAV_FILTER`, `TRAV_SEQUENTIAL`, `TRAV_FAIL_FAST`
    /// and `TRAV_PROPERTY_CASES`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = HarnessConfig::default();
        if let Some(filter) = lookup("TRAV_FILTER").filter(|f| !f.is_empty()) {
            config.filter = Some(filter);
        }
        if let Some(sequential) = flag(&lookup, "TRAV_SEQUENTIAL") {
            config.parallel = !sequential;
        }
        if let Some(fail_fast) = flag(&lookup, "TRAV_FAIL_FAST") {
            config.fail_fast = fail_fast;
        }
        if let Some(raw) = lookup("TRAV_PROPERTY_CASES") {
            match raw.trim().parse::<u32>() {
                Ok(cases) if cases > 0 => config.property_cases = cases,
                _ => tracing::warn!(value = %raw, "ignoring invalid TRAV_PROPERTY_CASES"),
            }
        }
        config
    }

    /// Returns `true` if a behavior named `name` passes the filter.
    pub fn matches(&self, name: &str) -> bool {
        self.filter
            .as_deref()
            .map_or(true, |pattern| name.contains(pattern))
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            filter: None,
            parallel: true,
            fail_fast: false,
            property_cases: Self::DEFAULT_PROPERTY_CASES,
        }
    }
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<bool> {
    let raw = lookup(key)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => {
            tracing::warn!(key, value = %raw, "ignoring invalid boolean");
            None
        }
    }
}

#[cfg(test)]
mod tests;
