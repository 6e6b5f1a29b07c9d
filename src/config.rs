//! App Configuration
//!
//! Compile-time configurable backend endpoint and delete behavior.

/// Default backend base URL (local dev API)
const DEFAULT_API_BASE: &str = "http://localhost:3333";

/// How a delete reconciles remote failure with local list state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePolicy {
    /// Remove the local entry once the remote call finishes, success or not
    #[default]
    Optimistic,
    /// Remove the local entry only after the remote call succeeded
    Confirmed,
}

impl DeletePolicy {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "optimistic" => Some(Self::Optimistic),
            "confirmed" => Some(Self::Confirmed),
            _ => None,
        }
    }

    /// Whether the local entry should be dropped given the remote outcome
    pub fn removes_locally(self, remote_ok: bool) -> bool {
        remote_ok || self == Self::Optimistic
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend collection resource
    pub api_base: String,
    pub delete_policy: DeletePolicy,
}

impl Config {
    /// Build from `FOODS_API_BASE` / `FOODS_DELETE_POLICY` set at compile
    /// time, falling back to the dev defaults.
    pub fn from_env() -> Self {
        let api_base = option_env!("FOODS_API_BASE")
            .unwrap_or(DEFAULT_API_BASE)
            .to_string();
        let delete_policy = option_env!("FOODS_DELETE_POLICY")
            .and_then(DeletePolicy::parse)
            .unwrap_or_default();
        Self {
            api_base,
            delete_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_policy_parse() {
        assert_eq!(
            DeletePolicy::parse("optimistic"),
            Some(DeletePolicy::Optimistic)
        );
        assert_eq!(
            DeletePolicy::parse("confirmed"),
            Some(DeletePolicy::Confirmed)
        );
        assert_eq!(DeletePolicy::parse("whatever"), None);
    }

    #[test]
    fn test_removes_locally() {
        // Optimistic drops the entry no matter what the backend said
        assert!(DeletePolicy::Optimistic.removes_locally(true));
        assert!(DeletePolicy::Optimistic.removes_locally(false));
        // Confirmed only drops on success
        assert!(DeletePolicy::Confirmed.removes_locally(true));
        assert!(!DeletePolicy::Confirmed.removes_locally(false));
    }

    #[test]
    fn test_default_policy_is_optimistic() {
        assert_eq!(DeletePolicy::default(), DeletePolicy::Optimistic);
    }
}
