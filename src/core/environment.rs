//! Environment awareness for the default minimum level
//!
//! Production-like environments log errors only unless the caller is
//! privileged. Which environment names count as production is configuration,
//! never a constant.

use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// Host environment facts the logger needs.
pub trait EnvironmentInfo {
    fn is_production_like(&self) -> bool;
    fn caller_is_privileged(&self) -> bool;
}

/// Most verbose level outside production or for privileged callers,
/// errors only otherwise.
pub fn default_min_level(env: &dyn EnvironmentInfo) -> LogLevel {
    if !env.is_production_like() || env.caller_is_privileged() {
        LogLevel::Debug
    } else {
        LogLevel::Error
    }
}

/// Fixed answers, for hosts that already know them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticEnvironment {
    pub production: bool,
    pub privileged: bool,
}

impl StaticEnvironment {
    pub fn development() -> Self {
        Self::default()
    }

    pub fn production() -> Self {
        Self {
            production: true,
            privileged: false,
        }
    }

    #[must_use]
    pub fn privileged(mut self, privileged: bool) -> Self {
        self.privileged = privileged;
        self
    }
}

impl EnvironmentInfo for StaticEnvironment {
    fn is_production_like(&self) -> bool {
        self.production
    }

    fn caller_is_privileged(&self) -> bool {
        self.privileged
    }
}

/// Where to read the environment from and how to interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentPolicy {
    /// Variable holding the environment name
    pub variable: String,
    /// Environment names (case-insensitive) treated as production
    pub production_names: Vec<String>,
    /// Variable that marks the caller as privileged when truthy
    pub privileged_variable: String,
}

impl Default for EnvironmentPolicy {
    fn default() -> Self {
        Self {
            variable: "APP_ENV".to_string(),
            production_names: vec!["production".to_string(), "prod".to_string()],
            privileged_variable: "APP_PRIVILEGED".to_string(),
        }
    }
}

impl EnvironmentPolicy {
    pub fn is_production_name(&self, name: &str) -> bool {
        let name = name.trim();
        self.production_names
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(name))
    }

    /// Interpret raw variable values under this policy
    pub fn evaluate(&self, environment: Option<&str>, privileged: Option<&str>) -> StaticEnvironment {
        StaticEnvironment {
            production: environment.is_some_and(|name| self.is_production_name(name)),
            privileged: privileged.is_some_and(is_truthy),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Environment read from process variables once, at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvVarEnvironment {
    resolved: StaticEnvironment,
}

impl EnvVarEnvironment {
    pub fn from_env(policy: &EnvironmentPolicy) -> Self {
        let environment = std::env::var(&policy.variable).ok();
        let privileged = std::env::var(&policy.privileged_variable).ok();
        Self {
            resolved: policy.evaluate(environment.as_deref(), privileged.as_deref()),
        }
    }
}

impl EnvironmentInfo for EnvVarEnvironment {
    fn is_production_like(&self) -> bool {
        self.resolved.production
    }

    fn caller_is_privileged(&self) -> bool {
        self.resolved.privileged
    }
}
